//! Core library: severity triage, price estimation, repair advice and technician matching.

pub mod classifier;
pub mod config;
pub mod directory;
pub mod error;
pub mod keywords;
pub mod models;
pub mod pricing;
pub mod solutions;
pub mod triage;

pub use error::{Result, TriageError};
pub use triage::TriageEngine;
