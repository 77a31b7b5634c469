use crate::error::{Result, TriageError};
use crate::models::{EquipmentCategory, Technician};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_MAX_DISTANCE: f64 = 10.0;
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    technicians: Vec<Technician>,
}

/// Best rating first; equal ratings go to the nearer technician.
pub fn rank(a: &Technician, b: &Technician) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.distance.total_cmp(&b.distance))
}

/// Immutable technician roster, cheap to clone and share between threads.
#[derive(Debug, Clone)]
pub struct TechnicianDirectory {
    roster: Arc<[Technician]>,
    max_results: usize,
}

impl Default for TechnicianDirectory {
    fn default() -> Self {
        Self {
            roster: builtin_roster().into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl TechnicianDirectory {
    pub fn new(roster: Vec<Technician>) -> Result<Self> {
        validate_roster(&roster)?;
        Ok(Self {
            roster: roster.into(),
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    /// Lowers the result cap; values above [`DEFAULT_MAX_RESULTS`] are clamped.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        if max_results > DEFAULT_MAX_RESULTS {
            warn!(
                requested = max_results,
                cap = DEFAULT_MAX_RESULTS,
                "result cap above limit, clamping"
            );
        }
        self.max_results = max_results.min(DEFAULT_MAX_RESULTS);
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(content)?;
        if file.technicians.is_empty() {
            warn!("roster file lists no technicians");
        }
        Self::new(file.technicians)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn roster(&self) -> &[Technician] {
        &self.roster
    }

    /// Available technicians for `category` within `max_distance`, best first.
    ///
    /// Distances are the roster's precomputed values; the caller's location
    /// is not consulted.
    pub fn search(&self, category: &EquipmentCategory, max_distance: f64) -> Vec<Technician> {
        let mut matches: Vec<&Technician> = self
            .roster
            .iter()
            .filter(|t| t.available && t.distance <= max_distance && t.specialties.contains(category))
            .collect();
        matches.sort_by(|a, b| rank(a, b));
        matches.truncate(self.max_results);
        debug!(%category, max_distance, found = matches.len(), "technician search");
        matches.into_iter().cloned().collect()
    }
}

fn validate_roster(roster: &[Technician]) -> Result<()> {
    let mut ids = HashSet::new();
    for t in roster {
        if !ids.insert(t.id) {
            return Err(TriageError::Roster(format!("duplicate technician id {}", t.id)));
        }
        if !(0.0..=5.0).contains(&t.rating) {
            return Err(TriageError::Roster(format!(
                "technician {} has rating {} outside 0..=5",
                t.id, t.rating
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = t.specialties.iter().find(|c| !seen.insert(*c)) {
            return Err(TriageError::Roster(format!(
                "technician {} lists specialty {} twice",
                t.id, dup
            )));
        }
        if !t.distance.is_finite() || t.distance < 0.0 {
            return Err(TriageError::Roster(format!(
                "technician {} has invalid distance {}",
                t.id, t.distance
            )));
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn technician(
    id: u32,
    name: &str,
    specialties: &[EquipmentCategory],
    rating: f64,
    review_count: u32,
    distance: f64,
    phone: &str,
    available: bool,
) -> Technician {
    Technician {
        id,
        name: name.to_string(),
        specialties: specialties.to_vec(),
        rating,
        review_count,
        distance,
        phone: phone.to_string(),
        available,
    }
}

pub fn builtin_roster() -> Vec<Technician> {
    use EquipmentCategory::*;
    vec![
        technician(1, "John Smith", &[Car, Motorcycle], 4.8, 120, 2.3, "+1-555-0101", true),
        technician(
            2,
            "Sarah Johnson",
            &[WashingMachine, Dishwasher, Refrigerator],
            4.9,
            87,
            1.8,
            "+1-555-0102",
            true,
        ),
        technician(3, "Mike Wilson", &[Car, Truck], 4.6, 203, 3.1, "+1-555-0103", true),
        technician(
            4,
            "Lisa Brown",
            &[Refrigerator, WashingMachine, Dryer],
            4.7,
            95,
            2.7,
            "+1-555-0104",
            false,
        ),
        technician(
            5,
            "David Garcia",
            &[Car, WashingMachine, Dishwasher],
            4.5,
            156,
            4.2,
            "+1-555-0105",
            true,
        ),
    ]
}
