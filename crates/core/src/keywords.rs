//! Trigger phrases per severity tier, matched as lowercase substrings.

pub const CRITICAL: &[&str] = &[
    "fire",
    "smoke",
    "burning",
    "explosion",
    "electric shock",
    "gas leak",
    "brake failure",
    "steering failure",
    "engine failure",
    "overheating badly",
];

pub const PROFESSIONAL: &[&str] = &[
    "engine noise",
    "transmission",
    "electrical",
    "wiring",
    "motor replacement",
    "compressor",
    "refrigerant",
    "heating element",
    "control board",
    "pump failure",
];

pub const SIMPLE: &[&str] = &[
    "clogged",
    "dirty",
    "filter",
    "loose",
    "minor leak",
    "squeaking",
    "slow",
    "stuck",
    "calibration",
    "reset needed",
];
