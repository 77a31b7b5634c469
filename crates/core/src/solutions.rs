use crate::models::{EquipmentCategory, SeverityTier};

pub const PROFESSIONAL_ADVICE: &[&str] = &[
    "Professional diagnosis and repair recommended",
    "Do not attempt DIY repairs for safety reasons",
];

pub const FALLBACK_CHECKLIST: &[&str] = &["Contact a professional for proper diagnosis"];

const CAR_CHECKLIST: &[&str] = &[
    "Check and replace air filter if dirty",
    "Check fluid levels (oil, coolant, brake fluid)",
    "Inspect and clean battery terminals",
    "Check tire pressure and condition",
];

const WASHING_MACHINE_CHECKLIST: &[&str] = &[
    "Clean the lint filter and drain hose",
    "Check if the machine is level",
    "Clean detergent dispenser",
    "Run a cleaning cycle with vinegar",
];

const REFRIGERATOR_CHECKLIST: &[&str] = &[
    "Clean condenser coils",
    "Check and adjust temperature settings",
    "Clean door seals and check for leaks",
    "Defrost if ice buildup is present",
];

const DISHWASHER_CHECKLIST: &[&str] = &[
    "Clean the filter at the bottom",
    "Check spray arms for clogs",
    "Run empty cycle with dishwasher cleaner",
    "Check door seals for debris",
];

/// DIY steps for simple faults; categories without one get the fallback item.
pub fn diy_checklist(category: &EquipmentCategory) -> &'static [&'static str] {
    match category {
        EquipmentCategory::Car => CAR_CHECKLIST,
        EquipmentCategory::WashingMachine => WASHING_MACHINE_CHECKLIST,
        EquipmentCategory::Refrigerator => REFRIGERATOR_CHECKLIST,
        EquipmentCategory::Dishwasher => DISHWASHER_CHECKLIST,
        _ => FALLBACK_CHECKLIST,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionCatalog;

impl SolutionCatalog {
    /// Only simple faults get category advice; everything else is sent to a professional.
    pub fn recommend(&self, severity: SeverityTier, category: &EquipmentCategory) -> Vec<String> {
        let items = match severity {
            SeverityTier::Simple => diy_checklist(category),
            _ => PROFESSIONAL_ADVICE,
        };
        items.iter().map(|s| s.to_string()).collect()
    }
}
