use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of machine a complaint is about.
///
/// Labels outside the known set are kept as `Other` so callers never fail on
/// an unfamiliar category; each lookup table decides its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentCategory {
    Car,
    WashingMachine,
    Refrigerator,
    Dishwasher,
    Motorcycle,
    Truck,
    Dryer,
    Other(String),
}

impl EquipmentCategory {
    /// Case-folds and trims a raw label.
    pub fn parse(raw: &str) -> Self {
        let label = raw.trim().to_lowercase();
        match label.as_str() {
            "car" => Self::Car,
            "washing_machine" => Self::WashingMachine,
            "refrigerator" => Self::Refrigerator,
            "dishwasher" => Self::Dishwasher,
            "motorcycle" => Self::Motorcycle,
            "truck" => Self::Truck,
            "dryer" => Self::Dryer,
            _ => Self::Other(label),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Car => "car",
            Self::WashingMachine => "washing_machine",
            Self::Refrigerator => "refrigerator",
            Self::Dishwasher => "dishwasher",
            Self::Motorcycle => "motorcycle",
            Self::Truck => "truck",
            Self::Dryer => "dryer",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for EquipmentCategory {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<EquipmentCategory> for String {
    fn from(category: EquipmentCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seriousness of a fault. Variant order is urgency order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Unknown,
    Simple,
    Professional,
    Critical,
}

impl SeverityTier {
    /// Anything that is not a known tier label becomes `Unknown`.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "professional" => Self::Professional,
            "simple" => Self::Simple,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Professional => "professional",
            Self::Simple => "simple",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Immediate,
    #[serde(rename = "within_24h")]
    Within24h,
    WhenConvenient,
    AssessmentNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriageVerdict {
    pub severity: SeverityTier,
    pub needs_professional: bool,
    pub urgency: Urgency,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub estimated_min: u32,
    pub estimated_max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: u32,
    pub name: String,
    /// Distinct categories, kept in roster order.
    pub specialties: Vec<EquipmentCategory>,
    pub rating: f64,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    pub distance: f64,
    pub phone: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    #[serde(rename = "analysis")]
    pub verdict: TriageVerdict,
    #[serde(rename = "price_estimate")]
    pub price: PriceRange,
    pub solutions: Vec<String>,
    #[serde(rename = "workers")]
    pub technicians: Vec<Technician>,
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_folds_case_and_keeps_unknown_labels() {
        assert_eq!(EquipmentCategory::parse(" Car "), EquipmentCategory::Car);
        assert_eq!(
            EquipmentCategory::parse("WASHING_MACHINE"),
            EquipmentCategory::WashingMachine
        );
        assert_eq!(
            EquipmentCategory::parse("Bicycle"),
            EquipmentCategory::Other("bicycle".to_string())
        );
    }

    #[test]
    fn severity_orders_by_urgency() {
        assert!(SeverityTier::Critical > SeverityTier::Professional);
        assert!(SeverityTier::Professional > SeverityTier::Simple);
        assert!(SeverityTier::Simple > SeverityTier::Unknown);
        assert_eq!(SeverityTier::from_label("urgent"), SeverityTier::Unknown);
    }

    #[test]
    fn urgency_uses_wire_labels() {
        let json = serde_json::to_string(&Urgency::Within24h).unwrap();
        assert_eq!(json, "\"within_24h\"");
        let json = serde_json::to_string(&Urgency::AssessmentNeeded).unwrap();
        assert_eq!(json, "\"assessment_needed\"");
    }
}
