use crate::models::{EquipmentCategory, PriceRange, SeverityTier};
use tracing::info;

pub const CURRENCY: &str = "USD";

/// Categories that have a row in the price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricedCategory {
    Car,
    WashingMachine,
    Refrigerator,
    Dishwasher,
}

impl PricedCategory {
    pub fn from_category(category: &EquipmentCategory) -> Option<Self> {
        match category {
            EquipmentCategory::Car => Some(Self::Car),
            EquipmentCategory::WashingMachine => Some(Self::WashingMachine),
            EquipmentCategory::Refrigerator => Some(Self::Refrigerator),
            EquipmentCategory::Dishwasher => Some(Self::Dishwasher),
            _ => None,
        }
    }

    pub fn row(self) -> PriceRow {
        match self {
            Self::Car => CAR,
            Self::WashingMachine => WASHING_MACHINE,
            Self::Refrigerator => REFRIGERATOR,
            Self::Dishwasher => DISHWASHER,
        }
    }
}

/// Severities that have a column in the price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricedSeverity {
    Simple,
    Professional,
    Critical,
}

impl PricedSeverity {
    pub fn from_tier(severity: SeverityTier) -> Option<Self> {
        match severity {
            SeverityTier::Simple => Some(Self::Simple),
            SeverityTier::Professional => Some(Self::Professional),
            SeverityTier::Critical => Some(Self::Critical),
            SeverityTier::Unknown => None,
        }
    }
}

/// Row used when a category has no entry in the price table.
pub const DEFAULT_PRICE_CATEGORY: PricedCategory = PricedCategory::Car;
/// Column used when a severity has no entry in the price table.
pub const DEFAULT_PRICE_SEVERITY: PricedSeverity = PricedSeverity::Professional;

const MIN_COMPLEXITY: f64 = 0.8;
const MAX_COMPLEXITY: f64 = 1.2;
const CHARS_PER_COMPLEXITY_UNIT: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRow {
    pub simple: BaseRange,
    pub professional: BaseRange,
    pub critical: BaseRange,
}

impl PriceRow {
    pub fn cell(&self, severity: PricedSeverity) -> BaseRange {
        match severity {
            PricedSeverity::Simple => self.simple,
            PricedSeverity::Professional => self.professional,
            PricedSeverity::Critical => self.critical,
        }
    }
}

const fn row(simple: (u32, u32), professional: (u32, u32), critical: (u32, u32)) -> PriceRow {
    PriceRow {
        simple: BaseRange { min: simple.0, max: simple.1 },
        professional: BaseRange { min: professional.0, max: professional.1 },
        critical: BaseRange { min: critical.0, max: critical.1 },
    }
}

const CAR: PriceRow = row((50, 200), (200, 800), (500, 2000));
const WASHING_MACHINE: PriceRow = row((30, 100), (100, 400), (300, 800));
const REFRIGERATOR: PriceRow = row((40, 120), (120, 500), (400, 1000));
const DISHWASHER: PriceRow = row((35, 110), (110, 350), (250, 700));

/// Longer descriptions are assumed to hint at a more involved repair.
pub fn complexity_factor(description: &str) -> f64 {
    let chars = description.chars().count() as f64;
    (MIN_COMPLEXITY + chars / CHARS_PER_COMPLEXITY_UNIT).min(MAX_COMPLEXITY)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PriceEstimator;

impl PriceEstimator {
    /// Base range for a table cell after applying both fallbacks.
    pub fn base_range(&self, category: &EquipmentCategory, severity: SeverityTier) -> BaseRange {
        let priced_category = PricedCategory::from_category(category).unwrap_or_else(|| {
            info!(%category, fallback = ?DEFAULT_PRICE_CATEGORY, "no price row for category");
            DEFAULT_PRICE_CATEGORY
        });
        let priced_severity = PricedSeverity::from_tier(severity).unwrap_or_else(|| {
            info!(%severity, fallback = ?DEFAULT_PRICE_SEVERITY, "no price column for severity");
            DEFAULT_PRICE_SEVERITY
        });
        priced_category.row().cell(priced_severity)
    }

    pub fn estimate(
        &self,
        category: &EquipmentCategory,
        severity: SeverityTier,
        description: &str,
    ) -> PriceRange {
        let base = self.base_range(category, severity);
        let factor = complexity_factor(description);
        let estimated_min = (f64::from(base.min) * factor).floor() as u32;
        let estimated_max = ((f64::from(base.max) * factor).floor() as u32).max(estimated_min);
        PriceRange {
            estimated_min,
            estimated_max,
            currency: CURRENCY.to_string(),
        }
    }
}
