use crate::classifier::SeverityClassifier;
use crate::config::AppConfig;
use crate::directory::{TechnicianDirectory, DEFAULT_MAX_DISTANCE};
use crate::error::{require_present, Result};
use crate::models::{EquipmentCategory, PriceRange, SeverityTier, Technician, TriageResult};
use crate::pricing::PriceEstimator;
use crate::solutions::SolutionCatalog;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_PRICE_SEVERITY_LABEL: &str = "professional";

/// Composes classifier, estimator, catalog and directory into one decision.
///
/// Cloning shares the underlying tables; an engine can be handed to any
/// number of threads.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    classifier: Arc<SeverityClassifier>,
    estimator: PriceEstimator,
    catalog: SolutionCatalog,
    directory: TechnicianDirectory,
    max_distance: f64,
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new(TechnicianDirectory::default())
    }
}

impl TriageEngine {
    pub fn new(directory: TechnicianDirectory) -> Self {
        Self {
            classifier: Arc::new(SeverityClassifier::default()),
            estimator: PriceEstimator,
            catalog: SolutionCatalog,
            directory,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn with_classifier(mut self, classifier: SeverityClassifier) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let directory = match &config.directory.roster_path {
            Some(path) => {
                info!(path = %path, "loading technician roster");
                TechnicianDirectory::from_toml_file(Path::new(path))?
            }
            None => TechnicianDirectory::default(),
        };
        Ok(Self::new(directory.with_max_results(config.directory.max_results))
            .with_max_distance(config.directory.max_distance))
    }

    pub fn directory(&self) -> &TechnicianDirectory {
        &self.directory
    }

    pub fn evaluate(
        &self,
        category_raw: &str,
        description: &str,
        location: &str,
    ) -> Result<TriageResult> {
        self.evaluate_at(category_raw, description, location, Utc::now())
    }

    /// Same as [`evaluate`](Self::evaluate) with a caller-supplied timestamp.
    pub fn evaluate_at(
        &self,
        category_raw: &str,
        description: &str,
        location: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<TriageResult> {
        require_present(&[
            ("category", category_raw),
            ("description", description),
            ("location", location),
        ])?;

        let category = EquipmentCategory::parse(category_raw);
        let verdict = self.classifier.classify(description, &category);
        let price = self.evaluate_price_only(&category, verdict.severity, description);
        let solutions = self.catalog.recommend(verdict.severity, &category);
        let technicians = if verdict.needs_professional {
            self.directory.search(&category, self.max_distance)
        } else {
            Vec::new()
        };
        debug!(
            %category,
            severity = %verdict.severity,
            technicians = technicians.len(),
            "triage complete"
        );

        Ok(TriageResult {
            verdict,
            price,
            solutions,
            technicians,
            generated_at,
        })
    }

    pub fn evaluate_price_only(
        &self,
        category: &EquipmentCategory,
        severity: SeverityTier,
        description: &str,
    ) -> PriceRange {
        self.estimator.estimate(category, severity, description)
    }

    /// Ranked technicians for a raw category label.
    ///
    /// `location` is accepted for the caller's benefit only; ranking uses the
    /// roster's own distance values.
    pub fn search_technicians(
        &self,
        category_raw: &str,
        location: &str,
        max_distance: Option<f64>,
    ) -> Vec<Technician> {
        let category = EquipmentCategory::parse(category_raw);
        debug!(%category, location, "technician lookup");
        self.directory
            .search(&category, max_distance.unwrap_or(self.max_distance))
    }

    pub fn estimate_price(
        &self,
        category_raw: &str,
        severity: Option<&str>,
        description: Option<&str>,
    ) -> Result<PriceRange> {
        require_present(&[("category", category_raw)])?;
        let category = EquipmentCategory::parse(category_raw);
        let severity = SeverityTier::from_label(severity.unwrap_or(DEFAULT_PRICE_SEVERITY_LABEL));
        Ok(self.evaluate_price_only(&category, severity, description.unwrap_or("")))
    }
}
