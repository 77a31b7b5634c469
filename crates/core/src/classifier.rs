use crate::keywords;
use crate::models::{EquipmentCategory, SeverityTier, TriageVerdict, Urgency};
use tracing::debug;

/// One link of the classification chain: any keyword hit yields `verdict`.
#[derive(Debug, Clone)]
pub struct SeverityRule {
    pub keywords: &'static [&'static str],
    pub verdict: TriageVerdict,
}

impl SeverityRule {
    /// Returns the first keyword found in `text`, which must already be lowercase.
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| text.contains(kw))
    }
}

pub const CRITICAL_VERDICT: TriageVerdict = TriageVerdict {
    severity: SeverityTier::Critical,
    needs_professional: true,
    urgency: Urgency::Immediate,
    confidence: 0.9,
};

pub const PROFESSIONAL_VERDICT: TriageVerdict = TriageVerdict {
    severity: SeverityTier::Professional,
    needs_professional: true,
    urgency: Urgency::Within24h,
    confidence: 0.8,
};

pub const SIMPLE_VERDICT: TriageVerdict = TriageVerdict {
    severity: SeverityTier::Simple,
    needs_professional: false,
    urgency: Urgency::WhenConvenient,
    confidence: 0.7,
};

pub const UNKNOWN_VERDICT: TriageVerdict = TriageVerdict {
    severity: SeverityTier::Unknown,
    needs_professional: true,
    urgency: Urgency::AssessmentNeeded,
    confidence: 0.5,
};

/// Ordered keyword rule chain. The first rule with a hit decides the verdict.
#[derive(Debug, Clone)]
pub struct SeverityClassifier {
    rules: Vec<SeverityRule>,
    fallback: TriageVerdict,
}

impl Default for SeverityClassifier {
    fn default() -> Self {
        Self::new(
            vec![
                SeverityRule {
                    keywords: keywords::CRITICAL,
                    verdict: CRITICAL_VERDICT,
                },
                SeverityRule {
                    keywords: keywords::PROFESSIONAL,
                    verdict: PROFESSIONAL_VERDICT,
                },
                SeverityRule {
                    keywords: keywords::SIMPLE,
                    verdict: SIMPLE_VERDICT,
                },
            ],
            UNKNOWN_VERDICT,
        )
    }
}

impl SeverityClassifier {
    pub fn new(rules: Vec<SeverityRule>, fallback: TriageVerdict) -> Self {
        Self { rules, fallback }
    }

    /// Classifies a free-text complaint.
    ///
    /// Keyword lists are shared by every category, so `category` does not
    /// influence the outcome; it is only recorded in the debug trace.
    pub fn classify(&self, description: &str, category: &EquipmentCategory) -> TriageVerdict {
        let text = description.to_lowercase();
        for rule in &self.rules {
            if let Some(keyword) = rule.first_match(&text) {
                debug!(%category, keyword, severity = %rule.verdict.severity, "keyword matched");
                return rule.verdict;
            }
        }
        debug!(%category, "no keyword matched");
        self.fallback
    }
}
