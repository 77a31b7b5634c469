use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("missing required field(s): {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },
    #[error("invalid roster: {0}")]
    Roster(String),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TriageError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;

/// Collects the names of empty fields, in the order given.
pub(crate) fn require_present(fields: &[(&'static str, &str)]) -> Result<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TriageError::Validation { fields: missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_every_missing_field() {
        let err = require_present(&[("category", ""), ("description", ""), ("location", "Reno")])
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "missing required field(s): category, description"
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(require_present(&[("location", " ")]).is_ok());
    }
}
