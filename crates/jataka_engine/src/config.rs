//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! reproduces the reference pipeline.

use std::path::Path;

use jataka_vedic_base::{DashaConfig, Language};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Configuration for [`compute_horoscope`](crate::compute_horoscope).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dasa timeline horizon and birth bhukti handling.
    pub dasha: DashaConfig,
    /// Language for digest and display names.
    pub language: Language,
}

impl EngineConfig {
    /// Parse from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    fn validate(&self) -> Result<(), EngineError> {
        let h = self.dasha.horizon_years;
        if !h.is_finite() || h < 0.0 {
            return Err(EngineError::Config(format!(
                "dasha.horizon_years must be a non-negative number, got {h}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_vedic_base::BirthBhuktiMode;

    #[test]
    fn empty_object_is_default() {
        let c = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(c, EngineConfig::default());
        assert_eq!(c.dasha.horizon_years, 120.0);
        assert_eq!(c.dasha.birth_bhukti_mode, BirthBhuktiMode::FullAllotment);
        assert_eq!(c.language, Language::English);
    }

    #[test]
    fn partial_override() {
        let c = EngineConfig::from_json_str(
            r#"{ "language": "tamil", "dasha": { "birth_bhukti_mode": "elapsed" } }"#,
        )
        .unwrap();
        assert_eq!(c.language, Language::Tamil);
        assert_eq!(c.dasha.birth_bhukti_mode, BirthBhuktiMode::Elapsed);
        assert_eq!(c.dasha.horizon_years, 120.0);
    }

    #[test]
    fn negative_horizon_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "dasha": { "horizon_years": -5 } }"#);
        assert!(matches!(err, Err(EngineError::Config(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            EngineConfig::from_json_str("{ language: "),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::load("/definitely/not/here.json");
        assert!(matches!(err, Err(EngineError::Io { .. })));
    }
}
