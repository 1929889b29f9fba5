//! Loadable filter configuration.
//!
//! A coefficient table and its gain divisor can be supplied as a TOML file
//! instead of one of the built-in tables, e.g.:
//!
//! ```toml
//! name = "lowband 3rd order"
//! taps = [-565, 182, 1129]
//! gain_divisor = 262144
//!
//! [design]
//! model = "Butterworth"
//! order = 3
//! sampling_frequency_mhz = 66.0
//! low_cutoff_mhz = 0.05
//! high_cutoff_mhz = 1.95
//! quantization_bits = 16
//! ```
//!
//! The `[design]` block is documentary provenance only and is never
//! interpreted at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FirError, Result};
use crate::signal_processing::CoefficientSet;

/// Documentary design provenance for a coefficient table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignInfo {
    pub model: Option<String>,
    pub order: Option<u32>,
    pub sampling_frequency_mhz: Option<f64>,
    pub low_cutoff_mhz: Option<f64>,
    pub high_cutoff_mhz: Option<f64>,
    pub quantization_bits: Option<u32>,
}

/// A coefficient table loaded from a config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub name: Option<String>,
    pub taps: Vec<i16>,
    pub gain_divisor: i32,
    pub design: Option<DesignInfo>,
}

impl FilterConfig {
    /// Parse a filter configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FirError::Config(format!("{}", e)))
    }

    /// Load a filter configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| FirError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Build the validated coefficient set described by this config
    pub fn coefficient_set(&self) -> Result<CoefficientSet> {
        CoefficientSet::new(self.taps.clone(), self.gain_divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = FilterConfig::from_toml(
            r#"
            taps = [1, 0, -1]
            gain_divisor = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.taps, vec![1, 0, -1]);
        assert_eq!(config.gain_divisor, 2);
        assert!(config.name.is_none());
        assert!(config.design.is_none());

        let set = config.coefficient_set().unwrap();
        assert_eq!(set.num_taps(), 3);
        assert_eq!(set.gain_divisor(), 2);
    }

    #[test]
    fn test_parse_config_with_design_metadata() {
        let config = FilterConfig::from_toml(
            r#"
            name = "highband 6th order"
            taps = [7701, 12028, 14003]
            gain_divisor = 262144

            [design]
            model = "Butterworth"
            order = 6
            sampling_frequency_mhz = 66.0
            low_cutoff_mhz = 4.05
            high_cutoff_mhz = 5.95
            quantization_bits = 16
            "#,
        )
        .unwrap();
        let design = config.design.as_ref().unwrap();
        assert_eq!(design.model.as_deref(), Some("Butterworth"));
        assert_eq!(design.order, Some(6));
    }

    #[test]
    fn test_invalid_gain_divisor_rejected_at_build() {
        let config = FilterConfig::from_toml(
            r#"
            taps = [1, 2, 3]
            gain_divisor = 0
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.coefficient_set(),
            Err(FirError::InvalidGainDivisor(0))
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = FilterConfig::from_toml("taps = ").unwrap_err();
        assert!(matches!(err, FirError::Config(_)));
    }
}
