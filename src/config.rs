use std::path::Path;

use serde::Deserialize;

use crate::diagnostics::ConfigError;

/// Sample inputs printed by `samplecalc demo`.
///
/// Every key is optional in the TOML form; missing keys fall back to the
/// built-in samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub a: i64,
    pub b: i64,
    pub words: Vec<String>,
    pub separator: String,
    pub reverse: String,
    pub sqrt: f64,
    pub base: f64,
    pub exponent: f64,
    pub email: String,
    /// Extra `Fibonacci(n)` line when set.
    pub fibonacci: Option<i64>,
    /// Extra `IsPrime(n)` line when set.
    pub prime: Option<i64>,
    /// Extra `ParseAndSum(input)` line when set.
    pub sum: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            a: 10,
            b: 5,
            words: vec!["Go".to_string(), "Actions".to_string(), "Example".to_string()],
            separator: "-".to_string(),
            reverse: "hello".to_string(),
            sqrt: 16.0,
            base: 2.0,
            exponent: 3.0,
            email: "test@example.com".to_string(),
            fibonacci: None,
            prime: None,
            sum: None,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::toml(e.message()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read(path.to_path_buf(), e))?;
        let config = Self::from_toml(&text).map_err(|e| e.at(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
