//! The literal values the demo script runs with.

use crate::error::Result;
use serde::Deserialize;

const SCRIPT: &str = include_str!("demo.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarConfig {
    pub make: String,
    pub model: String,
    pub doors: i32,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            doors: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub person_name: String,
    pub custom_greeting: String,
    pub age: i32,
    pub car: CarConfig,
    /// Bold section headers. The binary turns this on for terminals only;
    /// piped output is always plain.
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            person_name: "Ajit".to_string(),
            custom_greeting: "Welcome".to_string(),
            age: 35,
            car: CarConfig::default(),
            color: false,
        }
    }
}

impl DemoConfig {
    /// Parses TOML; keys that are absent keep their default value.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The script compiled into the binary.
    pub fn script() -> Result<Self> {
        Self::from_toml_str(SCRIPT)
    }
}
