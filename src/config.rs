//! Kingdom configuration value object.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};

/// Immutable description of a kingdom: its name, founding year, the structure
/// types it permits and the numeric limits of its resources.
///
/// Two configs built from the same four field values compare equal and hash
/// identically; the collections are ordered so hashing is stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KingdomConfig {
    kingdom_name: String,
    founding_year: i32,
    allowed_structure_types: BTreeSet<String>,
    resource_limits: BTreeMap<String, u32>,
}

impl KingdomConfig {
    pub fn new(
        kingdom_name: impl Into<String>,
        founding_year: i32,
        allowed_structure_types: BTreeSet<String>,
        resource_limits: BTreeMap<String, u32>,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            kingdom_name: kingdom_name.into(),
            founding_year,
            allowed_structure_types,
            resource_limits,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.kingdom_name.trim().is_empty() {
            return Err(ValidationError::EmptyKingdomName);
        }
        if self.founding_year <= 0 {
            return Err(ValidationError::NonPositiveFoundingYear(
                self.founding_year,
            ));
        }
        if self.allowed_structure_types.is_empty() {
            return Err(ValidationError::NoAllowedStructureTypes);
        }
        if self.resource_limits.is_empty() {
            return Err(ValidationError::EmptyResourceLimits);
        }
        Ok(())
    }

    pub fn kingdom_name(&self) -> &str {
        &self.kingdom_name
    }

    pub fn founding_year(&self) -> i32 {
        self.founding_year
    }

    pub fn allowed_structure_types(&self) -> &BTreeSet<String> {
        &self.allowed_structure_types
    }

    pub fn resource_limits(&self) -> &BTreeMap<String, u32> {
        &self.resource_limits
    }

    /// The default kingdom: Avaloria, all four structure types allowed.
    pub fn default_kingdom() -> Self {
        Self {
            kingdom_name: "Avaloria".to_string(),
            founding_year: 1000,
            allowed_structure_types: [
                "WizardTower",
                "EnchantedCastle",
                "MysticLibrary",
                "DragonLair",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            resource_limits: BTreeMap::from([
                ("Gold".to_string(), 10_000),
                ("Mana".to_string(), 5_000),
            ]),
        }
    }

    /// Builds a preset kingdom. Unrecognized template names fall back to the
    /// default kingdom.
    pub fn from_template(template: &str) -> Self {
        match template.to_lowercase().as_str() {
            "magic" => Self {
                kingdom_name: "Mystara".to_string(),
                founding_year: 1200,
                allowed_structure_types: ["WizardTower", "MysticLibrary"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                resource_limits: BTreeMap::from([("Mana".to_string(), 10_000)]),
            },
            "military" => Self {
                kingdom_name: "Ironhold".to_string(),
                founding_year: 800,
                allowed_structure_types: ["EnchantedCastle", "DragonLair"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                resource_limits: BTreeMap::from([("Gold".to_string(), 20_000)]),
            },
            _ => Self::default_kingdom(),
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl fmt::Display for KingdomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Founded: {})", self.kingdom_name, self.founding_year)
    }
}
