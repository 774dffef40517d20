use thiserror::Error;

/// Errors raised when a kingdom entity is constructed with broken invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Kingdom name cannot be empty")]
    EmptyKingdomName,

    #[error("Founding year must be positive, got {0}")]
    NonPositiveFoundingYear(i32),

    #[error("Must allow at least one structure type")]
    NoAllowedStructureTypes,

    #[error("Resource limits cannot be empty")]
    EmptyResourceLimits,

    #[error("Structure name cannot be empty")]
    EmptyStructureName,

    #[error("Structure location cannot be empty")]
    EmptyStructureLocation,

    #[error("Magic power {0} outside allowed range 0..=1000")]
    PowerOutOfRange(i32),
}

/// Errors raised while loading a kingdom configuration from YAML.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config validation error: {0}")]
    Validation(#[from] ValidationError),
}
