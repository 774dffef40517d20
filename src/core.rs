//! Shared state every magical structure embeds.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{Clock, IdGenerator, StructureId};

pub const MIN_POWER: i32 = 0;
pub const MAX_POWER: i32 = 1000;
pub const DEFAULT_POWER: i32 = 100;

pub const MAGIC_SYSTEM_VERSION: &str = "3.0";

/// Identity cell shared by all structure variants: who the structure is,
/// where it stands, how much magic it holds and who keeps it running.
///
/// Identity is by `id`, never by value: two cores built from identical
/// arguments are distinct entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureCore {
    id: StructureId,
    built_at: DateTime<Utc>,
    name: String,
    location: String,
    power: i32,
    active: bool,
    maintainer: String,
}

impl StructureCore {
    /// Builds a core with the default power of 100, active.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Self::with_state(name, location, DEFAULT_POWER, true, ids, clock)
    }

    /// Builds an active core with the given power.
    pub fn with_power(
        name: impl Into<String>,
        location: impl Into<String>,
        power: i32,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Self::with_state(name, location, power, true, ids, clock)
    }

    /// Full constructor. Name and location must be non-blank and power must
    /// lie in `MIN_POWER..=MAX_POWER`, otherwise construction fails and no
    /// instance is created.
    pub fn with_state(
        name: impl Into<String>,
        location: impl Into<String>,
        power: i32,
        active: bool,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let location = location.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyStructureName);
        }
        if location.trim().is_empty() {
            return Err(ValidationError::EmptyStructureLocation);
        }
        if !(MIN_POWER..=MAX_POWER).contains(&power) {
            return Err(ValidationError::PowerOutOfRange(power));
        }

        Ok(Self {
            id: ids.next_id(),
            built_at: clock.now(),
            name,
            location,
            power,
            active,
            maintainer: "Unknown".to_string(),
        })
    }

    pub fn id(&self) -> StructureId {
        self.id
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    /// Updates the stored power. Out-of-range values are dropped without an
    /// error; construction is the only strict boundary.
    pub fn set_power(&mut self, power: i32) {
        if (MIN_POWER..=MAX_POWER).contains(&power) {
            self.power = power;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn maintainer(&self) -> &str {
        &self.maintainer
    }

    pub fn set_maintainer(&mut self, maintainer: impl Into<String>) {
        self.maintainer = maintainer.into();
    }
}

impl fmt::Display for StructureCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} (Power={}, Active={})",
            self.name, self.location, self.power, self.active
        )
    }
}
