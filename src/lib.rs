pub mod config;
pub mod core;
pub mod error;
pub mod identity;
pub mod manager;
pub mod structures;

pub use crate::config::KingdomConfig;
pub use crate::core::StructureCore;
pub use crate::error::{ConfigError, ValidationError};
pub use crate::identity::{
    Clock, FixedClock, IdGenerator, RandomIds, SeededIds, StructureId, SystemClock,
};
pub use crate::manager::KingdomManager;
pub use crate::structures::{
    Archetype, DragonLair, EnchantedCastle, MysticLibrary, Structure, WizardTower,
};
