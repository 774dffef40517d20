//! The four magical structure archetypes and the closed sum type over them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::StructureCore;
use crate::error::ValidationError;
use crate::identity::{Clock, IdGenerator};

/// One of the four fixed structure kinds. The catalog is closed: adding a
/// fifth kind means extending this enum, and every rule table over it is
/// checked for exhaustiveness by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    WizardTower,
    EnchantedCastle,
    MysticLibrary,
    DragonLair,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::WizardTower,
        Archetype::EnchantedCastle,
        Archetype::MysticLibrary,
        Archetype::DragonLair,
    ];

    /// Fixed base power assigned at construction, and the weight each
    /// archetype contributes to the kingdom power total.
    pub const fn base_power(self) -> i32 {
        match self {
            Archetype::WizardTower => 200,
            Archetype::EnchantedCastle => 300,
            Archetype::MysticLibrary => 150,
            Archetype::DragonLair => 500,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Archetype::WizardTower => "WizardTower",
            Archetype::EnchantedCastle => "EnchantedCastle",
            Archetype::MysticLibrary => "MysticLibrary",
            Archetype::DragonLair => "DragonLair",
        };
        f.write_str(name)
    }
}

/// Spell-slinging tower. Starts out knowing Light and Shield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardTower {
    core: StructureCore,
    max_spell_capacity: u32,
    known_spells: Vec<String>,
    current_wizard: String,
}

impl WizardTower {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Self::with_details(
            name,
            location,
            Archetype::WizardTower.base_power(),
            10,
            vec!["Light".to_string(), "Shield".to_string()],
            "Unknown",
            ids,
            clock,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_details(
        name: impl Into<String>,
        location: impl Into<String>,
        power: i32,
        max_spell_capacity: u32,
        known_spells: Vec<String>,
        current_wizard: impl Into<String>,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            core: StructureCore::with_power(name, location, power, ids, clock)?,
            max_spell_capacity,
            known_spells,
            current_wizard: current_wizard.into(),
        })
    }

    pub fn core(&self) -> &StructureCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut StructureCore {
        &mut self.core
    }

    pub fn max_spell_capacity(&self) -> u32 {
        self.max_spell_capacity
    }

    pub fn known_spells(&self) -> &[String] {
        &self.known_spells
    }

    pub fn current_wizard(&self) -> &str {
        &self.current_wizard
    }
}

impl fmt::Display for WizardTower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WizardTower{{capacity={}, spells=[{}], wizard='{}', core={}}}",
            self.max_spell_capacity,
            self.known_spells.join(", "),
            self.current_wizard,
            self.core
        )
    }
}

/// Fortified castle with a type tag and a defense rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantedCastle {
    core: StructureCore,
    castle_type: String,
    defense_rating: i32,
    has_drawbridge: bool,
}

impl EnchantedCastle {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        castle_type: impl Into<String>,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            core: StructureCore::with_power(
                name,
                location,
                Archetype::EnchantedCastle.base_power(),
                ids,
                clock,
            )?,
            castle_type: castle_type.into(),
            defense_rating: 100,
            has_drawbridge: true,
        })
    }

    pub fn core(&self) -> &StructureCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut StructureCore {
        &mut self.core
    }

    pub fn castle_type(&self) -> &str {
        &self.castle_type
    }

    pub fn defense_rating(&self) -> i32 {
        self.defense_rating
    }

    pub fn has_drawbridge(&self) -> bool {
        self.has_drawbridge
    }
}

impl fmt::Display for EnchantedCastle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnchantedCastle{{type={}, defense={}, drawbridge={}, core={}}}",
            self.castle_type, self.defense_rating, self.has_drawbridge, self.core
        )
    }
}

/// Book collection whose knowledge level tracks its size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MysticLibrary {
    core: StructureCore,
    books: BTreeMap<String, String>,
    knowledge_level: i32,
}

impl MysticLibrary {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        books: BTreeMap<String, String>,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let knowledge_level = books.len() as i32 * 10;
        Ok(Self {
            core: StructureCore::with_power(
                name,
                location,
                Archetype::MysticLibrary.base_power(),
                ids,
                clock,
            )?,
            books,
            knowledge_level,
        })
    }

    pub fn core(&self) -> &StructureCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut StructureCore {
        &mut self.core
    }

    pub fn books(&self) -> &BTreeMap<String, String> {
        &self.books
    }

    pub fn knowledge_level(&self) -> i32 {
        self.knowledge_level
    }
}

impl fmt::Display for MysticLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MysticLibrary{{books={}, knowledge={}, core={}}}",
            self.books.len(),
            self.knowledge_level,
            self.core
        )
    }
}

/// Dragon den guarding a hoard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragonLair {
    core: StructureCore,
    dragon_type: String,
    treasure_value: i64,
    territorial_radius: i32,
}

impl DragonLair {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        dragon_type: impl Into<String>,
        treasure_value: i64,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            core: StructureCore::with_power(
                name,
                location,
                Archetype::DragonLair.base_power(),
                ids,
                clock,
            )?,
            dragon_type: dragon_type.into(),
            treasure_value,
            territorial_radius: 50,
        })
    }

    pub fn core(&self) -> &StructureCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut StructureCore {
        &mut self.core
    }

    pub fn dragon_type(&self) -> &str {
        &self.dragon_type
    }

    pub fn treasure_value(&self) -> i64 {
        self.treasure_value
    }

    pub fn territorial_radius(&self) -> i32 {
        self.territorial_radius
    }
}

impl fmt::Display for DragonLair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DragonLair{{dragon='{}', treasure={}, radius={}, core={}}}",
            self.dragon_type, self.treasure_value, self.territorial_radius, self.core
        )
    }
}

/// A structure of any of the four archetypes. No other kind is
/// representable, so rule tables match on this type exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Structure {
    WizardTower(WizardTower),
    EnchantedCastle(EnchantedCastle),
    MysticLibrary(MysticLibrary),
    DragonLair(DragonLair),
}

impl Structure {
    pub fn archetype(&self) -> Archetype {
        match self {
            Structure::WizardTower(_) => Archetype::WizardTower,
            Structure::EnchantedCastle(_) => Archetype::EnchantedCastle,
            Structure::MysticLibrary(_) => Archetype::MysticLibrary,
            Structure::DragonLair(_) => Archetype::DragonLair,
        }
    }

    pub fn core(&self) -> &StructureCore {
        match self {
            Structure::WizardTower(tower) => tower.core(),
            Structure::EnchantedCastle(castle) => castle.core(),
            Structure::MysticLibrary(library) => library.core(),
            Structure::DragonLair(lair) => lair.core(),
        }
    }

    pub fn core_mut(&mut self) -> &mut StructureCore {
        match self {
            Structure::WizardTower(tower) => tower.core_mut(),
            Structure::EnchantedCastle(castle) => castle.core_mut(),
            Structure::MysticLibrary(library) => library.core_mut(),
            Structure::DragonLair(lair) => lair.core_mut(),
        }
    }

    pub fn name(&self) -> &str {
        self.core().name()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::WizardTower(tower) => write!(f, "{tower}"),
            Structure::EnchantedCastle(castle) => write!(f, "{castle}"),
            Structure::MysticLibrary(library) => write!(f, "{library}"),
            Structure::DragonLair(lair) => write!(f, "{lair}"),
        }
    }
}

impl From<WizardTower> for Structure {
    fn from(tower: WizardTower) -> Self {
        Structure::WizardTower(tower)
    }
}

impl From<EnchantedCastle> for Structure {
    fn from(castle: EnchantedCastle) -> Self {
        Structure::EnchantedCastle(castle)
    }
}

impl From<MysticLibrary> for Structure {
    fn from(library: MysticLibrary) -> Self {
        Structure::MysticLibrary(library)
    }
}

impl From<DragonLair> for Structure {
    fn from(lair: DragonLair) -> Self {
        Structure::DragonLair(lair)
    }
}
