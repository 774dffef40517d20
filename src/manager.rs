//! Kingdom-level registry and the type-pair rule tables.

use tracing::debug;

use crate::config::KingdomConfig;
use crate::structures::{Archetype, Structure};

pub const BATTLE_TOWER_VS_DRAGON: &str = "Wizard Tower casts spells against the Dragon!";
pub const BATTLE_DRAGON_VS_CASTLE: &str = "Dragon attacks the Castle!";
pub const BATTLE_NONE: &str = "No significant battle occurred.";

/// Owns a kingdom's validated config and its registered structures, and
/// exposes the interaction, battle and power-scoring rules.
///
/// The structure list is append-only and insertion-ordered; there is no
/// removal. The rule functions are pure and consult archetype tags only,
/// never the manager's own collection.
pub struct KingdomManager {
    config: KingdomConfig,
    structures: Vec<Structure>,
}

impl KingdomManager {
    pub fn new(config: KingdomConfig) -> Self {
        Self {
            config,
            structures: Vec::new(),
        }
    }

    pub fn config(&self) -> &KingdomConfig {
        &self.config
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Registers a structure. Unconditional: no duplicate check, no limit.
    pub fn add_structure(&mut self, structure: Structure) {
        debug!(
            kingdom = self.config.kingdom_name(),
            archetype = %structure.archetype(),
            name = structure.name(),
            "structure registered"
        );
        self.structures.push(structure);
    }

    /// Order-sensitive interaction rule. Exactly two ordered pairs interact:
    /// a wizard tower with a mystic library, and an enchanted castle with a
    /// dragon lair. The reverse orderings do not.
    pub fn can_structures_interact(a: &Structure, b: &Structure) -> bool {
        matches!(
            (a.archetype(), b.archetype()),
            (Archetype::WizardTower, Archetype::MysticLibrary)
                | (Archetype::EnchantedCastle, Archetype::DragonLair)
        )
    }

    /// Order-sensitive battle narrative. Two ordered pairs have their own
    /// text; everything else resolves to the default line.
    pub fn perform_magic_battle(attacker: &Structure, defender: &Structure) -> &'static str {
        match (attacker.archetype(), defender.archetype()) {
            (Archetype::WizardTower, Archetype::DragonLair) => BATTLE_TOWER_VS_DRAGON,
            (Archetype::DragonLair, Archetype::EnchantedCastle) => BATTLE_DRAGON_VS_CASTLE,
            _ => BATTLE_NONE,
        }
    }

    /// Sums the fixed archetype weight of each structure. A structure's live
    /// `power` value never enters the total.
    pub fn calculate_kingdom_power(structures: &[Structure]) -> i32 {
        structures
            .iter()
            .map(|structure| structure.archetype().base_power())
            .sum()
    }

    /// Kingdom power of this manager's own collection.
    pub fn total_power(&self) -> i32 {
        Self::calculate_kingdom_power(&self.structures)
    }

    /// Diagnostic classification of a structure. With the closed catalog
    /// this is exactly the archetype tag.
    pub fn structure_category(structure: &Structure) -> Archetype {
        structure.archetype()
    }
}
