use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use kingdomry::{
    Archetype, DragonLair, EnchantedCastle, FixedClock, IdGenerator, KingdomConfig,
    KingdomManager, MysticLibrary, RandomIds, SeededIds, Structure, ValidationError, WizardTower,
};

fn demo_structures(ids: &mut dyn IdGenerator, clock: &FixedClock) -> Vec<Structure> {
    vec![
        WizardTower::new("Merlin's Tower", "Highlands", ids, clock)
            .unwrap()
            .into(),
        EnchantedCastle::new("IronKeep", "Valley", "Royal", ids, clock)
            .unwrap()
            .into(),
        MysticLibrary::new(
            "Arcane Library",
            "City",
            BTreeMap::from([
                ("Spellbook1".to_string(), "Fireball".to_string()),
                ("Tome2".to_string(), "Healing".to_string()),
            ]),
            ids,
            clock,
        )
        .unwrap()
        .into(),
        DragonLair::new("Smaug's Lair", "Mountain", "Fire Dragon", 10_000, ids, clock)
            .unwrap()
            .into(),
    ]
}

#[test]
fn reference_run_produces_the_expected_values() {
    let mut ids = SeededIds::new(5);
    let clock = FixedClock::at_epoch();
    let mut manager = KingdomManager::new(KingdomConfig::default_kingdom());
    for structure in demo_structures(&mut ids, &clock) {
        manager.add_structure(structure);
    }

    assert_eq!(manager.config().to_string(), "Avaloria (Founded: 1000)");
    assert_eq!(manager.structures().len(), 4);

    let structures = manager.structures();
    assert!(KingdomManager::can_structures_interact(
        &structures[0],
        &structures[2]
    ));
    assert_eq!(
        KingdomManager::perform_magic_battle(&structures[0], &structures[3]),
        "Wizard Tower casts spells against the Dragon!"
    );
    assert_eq!(manager.total_power(), 1150);
}

#[test]
fn power_stays_in_range_through_arbitrary_updates() {
    let mut ids = RandomIds;
    let clock = FixedClock::at_epoch();
    let mut tower = WizardTower::new("Tower", "Highlands", &mut ids, &clock).unwrap();
    for attempt in [-1000, -1, 0, 500, 1000, 1001, i32::MAX, i32::MIN] {
        tower.core_mut().set_power(attempt);
        let power = tower.core().power();
        assert!(
            (0..=1000).contains(&power),
            "power {power} escaped range after set_power({attempt})"
        );
    }
}

#[test]
fn identical_structures_are_distinct_entities() {
    let mut ids = RandomIds;
    let clock = FixedClock::at_epoch();
    let a = WizardTower::new("Twin", "Ridge", &mut ids, &clock).unwrap();
    let b = WizardTower::new("Twin", "Ridge", &mut ids, &clock).unwrap();
    assert_ne!(a.core().id(), b.core().id());
}

#[test]
fn interaction_reverse_pairs_do_not_interact() {
    let mut ids = SeededIds::new(2);
    let clock = FixedClock::at_epoch();
    let structures = demo_structures(&mut ids, &clock);
    let (tower, castle, library, lair) = (
        &structures[0],
        &structures[1],
        &structures[2],
        &structures[3],
    );

    assert!(KingdomManager::can_structures_interact(tower, library));
    assert!(!KingdomManager::can_structures_interact(library, tower));
    assert!(KingdomManager::can_structures_interact(castle, lair));
    assert!(!KingdomManager::can_structures_interact(lair, castle));
    assert!(!KingdomManager::can_structures_interact(tower, tower));
    assert!(!KingdomManager::can_structures_interact(castle, library));
}

#[test]
fn battle_defaults_for_non_special_pairs() {
    let mut ids = SeededIds::new(2);
    let clock = FixedClock::at_epoch();
    let structures = demo_structures(&mut ids, &clock);
    let (tower, castle, lair) = (&structures[0], &structures[1], &structures[3]);

    assert_eq!(
        KingdomManager::perform_magic_battle(&structures[0], &structures[0]),
        "No significant battle occurred."
    );
    assert_eq!(
        KingdomManager::perform_magic_battle(castle, tower),
        "No significant battle occurred."
    );
    assert_eq!(
        KingdomManager::perform_magic_battle(lair, tower),
        "No significant battle occurred."
    );
    assert_eq!(
        KingdomManager::perform_magic_battle(lair, &structures[2]),
        "No significant battle occurred."
    );
}

#[test]
fn kingdom_power_is_decoupled_from_live_power() {
    let mut ids = SeededIds::new(4);
    let clock = FixedClock::at_epoch();
    let mut structures = demo_structures(&mut ids, &clock);
    let baseline = KingdomManager::calculate_kingdom_power(&structures);
    assert_eq!(baseline, 1150);

    structures[1].core_mut().set_power(1);
    structures[3].core_mut().set_power(1000);
    assert_eq!(KingdomManager::calculate_kingdom_power(&structures), baseline);

    assert_eq!(KingdomManager::calculate_kingdom_power(&[]), 0);
}

#[test]
fn config_equality_and_hashing_are_structural() {
    let build = || {
        KingdomConfig::new(
            "Avaloria",
            1000,
            BTreeSet::from(["WizardTower".to_string(), "DragonLair".to_string()]),
            BTreeMap::from([("Gold".to_string(), 10_000)]),
        )
        .unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);

    let hash = |config: &KingdomConfig| {
        let mut hasher = DefaultHasher::new();
        config.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&a), hash(&b));

    let different_year = KingdomConfig::new(
        "Avaloria",
        1001,
        BTreeSet::from(["WizardTower".to_string(), "DragonLair".to_string()]),
        BTreeMap::from([("Gold".to_string(), 10_000)]),
    )
    .unwrap();
    assert_ne!(a, different_year);
}

#[test]
fn invalid_construction_creates_no_instance() {
    let mut ids = RandomIds;
    let clock = FixedClock::at_epoch();

    let power = kingdomry::StructureCore::with_power("Spire", "Ridge", 1001, &mut ids, &clock);
    assert_eq!(power.unwrap_err(), ValidationError::PowerOutOfRange(1001));

    let location = WizardTower::new("Spire", "", &mut ids, &clock);
    assert_eq!(
        location.unwrap_err(),
        ValidationError::EmptyStructureLocation
    );

    let name = EnchantedCastle::new(" ", "Valley", "Royal", &mut ids, &clock);
    assert_eq!(name.unwrap_err(), ValidationError::EmptyStructureName);
}

#[test]
fn config_survives_a_yaml_file_round_trip() {
    let config = KingdomConfig::from_template("military");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kingdom.yaml");
    std::fs::write(&path, config.to_yaml_string().unwrap()).unwrap();

    let loaded = KingdomConfig::load_from_path(&path).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn seeded_runs_reproduce_ids_and_timestamps() {
    let clock = FixedClock::at_epoch();
    let mut first = SeededIds::new(77);
    let mut second = SeededIds::new(77);
    let a = demo_structures(&mut first, &clock);
    let b = demo_structures(&mut second, &clock);
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.core().id(), right.core().id());
        assert_eq!(left.core().built_at(), right.core().built_at());
    }
}

#[test]
fn categories_match_archetypes_for_the_demo_set() {
    let mut ids = SeededIds::new(6);
    let clock = FixedClock::at_epoch();
    let structures = demo_structures(&mut ids, &clock);
    let categories: Vec<Archetype> = structures
        .iter()
        .map(KingdomManager::structure_category)
        .collect();
    assert_eq!(
        categories,
        [
            Archetype::WizardTower,
            Archetype::EnchantedCastle,
            Archetype::MysticLibrary,
            Archetype::DragonLair
        ]
    );
}
