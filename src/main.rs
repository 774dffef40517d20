use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kingdomry::{
    DragonLair, EnchantedCastle, KingdomConfig, KingdomManager, MysticLibrary, RandomIds,
    SystemClock, WizardTower,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Kingdom structure catalog demo")]
struct Cli {
    /// Kingdom template to use (default, magic or military)
    #[arg(long, default_value = "default")]
    template: String,

    /// Load the kingdom config from a YAML file instead of a template
    #[arg(long)]
    config: Option<PathBuf>,

    /// Assign this maintainer to every demo structure
    #[arg(long)]
    maintainer: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => KingdomConfig::load_from_path(path)
            .with_context(|| format!("Failed to load kingdom config {}", path.display()))?,
        None => KingdomConfig::from_template(&cli.template),
    };

    let mut manager = KingdomManager::new(config);
    let mut ids = RandomIds;
    let clock = SystemClock;

    let mut tower = WizardTower::new("Merlin's Tower", "Highlands", &mut ids, &clock)?;
    let mut castle = EnchantedCastle::new("IronKeep", "Valley", "Royal", &mut ids, &clock)?;
    let mut library = MysticLibrary::new(
        "Arcane Library",
        "City",
        BTreeMap::from([
            ("Spellbook1".to_string(), "Fireball".to_string()),
            ("Tome2".to_string(), "Healing".to_string()),
        ]),
        &mut ids,
        &clock,
    )?;
    let mut lair = DragonLair::new("Smaug's Lair", "Mountain", "Fire Dragon", 10_000, &mut ids, &clock)?;

    if let Some(maintainer) = &cli.maintainer {
        tower.core_mut().set_maintainer(maintainer.clone());
        castle.core_mut().set_maintainer(maintainer.clone());
        library.core_mut().set_maintainer(maintainer.clone());
        lair.core_mut().set_maintainer(maintainer.clone());
    }

    manager.add_structure(tower.into());
    manager.add_structure(castle.into());
    manager.add_structure(library.into());
    manager.add_structure(lair.into());

    println!("{}", manager.config());
    for structure in manager.structures() {
        println!("{structure}");
    }

    let structures = manager.structures();
    println!(
        "Can interact? {}",
        KingdomManager::can_structures_interact(&structures[0], &structures[2])
    );
    println!(
        "Battle: {}",
        KingdomManager::perform_magic_battle(&structures[0], &structures[3])
    );
    println!("Kingdom Power = {}", manager.total_power());

    Ok(())
}
