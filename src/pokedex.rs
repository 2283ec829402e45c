//! The player's collection of caught Pokemon
//!
//! Caught Pokemon live in memory only, keyed by name.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::RwLock;

use chrono::{DateTime, Local};

use crate::api::PokemonInfo;

/// A caught Pokemon
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Base stats keyed by stat name
    pub stats: BTreeMap<String, u32>,
    /// Type names in slot order
    pub types: Vec<String>,
    /// When it was caught
    pub caught_at: DateTime<Local>,
}

impl Pokemon {
    /// Builds a caught Pokemon from API details, stamped with the current time
    pub fn from_info(info: &PokemonInfo) -> Self {
        let mut types: Vec<_> = info.types.iter().collect();
        types.sort_by_key(|t| t.slot);

        Self {
            id: info.id,
            name: info.name.clone(),
            height: info.height,
            weight: info.weight,
            stats: info
                .stats
                .iter()
                .map(|s| (s.stat.name.clone(), s.base_stat))
                .collect(),
            types: types.into_iter().map(|t| t.kind.name.clone()).collect(),
            caught_at: Local::now(),
        }
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Caught: {}", self.caught_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "Stats:")?;
        for (name, value) in &self.stats {
            writeln!(f, "  - {}: {}", name, value)?;
        }
        write!(f, "Types:")?;
        for kind in &self.types {
            write!(f, "\n  - {}", kind)?;
        }
        Ok(())
    }
}

/// Thread-safe store of caught Pokemon
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: RwLock<HashMap<String, Pokemon>>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught Pokemon, replacing an earlier catch of the same name
    pub fn add(&self, pokemon: Pokemon) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught Pokemon by name
    pub fn get(&self, name: &str) -> Option<Pokemon> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(name).cloned()
    }

    /// Names of every caught Pokemon, sorted
    pub fn names(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        names
    }
}
