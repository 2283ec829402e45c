//! PokeAPI data models and client
//!
//! This module contains the response types decoded from the PokeAPI and the
//! client that fetches them through the response cache.

pub mod client;

pub use client::{ApiError, PokeApiClient, DEFAULT_BASE_URL};

use serde::{Deserialize, Serialize};

/// A named link to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. "canalave-city-area")
    pub name: String,
    /// Fully-qualified URL of the resource
    pub url: String,
}

/// One page of location areas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Location areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area and the Pokemon that can be encountered there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon that appears in a location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Details about a single Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonInfo {
    pub id: u32,
    pub name: String,
    /// Experience gained for defeating it; also drives the catch roll
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One base stat of a Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// One type slot of a Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_parses_null_links() {
        let json = r#"{
            "count": 1054,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}
            ]
        }"#;

        let page: LocationPage = serde_json::from_str(json).expect("Failed to parse page");

        assert_eq!(page.count, 1054);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_area_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "encounter_method_rates": [],
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "u"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).expect("Failed to parse area");

        let names: Vec<&str> = area
            .pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
            .collect();
        assert_eq!(names, vec!["tentacool", "tentacruel"]);
    }

    #[test]
    fn test_pokemon_info_renames_type_field() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "u"}}
            ]
        }"#;

        let info: PokemonInfo = serde_json::from_str(json).expect("Failed to parse pokemon");

        assert_eq!(info.base_experience, Some(112));
        assert_eq!(info.stats[0].stat.name, "hp");
        assert_eq!(info.types[0].kind.name, "electric");
    }

    #[test]
    fn test_pokemon_info_allows_missing_base_experience() {
        let json = r#"{"id": 10001, "name": "deoxys-attack", "base_experience": null, "height": 17, "weight": 608}"#;

        let info: PokemonInfo = serde_json::from_str(json).expect("Failed to parse pokemon");

        assert!(info.base_experience.is_none());
        assert!(info.stats.is_empty());
    }
}
