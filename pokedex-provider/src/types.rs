use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Offset-based pagination parameters for `GET /pokemon`.
///
/// # Default
///
/// The default is `limit = 20, offset = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Maximum number of entries to return.
    pub limit: u32,
    /// Number of entries to skip from the start of the catalog.
    pub offset: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

impl ListParams {
    /// Build the parameters for page `page_index` (0-indexed) of `page_size` entries.
    #[must_use]
    pub fn for_page(page_index: u32, page_size: u32) -> Self {
        Self {
            limit: page_size,
            offset: page_index.saturating_mul(page_size),
        }
    }

    /// Clamp `limit` to `1..=max_limit`; `offset` is preserved.
    #[must_use]
    pub fn validated(&self, max_limit: u32) -> Self {
        Self {
            limit: self.limit.clamp(1, max_limit),
            offset: self.offset,
        }
    }
}

// ============ Client Options ============

/// Public PokeAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Connection settings for [`create_client()`](crate::create_client).
///
/// # Default
///
/// The public PokeAPI endpoint, a 10 s connect timeout and a 30 s request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// Base URL of the API, with or without a trailing slash.
    pub base_url: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

// ============ List Endpoint ============

/// One page of `GET /pokemon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonList {
    /// Total number of entries in the catalog, across all pages.
    pub count: u32,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Entries of this page, in catalog order.
    pub results: Vec<PokemonListResult>,
}

/// A raw list entry: the name plus the URL of its detail resource.
///
/// The URL ends with the numeric id, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResult {
    pub name: String,
    pub url: String,
}

// ============ Detail Endpoint ============

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `types[]` element of a Pokémon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    /// Display order, 1-indexed.
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// `stats[]` element of a Pokémon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// `abilities[]` element of a Pokémon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

/// Default sprite URLs. Any of them may be `null` upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

/// Record returned by `GET /pokemon/{name}`.
///
/// Only the fields the catalog displays are modelled; the rest of the
/// (large) payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    /// Weight in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> f32 {
        decimal_tenths(self.weight)
    }

    /// Height in metres.
    #[must_use]
    pub fn height_m(&self) -> f32 {
        decimal_tenths(self.height)
    }

    /// Highest base stat, used to scale stat bars. `0` when no stats are present.
    #[must_use]
    pub fn max_base_stat(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).max().unwrap_or(0)
    }

    /// Type names in slot order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.as_str()).collect()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn decimal_tenths(value: u32) -> f32 {
    (f64::from(value) / 10.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU_JSON: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "order": 35,
        "is_default": true,
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1}
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "back_default": null,
            "other": {"dream_world": {}}
        },
        "moves": [{"move": {"name": "mega-punch"}}]
    }"#;

    // ============ ListParams ============

    #[test]
    fn list_params_for_page() {
        let p = ListParams::for_page(3, 20);
        assert_eq!(p, ListParams { limit: 20, offset: 60 });
    }

    #[test]
    fn list_params_for_first_page() {
        assert_eq!(ListParams::for_page(0, 20), ListParams::default());
    }

    #[test]
    fn list_params_validated_clamps_limit() {
        let p = ListParams { limit: 0, offset: 40 }.validated(100);
        assert_eq!(p, ListParams { limit: 1, offset: 40 });

        let p = ListParams { limit: 5000, offset: 0 }.validated(100);
        assert_eq!(p.limit, 100);
    }

    // ============ Deserialization ============

    #[test]
    fn parse_list_page() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let page: PokemonList = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
    }

    #[test]
    fn parse_detail_ignores_unknown_fields() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU_JSON).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.types[0].kind.name, "electric");
        assert_eq!(pokemon.abilities[0].ability.name, "static");
        assert!(pokemon.sprites.front_default.is_some());
        assert!(pokemon.sprites.back_default.is_none());
    }

    #[test]
    fn parse_detail_minimal_record() {
        let json = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert!(pokemon.types.is_empty());
        assert_eq!(pokemon.sprites, Sprites::default());
    }

    // ============ Derived values ============

    #[test]
    fn weight_and_height_conversion() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU_JSON).unwrap();
        assert!((pokemon.weight_kg() - 6.0).abs() < f32::EPSILON);
        assert!((pokemon.height_m() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn tenths_convert_exactly() {
        assert!((decimal_tenths(69) - 6.9).abs() < 1e-6);
        assert!((decimal_tenths(9999) - 999.9).abs() < 1e-3);
        assert!(decimal_tenths(0).abs() < f32::EPSILON);
    }

    #[test]
    fn max_base_stat_picks_highest() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU_JSON).unwrap();
        assert_eq!(pokemon.max_base_stat(), 90);
    }

    #[test]
    fn type_names_in_slot_order() {
        let json = r#"{"id": 6, "name": "charizard", "height": 17, "weight": 905,
            "types": [
                {"slot": 2, "type": {"name": "flying"}},
                {"slot": 1, "type": {"name": "fire"}}
            ]}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
    }
}
