//! Catalog list entry

use pokedex_provider::PokemonListResult;
use serde::Serialize;

use crate::config::sprite_url;
use crate::utils::capitalize_first;

/// One displayable entry of the paginated catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    /// Display name, first character uppercased
    pub name: String,
    pub image_url: String,
    /// Catalog number, taken from the entry's resource URL
    pub number: u32,
}

impl ListEntry {
    /// Build an entry from a raw list result.
    ///
    /// Returns `None` when the URL does not end in a catalog number.
    pub fn from_result(result: &PokemonListResult, sprite_template: &str) -> Option<Self> {
        let number = extract_number(&result.url)?;
        Some(Self {
            name: capitalize_first(&result.name),
            image_url: sprite_url(sprite_template, number),
            number,
        })
    }
}

/// Trailing catalog number of a resource URL.
///
/// One trailing `/` is ignored, then the maximal run of ASCII digits at the
/// end is parsed.
pub fn extract_number(url: &str) -> Option<u32> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let digits_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    trimmed[digits_start..].parse().ok()
}
