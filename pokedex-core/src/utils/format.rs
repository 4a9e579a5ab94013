//! Display formatting

use pokedex_provider::Pokemon;

/// Uppercase the first character, leave the rest untouched.
///
/// Locale-invariant: uses Unicode simple case mapping, so a character with a
/// multi-char uppercase form (e.g. `ß`) expands.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title of the detail screen, e.g. `#25 Pikachu`.
pub fn detail_title(pokemon: &Pokemon) -> String {
    format!("#{} {}", pokemon.id, capitalize_first(&pokemon.name))
}
