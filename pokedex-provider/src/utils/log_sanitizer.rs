//! Log truncation helpers
//!
//! PokeAPI detail payloads run to hundreds of kilobytes (move lists, game
//! indices); debug logs only keep the head of each body.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 512;

/// Truncate a string for logging.
///
/// Returns the original string if it has at most `TRUNCATE_LIMIT` characters,
/// otherwise the first `TRUNCATE_LIMIT` characters followed by the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
