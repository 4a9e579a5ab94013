//! Presentation helpers shared by any UI layer

mod format;
mod theme;

pub use format::{capitalize_first, detail_title};
pub use theme::{stat_abbreviation, stat_color, type_color};
