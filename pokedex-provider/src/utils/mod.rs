//! Utility modules.

/// Log truncation so large response bodies don't flood debug logs.
pub mod log_sanitizer;
