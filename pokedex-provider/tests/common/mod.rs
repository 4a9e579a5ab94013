//! Shared helpers for live API tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use pokedex_provider::{ClientOptions, PokeApi, create_client};

/// Skip the test unless live API tests were opted into.
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var("POKEDEX_LIVE_TESTS").is_err() {
            eprintln!("Skipping: set POKEDEX_LIVE_TESTS=1 to hit the real API");
            return;
        }
    };
}

/// Assert a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context: the client under test
pub struct TestContext {
    pub api: Arc<dyn PokeApi>,
}

impl TestContext {
    /// Client for `POKEDEX_BASE_URL`, or the public endpoint when unset
    pub fn live() -> Option<Self> {
        let mut options = ClientOptions::default();
        if let Ok(base_url) = env::var("POKEDEX_BASE_URL") {
            options.base_url = base_url;
        }
        let api = create_client(&options).ok()?;
        Some(Self { api })
    }
}
