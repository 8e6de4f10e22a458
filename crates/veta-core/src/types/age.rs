//! Geological age parsing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::AGE_FALLBACK_MA;

static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*Ma\s*$").expect("age pattern is a valid regex")
});

/// An age in millions of years, with a marker for the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedAge {
    pub value_ma: f64,
    /// True when the input could not be parsed and `AGE_FALLBACK_MA` was used.
    pub fallback: bool,
}

/// Parse an `"N Ma"` age string.
///
/// Unparsable input silently resolves to 100 Ma. The `fallback` flag is the
/// only trace of that, so callers that care must check it.
pub fn parse_age(age: &str) -> ParsedAge {
    let parsed = AGE_PATTERN
        .captures(age)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite());

    match parsed {
        Some(value_ma) => ParsedAge {
            value_ma,
            fallback: false,
        },
        None => ParsedAge {
            value_ma: AGE_FALLBACK_MA,
            fallback: true,
        },
    }
}
