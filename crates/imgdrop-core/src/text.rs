//! Text helpers for display labels.

use std::sync::OnceLock;

use regex::Regex;

static CAMEL_BOUNDARY: OnceLock<Regex> = OnceLock::new();

/// Convert a camelCase identifier into a lowercase space-separated label.
///
/// A space is inserted at every lowercase-to-uppercase boundary and the
/// result is lowercased: `"camelCaseString"` becomes `"camel case string"`.
pub fn camel_case_to_spaces(input: &str) -> String {
    let boundary = CAMEL_BOUNDARY
        .get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel boundary pattern"));
    boundary.replace_all(input, "$1 $2").to_lowercase()
}
