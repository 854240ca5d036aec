// crates/covidplot-core/src/text.rs
use serde_json::Value;

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte` -> `Cote`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use covidplot_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Accent- and case-insensitive substring filter over country names.
///
/// Keeps the input order. An empty (or blank) query returns every name.
///
/// ```rust
/// use covidplot_core::text::filter_countries;
///
/// let names = vec!["Côte d'Ivoire".to_string(), "France".to_string()];
/// assert_eq!(filter_countries(&names, "IVOIRE"), vec!["Côte d'Ivoire"]);
/// ```
pub fn filter_countries<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let q = fold_key(query.trim());
    names
        .iter()
        .filter(|n| q.is_empty() || fold_key(n).contains(&q))
        .map(String::as_str)
        .collect()
}

/// Parses a coordinate that the API ships either as a JSON string
/// (`"46.2276"`) or, occasionally, as a JSON number.
///
/// \- Trims leading and trailing whitespace before parsing strings.
/// \- Returns `None` for anything that is not a finite decimal number.
pub fn parse_coordinate(v: &Value) -> Option<f64> {
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coordinates_parse_from_strings_and_numbers() {
        assert_eq!(parse_coordinate(&json!(" 10.5 ")), Some(10.5));
        assert_eq!(parse_coordinate(&json!(-20.25)), Some(-20.25));
        assert_eq!(parse_coordinate(&json!("N/A")), None);
        assert_eq!(parse_coordinate(&json!("")), None);
        assert_eq!(parse_coordinate(&json!("NaN")), None);
        assert_eq!(parse_coordinate(&Value::Null), None);
    }

    #[test]
    fn filter_is_accent_and_case_insensitive() {
        let names: Vec<String> = ["Cote d'Ivoire", "Curaçao", "US", "Russia"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(filter_countries(&names, "curacao"), vec!["Curaçao"]);
        assert_eq!(filter_countries(&names, "us"), vec!["US", "Russia"]);
        assert_eq!(filter_countries(&names, "  ").len(), 4);
    }
}
