// crates/covidplot-core/src/normalize.rs

//! # Country Name Normalizer
//!
//! Maps free-form user input (`"trinidad and tobago"`, `"guinea-bissau"`,
//! `"us"`) to the exact spelling the covid-api accepts as its `country`
//! query value, and validates it against the list of known countries.

use crate::error::NormalizeError;
use crate::text::json_kind;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Words that stay lower-case inside a country name.
pub const MINOR_WORDS: &[&str] = &["and", "the"];

/// Literal replacements applied after capitalization and punctuation rules,
/// keyed by the processed candidate.
pub static DEFAULT_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("Us", "US")]));

/// A country name in the spelling the API recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalCountryName(String);

impl CanonicalCountryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a query value: spaces become the literal `%20`.
    ///
    /// ```rust
    /// use covidplot_core::Normalizer;
    ///
    /// let known = vec!["Trinidad and Tobago".to_string()];
    /// let name = Normalizer::default().normalize("trinidad and tobago", &known).unwrap();
    /// assert_eq!(name.query_escaped(), "Trinidad%20and%20Tobago");
    /// ```
    pub fn query_escaped(&self) -> String {
        self.0.replace(' ', "%20")
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalCountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalCountryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Capitalization rules plus the override table.
///
/// The default instance knows the minor words `and`/`the` and the single
/// override `Us -> US`. Further literal overrides can be registered with
/// [`Normalizer::with_override`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    minor_words: Vec<String>,
    overrides: HashMap<String, String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            minor_words: MINOR_WORDS.iter().map(|w| w.to_string()).collect(),
            overrides: DEFAULT_OVERRIDES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Normalizer {
    /// Registers a literal replacement for a processed candidate,
    /// e.g. `("Uk", "UK")`.
    pub fn with_override(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.overrides.insert(from.into(), to.into());
        self
    }

    /// Applies the casing rules without validating the result.
    ///
    /// ```rust
    /// use covidplot_core::Normalizer;
    ///
    /// let n = Normalizer::default();
    /// assert_eq!(n.canonicalize("guinea-bissau").unwrap(), "Guinea-Bissau");
    /// assert_eq!(n.canonicalize("cote D'IVOIRE").unwrap(), "Cote d'Ivoire");
    /// assert_eq!(n.canonicalize("us").unwrap(), "US");
    /// ```
    pub fn canonicalize(&self, raw: &str) -> Result<String, NormalizeError> {
        let words: Vec<String> = raw
            .split_whitespace()
            .map(|w| self.recase_word(w))
            .collect();
        if words.is_empty() {
            return Err(NormalizeError::EmptyInput);
        }

        let candidate = fix_punctuation(&words.join(" "));

        Ok(match self.overrides.get(&candidate) {
            Some(replacement) => replacement.clone(),
            None => candidate,
        })
    }

    /// Canonicalizes `raw` and checks it against `known`.
    pub fn normalize(
        &self,
        raw: &str,
        known: &[String],
    ) -> Result<CanonicalCountryName, NormalizeError> {
        let candidate = self.canonicalize(raw)?;
        // Linear scan is fine for ~200 countries
        if known.iter().any(|k| *k == candidate) {
            Ok(CanonicalCountryName(candidate))
        } else {
            Err(NormalizeError::UnknownCountry { candidate })
        }
    }

    /// Same as [`Normalizer::normalize`] for untyped input; anything but a
    /// JSON string is rejected with [`NormalizeError::InvalidType`].
    pub fn normalize_value(
        &self,
        raw: &Value,
        known: &[String],
    ) -> Result<CanonicalCountryName, NormalizeError> {
        match raw {
            Value::String(s) => self.normalize(s, known),
            other => Err(NormalizeError::InvalidType(json_kind(other))),
        }
    }

    fn recase_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if self.minor_words.iter().any(|m| *m == lower) {
            lower
        } else {
            capitalize(word)
        }
    }
}

/// First character upper-case, the rest lower-case.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Hyphen rule, else apostrophe rule; first occurrence only.
fn fix_punctuation(candidate: &str) -> String {
    let chars: Vec<char> = candidate.chars().collect();
    let (pos, lower_before) = if let Some(p) = chars.iter().position(|&c| c == '-') {
        (p, false)
    } else if let Some(p) = chars.iter().position(|&c| c == '\'') {
        (p, true)
    } else {
        return candidate.to_string();
    };

    let mut out = String::with_capacity(candidate.len());
    for (i, &c) in chars.iter().enumerate() {
        if lower_before && i + 1 == pos {
            out.extend(c.to_lowercase());
        } else if i == pos + 1 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn known() -> Vec<String> {
        [
            "US",
            "United Kingdom",
            "Trinidad and Tobago",
            "Guinea-Bissau",
            "Cote d'Ivoire",
            "Saint Vincent and the Grenadines",
            "Timor-Leste",
            "Korea, South",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn minor_words_stay_lower_case_after_the_first_token() {
        let n = Normalizer::default();
        let name = n.normalize("trinidad and tobago", &known()).unwrap();
        assert_eq!(name.as_str(), "Trinidad and Tobago");

        let name = n
            .normalize("SAINT VINCENT AND THE GRENADINES", &known())
            .unwrap();
        assert_eq!(name.as_str(), "Saint Vincent and the Grenadines");
    }

    #[test]
    fn hyphen_capitalizes_the_following_letter() {
        let n = Normalizer::default();
        assert_eq!(
            n.normalize("guinea-bissau", &known()).unwrap().as_str(),
            "Guinea-Bissau"
        );
        assert_eq!(
            n.normalize("TIMOR-LESTE", &known()).unwrap().as_str(),
            "Timor-Leste"
        );
    }

    #[test]
    fn apostrophe_recases_both_neighbours() {
        let n = Normalizer::default();
        assert_eq!(
            n.normalize("cote d'ivoire", &known()).unwrap().as_str(),
            "Cote d'Ivoire"
        );
    }

    #[test]
    fn hyphen_wins_over_apostrophe() {
        let n = Normalizer::default();
        // Only the hyphen rule fires; "D'x" keeps its capitalized form.
        assert_eq!(n.canonicalize("ab-cd d'x").unwrap(), "Ab-Cd D'x");
    }

    #[test]
    fn only_the_first_hyphen_is_handled() {
        let n = Normalizer::default();
        assert_eq!(n.canonicalize("a-b-c").unwrap(), "A-B-c");
    }

    #[test]
    fn punctuation_at_the_edges_does_not_panic() {
        let n = Normalizer::default();
        assert_eq!(n.canonicalize("abc-").unwrap(), "Abc-");
        assert_eq!(n.canonicalize("'abc").unwrap(), "'Abc");
        assert_eq!(n.canonicalize("abc'").unwrap(), "Abc'");
    }

    #[test]
    fn us_override_only_matches_the_exact_token() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("us", &known()).unwrap().as_str(), "US");
        assert_eq!(n.normalize("  Us ", &known()).unwrap().as_str(), "US");
        assert_eq!(n.canonicalize("united states").unwrap(), "United States");
        assert_eq!(
            n.normalize("united states", &known()),
            Err(NormalizeError::UnknownCountry {
                candidate: "United States".into()
            })
        );
    }

    #[test]
    fn custom_overrides_extend_the_table() {
        let n = Normalizer::default().with_override("Uk", "UK");
        assert_eq!(n.canonicalize("uk").unwrap(), "UK");
        assert_eq!(n.canonicalize("us").unwrap(), "US");
    }

    #[test]
    fn overrides_match_after_the_punctuation_rules() {
        // "a-b" only becomes "A-B" once the hyphen rule has run.
        let n = Normalizer::default().with_override("A-B", "AB");
        assert_eq!(n.canonicalize("a-b").unwrap(), "AB");
    }

    #[test]
    fn only_minor_words_is_an_unknown_country() {
        let n = Normalizer::default();
        assert_eq!(n.canonicalize("and the").unwrap(), "and the");
        assert_eq!(
            n.normalize("AND   The", &known()),
            Err(NormalizeError::UnknownCountry {
                candidate: "and the".into()
            })
        );
    }

    #[test]
    fn empty_and_blank_input() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("", &known()), Err(NormalizeError::EmptyInput));
        assert_eq!(
            n.normalize(" \t\n ", &known()),
            Err(NormalizeError::EmptyInput)
        );
    }

    #[test]
    fn non_string_values_are_rejected() {
        let n = Normalizer::default();
        assert_eq!(
            n.normalize_value(&json!(123), &known()),
            Err(NormalizeError::InvalidType("a number"))
        );
        assert_eq!(
            n.normalize_value(&json!(null), &known()),
            Err(NormalizeError::InvalidType("null"))
        );
        assert_eq!(
            n.normalize_value(&json!("us"), &known()).unwrap().as_str(),
            "US"
        );
    }

    #[test]
    fn canonical_names_are_fixed_points() {
        let n = Normalizer::default();
        for name in known() {
            assert_eq!(n.normalize(&name, &known()).unwrap().as_str(), name);
        }
    }

    #[test]
    fn whitespace_is_collapsed() {
        let n = Normalizer::default();
        assert_eq!(
            n.normalize("  united\tkingdom ", &known()).unwrap().as_str(),
            "United Kingdom"
        );
    }
}
