use covidplot_core::prelude::*;
use covidplot_core::{CountriesPayload, DataSourceError, NormalizeError, ProvinceMap};
use serde_json::{json, Value};
use std::cell::RefCell;

/// In-memory source that records which country was requested.
struct FakeSource {
    payload: CountriesPayload,
    requested: RefCell<Vec<String>>,
}

impl FakeSource {
    fn new(payload: Value) -> Self {
        Self {
            payload: payload.as_object().expect("object").clone(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl CaseSource for FakeSource {
    fn source_name(&self) -> &str {
        "fake"
    }

    fn fetch_all(&self) -> covidplot_core::Result<CountriesPayload> {
        Ok(self.payload.clone())
    }

    fn fetch_country(&self, country: &CanonicalCountryName) -> covidplot_core::Result<ProvinceMap> {
        self.requested.borrow_mut().push(country.query_escaped());
        self.payload
            .get(country.as_str())
            .and_then(Value::as_object)
            .cloned()
            .ok_or_else(|| DataSourceError::Api("Not Found".into()).into())
    }
}

fn world() -> Value {
    json!({
        "Trinidad and Tobago": {
            "All": { "confirmed": 30, "recovered": 20, "deaths": 1, "lat": "10.69", "long": "-61.22" }
        },
        "US": {
            "All": { "confirmed": 100, "recovered": 0, "deaths": 5, "lat": "37.09", "long": "-95.71" },
            "Unknown": { "confirmed": 4, "recovered": 0, "deaths": 0 },
            "Texas": { "confirmed": 60, "recovered": 0, "deaths": 3, "lat": "31.05", "long": "-97.56" }
        },
        "Cote d'Ivoire": {
            "All": { "confirmed": 8, "recovered": 7, "deaths": 0, "lat": "7.54", "long": "-5.55" }
        }
    })
}

#[test]
fn fetches_the_normalized_country_with_escaped_spaces() {
    let source = FakeSource::new(world());
    let cases = CountryCases::fetch(&source, &Normalizer::default(), "TRINIDAD AND tobago")
        .expect("cases");

    assert_eq!(cases.country().as_str(), "Trinidad and Tobago");
    assert_eq!(
        source.requested.borrow().as_slice(),
        ["Trinidad%20and%20Tobago".to_string()]
    );
    assert_eq!(cases.table().len(), 1);
}

#[test]
fn us_table_skips_unknown() {
    let source = FakeSource::new(world());
    let cases = CountryCases::fetch(&source, &Normalizer::default(), "us").expect("cases");
    assert_eq!(cases.country().as_str(), "US");

    let names: Vec<&str> = cases.table().iter().map(|r| r.province.as_str()).collect();
    assert_eq!(names, vec!["All", "Texas"]);
    assert_eq!(cases.table().totals().confirmed, 160.0);
}

#[test]
fn unknown_country_carries_the_valid_list() {
    let source = FakeSource::new(world());
    let err = CountryCases::fetch(&source, &Normalizer::default(), "united states").unwrap_err();

    match &err {
        CovidError::Input {
            error: NormalizeError::UnknownCountry { candidate },
            valid,
        } => {
            assert_eq!(candidate, "United States");
            assert_eq!(valid, &["Trinidad and Tobago", "US", "Cote d'Ivoire"]);
        }
        other => panic!("expected UnknownCountry, got {other:?}"),
    }
    assert_eq!(err.valid_countries().map(<[String]>::len), Some(3));
    assert!(source.requested.borrow().is_empty());
}

#[test]
fn minor_words_alone_fail_cleanly() {
    let source = FakeSource::new(world());
    let err = CountryCases::fetch(&source, &Normalizer::default(), "and the").unwrap_err();
    assert!(matches!(
        err,
        CovidError::Input {
            error: NormalizeError::UnknownCountry { .. },
            ..
        }
    ));
}

#[test]
fn empty_and_non_text_queries_are_input_errors() {
    let source = FakeSource::new(world());
    let n = Normalizer::default();

    let err = CountryCases::fetch(&source, &n, "   ").unwrap_err();
    assert!(matches!(
        err,
        CovidError::Input {
            error: NormalizeError::EmptyInput,
            ..
        }
    ));

    let err = CountryCases::fetch_value(&source, &n, &json!(123)).unwrap_err();
    assert!(matches!(
        err,
        CovidError::Input {
            error: NormalizeError::InvalidType(_),
            ..
        }
    ));

    let ok = CountryCases::fetch_value(&source, &n, &json!("cote d'ivoire")).expect("cases");
    assert_eq!(ok.country().as_str(), "Cote d'Ivoire");
}

#[test]
fn every_known_name_round_trips() {
    let source = FakeSource::new(world());
    let n = Normalizer::default();
    for name in source.known_countries().expect("names") {
        let cases = CountryCases::fetch(&source, &n, &name).expect("cases");
        assert_eq!(cases.country().as_str(), name);
    }
}

#[test]
fn data_source_failures_surface() {
    let source = FakeSource::new(json!({ "Atlantis": 5 }));
    let err = CountryCases::fetch(&source, &Normalizer::default(), "atlantis").unwrap_err();
    assert!(matches!(
        err,
        CovidError::DataSource(DataSourceError::Shape(_))
    ));
}
