//! Query builders for the Locatieserver endpoints
//!
//! Each builder turns a request into an [`OptionMap`] by stacking the option
//! layers for its endpoint; [`request_url`] serializes the result.

use std::fmt;
use std::net::IpAddr;

use domain::{GeocodeQuery, QueryData, QueryValue, ReverseQuery};
use serde::{Deserialize, Serialize};

use crate::error::PdokError;
use crate::options::{
    DEFAULT_OPTIONS, DEFAULT_OPTIONS_GEOCODE, DEFAULT_OPTIONS_REVERSE,
    DEFAULT_OPTIONS_SUGGEST_ADDRESS, DEFAULT_OPTIONS_SUGGEST_POSTCODE,
    DEFAULT_OPTIONS_SUGGEST_STREET, OptionLayer, OptionMap, REQUIRED_OPTIONS_GEOCODE,
    REQUIRED_OPTIONS_REVERSE, REQUIRED_OPTIONS_SUGGEST, merge,
};

/// Locatieserver endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Free-text search
    Free,
    Reverse,
    Suggest,
    /// Lookup by document id
    Lookup,
}

impl Endpoint {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Reverse => "reverse",
            Self::Suggest => "suggest",
            Self::Lookup => "lookup",
        }
    }
}

/// Category of partial-match lookup for the suggest endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestType {
    /// House-level addresses (`adres`)
    #[default]
    Address,
    /// Streets (`weg`)
    Street,
    /// Postal codes
    Postcode,
}

impl SuggestType {
    /// Value of the `type` field in Locatieserver documents
    #[must_use]
    pub const fn service_type(self) -> &'static str {
        match self {
            Self::Address => "adres",
            Self::Street => "weg",
            Self::Postcode => "postcode",
        }
    }
}

impl fmt::Display for SuggestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_type())
    }
}

/// Suggest (type-ahead) request
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestQuery {
    query: GeocodeQuery,
    suggest_type: SuggestType,
}

impl SuggestQuery {
    #[must_use]
    pub fn new(text: impl Into<String>, suggest_type: SuggestType) -> Self {
        Self {
            query: GeocodeQuery::new(text),
            suggest_type,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.query = self.query.with_limit(limit);
        self
    }

    /// Attach an extra query parameter
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query = self.query.with_data(key, value);
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.query.text()
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.query.limit()
    }

    #[must_use]
    pub const fn suggest_type(&self) -> SuggestType {
        self.suggest_type
    }

    #[must_use]
    pub const fn data(&self) -> &QueryData {
        self.query.data()
    }
}

impl From<GeocodeQuery> for SuggestQuery {
    fn from(query: GeocodeQuery) -> Self {
        Self {
            query,
            suggest_type: SuggestType::default(),
        }
    }
}

/// Lookup of a single document by its Locatieserver id
#[derive(Debug, Clone, PartialEq)]
pub struct LookupQuery {
    id: String,
    data: QueryData,
}

impl LookupQuery {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: QueryData::new(),
        }
    }

    /// Attach an extra query parameter
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn data(&self) -> &QueryData {
        &self.data
    }
}

fn reject_ip_address(text: &str) -> Result<(), PdokError> {
    if text.parse::<IpAddr>().is_ok() {
        return Err(PdokError::UnsupportedOperation(
            "The PDOK provider does not support IP addresses".to_string(),
        ));
    }
    Ok(())
}

/// Options for a free-text geocode request
///
/// # Errors
///
/// Returns `UnsupportedOperation` if the search text is an IP address.
pub fn geocode_options(
    instance: &OptionMap,
    query: &GeocodeQuery,
) -> Result<OptionMap, PdokError> {
    reject_ip_address(query.text())?;

    Ok(merge([
        OptionLayer::table(DEFAULT_OPTIONS),
        OptionLayer::table(DEFAULT_OPTIONS_GEOCODE),
        OptionLayer::caller(instance),
        OptionLayer::caller(query.data()),
        OptionLayer::table(REQUIRED_OPTIONS_GEOCODE),
        OptionLayer::computed([
            ("rows", QueryValue::from(query.limit())),
            ("q", QueryValue::from(query.text())),
        ]),
    ]))
}

/// Options for a reverse request; always restricted to `type=adres`
#[must_use]
pub fn reverse_options(instance: &OptionMap, query: &ReverseQuery) -> OptionMap {
    let coordinates = query.coordinates();

    merge([
        OptionLayer::table(DEFAULT_OPTIONS),
        OptionLayer::table(DEFAULT_OPTIONS_REVERSE),
        OptionLayer::caller(instance),
        OptionLayer::caller(query.data()),
        OptionLayer::table(REQUIRED_OPTIONS_REVERSE),
        OptionLayer::computed([
            ("rows", QueryValue::from(query.limit())),
            ("lat", QueryValue::from(coordinates.latitude())),
            ("lon", QueryValue::from(coordinates.longitude())),
        ]),
    ])
}

/// Options for a suggest request
///
/// The search text is narrowed with a `type:` clause; address suggestions
/// must also carry a postal code.
///
/// # Errors
///
/// Returns `UnsupportedOperation` if the search text is an IP address.
pub fn suggest_options(
    instance: &OptionMap,
    query: &SuggestQuery,
) -> Result<OptionMap, PdokError> {
    reject_ip_address(query.text())?;

    let suggest_type = query.suggest_type();
    let (defaults, q) = match suggest_type {
        SuggestType::Address => (
            DEFAULT_OPTIONS_SUGGEST_ADDRESS,
            format!("{} and type:{suggest_type} and postcode:*", query.text()),
        ),
        SuggestType::Street => (
            DEFAULT_OPTIONS_SUGGEST_STREET,
            format!("{} and type:{suggest_type}", query.text()),
        ),
        SuggestType::Postcode => (
            DEFAULT_OPTIONS_SUGGEST_POSTCODE,
            format!("{} and type:{suggest_type}", query.text()),
        ),
    };

    Ok(merge([
        OptionLayer::table(defaults),
        OptionLayer::caller(instance),
        OptionLayer::caller(query.data()),
        OptionLayer::table(REQUIRED_OPTIONS_SUGGEST),
        OptionLayer::computed([
            ("rows", QueryValue::from(query.limit())),
            ("q", QueryValue::from(q)),
        ]),
    ]))
}

/// Options for a lookup request
///
/// # Errors
///
/// Returns `InvalidQuery` if the id is blank.
pub fn lookup_options(instance: &OptionMap, query: &LookupQuery) -> Result<OptionMap, PdokError> {
    if query.id().trim().is_empty() {
        return Err(PdokError::InvalidQuery(
            "lookup id must not be empty".to_string(),
        ));
    }

    Ok(merge([
        OptionLayer::table(DEFAULT_OPTIONS),
        OptionLayer::caller(instance),
        OptionLayer::caller(query.data()),
        OptionLayer::computed([("id", QueryValue::from(query.id()))]),
    ]))
}

/// Serialize options as an `application/x-www-form-urlencoded` query string
#[must_use]
pub fn query_string(options: &OptionMap) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(options.iter().map(|(key, value)| (key, value.to_string())))
        .finish()
}

/// Full request URL for an endpoint under `base_url`
#[must_use]
pub fn request_url(base_url: &str, endpoint: Endpoint, options: &OptionMap) -> String {
    format!(
        "{}/{}?{}",
        base_url.trim_end_matches('/'),
        endpoint.path(),
        query_string(options)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FIELD_LIST;
    use domain::DEFAULT_RESULT_LIMIT;

    fn instance(pairs: &[(&str, &str)]) -> OptionMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), QueryValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_geocode_options_layering() {
        let query = GeocodeQuery::new("Damrak 1 Amsterdam").with_limit(3);
        let options = geocode_options(&OptionMap::new(), &query).unwrap();

        assert_eq!(options["fl"], QueryValue::from(FIELD_LIST));
        assert!(options["bq"].to_string().contains("type:adres^1.5"));
        assert_eq!(options["rows"], QueryValue::Integer(3));
        assert_eq!(options["q"], QueryValue::from("Damrak 1 Amsterdam"));
    }

    #[test]
    fn test_geocode_caller_may_override_boost() {
        let query = GeocodeQuery::new("Utrecht").with_data("bq", "type:woonplaats^2");
        let options = geocode_options(&instance(&[("bq", "type:weg^1")]), &query).unwrap();
        assert_eq!(options["bq"], QueryValue::from("type:woonplaats^2"));
    }

    #[test]
    fn test_geocode_caller_cannot_override_reserved_keys() {
        let query = GeocodeQuery::new("Utrecht")
            .with_limit(2)
            .with_data("rows", 100_i64)
            .with_data("q", "something else")
            .with_data("wt", "xml");
        let options = geocode_options(&instance(&[("fl", "id")]), &query).unwrap();

        assert_eq!(options["fl"], QueryValue::from(FIELD_LIST));
        assert_eq!(options["rows"], QueryValue::Integer(2));
        assert_eq!(options["q"], QueryValue::from("Utrecht"));
        assert!(!options.contains_key("wt"));
    }

    #[test]
    fn test_geocode_rejects_ip_addresses() {
        for text in ["8.8.8.8", "::1", "2001:db8::ff00:42:8329"] {
            let result = geocode_options(&OptionMap::new(), &GeocodeQuery::new(text));
            assert!(matches!(result, Err(PdokError::UnsupportedOperation(_))));
        }
    }

    #[test]
    fn test_geocode_accepts_text_resembling_ip() {
        assert!(geocode_options(&OptionMap::new(), &GeocodeQuery::new("8.8.8")).is_ok());
        assert!(geocode_options(&OptionMap::new(), &GeocodeQuery::new("Dorpsstraat 8")).is_ok());
    }

    #[test]
    fn test_reverse_options_force_address_type() {
        let query = ReverseQuery::from_coordinates(52.37, 4.89)
            .unwrap()
            .with_limit(1)
            .with_data("type", "weg")
            .with_data("distance", 50_i64);
        let options = reverse_options(&instance(&[("type", "postcode")]), &query);

        assert_eq!(options["type"], QueryValue::from("adres"));
        assert_eq!(options["rows"], QueryValue::Integer(1));
        assert_eq!(options["lat"], QueryValue::Float(52.37));
        assert_eq!(options["lon"], QueryValue::Float(4.89));
        assert_eq!(options["distance"], QueryValue::Integer(50));
        assert!(!options.contains_key("bq"));
    }

    #[test]
    fn test_suggest_address_requires_postcode() {
        let query = SuggestQuery::new("Damrak", SuggestType::Address);
        let options = suggest_options(&OptionMap::new(), &query).unwrap();
        assert_eq!(
            options["q"],
            QueryValue::from("Damrak and type:adres and postcode:*")
        );
        assert_eq!(options["rows"], QueryValue::Integer(i64::from(DEFAULT_RESULT_LIMIT)));
        assert_eq!(options["fl"], QueryValue::from(FIELD_LIST));
    }

    #[test]
    fn test_suggest_street_and_postcode() {
        let street = suggest_options(
            &OptionMap::new(),
            &SuggestQuery::new("Kalverstr", SuggestType::Street).with_limit(7),
        )
        .unwrap();
        assert_eq!(street["q"], QueryValue::from("Kalverstr and type:weg"));
        assert_eq!(street["rows"], QueryValue::Integer(7));

        let postcode = suggest_options(
            &OptionMap::new(),
            &SuggestQuery::new("1012", SuggestType::Postcode),
        )
        .unwrap();
        assert_eq!(postcode["q"], QueryValue::from("1012 and type:postcode"));
    }

    #[test]
    fn test_suggest_has_no_geocode_boost() {
        let options = suggest_options(
            &OptionMap::new(),
            &SuggestQuery::new("Damrak", SuggestType::Street),
        )
        .unwrap();
        assert!(!options.contains_key("bq"));
    }

    #[test]
    fn test_suggest_rejects_ip_addresses() {
        let result = suggest_options(
            &OptionMap::new(),
            &SuggestQuery::new("8.8.8.8", SuggestType::Postcode),
        );
        assert!(matches!(result, Err(PdokError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_suggest_query_from_geocode_query() {
        let query: SuggestQuery = GeocodeQuery::new("Damrak").with_limit(4).into();
        assert_eq!(query.suggest_type(), SuggestType::Address);
        assert_eq!(query.limit(), 4);
    }

    #[test]
    fn test_lookup_options() {
        let query = LookupQuery::new("adr-3a8b4d7c5e6f");
        let options = lookup_options(&OptionMap::new(), &query).unwrap();
        assert_eq!(options["id"], QueryValue::from("adr-3a8b4d7c5e6f"));
        assert_eq!(options["fl"], QueryValue::from(FIELD_LIST));
        assert!(!options.contains_key("rows"));
    }

    #[test]
    fn test_lookup_rejects_blank_id() {
        let result = lookup_options(&OptionMap::new(), &LookupQuery::new("  "));
        assert!(matches!(result, Err(PdokError::InvalidQuery(_))));
    }

    #[test]
    fn test_request_url_encoding() {
        let options = instance(&[("q", "Damrak 1 & co"), ("rows", "5")]);
        assert_eq!(
            request_url("https://example.test/v3_1/", Endpoint::Free, &options),
            "https://example.test/v3_1/free?q=Damrak+1+%26+co&rows=5"
        );
    }

    #[test]
    fn test_suggest_type_serde() {
        assert_eq!(
            serde_json::to_string(&SuggestType::Postcode).unwrap(),
            "\"postcode\""
        );
        let parsed: SuggestType = serde_json::from_str("\"street\"").unwrap();
        assert_eq!(parsed, SuggestType::Street);
        assert_eq!(SuggestType::Street.to_string(), "weg");
    }
}
