//! Geocoding query objects
//!
//! Queries carry the search input, a result limit and a free-form bag of
//! provider parameters ([`QueryData`]) that providers may forward upstream.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Result limit applied when the caller does not set one
pub const DEFAULT_RESULT_LIMIT: u32 = 5;

/// A scalar query-string parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u32> for QueryValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Insertion-ordered parameter bag
pub type QueryData = IndexMap<String, QueryValue>;

/// Forward geocoding request (free text to addresses)
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeQuery {
    text: String,
    limit: u32,
    data: QueryData,
}

impl GeocodeQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_RESULT_LIMIT,
            data: QueryData::new(),
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Attach an extra provider parameter
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub const fn data(&self) -> &QueryData {
        &self.data
    }
}

/// Reverse geocoding request (coordinates to addresses)
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseQuery {
    coordinates: GeoLocation,
    limit: u32,
    data: QueryData,
}

impl ReverseQuery {
    #[must_use]
    pub fn new(coordinates: GeoLocation) -> Self {
        Self {
            coordinates,
            limit: DEFAULT_RESULT_LIMIT,
            data: QueryData::new(),
        }
    }

    /// Create a query from raw latitude and longitude
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Ok(Self::new(GeoLocation::new(latitude, longitude)?))
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Attach an extra provider parameter
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub const fn data(&self) -> &QueryData {
        &self.data
    }
}
