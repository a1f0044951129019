#![forbid(unsafe_code)]
//! PDOK Locatieserver geocoding provider
//!
//! Forward geocoding, reverse geocoding, type-ahead suggestions and id lookup
//! against the Dutch national address service
//! ([PDOK Locatieserver](https://api.pdok.nl/bzk/locatieserver/search/v3_1/ui/)).
//!
//! # Architecture
//!
//! Requests are described as layered option maps ([`options`]) assembled by
//! the builders in [`query`]; responses are mapped into [`PdokAddress`]es by
//! [`parse_search_response`]. [`PdokGeocodingClient`] ties both to a
//! `reqwest` client and implements [`GeocodingProvider`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::GeocodeQuery;
//! use integration_pdok::{PdokConfig, PdokGeocodingClient, SuggestQuery, SuggestType};
//!
//! let client = PdokGeocodingClient::new(&PdokConfig::default())?;
//!
//! let results = client.geocode(&GeocodeQuery::new("Damrak 1, Amsterdam")).await?;
//! for address in &results {
//!     println!("{:?} {:?}", address.display_address(), address.address().coordinates());
//! }
//!
//! let suggestions = client
//!     .suggest(&SuggestQuery::new("Kalverstr", SuggestType::Street))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod mapper;
mod models;
pub mod options;
mod provider;
pub mod query;

pub use client::PdokGeocodingClient;
pub use config::PdokConfig;
pub use error::PdokError;
pub use mapper::{PROVIDER_NAME, parse_centroid, parse_search_response};
pub use models::{PdokAddress, PdokAddressBuilder};
pub use options::{OptionLayer, OptionMap};
pub use provider::GeocodingProvider;
pub use query::{Endpoint, LookupQuery, SuggestQuery, SuggestType};
