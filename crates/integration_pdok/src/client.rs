//! PDOK Locatieserver client
//!
//! Each operation builds its option map, issues exactly one GET and maps the
//! response. No caching and no retries.

use std::time::Duration;

use async_trait::async_trait;
use domain::{AddressCollection, GeocodeQuery, ReverseQuery};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::PdokConfig;
use crate::error::PdokError;
use crate::mapper::{PROVIDER_NAME, parse_search_response};
use crate::models::PdokAddress;
use crate::options::{OptionMap, strip_denied};
use crate::provider::GeocodingProvider;
use crate::query::{
    Endpoint, LookupQuery, SuggestQuery, geocode_options, lookup_options, request_url,
    reverse_options, suggest_options,
};

/// Geocoding client for the PDOK Locatieserver
#[derive(Debug)]
pub struct PdokGeocodingClient {
    client: Client,
    config: PdokConfig,
    options: OptionMap,
}

impl PdokGeocodingClient {
    /// Create a new client
    ///
    /// Instance options are taken from `config.options` with the reserved
    /// keys removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &PdokConfig) -> Result<Self, PdokError> {
        config.validate().map_err(PdokError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PdokError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            options: strip_denied(&config.options),
            config: config.clone(),
        })
    }

    /// Instance-level options sent with every request
    #[must_use]
    pub const fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Replace the instance-level options; reserved keys are dropped
    pub fn set_options(&mut self, options: &OptionMap) {
        self.options = strip_denied(options);
    }

    /// Free-text geocoding against the `free` endpoint
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for IP addresses (before any request),
    /// `Transport` for network failures and `InvalidServerResponse` for
    /// non-success statuses or unusable bodies.
    #[instrument(skip(self, query), fields(text = %query.text(), limit = query.limit()))]
    pub async fn geocode(
        &self,
        query: &GeocodeQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        let options = geocode_options(&self.options, query)?;
        self.execute(Endpoint::Free, &options).await
    }

    /// Reverse geocoding against the `reverse` endpoint (addresses only)
    ///
    /// # Errors
    ///
    /// Returns `Transport` for network failures and `InvalidServerResponse`
    /// for non-success statuses or unusable bodies.
    #[instrument(skip(self, query), fields(coordinates = %query.coordinates(), limit = query.limit()))]
    pub async fn reverse(
        &self,
        query: &ReverseQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        let options = reverse_options(&self.options, query);
        self.execute(Endpoint::Reverse, &options).await
    }

    /// Type-ahead suggestions against the `suggest` endpoint
    ///
    /// # Errors
    ///
    /// Same as [`PdokGeocodingClient::geocode`].
    #[instrument(skip(self, query), fields(text = %query.text(), suggest_type = %query.suggest_type()))]
    pub async fn suggest(
        &self,
        query: &SuggestQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        let options = suggest_options(&self.options, query)?;
        self.execute(Endpoint::Suggest, &options).await
    }

    /// Fetch a single document by id from the `lookup` endpoint
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` for a blank id (before any request), otherwise
    /// the same errors as [`PdokGeocodingClient::reverse`].
    #[instrument(skip(self, query), fields(id = %query.id()))]
    pub async fn lookup(
        &self,
        query: &LookupQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        let options = lookup_options(&self.options, query)?;
        self.execute(Endpoint::Lookup, &options).await
    }

    async fn execute(
        &self,
        endpoint: Endpoint,
        options: &OptionMap,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        let url = request_url(&self.config.base_url, endpoint, options);

        debug!(%url, "Querying Locatieserver");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PdokError::invalid_response(&url, format!("HTTP {status}")));
        }

        let body = response.bytes().await?;
        let addresses = parse_search_response(&url, &body)?;

        debug!(count = addresses.len(), "Locatieserver returned addresses");
        Ok(AddressCollection::new(addresses))
    }
}

#[async_trait]
impl GeocodingProvider for PdokGeocodingClient {
    async fn geocode_query(
        &self,
        query: &GeocodeQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        self.geocode(query).await
    }

    async fn reverse_query(
        &self,
        query: &ReverseQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError> {
        self.reverse(query).await
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
