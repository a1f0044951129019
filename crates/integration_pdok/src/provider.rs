//! Geocoding provider trait

use async_trait::async_trait;
use domain::{AddressCollection, GeocodeQuery, ReverseQuery};

use crate::{PdokAddress, PdokError};

/// Trait for geocoding providers
///
/// Implemented by the PDOK client; consumers that only need forward and
/// reverse geocoding depend on this instead of the concrete client.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve free text to addresses, most relevant first
    ///
    /// # Errors
    ///
    /// Returns an error if the query is unsupported, the request fails or
    /// the response cannot be mapped.
    async fn geocode_query(
        &self,
        query: &GeocodeQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError>;

    /// Resolve coordinates to nearby addresses, nearest first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// mapped.
    async fn reverse_query(
        &self,
        query: &ReverseQuery,
    ) -> Result<AddressCollection<PdokAddress>, PdokError>;

    /// Get the provider name (e.g., "nationaal_georegister")
    fn provider_name(&self) -> &'static str;
}
