//! Domain layer for geocoding providers
//!
//! Provider-neutral vocabulary shared by all geocoding integrations:
//! queries, addresses and their value objects. Integrations translate their
//! upstream formats into these types.

pub mod entities;
pub mod errors;
pub mod queries;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use queries::{DEFAULT_RESULT_LIMIT, GeocodeQuery, QueryData, QueryValue, ReverseQuery};
pub use value_objects::*;
