//! Value Objects - Immutable, identity-less domain primitives

mod country;
mod geo_location;
mod timezone;

pub use country::Country;
pub use geo_location::GeoLocation;
pub use timezone::Timezone;
