//! Entities - geocoding results and their building blocks

mod address;
mod admin_level;
mod collection;

pub use address::{Address, AddressBuilder};
pub use admin_level::{AdminLevel, AdminLevelCollection, MAX_ADMIN_LEVEL};
pub use collection::AddressCollection;
