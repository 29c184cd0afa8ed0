//! External API integrations

pub mod geocoding;
pub mod nws;

pub use geocoding::GeocodingClient;
pub use nws::NwsClient;
