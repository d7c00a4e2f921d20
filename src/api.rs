pub mod assistant;
mod client;
pub mod gemini;
pub mod geocoding;
pub mod nasa_power;
pub mod nominatim;
pub mod weather;
