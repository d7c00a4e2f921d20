pub mod battery;
pub mod location;
pub mod prediction;
pub mod state;
pub mod summary;
pub mod weather;
