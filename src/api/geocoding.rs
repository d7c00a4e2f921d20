use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use crate::{core::location::Coordinates, prelude::*};

pub const TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait Geocoder: Sync {
    /// Resolve the human-readable name of the place, if known.
    async fn reverse(&self, location: Coordinates) -> Result<Option<String>>;

    /// Never fails: falls back to the rounded coordinates.
    #[instrument(skip_all, fields(latitude = location.latitude, longitude = location.longitude))]
    async fn place_name(&self, location: Coordinates) -> String {
        match timeout(TIMEOUT, self.reverse(location)).await {
            Ok(Ok(Some(name))) if !name.is_empty() => name,
            Ok(Ok(_)) => location.rounded(),
            Ok(Err(error)) => {
                warn!("reverse geocoding failed: {error:#}");
                location.rounded()
            }
            Err(_) => {
                warn!(timeout = ?TIMEOUT, "reverse geocoding timed out");
                location.rounded()
            }
        }
    }
}
