//! [Nominatim](https://nominatim.org/release-docs/latest/api/Reverse/) reverse geocoding.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    api::{client, geocoding::Geocoder},
    core::location::Coordinates,
    prelude::*,
};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// City-level detail.
const ZOOM: &str = "10";

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url })
    }
}

#[async_trait]
impl Geocoder for Api {
    #[instrument(skip_all)]
    async fn reverse(&self, location: Coordinates) -> Result<Option<String>> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &location.latitude.to_string())
            .append_pair("lon", &location.longitude.to_string())
            .append_pair("zoom", ZOOM);
        let place: Place = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to call Nominatim")?
            .error_for_status()
            .context("Nominatim request failed")?
            .json()
            .await
            .context("failed to deserialize the Nominatim response")?;
        debug!(display_name = ?place.display_name, "resolved");
        Ok(place.display_name)
    }
}

#[derive(Deserialize)]
struct Place {
    display_name: Option<String>,
}
