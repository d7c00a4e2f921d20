//! [NASA POWER](https://power.larc.nasa.gov/docs/services/api/temporal/daily/) daily point client.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    api::{client, weather::WeatherSource},
    core::{location::Coordinates, weather::Readings},
    prelude::*,
};

pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

const PARAMETERS: &str = "ALLSKY_SFC_SW_DWN,PRECTOTCORR,T2M";

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url })
    }

    fn url(&self, location: Coordinates, date: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("parameters", PARAMETERS)
            .append_pair("community", "RE")
            .append_pair("longitude", &location.longitude.to_string())
            .append_pair("latitude", &location.latitude.to_string())
            .append_pair("start", date)
            .append_pair("end", date)
            .append_pair("format", "JSON");
        url
    }
}

#[async_trait]
impl WeatherSource for Api {
    #[instrument(skip_all, fields(on = %on))]
    async fn get_readings(&self, location: Coordinates, on: NaiveDate) -> Result<Readings> {
        let date = on.format("%Y%m%d").to_string();
        info!("fetching…");
        let response = self
            .client
            .get(self.url(location, &date))
            .send()
            .await
            .context("failed to call NASA POWER")?
            .error_for_status()
            .context("NASA POWER request failed")?
            .json::<Response>()
            .await
            .context("failed to deserialize the NASA POWER response")?;
        Ok(response.readings_on(&date))
    }
}

#[derive(Deserialize)]
struct Response {
    properties: Properties,
}

#[derive(Deserialize)]
struct Properties {
    parameter: Parameters,
}

#[derive(Deserialize)]
struct Parameters {
    #[serde(rename = "ALLSKY_SFC_SW_DWN", default)]
    solar_insolation: Series,

    #[serde(rename = "PRECTOTCORR", default)]
    precipitation: Series,

    #[serde(rename = "T2M", default)]
    temperature: Series,
}

/// Daily values keyed by `YYYYMMDD`, which also sorts chronologically.
#[derive(Default, Deserialize)]
struct Series(BTreeMap<String, f64>);

impl Series {
    /// Value on the date, or the first available one if the date is absent.
    fn on(&self, date: &str) -> Option<f64> {
        self.0.get(date).or_else(|| self.0.values().next()).copied()
    }
}

impl Response {
    fn readings_on(&self, date: &str) -> Readings {
        let parameters = &self.properties.parameter;
        Readings::builder()
            .maybe_solar_insolation(parameters.solar_insolation.on(date))
            .maybe_precipitation(parameters.precipitation.on(date))
            .maybe_temperature(parameters.temperature.on(date))
            .build()
    }
}
