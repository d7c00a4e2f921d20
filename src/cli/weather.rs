use clap::Parser;
use reqwest::Url;

use crate::{
    api::{nasa_power, nominatim},
    prelude::*,
};

#[derive(Parser)]
pub struct WeatherApiArgs {
    #[clap(
        long = "nasa-power-url",
        default_value = nasa_power::DEFAULT_BASE_URL,
        env = "NASA_POWER_URL"
    )]
    pub nasa_power_url: Url,

    #[clap(
        long = "nominatim-url",
        default_value = nominatim::DEFAULT_BASE_URL,
        env = "NOMINATIM_URL"
    )]
    pub nominatim_url: Url,
}

impl WeatherApiArgs {
    pub fn weather_source(&self) -> Result<nasa_power::Api> {
        nasa_power::Api::try_new(self.nasa_power_url.clone())
    }

    pub fn geocoder(&self) -> Result<nominatim::Api> {
        nominatim::Api::try_new(self.nominatim_url.clone())
    }
}
