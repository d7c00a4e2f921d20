use clap::Parser;

use crate::{core::location::Coordinates, prelude::*};

/// Device location, in decimal degrees.
#[must_use]
#[derive(Parser)]
pub struct LocationArgs {
    #[clap(long, env = "LATITUDE", allow_negative_numbers = true, requires = "longitude")]
    pub latitude: Option<f64>,

    #[clap(long, env = "LONGITUDE", allow_negative_numbers = true, requires = "latitude")]
    pub longitude: Option<f64>,
}

impl LocationArgs {
    /// `None` when the location is not known yet.
    pub fn coordinates(&self) -> Result<Option<Coordinates>> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(Coordinates::try_new(latitude, longitude)?)),
            _ => Ok(None),
        }
    }

    pub fn require_coordinates(&self) -> Result<Coordinates> {
        self.coordinates()?.context("location is unavailable, set `--latitude` and `--longitude`")
    }
}
