use std::fmt::{Display, Formatter};

use crate::prelude::*;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        ensure!((-90.0..=90.0).contains(&latitude), "latitude out of range: {latitude}");
        ensure!((-180.0..=180.0).contains(&longitude), "longitude out of range: {longitude}");
        Ok(Self { latitude, longitude })
    }

    /// Human-readable stand-in when the place name cannot be resolved.
    #[must_use]
    pub fn rounded(&self) -> String {
        format!("{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
