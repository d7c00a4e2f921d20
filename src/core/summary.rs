//! Plain-text digest used as the conversational grounding context.

use std::fmt::Write;

use bon::Builder;

use crate::core::{
    battery::BatteryProfile,
    location::Coordinates,
    prediction::Prediction,
    weather::WeatherObservation,
};

pub const NO_DATA: &str = "No data available yet.";

#[derive(Builder)]
pub struct Summary<'a> {
    location: Option<&'a Coordinates>,
    battery: Option<&'a BatteryProfile>,
    weather: Option<&'a WeatherObservation>,
    prediction: Option<&'a Prediction>,
}

impl Summary<'_> {
    /// Render the digest, or [`NO_DATA`] unless the battery, the weather, and the prediction
    /// are all known.
    #[must_use]
    pub fn render(&self) -> String {
        let (Some(battery), Some(weather), Some(prediction)) =
            (self.battery, self.weather, self.prediction)
        else {
            return NO_DATA.to_string();
        };

        let mut summary = String::new();
        match self.location {
            Some(location) => {
                let _ = writeln!(summary, "Location: {location}");
            }
            None => summary.push_str("Location: unknown\n"),
        }
        let _ = writeln!(
            summary,
            "Battery: {}Ah, {}V, {}",
            battery.capacity().0,
            battery.voltage().0,
            battery.chemistry(),
        );
        let _ = writeln!(
            summary,
            "Weather: Solar {}kWh/m2, Rain {}mm, Temp {}C",
            weather.solar_insolation.0, weather.precipitation.0, weather.temperature.0,
        );
        let _ = writeln!(
            summary,
            "Prediction: {:.1} hours left, {}Wh available.",
            prediction.safe_usage.0, prediction.available_energy.0,
        );
        let _ = write!(
            summary,
            "Warning: {}",
            prediction.warning.map_or("None", |warning| warning.text()),
        );
        summary
    }
}
