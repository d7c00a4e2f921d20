//! Explicit application state with a pure recomputation step.
//!
//! Every transition consumes the state and returns a new one. Responses to location updates
//! carry the [`Ticket`] they were issued with, and only the latest ticket is accepted.

use crate::{
    core::{
        battery::BatteryProfile,
        location::Coordinates,
        prediction::Prediction,
        summary::Summary,
        weather::WeatherObservation,
    },
    prelude::*,
};

/// Monotonic sequence number of a location update.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Ticket(u64);

#[must_use]
#[derive(Clone, Debug, Default)]
pub struct State {
    pub location: Option<Coordinates>,
    pub place_name: Option<String>,
    pub battery: Option<BatteryProfile>,
    pub weather: Option<WeatherObservation>,
    pub prediction: Option<Prediction>,
    latest_ticket: Ticket,
}

impl State {
    pub fn with_battery(self, battery: BatteryProfile) -> Self {
        Self { battery: Some(battery), ..self }.recompute()
    }

    /// Start a location update and issue its ticket.
    ///
    /// Any response still in flight for an earlier ticket becomes stale.
    pub fn begin_location_update(self, location: Coordinates) -> (Self, Ticket) {
        let ticket = Ticket(self.latest_ticket.0 + 1);
        (Self { location: Some(location), place_name: None, latest_ticket: ticket, ..self }, ticket)
    }

    pub fn with_weather(self, ticket: Ticket, weather: WeatherObservation) -> Self {
        if self.is_stale(ticket) {
            return self;
        }
        Self { weather: Some(weather), ..self }.recompute()
    }

    pub fn with_place_name(self, ticket: Ticket, place_name: String) -> Self {
        if self.is_stale(ticket) {
            return self;
        }
        Self { place_name: Some(place_name), ..self }
    }

    /// Derive the prediction from the current inputs. Idempotent.
    pub fn recompute(self) -> Self {
        let prediction = match (&self.battery, &self.weather) {
            (Some(battery), Some(weather)) => Some(Prediction::new(battery, weather)),
            _ => None,
        };
        Self { prediction, ..self }
    }

    #[must_use]
    pub fn context(&self) -> String {
        Summary::builder()
            .maybe_location(self.location.as_ref())
            .maybe_battery(self.battery.as_ref())
            .maybe_weather(self.weather.as_ref())
            .maybe_prediction(self.prediction.as_ref())
            .build()
            .render()
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        if ticket == self.latest_ticket {
            false
        } else {
            debug!(?ticket, latest = ?self.latest_ticket, "discarding a stale response");
            true
        }
    }
}
