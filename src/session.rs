//! Drives the state transitions that involve the outer world.

use chrono::NaiveDate;

use crate::{
    api::{geocoding::Geocoder, weather::WeatherSource},
    core::{location::Coordinates, state::State},
    prelude::*,
};

/// Resolve the place name and the weather of the new location concurrently.
///
/// Both lookups are bounded and infallible, so the returned state always carries the location
/// with either real or fallback data.
#[instrument(skip_all, fields(%location))]
pub async fn update_location(
    state: State,
    location: Coordinates,
    weather_source: &dyn WeatherSource,
    geocoder: &dyn Geocoder,
    today: NaiveDate,
) -> State {
    let (state, ticket) = state.begin_location_update(location);
    let (place_name, weather) =
        tokio::join!(geocoder.place_name(location), weather_source.observe(location, today));
    info!(%place_name, "location updated");
    state.with_place_name(ticket, place_name).with_weather(ticket, weather)
}
