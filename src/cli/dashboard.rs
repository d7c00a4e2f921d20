use chrono::Local;
use clap::Parser;

use crate::{
    cli::{location::LocationArgs, profile::ProfileArgs, weather::WeatherApiArgs},
    core::state::State,
    prelude::*,
    session::update_location,
    store::ProfileStore,
    tables::{
        LOCATING_STATUS,
        NEUTRAL_MESSAGE,
        build_battery_table,
        build_prediction_table,
        build_weather_table,
    },
};

#[derive(Parser)]
pub struct DashboardArgs {
    #[clap(flatten)]
    pub location: LocationArgs,

    #[clap(flatten)]
    pub profile: ProfileArgs,

    #[clap(flatten)]
    pub weather_api: WeatherApiArgs,

    /// Also print the assistant context.
    #[clap(long)]
    pub context: bool,
}

impl DashboardArgs {
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result {
        let state = load_state(&self.profile, &self.location, &self.weather_api).await?;
        render(&state);
        if self.context {
            println!("{}", state.context());
        }
        Ok(())
    }
}

/// Restore the battery profile and, when the location is known, fetch its conditions.
pub async fn load_state(
    profile: &ProfileArgs,
    location: &LocationArgs,
    weather_api: &WeatherApiArgs,
) -> Result<State> {
    let mut state = State::default();
    if let Some(battery) = profile.store().load()? {
        state = state.with_battery(battery);
    } else {
        info!("no battery profile configured");
    }
    if let Some(location) = location.coordinates()? {
        state = update_location(
            state,
            location,
            &weather_api.weather_source()?,
            &weather_api.geocoder()?,
            Local::now().date_naive(),
        )
        .await;
    }
    Ok(state)
}

fn render(state: &State) {
    match (&state.place_name, &state.weather) {
        (Some(place_name), Some(weather)) => {
            println!("{}", build_weather_table(place_name, weather));
        }
        _ => println!("{LOCATING_STATUS}"),
    }
    match (&state.battery, &state.prediction) {
        (Some(battery), Some(prediction)) => {
            println!("{}", build_battery_table(battery));
            println!("{}", build_prediction_table(prediction));
        }
        _ => println!("{NEUTRAL_MESSAGE}"),
    }
}
