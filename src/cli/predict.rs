use clap::Parser;

use crate::{
    cli::battery::BatteryArgs,
    core::{prediction::Prediction, weather::WeatherObservation},
    prelude::*,
    quantity::weather::{Celsius, KilowattHoursPerSquareMeter, Millimeters},
    tables::{build_battery_table, build_prediction_table},
};

#[derive(Parser)]
pub struct PredictArgs {
    #[clap(flatten)]
    pub battery: BatteryArgs,

    /// Daily all-sky surface insolation.
    #[clap(long, default_value = "4.5", allow_negative_numbers = true)]
    pub solar_insolation: KilowattHoursPerSquareMeter,

    /// Daily precipitation, any positive amount blocks the solar charging.
    #[clap(long, default_value = "0", allow_negative_numbers = true)]
    pub precipitation: Millimeters,

    /// Air temperature at 2 metres.
    #[clap(long, default_value = "25", allow_negative_numbers = true)]
    pub temperature: Celsius,
}

impl PredictArgs {
    pub fn run(&self) -> Result {
        let battery = self.battery.profile()?;
        let weather = self.weather()?;
        let prediction = Prediction::new(&battery, &weather);
        info!(safe_usage = ?prediction.safe_usage, warning = ?prediction.warning, "predicted");
        println!("{}", build_battery_table(&battery));
        println!("{}", build_prediction_table(&prediction));
        Ok(())
    }

    pub fn weather(&self) -> Result<WeatherObservation> {
        WeatherObservation::try_new(self.solar_insolation, self.precipitation, self.temperature)
    }
}
