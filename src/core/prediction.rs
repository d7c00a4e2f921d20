//! Energy availability model: how long the battery lasts under today's weather.

use std::fmt::{Display, Formatter};

use crate::{
    core::{battery::BatteryProfile, weather::WeatherObservation},
    quantity::{
        Zero,
        energy::WattHours,
        power::Watts,
        time::Hours,
        weather::{KilowattHoursPerSquareMeter, SquareMeters},
    },
};

/// Minimal rural load: two lights and one phone charger.
pub const BASE_LOAD: Watts = Watts(50.0);

/// Assumed photovoltaic panel efficiency.
pub const PANEL_EFFICIENCY: f64 = 0.15;

/// Assumed photovoltaic panel area.
pub const PANEL_AREA: SquareMeters = SquareMeters(1.0);

/// Anything above is displayed as «effectively fine».
pub const MAX_SAFE_USAGE: Hours = Hours(48.0);

/// Insolation below which the battery is expected to drain faster than usual.
pub const LOW_SOLAR_INSOLATION: KilowattHoursPerSquareMeter = KilowattHoursPerSquareMeter(2.0);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Warning {
    HeavyRainNoSolar,
    LowSolarRadiation,
}

impl Warning {
    /// Classify the weather, the first matching rule wins.
    pub fn classify(weather: &WeatherObservation) -> Option<Self> {
        if weather.is_raining() {
            Some(Self::HeavyRainNoSolar)
        } else if weather.solar_insolation < LOW_SOLAR_INSOLATION {
            Some(Self::LowSolarRadiation)
        } else {
            None
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::HeavyRainNoSolar => {
                "Heavy rain detected. Solar charging is unavailable. Conserve power now to avoid a blackout."
            }
            Self::LowSolarRadiation => {
                "Low solar radiation today. Battery will drain faster than usual."
            }
        }
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Prediction {
    /// Energy that can be safely withdrawn from the battery.
    pub available_energy: WattHours,

    /// Energy the panel would harvest today under a dry sky.
    pub solar_gain: WattHours,

    /// Solar gain after the rain override.
    pub effective_solar_gain: WattHours,

    pub total_energy: WattHours,

    /// Runtime under [`BASE_LOAD`], within `0..=48` hours.
    pub safe_usage: Hours,

    pub warning: Option<Warning>,
}

impl Prediction {
    /// Pure and total: identical inputs always produce bit-identical output.
    pub fn new(battery: &BatteryProfile, weather: &WeatherObservation) -> Self {
        let available_energy = battery.available_energy();
        let solar_gain = weather.solar_insolation * PANEL_AREA * PANEL_EFFICIENCY;

        // Rain is a binary event: any precipitation blocks the solar charging entirely,
        // no matter the intensity.
        let effective_solar_gain = if weather.is_raining() { WattHours::ZERO } else { solar_gain };

        let total_energy = available_energy + effective_solar_gain;
        let safe_usage = (total_energy / BASE_LOAD).clamp(Hours::ZERO, MAX_SAFE_USAGE);

        Self {
            available_energy,
            solar_gain,
            effective_solar_gain,
            total_energy,
            safe_usage,
            warning: Warning::classify(weather),
        }
    }
}
