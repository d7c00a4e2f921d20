use crate::{
    prelude::*,
    quantity::weather::{Celsius, KilowattHoursPerSquareMeter, Millimeters},
};

/// Marker for missing data in the upstream weather API.
pub const MISSING_VALUE: f64 = -999.0;

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct WeatherObservation {
    pub solar_insolation: KilowattHoursPerSquareMeter,
    pub precipitation: Millimeters,
    pub temperature: Celsius,
}

impl WeatherObservation {
    /// Climatological defaults used whenever the weather source cannot tell better.
    pub const CLIMATOLOGICAL: Self = Self {
        solar_insolation: KilowattHoursPerSquareMeter(4.5),
        precipitation: Millimeters(0.0),
        temperature: Celsius(25.0),
    };

    /// Observation entered by hand: insolation and precipitation cannot be negative.
    pub fn try_new(
        solar_insolation: KilowattHoursPerSquareMeter,
        precipitation: Millimeters,
        temperature: Celsius,
    ) -> Result<Self> {
        ensure!(
            solar_insolation.0.is_finite() && solar_insolation.0 >= 0.0,
            "solar insolation must be non-negative, got {solar_insolation:?}"
        );
        ensure!(
            precipitation.0.is_finite() && precipitation.0 >= 0.0,
            "precipitation must be non-negative, got {precipitation:?}"
        );
        ensure!(temperature.0.is_finite(), "temperature must be finite, got {temperature:?}");
        Ok(Self { solar_insolation, precipitation, temperature })
    }

    /// Build an observation from raw upstream readings.
    ///
    /// Each field that is absent or equal to [`MISSING_VALUE`] falls back to its
    /// [climatological default][Self::CLIMATOLOGICAL], independently from the other fields.
    pub fn from_readings(readings: Readings) -> Self {
        Self {
            solar_insolation: readings
                .solar_insolation
                .and_then(present)
                .map_or(Self::CLIMATOLOGICAL.solar_insolation, KilowattHoursPerSquareMeter),
            precipitation: readings
                .precipitation
                .and_then(present)
                .map_or(Self::CLIMATOLOGICAL.precipitation, Millimeters),
            temperature: readings
                .temperature
                .and_then(present)
                .map_or(Self::CLIMATOLOGICAL.temperature, Celsius),
        }
    }

    pub fn is_raining(&self) -> bool {
        self.precipitation.0 > 0.0
    }
}

/// Raw daily values as found in the upstream response.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, bon::Builder)]
pub struct Readings {
    pub solar_insolation: Option<f64>,
    pub precipitation: Option<f64>,
    pub temperature: Option<f64>,
}

fn present(value: f64) -> Option<f64> {
    (value != MISSING_VALUE).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_ok() -> Result {
        let observation = WeatherObservation::try_new(
            KilowattHoursPerSquareMeter(0.0),
            Millimeters(0.0),
            Celsius(-12.0),
        )?;
        assert_eq!(observation.temperature, Celsius(-12.0));
        Ok(())
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        let dry = Millimeters(0.0);
        let mild = Celsius(20.0);
        for insolation in [-0.5, f64::NAN, f64::INFINITY] {
            assert!(
                WeatherObservation::try_new(KilowattHoursPerSquareMeter(insolation), dry, mild)
                    .is_err()
            );
        }
        let sunny = KilowattHoursPerSquareMeter(5.0);
        for precipitation in [-100.0, f64::NAN] {
            assert!(WeatherObservation::try_new(sunny, Millimeters(precipitation), mild).is_err());
        }
        assert!(WeatherObservation::try_new(sunny, dry, Celsius(f64::NAN)).is_err());
    }

    #[test]
    fn all_present_ok() {
        let observation = WeatherObservation::from_readings(
            Readings::builder().solar_insolation(5.2).precipitation(1.5).temperature(18.0).build(),
        );
        assert_eq!(observation.solar_insolation, KilowattHoursPerSquareMeter(5.2));
        assert_eq!(observation.precipitation, Millimeters(1.5));
        assert_eq!(observation.temperature, Celsius(18.0));
    }

    #[test]
    fn missing_insolation_is_substituted_alone() {
        let observation = WeatherObservation::from_readings(
            Readings::builder()
                .solar_insolation(MISSING_VALUE)
                .precipitation(3.0)
                .temperature(12.5)
                .build(),
        );
        assert_eq!(observation.solar_insolation, KilowattHoursPerSquareMeter(4.5));
        assert_eq!(observation.precipitation, Millimeters(3.0));
        assert_eq!(observation.temperature, Celsius(12.5));
    }

    #[test]
    fn missing_precipitation_is_substituted_alone() {
        let observation = WeatherObservation::from_readings(
            Readings::builder()
                .solar_insolation(1.0)
                .precipitation(MISSING_VALUE)
                .temperature(-3.0)
                .build(),
        );
        assert_eq!(observation.solar_insolation, KilowattHoursPerSquareMeter(1.0));
        assert_eq!(observation.precipitation, Millimeters(0.0));
        assert_eq!(observation.temperature, Celsius(-3.0));
    }

    #[test]
    fn missing_temperature_is_substituted_alone() {
        let observation = WeatherObservation::from_readings(
            Readings::builder()
                .solar_insolation(6.0)
                .precipitation(0.0)
                .temperature(MISSING_VALUE)
                .build(),
        );
        assert_eq!(observation.solar_insolation, KilowattHoursPerSquareMeter(6.0));
        assert_eq!(observation.precipitation, Millimeters(0.0));
        assert_eq!(observation.temperature, Celsius(25.0));
    }

    #[test]
    fn all_missing_is_climatological() {
        let sentinel = Readings::builder()
            .solar_insolation(MISSING_VALUE)
            .precipitation(MISSING_VALUE)
            .temperature(MISSING_VALUE)
            .build();
        assert_eq!(WeatherObservation::from_readings(sentinel), WeatherObservation::CLIMATOLOGICAL);
        assert_eq!(
            WeatherObservation::from_readings(Readings::default()),
            WeatherObservation::CLIMATOLOGICAL,
        );
    }
}
