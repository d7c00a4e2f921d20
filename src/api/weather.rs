use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use tokio::time::timeout;

use crate::{
    core::{
        location::Coordinates,
        weather::{Readings, WeatherObservation},
    },
    prelude::*,
};

pub const TIMEOUT: Duration = Duration::from_secs(8);

/// Daily data is published with a delay, so ask for the day before yesterday.
pub const PUBLICATION_LAG: Days = Days::new(2);

#[async_trait]
pub trait WeatherSource: Sync {
    /// Fetch the raw daily readings for the location on the specified day.
    async fn get_readings(&self, location: Coordinates, on: NaiveDate) -> Result<Readings>;

    /// Get the latest published observation for the location.
    ///
    /// Never fails: an unavailable, late, or malformed upstream response yields
    /// the climatological defaults. Single attempt, no retries.
    #[instrument(skip_all, fields(latitude = location.latitude, longitude = location.longitude))]
    async fn observe(&self, location: Coordinates, today: NaiveDate) -> WeatherObservation {
        let Some(on) = today.checked_sub_days(PUBLICATION_LAG) else {
            warn!(%today, "date out of range, using climatological defaults");
            return WeatherObservation::CLIMATOLOGICAL;
        };
        match timeout(TIMEOUT, self.get_readings(location, on)).await {
            Ok(Ok(readings)) => {
                let observation = WeatherObservation::from_readings(readings);
                info!(
                    %on,
                    solar_insolation = ?observation.solar_insolation,
                    precipitation = ?observation.precipitation,
                    temperature = ?observation.temperature,
                    "observed",
                );
                observation
            }
            Ok(Err(error)) => {
                warn!("failed to fetch the weather, using climatological defaults: {error:#}");
                WeatherObservation::CLIMATOLOGICAL
            }
            Err(_) => {
                warn!(timeout = ?TIMEOUT, "weather request timed out, using climatological defaults");
                WeatherObservation::CLIMATOLOGICAL
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::quantity::weather::{Celsius, KilowattHoursPerSquareMeter, Millimeters};

    /// Scripted weather source that records the requested dates.
    pub struct Scripted {
        pub readings: Option<Readings>,
        pub delay: Duration,
        pub requested: Mutex<Vec<NaiveDate>>,
    }

    impl Scripted {
        pub fn ok(readings: Readings) -> Self {
            Self { readings: Some(readings), delay: Duration::ZERO, requested: Mutex::default() }
        }

        pub fn failing() -> Self {
            Self { readings: None, delay: Duration::ZERO, requested: Mutex::default() }
        }
    }

    #[async_trait]
    impl WeatherSource for Scripted {
        async fn get_readings(&self, _location: Coordinates, on: NaiveDate) -> Result<Readings> {
            self.requested.lock().unwrap().push(on);
            tokio::time::sleep(self.delay).await;
            self.readings.context("upstream is down")
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn requests_two_days_ago() -> Result {
        let source = Scripted::ok(
            Readings::builder().solar_insolation(3.0).precipitation(0.2).temperature(11.0).build(),
        );
        let observation = source.observe(Coordinates::try_new(50.0, 5.0)?, today()).await;
        assert_eq!(
            observation,
            WeatherObservation {
                solar_insolation: KilowattHoursPerSquareMeter(3.0),
                precipitation: Millimeters(0.2),
                temperature: Celsius(11.0),
            }
        );
        assert_eq!(*source.requested.lock().unwrap(), [NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()]);
        Ok(())
    }

    #[tokio::test]
    async fn failure_falls_back() -> Result {
        let observation =
            Scripted::failing().observe(Coordinates::try_new(50.0, 5.0)?, today()).await;
        assert_eq!(observation, WeatherObservation::CLIMATOLOGICAL);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_falls_back() -> Result {
        let source = Scripted {
            delay: TIMEOUT + Duration::from_secs(1),
            ..Scripted::ok(Readings::builder().solar_insolation(7.0).build())
        };
        let observation = source.observe(Coordinates::try_new(50.0, 5.0)?, today()).await;
        assert_eq!(observation, WeatherObservation::CLIMATOLOGICAL);
        Ok(())
    }
}
