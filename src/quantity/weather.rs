//! Daily weather quantities as reported by NASA POWER.

use std::ops::Mul;

use crate::quantity::energy::WattHours;

quantity!(
    /// Daily solar energy density, `ALLSKY_SFC_SW_DWN`.
    KilowattHoursPerSquareMeter,
    via: f64,
    suffix: "kWh/m²/day",
    precision: 2
);

quantity!(
    /// Daily precipitation, `PRECTOTCORR`.
    Millimeters,
    via: f64,
    suffix: "mm",
    precision: 2
);

quantity!(
    /// Average daily temperature at 2 meters, `T2M`.
    Celsius,
    via: f64,
    suffix: "°C",
    precision: 1
);

quantity!(SquareMeters, via: f64, suffix: "m²", precision: 1);

impl Mul<SquareMeters> for KilowattHoursPerSquareMeter {
    type Output = WattHours;

    fn mul(self, area: SquareMeters) -> Self::Output {
        WattHours(self.0 * 1000.0 * area.0)
    }
}
