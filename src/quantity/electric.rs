use std::ops::Mul;

use crate::quantity::energy::WattHours;

quantity!(Volts, via: f64, suffix: "V", precision: 1);
quantity!(AmpHours, via: f64, suffix: "Ah", precision: 0);

impl Mul<AmpHours> for Volts {
    type Output = WattHours;

    fn mul(self, charge: AmpHours) -> Self::Output {
        WattHours(self.0 * charge.0)
    }
}
