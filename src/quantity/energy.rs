use std::ops::Div;

use crate::quantity::{power::Watts, time::Hours};

quantity!(WattHours, via: f64, suffix: "Wh", precision: 0);

impl Div<Watts> for WattHours {
    type Output = Hours;

    fn div(self, rhs: Watts) -> Self::Output {
        Hours(self.0 / rhs.0)
    }
}
