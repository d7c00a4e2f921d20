use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        electric::{AmpHours, Volts},
        energy::WattHours,
    },
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chemistry {
    /// Flooded or sealed lead-acid, 80% depth of discharge.
    LeadAcid,

    /// Lithium-ion or LiFePO₄, 95% depth of discharge.
    Lithium,
}

impl Chemistry {
    /// Fraction of the rated capacity that may be withdrawn without excessive wear.
    ///
    /// Lead-acid cells degrade quickly below 20% remaining charge,
    /// lithium cells tolerate a near-full discharge.
    pub const fn depth_of_discharge(self) -> f64 {
        match self {
            Self::LeadAcid => 0.80,
            Self::Lithium => 0.95,
        }
    }
}

impl Display for Chemistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadAcid => write!(f, "Lead Acid"),
            Self::Lithium => write!(f, "Lithium"),
        }
    }
}

/// User-declared battery bank.
///
/// Both the capacity and the voltage are strictly positive: the only way to obtain a profile
/// is [`BatteryProfile::try_new`], which deserialization goes through as well.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBatteryProfile")]
pub struct BatteryProfile {
    #[serde(rename = "capacity_ah")]
    capacity: AmpHours,

    #[serde(rename = "voltage_v")]
    voltage: Volts,

    chemistry: Chemistry,
}

impl BatteryProfile {
    pub const DEFAULT_CAPACITY: AmpHours = AmpHours(100.0);
    pub const DEFAULT_VOLTAGE: Volts = Volts(12.0);
    pub const DEFAULT_CHEMISTRY: Chemistry = Chemistry::LeadAcid;

    pub fn try_new(capacity: AmpHours, voltage: Volts, chemistry: Chemistry) -> Result<Self> {
        ensure!(
            capacity.0.is_finite() && capacity.0 > 0.0,
            "battery capacity must be positive, got {capacity:?}"
        );
        ensure!(
            voltage.0.is_finite() && voltage.0 > 0.0,
            "battery voltage must be positive, got {voltage:?}"
        );
        Ok(Self { capacity, voltage, chemistry })
    }

    pub const fn capacity(&self) -> AmpHours {
        self.capacity
    }

    pub const fn voltage(&self) -> Volts {
        self.voltage
    }

    pub const fn chemistry(&self) -> Chemistry {
        self.chemistry
    }

    /// Energy that can be safely withdrawn from a full battery.
    pub fn available_energy(&self) -> WattHours {
        self.voltage * self.capacity * self.chemistry.depth_of_discharge()
    }
}

impl Default for BatteryProfile {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            voltage: Self::DEFAULT_VOLTAGE,
            chemistry: Self::DEFAULT_CHEMISTRY,
        }
    }
}

#[derive(Deserialize)]
struct UncheckedBatteryProfile {
    capacity_ah: AmpHours,
    voltage_v: Volts,
    chemistry: Chemistry,
}

impl TryFrom<UncheckedBatteryProfile> for BatteryProfile {
    type Error = Error;

    fn try_from(unchecked: UncheckedBatteryProfile) -> Result<Self> {
        Self::try_new(unchecked.capacity_ah, unchecked.voltage_v, unchecked.chemistry)
    }
}
