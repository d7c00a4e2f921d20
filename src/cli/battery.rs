//! Battery-related CLI arguments.

use clap::{Parser, Subcommand};

use crate::{
    cli::profile::ProfileArgs,
    core::battery::{BatteryProfile, Chemistry},
    prelude::*,
    quantity::electric::{AmpHours, Volts},
    store::ProfileStore,
    tables::build_battery_table,
};

#[must_use]
#[derive(Parser)]
pub struct BatteryArgs {
    /// Rated battery capacity in ampere-hours.
    #[clap(long = "capacity-ah", default_value = "100", env = "BATTERY_CAPACITY_AH")]
    pub capacity: AmpHours,

    /// Nominal battery voltage.
    #[clap(long = "voltage-v", default_value = "12", env = "BATTERY_VOLTAGE_V")]
    pub voltage: Volts,

    #[clap(
        long,
        value_enum,
        default_value_t = BatteryProfile::DEFAULT_CHEMISTRY,
        env = "BATTERY_CHEMISTRY"
    )]
    pub chemistry: Chemistry,
}

impl BatteryArgs {
    pub fn profile(&self) -> Result<BatteryProfile> {
        BatteryProfile::try_new(self.capacity, self.voltage, self.chemistry)
    }
}

#[derive(Subcommand)]
pub enum BatteryCommand {
    /// Show the stored battery profile.
    #[clap(name = "show")]
    Show(ProfileArgs),

    /// Validate and store the battery profile.
    #[clap(name = "set")]
    Set {
        #[clap(flatten)]
        battery: BatteryArgs,

        #[clap(flatten)]
        profile: ProfileArgs,
    },
}

impl BatteryCommand {
    pub fn run(self) -> Result {
        match self {
            Self::Show(profile) => {
                let store = profile.store();
                match store.load()? {
                    Some(battery) => println!("{}", build_battery_table(&battery)),
                    None => println!(
                        "No battery profile in `{}`, use `battery set` to configure one",
                        store.path().display(),
                    ),
                }
            }
            Self::Set { battery, profile } => {
                let battery = battery.profile()?;
                profile.store().save(&battery)?;
                println!("{}", build_battery_table(&battery));
            }
        }
        Ok(())
    }
}
