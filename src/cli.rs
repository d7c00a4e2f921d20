mod assistant;
mod battery;
mod chat;
mod dashboard;
mod location;
mod nearby;
mod predict;
mod profile;
mod weather;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        battery::BatteryCommand,
        chat::ChatArgs,
        dashboard::DashboardArgs,
        nearby::NearbyArgs,
        predict::PredictArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the battery runtime offline, from the given weather conditions.
    #[clap(name = "predict")]
    Predict(Box<PredictArgs>),

    /// Fetch the weather for the location and show the battery outlook.
    #[clap(name = "dashboard")]
    Dashboard(Box<DashboardArgs>),

    /// Manage the stored battery profile.
    #[clap(name = "battery")]
    Battery {
        #[command(subcommand)]
        command: BatteryCommand,
    },

    /// Talk to the assistant, one question per line.
    #[clap(name = "chat")]
    Chat(Box<ChatArgs>),

    /// Find solar panel and battery repair shops nearby.
    #[clap(name = "nearby")]
    Nearby(Box<NearbyArgs>),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Predict(args) => args.run(),
            Self::Dashboard(args) => args.run().await,
            Self::Battery { command } => command.run(),
            Self::Chat(args) => args.run().await,
            Self::Nearby(args) => args.run().await,
        }
    }
}
