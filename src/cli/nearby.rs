use clap::Parser;

use crate::{
    api::assistant::Assistant,
    cli::{assistant::AssistantArgs, location::LocationArgs},
    prelude::*,
    tables::build_places_table,
};

#[derive(Parser)]
pub struct NearbyArgs {
    #[clap(flatten)]
    pub location: LocationArgs,

    #[clap(flatten)]
    pub assistant: AssistantArgs,
}

impl NearbyArgs {
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result {
        let location = self.location.require_coordinates()?;
        match self.assistant.api()?.nearby_help(location).await {
            Ok(help) => {
                info!(n_places = help.places.len(), "found");
                if !help.text.is_empty() {
                    println!("{}", help.text);
                }
                if !help.places.is_empty() {
                    println!("{}", build_places_table(&help.places));
                }
            }
            Err(error) => {
                error!("nearby help lookup failed: {error:#}");
                println!("No results.");
            }
        }
        Ok(())
    }
}
