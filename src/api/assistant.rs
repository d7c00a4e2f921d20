use async_trait::async_trait;

use crate::{core::location::Coordinates, prelude::*};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Complete answers from the larger model.
    #[default]
    Thorough,

    /// Short answers with lower latency, meant for voice interaction.
    Fast,
}

/// Place reference to be displayed as a link.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Place {
    pub title: String,
    pub uri: String,
}

#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NearbyHelp {
    pub text: String,
    pub places: Vec<Place>,
}

#[async_trait]
pub trait Assistant: Sync {
    /// Answer the user's utterance given the grounding context.
    async fn reply(&self, mode: Mode, context: &str, utterance: &str) -> Result<String>;

    /// Look up solar panel and battery repair shops around the location.
    async fn nearby_help(&self, location: Coordinates) -> Result<NearbyHelp>;
}

/// Single user turn carrying both the context and the question.
#[must_use]
pub fn prompt(context: &str, utterance: &str) -> String {
    format!("Context: {context}\n\nUser Question: {utterance}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_ok() {
        assert_eq!(
            prompt("No data available yet.", "Will my lights last tonight?"),
            "Context: No data available yet.\n\nUser Question: Will my lights last tonight?",
        );
    }
}
