use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::{api::gemini, prelude::*};

#[derive(Parser)]
pub struct AssistantArgs {
    #[clap(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API version root, such as `…/v1beta`. A missing trailing slash is added.
    #[clap(
        long = "gemini-base-url",
        default_value = gemini::DEFAULT_BASE_URL,
        env = "GEMINI_BASE_URL"
    )]
    pub base_url: Url,

    /// Model for regular chat turns.
    #[clap(long, default_value = "gemini-3.1-pro-preview", env = "CHAT_MODEL")]
    pub chat_model: String,

    /// Model for the fast, voice-style chat turns.
    #[clap(long, default_value = "gemini-2.5-flash-lite-latest", env = "FAST_CHAT_MODEL")]
    pub fast_chat_model: String,

    /// Model with the Google Maps grounding for the nearby-help lookup.
    #[clap(long, default_value = "gemini-2.5-flash", env = "NEARBY_HELP_MODEL")]
    pub nearby_help_model: String,

    /// Give up on an assistant request after this many seconds. Unbounded when not set.
    #[clap(long = "assistant-timeout-secs", env = "ASSISTANT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl AssistantArgs {
    pub fn api(&self) -> Result<gemini::Api> {
        let models = gemini::Models::builder()
            .chat(&self.chat_model)
            .fast_chat(&self.fast_chat_model)
            .nearby_help(&self.nearby_help_model)
            .build();
        gemini::Api::try_new(
            self.base_url.clone(),
            self.api_key.clone(),
            models,
            self.timeout_secs.map(Duration::from_secs),
        )
    }
}
