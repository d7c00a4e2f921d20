use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    api::assistant::{Assistant, Mode},
    cli::{
        assistant::AssistantArgs,
        dashboard::load_state,
        location::LocationArgs,
        profile::ProfileArgs,
        weather::WeatherApiArgs,
    },
    prelude::*,
};

#[derive(Parser)]
pub struct ChatArgs {
    /// Use the low-latency model with short answers.
    #[clap(long)]
    pub fast: bool,

    #[clap(flatten)]
    pub location: LocationArgs,

    #[clap(flatten)]
    pub profile: ProfileArgs,

    #[clap(flatten)]
    pub weather_api: WeatherApiArgs,

    #[clap(flatten)]
    pub assistant: AssistantArgs,
}

impl ChatArgs {
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result {
        let assistant = self.assistant.api()?;
        let context = load_state(&self.profile, &self.location, &self.weather_api).await?.context();
        let mode = if self.fast { Mode::Fast } else { Mode::Thorough };
        let n_replies = converse(
            &assistant,
            mode,
            &context,
            BufReader::new(tokio::io::stdin()),
            std::io::stdout(),
        )
        .await?;
        info!(n_replies, "conversation ended");
        Ok(())
    }
}

/// Answer every non-blank input line, until the input ends.
///
/// A failed turn gets no reply and the conversation goes on.
async fn converse(
    assistant: &dyn Assistant,
    mode: Mode,
    context: &str,
    input: impl AsyncBufRead + Unpin,
    mut output: impl Write,
) -> Result<usize> {
    let mut lines = input.lines();
    let mut n_replies = 0;
    while let Some(line) = lines.next_line().await? {
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }
        match assistant.reply(mode, context, utterance).await {
            Ok(reply) => {
                writeln!(output, "{reply}")?;
                output.flush()?;
                n_replies += 1;
            }
            Err(error) => {
                error!("the assistant failed to reply: {error:#}");
            }
        }
    }
    Ok(n_replies)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        api::assistant::{NearbyHelp, prompt},
        core::location::Coordinates,
    };

    /// Echoes the prompt back, except for the utterances it is told to fail.
    #[derive(Default)]
    struct Echo {
        seen: Mutex<Vec<(Mode, String)>>,
    }

    #[async_trait]
    impl Assistant for Echo {
        async fn reply(&self, mode: Mode, context: &str, utterance: &str) -> Result<String> {
            self.seen.lock().map_err(|_| anyhow!("poisoned"))?.push((mode, utterance.to_string()));
            ensure!(utterance != "fail", "HTTP 500");
            Ok(prompt(context, utterance).replace('\n', " "))
        }

        async fn nearby_help(&self, _location: Coordinates) -> Result<NearbyHelp> {
            bail!("not supported")
        }
    }

    #[tokio::test]
    async fn conversation_survives_failed_turn() -> Result {
        let assistant = Echo::default();
        let mut output = Vec::new();
        let n_replies = converse(
            &assistant,
            Mode::Fast,
            "No data available yet.",
            &b"hello\n\nfail\nbye\n"[..],
            &mut output,
        )
        .await?;

        assert_eq!(n_replies, 2);
        assert_eq!(
            String::from_utf8(output)?,
            "Context: No data available yet.  User Question: hello\n\
             Context: No data available yet.  User Question: bye\n",
        );
        let seen = assistant.seen.lock().map_err(|_| anyhow!("poisoned"))?;
        assert_eq!(
            *seen,
            [
                (Mode::Fast, "hello".to_string()),
                (Mode::Fast, "fail".to_string()),
                (Mode::Fast, "bye".to_string()),
            ],
        );
        Ok(())
    }
}
