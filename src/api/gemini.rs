//! [Gemini](https://ai.google.dev/api/generate-content) `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use itertools::Itertools;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

use crate::{
    api::{
        assistant::{Assistant, Mode, NearbyHelp, Place, prompt},
        client,
    },
    core::location::Coordinates,
    prelude::*,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

const CHAT_INSTRUCTION: &str = "You are SolarGuard Assistant. You help rural users manage their solar battery systems. Use simple, clear language. If there is rain in the context, warn about potential power cuts.";
const FAST_CHAT_INSTRUCTION: &str =
    "You are SolarGuard Assistant. Be extremely concise and fast. You are in voice mode.";
const NEARBY_HELP_PROMPT: &str = "Find solar panel and battery repair shops near my location.";

#[derive(Clone, bon::Builder)]
pub struct Models {
    #[builder(into)]
    pub chat: String,

    #[builder(into)]
    pub fast_chat: String,

    #[builder(into)]
    pub nearby_help: String,
}

pub struct Api {
    client: Client,
    base_url: Url,
    key: String,
    models: Models,
}

impl Api {
    /// Without the timeout, requests wait for the service indefinitely.
    pub fn try_new(
        mut base_url: Url,
        key: String,
        models: Models,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        // `Url::join` replaces the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let mut builder = client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()?, base_url, key, models })
    }

    fn generate_content_url(&self, model: &str) -> Result<Url> {
        self.base_url
            .join(&format!("models/{model}:generateContent"))
            .context("invalid Gemini base URL")
    }

    /// Pick the model and the system instruction for the chat mode.
    fn chat_request<'a>(
        &'a self,
        mode: Mode,
        prompt: &'a str,
    ) -> (&'a str, GenerateContentRequest<'a>) {
        let (model, instruction) = match mode {
            Mode::Thorough => (self.models.chat.as_str(), CHAT_INSTRUCTION),
            Mode::Fast => (self.models.fast_chat.as_str(), FAST_CHAT_INSTRUCTION),
        };
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(prompt)])
            .system_instruction(Content::system(instruction))
            .build();
        (model, request)
    }

    fn nearby_help_request(location: Coordinates) -> GenerateContentRequest<'static> {
        GenerateContentRequest::builder()
            .contents(vec![Content::user(NEARBY_HELP_PROMPT)])
            .tools(vec![Tool { google_maps: GoogleMaps {} }])
            .tool_config(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng { latitude: location.latitude, longitude: location.longitude },
                },
            })
            .build()
    }

    #[instrument(skip_all, fields(model = model))]
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse> {
        let url = self.generate_content_url(model)?;
        let response: GenerateContentResponse = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.key)
            .json(request)
            .send()
            .await
            .context("failed to call Gemini")?
            .error_for_status()
            .context("Gemini request failed")?
            .json()
            .await
            .context("failed to deserialize the Gemini response")?;
        debug!(n_candidates = response.candidates.len(), "generated");
        Ok(response)
    }
}

#[async_trait]
impl Assistant for Api {
    #[instrument(skip_all, fields(mode = ?mode))]
    async fn reply(&self, mode: Mode, context: &str, utterance: &str) -> Result<String> {
        let prompt = prompt(context, utterance);
        let (model, request) = self.chat_request(mode, &prompt);
        self.generate_content(model, &request).await?.text().context("the assistant has no reply")
    }

    #[instrument(skip_all)]
    async fn nearby_help(&self, location: Coordinates) -> Result<NearbyHelp> {
        let request = Self::nearby_help_request(location);
        let response = self.generate_content(&self.models.nearby_help, &request).await?;
        Ok(response.into_nearby_help())
    }
}

#[skip_serializing_none]
#[derive(Serialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Option<Content<'a>>,
    tools: Option<Vec<Tool>>,
    tool_config: Option<ToolConfig>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct Content<'a> {
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn user(text: &'a str) -> Self {
        Self { role: Some("user"), parts: vec![Part { text }] }
    }

    fn system(text: &'a str) -> Self {
        Self { role: None, parts: vec![Part { text }] }
    }
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: GoogleMaps,
}

#[derive(Serialize)]
struct GoogleMaps {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .join("");
        (!text.is_empty()).then_some(text)
    }

    fn into_nearby_help(self) -> NearbyHelp {
        let text = self.text().unwrap_or_default();
        let places = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.grounding_metadata)
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .map(|chunk| Place { title: chunk.maps.title, uri: chunk.maps.uri })
            .collect();
        NearbyHelp { text, places }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    /// Only Maps chunks are of interest, the rest is skipped.
    #[serde_as(as = "serde_with::VecSkipError<_>")]
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    maps: MapsChunk,
}

#[derive(Deserialize)]
struct MapsChunk {
    uri: String,
    title: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn api(base_url: &str) -> Result<Api> {
        let models = Models::builder()
            .chat("thorough-model")
            .fast_chat("fast-model")
            .nearby_help("maps-model")
            .build();
        Api::try_new(Url::parse(base_url)?, "test".to_string(), models, None)
    }

    #[test]
    fn thorough_chat_request_ok() -> Result {
        let api = api(DEFAULT_BASE_URL)?;
        let prompt = prompt("No data available yet.", "Hello?");
        let (model, request) = api.chat_request(Mode::Thorough, &prompt);
        assert_eq!(model, "thorough-model");
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "Context: No data available yet.\n\nUser Question: Hello?"}],
                }],
                "systemInstruction": {"parts": [{"text": CHAT_INSTRUCTION}]},
            }),
        );
        Ok(())
    }

    #[test]
    fn fast_chat_request_ok() -> Result {
        let api = api(DEFAULT_BASE_URL)?;
        let (model, request) = api.chat_request(Mode::Fast, "Hello?");
        assert_eq!(model, "fast-model");
        assert_eq!(
            serde_json::to_value(&request)?["systemInstruction"],
            json!({"parts": [{"text": FAST_CHAT_INSTRUCTION}]}),
        );
        Ok(())
    }

    #[test]
    fn nearby_help_request_ok() -> Result {
        let request = Api::nearby_help_request(Coordinates::try_new(-1.5, 36.75)?);
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "contents": [{"role": "user", "parts": [{"text": NEARBY_HELP_PROMPT}]}],
                "tools": [{"googleMaps": {}}],
                "toolConfig": {"retrievalConfig": {"latLng": {"latitude": -1.5, "longitude": 36.75}}},
            }),
        );
        Ok(())
    }

    #[test]
    fn text_response_ok() -> Result {
        // language=json
        let body = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Switch off the TV "}, {"text": "and keep the lights on."}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 42}
        }"#;
        let response = serde_json::from_str::<GenerateContentResponse>(body)?;
        assert_eq!(response.text().as_deref(), Some("Switch off the TV and keep the lights on."));
        Ok(())
    }

    #[test]
    fn blocked_response_has_no_text() -> Result {
        // language=json
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert_eq!(serde_json::from_str::<GenerateContentResponse>(body)?.text(), None);
        Ok(())
    }

    #[test]
    fn grounded_response_ok() -> Result {
        // language=json
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Here are two shops nearby."}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"maps": {"uri": "https://maps.google.com/?cid=1", "title": "Sunny Solar"}},
                        {"web": {"uri": "https://example.com", "title": "Not a place"}},
                        {"maps": {"uri": "https://maps.google.com/?cid=2", "title": "Battery Doctor"}}
                    ]
                }
            }]
        }"#;
        let help = serde_json::from_str::<GenerateContentResponse>(body)?.into_nearby_help();
        assert_eq!(help.text, "Here are two shops nearby.");
        assert_eq!(
            help.places,
            [
                Place { title: "Sunny Solar".into(), uri: "https://maps.google.com/?cid=1".into() },
                Place {
                    title: "Battery Doctor".into(),
                    uri: "https://maps.google.com/?cid=2".into(),
                },
            ],
        );
        Ok(())
    }

    #[test]
    fn generate_content_url_ok() -> Result {
        let expected =
            "https://generativelanguage.googleapis.com/v1beta/models/fast-model:generateContent";
        for base_url in [DEFAULT_BASE_URL, "https://generativelanguage.googleapis.com/v1beta"] {
            assert_eq!(api(base_url)?.generate_content_url("fast-model")?.as_str(), expected);
        }
        Ok(())
    }
}
