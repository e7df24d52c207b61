pub mod history;
pub mod voice;

use std::time::Duration;

use bytes::Bytes;
use reqwest::{header, Client, Method, RequestBuilder, Response, Url};
use serde_json::Value;

use crate::error::AppError;

use history::HistoryResponse;

pub use history::{filter_by_voice, paginate};
pub use voice::{TextToSpeechRequest, VoiceSettings, VoiceSettingsInput};

const API_KEY_HEADER: &str = "xi-api-key";
const AUDIO_MPEG: &str = "audio/mpeg";
const APPLICATION_JSON: &str = "application/json";

/// Forwards single calls to the ElevenLabs API on behalf of a resolved profile.
///
/// Every method takes the profile's API key; the client itself holds no
/// credentials and is shared by all requests.
pub struct ElevenLabsClient {
    http: Client,
    api_base: Url,
}

impl ElevenLabsClient {
    pub fn new(api_base: Url, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self { http, api_base })
    }

    /// `GET /user/subscription`, relayed as raw JSON.
    pub async fn subscription(&self, api_key: &str) -> Result<Value, AppError> {
        let response = self
            .request(Method::GET, &["user", "subscription"], api_key)
            .header(header::ACCEPT, APPLICATION_JSON)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Failed to fetch subscription info: {}",
                response.status().as_u16()
            )));
        }

        Ok(response.json().await?)
    }

    /// `GET /history`, always asking for the first `UPSTREAM_PAGE_SIZE` items.
    pub async fn history(&self, api_key: &str) -> Result<Vec<Value>, AppError> {
        let response = self
            .request(Method::GET, &["history"], api_key)
            .query(&[("page_size", history::UPSTREAM_PAGE_SIZE)])
            .header(header::ACCEPT, APPLICATION_JSON)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Failed to fetch history: {}",
                response.status().as_u16()
            )));
        }

        let body: HistoryResponse = response.json().await?;
        Ok(body.history)
    }

    /// `POST /text-to-speech/{voice_id}`, returning MP3 bytes.
    pub async fn text_to_speech(
        &self,
        api_key: &str,
        voice_id: &str,
        body: &TextToSpeechRequest,
    ) -> Result<Bytes, AppError> {
        let response = self
            .request(Method::POST, &["text-to-speech", voice_id], api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = error_detail(response).await;
            tracing::warn!("Text-to-speech rejected with {}: {:?}", status, detail);
            return Err(AppError::Upstream(
                detail.unwrap_or_else(|| "Failed to generate voice".to_string()),
            ));
        }

        Ok(response.bytes().await?)
    }

    /// `GET /history/{history_item_id}/audio`, returning MP3 bytes.
    pub async fn history_audio(
        &self,
        api_key: &str,
        history_item_id: &str,
    ) -> Result<Bytes, AppError> {
        let response = self
            .request(Method::GET, &["history", history_item_id, "audio"], api_key)
            .header(header::ACCEPT, AUDIO_MPEG)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Failed to fetch history audio: {}",
                response.status().as_u16()
            )));
        }

        Ok(response.bytes().await?)
    }

    fn request(&self, method: Method, segments: &[&str], api_key: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(segments))
            .header(API_KEY_HEADER, api_key)
    }

    /// Append percent-encoded path segments to the API base.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        // api_base is checked to be a base URL when the config is loaded
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Human-readable message from an upstream error body.
///
/// ElevenLabs reports errors as `{"detail": "..."}` or
/// `{"detail": {"status": "...", "message": "..."}}`.
async fn error_detail(response: Response) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    match body.get("detail")? {
        Value::String(message) => Some(message.clone()),
        Value::Object(detail) => detail
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
