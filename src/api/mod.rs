pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::elevenlabs::VoiceSettingsInput;

fn default_page_size() -> usize {
    20
}

fn default_page_index() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckBalanceRequest {
    #[serde(default)]
    pub api_key_profile_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchHistoryRequest {
    #[serde(default)]
    pub api_key_profile_key: String,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_index")]
    pub page_index: usize,
    /// Accepted for compatibility; there is no cache to bypass.
    #[serde(default)]
    pub force_refresh: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVoiceRequest {
    #[serde(default)]
    pub api_key_profile_key: String,
    #[serde(default)]
    pub voice_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub settings: VoiceSettingsInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryAudioRequest {
    #[serde(default)]
    pub api_key_profile_key: String,
    #[serde(default)]
    pub history_item_id: String,
}

/// Usage figures reported when the subscription lookup fails.
#[derive(Debug, Default, Serialize)]
pub struct CharacterUsage {
    pub limit: u64,
    pub remaining: u64,
    pub used: u64,
}

/// Placeholder balance returned instead of an error.
#[derive(Debug, Serialize)]
pub struct UnavailableBalance {
    pub character: CharacterUsage,
    pub status: &'static str,
}

impl Default for UnavailableBalance {
    fn default() -> Self {
        Self {
            character: CharacterUsage::default(),
            status: "error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
