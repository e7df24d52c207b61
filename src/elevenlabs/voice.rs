use serde::{Deserialize, Serialize};

/// Voice settings as sent by our callers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettingsInput {
    pub stability: Option<f64>,
    pub clarity: Option<f64>,
    pub style_exaggeration: Option<f64>,
    pub speaker_boost: Option<bool>,
    pub speed: Option<f64>,
}

/// `voice_settings` in the upstream text-to-speech schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    pub speaker_boost: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

fn default_speaker_boost() -> bool {
    true
}

impl From<VoiceSettingsInput> for VoiceSettings {
    fn from(input: VoiceSettingsInput) -> Self {
        Self {
            stability: input.stability,
            similarity_boost: input.clarity,
            style: input.style_exaggeration,
            speaker_boost: input.speaker_boost.unwrap_or_else(default_speaker_boost),
            speed: input.speed,
        }
    }
}

/// Body of `POST /text-to-speech/{voice_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}
