use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use std::sync::Arc;

use super::{
    CheckBalanceRequest, FetchHistoryRequest, GenerateVoiceRequest, HealthResponse,
    HistoryAudioRequest, UnavailableBalance,
};
use crate::api::routes::AppState;
use crate::elevenlabs::{filter_by_voice, paginate, TextToSpeechRequest, VoiceSettings};
use crate::error::AppError;

fn audio_response(audio: Bytes) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response()
}

/// Only an unknown profile is an error here. An unreadable body or any upstream
/// trouble yields a zeroed balance.
pub async fn check_balance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckBalanceRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(
                "Unreadable balance request, reporting empty balance: {}",
                rejection.body_text()
            );
            return Ok(Json(UnavailableBalance::default()).into_response());
        }
    };

    let api_key = state.api_key(&request.api_key_profile_key)?;

    match state.elevenlabs.subscription(api_key).await {
        Ok(subscription) => Ok(Json(subscription).into_response()),
        Err(e) => {
            tracing::warn!(
                "Balance check for '{}' failed, reporting empty balance: {}",
                request.api_key_profile_key,
                e
            );
            Ok(Json(UnavailableBalance::default()).into_response())
        }
    }
}

pub async fn fetch_history(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FetchHistoryRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let api_key = state.api_key(&request.api_key_profile_key)?;

    // Validate input
    if request.page_size == 0 {
        return Err(AppError::BadRequest("pageSize must be at least 1".into()));
    }

    if request.page_index == 0 {
        return Err(AppError::BadRequest(
            "pageIndex is 1-based and must be at least 1".into(),
        ));
    }

    tracing::debug!(
        "Fetching history for '{}' (force_refresh={})",
        request.api_key_profile_key,
        request.force_refresh
    );

    let items = state.elevenlabs.history(api_key).await?;
    let items = filter_by_voice(items, request.voice_id.as_deref());
    let page = paginate(items, request.page_size, request.page_index);

    Ok(Json(page).into_response())
}

pub async fn generate_voice(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateVoiceRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let api_key = state.api_key(&request.api_key_profile_key)?;

    // Validate input
    if request.voice_id.is_empty() {
        return Err(AppError::BadRequest("voiceId cannot be empty".into()));
    }

    if request.text.is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".into()));
    }

    let voice_id = request.voice_id;
    let body = TextToSpeechRequest {
        text: request.text,
        model_id: request.model_id,
        voice_settings: VoiceSettings::from(request.settings),
    };

    let audio = state
        .elevenlabs
        .text_to_speech(api_key, &voice_id, &body)
        .await?;

    Ok(audio_response(audio))
}

pub async fn history_audio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HistoryAudioRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let api_key = state.api_key(&request.api_key_profile_key)?;

    if request.history_item_id.is_empty() {
        return Err(AppError::BadRequest("historyItemId cannot be empty".into()));
    }

    let audio = state
        .elevenlabs
        .history_audio(api_key, &request.history_item_id)
        .await?;

    Ok(audio_response(audio))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
