use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::elevenlabs::ElevenLabsClient;
use crate::error::AppError;
use crate::profiles::Profiles;

pub struct AppState {
    pub profiles: Profiles,
    pub elevenlabs: ElevenLabsClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            profiles: config.profiles.clone(),
            elevenlabs: ElevenLabsClient::new(config.api_base.clone(), config.upstream_timeout)?,
        })
    }

    /// API key for `profile_key`, or the invalid-profile error before anything goes upstream.
    pub fn api_key(&self, profile_key: &str) -> Result<&str, AppError> {
        self.profiles
            .resolve(profile_key)
            .ok_or(AppError::InvalidProfile)
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let elevenlabs_routes = Router::new()
        .route("/check-balance", post(handlers::check_balance))
        .route("/fetch-history", post(handlers::fetch_history))
        .route("/generate-voice", post(handlers::generate_voice))
        .route("/history-audio", post(handlers::history_audio));

    let api_routes = Router::new()
        .nest("/elevenlabs", elevenlabs_routes)
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
