use axum::{extract::State, http::StatusCode, routing::post, Router};
use tracing::error;

use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/store/save", post(save_store))
        .route("/store/load", post(load_store))
}

async fn save_store(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.persist.save().await.map_err(|e| {
        error!(error = %e, "Store save requested over API failed");
        ApiError(e)
    })?;
    Ok(StatusCode::NO_CONTENT)
}

async fn load_store(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.persist.load().await.map_err(|e| {
        error!(error = %e, "Store load requested over API failed");
        ApiError(e)
    })?;
    Ok(StatusCode::NO_CONTENT)
}
