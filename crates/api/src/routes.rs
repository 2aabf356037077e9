use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Routes meant to be nested under `/api`. Everything except `/health`
/// passes through the API key check.
pub fn create_api_routes(state: AppState) -> Router {
    let protected = Router::new()
        .merge(handlers::records::routes())
        .merge(handlers::store::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(protected)
        .with_state(state)
}
