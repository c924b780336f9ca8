use axum::Router;

use crate::routes::{diagnostics, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/diagnostics", diagnostics::router())
        .with_state(state)
}
