use axum::Router;
use axum::routing::get;

use crate::handlers::{self, AppState};

/// Build the application routes. There is exactly one page, at `/`.
pub fn build_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::show_time))
}
