pub mod contact;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api", get(contact::root))
        .route("/api/", get(contact::root))
        .route("/api/contact", get(contact::list).post(contact::submit))
}
