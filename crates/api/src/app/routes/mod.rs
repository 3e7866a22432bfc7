use axum::{Router, routing::get};

pub mod cards;
pub mod files;
pub mod items;
pub mod keyboards;
pub mod models;
pub mod offers;
pub mod system;
pub mod tracks;
pub mod unicorns;
pub mod users;
pub mod vehicles;

/// Router for every demo endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/headers/echo", get(system::echo_headers))
        .nest("/cards", cards::router())
        .nest("/models", models::router())
        .nest("/keyboards", keyboards::router())
        .nest("/vehicles", vehicles::router())
        .nest("/unicorns", unicorns::router())
        .nest("/tracks", tracks::router())
        .merge(items::router())
        .merge(offers::router())
        .merge(users::router())
        .merge(files::router())
}
