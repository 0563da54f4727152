use std::sync::Arc;

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use game_hub::{catalog::Catalog, template::CatalogFragment};
use serde::Serialize;
use tracing::error;

pub(super) const WELCOME_MESSAGE: &str = "Welcome to the Game Hub API";

#[derive(Serialize)]
pub(super) struct Welcome {
    message: &'static str,
}

pub(super) async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE,
    })
}

pub(super) async fn get_games(State(catalog): State<Arc<Catalog>>) -> Json<Arc<Catalog>> {
    Json(catalog)
}

pub(super) async fn get_catalog(
    State(catalog): State<Arc<Catalog>>,
) -> (StatusCode, Html<String>) {
    match CatalogFragment::from(catalog.as_ref()).render() {
        Ok(v) => (StatusCode::OK, Html(v)),
        Err(e) => {
            error!("Cannot render game catalog: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Could not process request".to_owned()),
            )
        }
    }
}
