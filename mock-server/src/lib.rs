use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

mod fixtures;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub speakers: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub twitter: Option<String>,
}

/// Read-only fixture data served by the mock.
#[derive(Debug, Default)]
pub struct Catalog {
    pub programs: HashMap<u32, Vec<Session>>,
    pub speakers: HashMap<String, Speaker>,
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(fixtures::seville_2017())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(catalog);
    Router::new()
        .route("/api/program/{id}", get(get_program))
        .route("/api/users/", get(empty_speakers))
        .route("/api/users/{ids}", get(get_speakers))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_program(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Session>>, StatusCode> {
    tracing::debug!(id, "program requested");
    db.programs.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn get_speakers(State(db): State<Db>, Path(ids): Path<String>) -> Json<Vec<Speaker>> {
    let speakers: Vec<Speaker> = ids
        .split(',')
        .filter_map(|id| db.speakers.get(id.trim()).cloned())
        .collect();
    tracing::debug!(%ids, found = speakers.len(), "speakers requested");
    Json(speakers)
}

async fn empty_speakers() -> Json<Vec<Speaker>> {
    Json(Vec::new())
}
