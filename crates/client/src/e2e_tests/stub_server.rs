//! Stub guide data service built on axum.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use nightreign_domain::Boss;

use crate::config::ClientConfig;
use crate::infrastructure::ApiAdapter;
use crate::test_fixtures;
use crate::Api;

#[derive(Default)]
pub struct StubService {
    /// Builds accepted through `POST /api/custom-build`
    pub submitted: Mutex<Vec<Value>>,
    /// Collection slugs that answer 500
    pub failing: Mutex<Vec<String>>,
}

impl StubService {
    pub fn fail_collection(&self, slug: &str) {
        self.failing.lock().unwrap().push(slug.to_string());
    }
}

type Shared = Arc<StubService>;

async fn collection(
    State(stub): State<Shared>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if stub.failing.lock().unwrap().contains(&slug) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut payload = test_fixtures::collection_payload(&format!("/api/{}", slug));
    if slug == "custom-builds" {
        let submitted = stub.submitted.lock().unwrap().clone();
        if let Some(list) = payload.get_mut("custom_builds").and_then(Value::as_array_mut) {
            list.extend(submitted);
        }
    }
    if payload.as_object().is_some_and(|o| o.is_empty()) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(payload))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let query = params.get("query").cloned().unwrap_or_default();
    Json(test_fixtures::search_payload(&query))
}

/// Filters on weakness only and ignores everything else, leaving the
/// difficulty check to the client.
async fn filter_bosses(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let bosses: Vec<Boss> = test_fixtures::bosses()
        .into_iter()
        .filter(|b| params.get("weakness").is_none_or(|w| b.has_weakness(w)))
        .collect();
    Json(json!({ "bosses": bosses }))
}

fn find_boss(id: &str) -> Option<Boss> {
    test_fixtures::bosses().into_iter().find(|b| b.id.as_str() == id)
}

async fn boss(Path(id): Path<String>) -> Result<Json<Boss>, (StatusCode, Json<Value>)> {
    find_boss(&id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, Json(json!({ "detail": "Boss not found" }))))
}

async fn boss_recommendations(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let boss = find_boss(&id).ok_or(StatusCode::NOT_FOUND)?;
    let characters: Vec<_> = test_fixtures::characters()
        .into_iter()
        .filter(|c| boss.recommended_team.contains(&c.name))
        .collect();
    Ok(Json(json!({
        "boss": boss,
        "recommended_characters": characters,
        "recommended_builds": [],
    })))
}

async fn create_custom_build(
    State(stub): State<Shared>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let name = body.get("name").and_then(Value::as_str).unwrap_or_default();
    if name.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let mut submitted = stub.submitted.lock().unwrap();
    let mut record = body.clone();
    record["id"] = json!(format!("custom-{}", submitted.len() + 2));
    submitted.push(record.clone());
    Ok(Json(json!({ "build": record })))
}

pub fn router(stub: Shared) -> Router {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/filter-bosses", get(filter_bosses))
        .route("/api/custom-build", post(create_custom_build))
        .route("/api/bosses/{id}", get(boss))
        .route("/api/boss-recommendations/{id}", get(boss_recommendations))
        .route("/api/{collection}", get(collection))
        .with_state(stub)
}

pub async fn spawn_stub_service() -> (SocketAddr, Shared, tokio::task::JoinHandle<()>) {
    let stub = Arc::new(StubService::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = router(stub.clone());
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (addr, stub, handle)
}

pub fn api_for(addr: SocketAddr) -> Api {
    let config = ClientConfig::new(&format!("http://{}/", addr), 5_000);
    Api::new(Arc::new(ApiAdapter::new(&config)))
}
