use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub published: bool,
}

#[derive(Deserialize)]
pub struct CreateCourse {
    pub title: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Clone)]
struct AppState {
    db: Arc<RwLock<HashMap<Uuid, Course>>>,
    token: String,
}

/// Error responses carry a JSON body with an `error` field, matching the
/// shape the real backend produces.
type ApiRejection = (StatusCode, Json<serde_json::Value>);

pub fn app(token: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(HashMap::new())),
        token: token.to_string(),
    };
    Router::new()
        .route("/api/courses", get(list_courses).post(create_course))
        .route("/api/courses/{id}", get(get_course))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

fn reject(status: StatusCode, message: &str) -> ApiRejection {
    (status, Json(json!({ "error": message })))
}

/// Every course route requires `Authorization: Bearer <token>`.
fn check_auth(state: &AppState, headers: &HeaderMap) -> Result<(), ApiRejection> {
    let expected = format!("Bearer {}", state.token);
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        Some(_) => Err(reject(StatusCode::UNAUTHORIZED, "invalid token")),
        None => Err(reject(StatusCode::UNAUTHORIZED, "missing authorization header")),
    }
}

async fn list_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Course>>, ApiRejection> {
    check_auth(&state, &headers)?;
    let courses = state.db.read().await;
    Ok(Json(courses.values().cloned().collect()))
}

async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateCourse>,
) -> Result<(StatusCode, Json<Course>), ApiRejection> {
    check_auth(&state, &headers)?;
    let course = Course {
        id: Uuid::new_v4(),
        title: input.title,
        published: input.published,
    };
    state.db.write().await.insert(course.id, course.clone());
    Ok((StatusCode::CREATED, Json(course)))
}

async fn get_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, ApiRejection> {
    check_auth(&state, &headers)?;
    let courses = state.db.read().await;
    courses
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "not found"))
}
