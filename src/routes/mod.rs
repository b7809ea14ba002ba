use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
};

mod actors;
mod genres;
mod movies;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/actors", get(actors::list).post(actors::create))
        .route("/api/actors/{id}", get(actors::get).put(actors::update).delete(actors::delete))
        .route("/api/genero", get(genres::list).post(genres::create))
        .route("/api/genero/{id}", get(genres::get).put(genres::update).delete(genres::delete))
        .route("/api/peliculas", get(movies::search).post(movies::create))
        .route("/api/peliculas/{id}", get(movies::get))
        .with_state(state)
}

/// Resolves a `{id}` segment, rejecting anything that is not a positive integer.
fn positive_id(path: Result<Path<i32>, PathRejection>, what: &str) -> AppResult<i32> {
    match path {
        Ok(Path(id)) if id > 0 => Ok(id),
        _ => Err(AppError::validation(format!("{what} ID must be a positive integer."))),
    }
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload.map(|Json(v)| v).map_err(|rej| AppError::validation(rej.body_text()))
}

fn created<T: Serialize>(location: String, value: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(value)).into_response()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{HeaderMap, Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{AppState, db};

    pub async fn app() -> Router {
        super::router(Arc::new(AppState::new(db::memory().await)))
    }

    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        json: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match json {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value =
            if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, headers, value)
    }
}
