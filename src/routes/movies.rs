use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Response,
};
use serde::Deserialize;

use super::{body, created, positive_id};
use crate::{
    AppState,
    error::{AppError, AppResult},
    models::Movie,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    titulo: String,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Query(q) = query.map_err(|rej| AppError::validation(rej.body_text()))?;
    Ok(Json(state.movies.find_by_title(&q.titulo).await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let id = positive_id(path, "Movie")?;
    state
        .movies
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Movie with ID {id} not found.")))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Movie>, JsonRejection>,
) -> AppResult<Response> {
    let mut movie = body(payload)?;

    movie.title = movie.title.trim().to_string();
    if movie.title.is_empty() {
        return Err(AppError::validation("Movie title is required."));
    }
    if movie.genre.genre_id <= 0 {
        return Err(AppError::validation("Movie genre ID must be a positive integer."));
    }
    if movie.actors.is_empty() {
        return Err(AppError::validation("A movie needs at least one actor."));
    }
    if movie.actors.iter().any(|a| a.actor_id <= 0) {
        return Err(AppError::validation("Actor IDs must be positive integers."));
    }

    let movie = state.movies.create(movie).await?;
    tracing::info!(movie_id = movie.movie_id, title = %movie.title, "movie added");
    Ok(created(format!("/api/peliculas/{}", movie.movie_id), movie))
}
