use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};

use super::{body, created, positive_id};
use crate::{
    AppState,
    error::{AppError, AppResult},
    models::Actor,
};

fn validate_names(actor: &mut Actor) -> AppResult<()> {
    actor.first_name = actor.first_name.trim().to_string();
    actor.last_name = actor.last_name.trim().to_string();
    if actor.first_name.is_empty() || actor.last_name.is_empty() {
        return Err(AppError::validation("Actor's first name and last name are required."));
    }
    Ok(())
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Actor>>> {
    Ok(Json(state.actors.find_all().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Actor>> {
    let id = positive_id(path, "Actor")?;
    match state.actors.find_by_id(id).await? {
        Some(actor) => Ok(Json(actor)),
        None => Err(AppError::not_found(format!("Actor with ID {id} not found."))),
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Actor>, JsonRejection>,
) -> AppResult<Response> {
    let mut actor = body(payload)?;
    validate_names(&mut actor)?;

    let actor = state.actors.create(actor).await?;
    tracing::info!(actor_id = actor.actor_id, "actor added");
    Ok(created(format!("/api/actors/{}", actor.actor_id), actor))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Actor>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = positive_id(path, "Actor")?;
    let mut actor = body(payload)?;
    if actor.actor_id != id {
        return Err(AppError::validation("Actor ID in URL does not match Actor ID in body."));
    }
    validate_names(&mut actor)?;

    if state.actors.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found(format!("Actor with ID {id} not found.")));
    }
    if !state.actors.update(&actor).await? {
        return Err(AppError::not_found(format!("Actor with ID {id} no longer exists.")));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = positive_id(path, "Actor")?;

    if state.actors.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found(format!("Actor with ID {id} not found.")));
    }
    if !state.actors.delete(id).await? {
        return Err(AppError::not_found(format!("Actor with ID {id} no longer exists.")));
    }
    Ok(StatusCode::NO_CONTENT)
}
