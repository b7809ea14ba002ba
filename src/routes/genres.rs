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
    models::Genre,
};

fn validate_name(genre: &mut Genre) -> AppResult<()> {
    genre.name = genre.name.trim().to_string();
    if genre.name.is_empty() {
        return Err(AppError::validation("Genre name is required."));
    }
    Ok(())
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.genres.find_all().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Genre>> {
    let id = positive_id(path, "Genre")?;
    state
        .genres
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Genre with ID {id} not found.")))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Genre>, JsonRejection>,
) -> AppResult<Response> {
    let mut genre = body(payload)?;
    validate_name(&mut genre)?;

    let genre = state.genres.create(genre).await?;
    Ok(created(format!("/api/genero/{}", genre.genre_id), genre))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Genre>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = positive_id(path, "Genre")?;
    let mut genre = body(payload)?;
    if genre.genre_id != id {
        return Err(AppError::validation("Genre ID in URL does not match Genre ID in body."));
    }
    validate_name(&mut genre)?;

    if state.genres.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found(format!("Genre with ID {id} not found.")));
    }
    if !state.genres.update(&genre).await? {
        return Err(AppError::not_found(format!("Genre with ID {id} no longer exists.")));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = positive_id(path, "Genre")?;

    if state.genres.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found(format!("Genre with ID {id} not found.")));
    }
    if !state.genres.delete(id).await? {
        return Err(AppError::not_found(format!("Genre with ID {id} no longer exists.")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{app, send};

    #[tokio::test]
    async fn list_returns_all_genres() {
        let app = app().await;
        for name in ["Action", "Drama"] {
            let (status, _, _) =
                send(&app, "POST", "/api/genero", Some(json!({"name": name}))).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, _, body) = send(&app, "GET", "/api/genero", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> =
            body.as_array().unwrap().iter().map(|g| g["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Action", "Drama"]);
    }

    #[tokio::test]
    async fn item_routes() {
        let app = app().await;
        let (_, _, created) =
            send(&app, "POST", "/api/genero", Some(json!({"name": "Action"}))).await;
        let id = created["genreId"].as_i64().unwrap();
        let uri = format!("/api/genero/{id}");

        let (status, _, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"genreId": id, "name": "Action"}));

        let (status, _, _) =
            send(&app, "PUT", &uri, Some(json!({"genreId": id, "name": "Acción"}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = send(&app, "POST", "/api/genero", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
