mod config;
mod db;
mod entities;
mod error;
mod models;
mod repository;
mod routes;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    repository::{ActorRepository, GenreRepository, MovieRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub actors: ActorRepository,
    pub genres: GenreRepository,
    pub movies: MovieRepository,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            actors: ActorRepository::new(db.clone()),
            genres: GenreRepository::new(db.clone()),
            movies: MovieRepository::new(db),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,videorent=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url, config.db_max_connections).await?;
    let state = Arc::new(AppState::new(db));

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
