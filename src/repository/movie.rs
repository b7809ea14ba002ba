use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};
use tracing::{debug, warn};

use crate::{
    entities::{actor, genero, pelicula, pelicula_actor},
    error::{AppError, AppResult},
    models::{Movie, MovieRow, group_movie_rows},
};

#[derive(Clone)]
pub struct MovieRepository {
    db: DatabaseConnection,
}

impl MovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the movie header and one link row per actor in a single transaction.
    ///
    /// Any failure rolls back the whole unit, header included, and the backend
    /// error is returned as is. Repeated actor ids are linked once. On success the
    /// movie is read back, so genre and cast carry their stored names.
    pub async fn create(&self, mut movie: Movie) -> AppResult<Movie> {
        if movie.actors.is_empty() {
            return Err(AppError::validation("a movie needs at least one actor"));
        }

        let mut seen = HashSet::new();
        movie.actors.retain(|a| seen.insert(a.actor_id));

        let txn = self.db.begin().await?;

        match insert_with_cast(&txn, &movie).await {
            Ok(movie_id) => {
                txn.commit().await?;
                debug!(movie_id, actors = movie.actors.len(), "movie created");
                let stored = self.find_by_id(movie_id).await?;
                Ok(stored.unwrap_or(Movie { movie_id, ..movie }))
            },
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                warn!(title = %movie.title, error = %err, "movie insert rolled back");
                Err(err.into())
            },
        }
    }

    /// Movies whose title contains `title`, each with its genre and full cast.
    ///
    /// The query inner-joins the link table, so a movie without actors never shows up.
    pub async fn find_by_title(&self, title: &str) -> AppResult<Vec<Movie>> {
        let rows = joined_rows()
            .filter(pelicula::Column::Titulo.contains(title))
            .into_model::<MovieRow>()
            .all(&self.db)
            .await?;

        debug!(title, rows = rows.len(), "movie search");
        Ok(group_movie_rows(rows))
    }

    pub async fn find_by_id(&self, movie_id: i32) -> AppResult<Option<Movie>> {
        let rows = joined_rows()
            .filter(pelicula::Column::PeliculaId.eq(movie_id))
            .into_model::<MovieRow>()
            .all(&self.db)
            .await?;

        Ok(group_movie_rows(rows).into_iter().next())
    }
}

/// Movie x genre x cast, one row per linked actor.
fn joined_rows() -> Select<pelicula::Entity> {
    pelicula::Entity::find()
        .select_only()
        .column(pelicula::Column::PeliculaId)
        .column(pelicula::Column::Titulo)
        .column(pelicula::Column::Subtitulada)
        .column(pelicula::Column::Estreno)
        .column_as(genero::Column::GeneroId, "genero_id")
        .column(genero::Column::NombreGenero)
        .column_as(actor::Column::ActorId, "actor_id")
        .column(actor::Column::NombreActor)
        .column(actor::Column::ApellidosActor)
        .join(JoinType::InnerJoin, pelicula::Relation::Genero.def())
        .join(JoinType::InnerJoin, pelicula::Relation::PeliculaActor.def())
        .join(JoinType::InnerJoin, pelicula_actor::Relation::Actor.def())
        .order_by_asc(pelicula::Column::PeliculaId)
}

async fn insert_with_cast(txn: &DatabaseTransaction, movie: &Movie) -> Result<i32, DbErr> {
    let header = pelicula::ActiveModel {
        pelicula_id: Default::default(),
        titulo: Set(movie.title.clone()),
        subtitulada: Set(movie.subtitled),
        estreno: Set(movie.released),
        genero_id: Set(movie.genre.genre_id),
    };
    let movie_id = pelicula::Entity::insert(header).exec(txn).await?.last_insert_id;

    for actor in &movie.actors {
        let link = pelicula_actor::ActiveModel {
            pelicula_id: Set(movie_id),
            actor_id: Set(actor.actor_id),
        };
        pelicula_actor::Entity::insert(link).exec_without_returning(txn).await?;
    }

    Ok(movie_id)
}
