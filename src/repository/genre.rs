use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use tracing::debug;

use crate::{entities::genero, error::AppResult, models::Genre};

#[derive(Clone)]
pub struct GenreRepository {
    db: DatabaseConnection,
}

impl GenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, genre: Genre) -> AppResult<Genre> {
        let model =
            genero::ActiveModel { genero_id: Default::default(), nombre_genero: Set(genre.name) };
        let saved = model.insert(&self.db).await?;
        debug!(genre_id = saved.genero_id, "genre created");
        Ok(saved.into())
    }

    pub async fn find_by_id(&self, genre_id: i32) -> AppResult<Option<Genre>> {
        Ok(genero::Entity::find_by_id(genre_id).one(&self.db).await?.map(Genre::from))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Genre>> {
        let rows =
            genero::Entity::find().order_by_asc(genero::Column::GeneroId).all(&self.db).await?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    pub async fn update(&self, genre: &Genre) -> AppResult<bool> {
        let res = genero::Entity::update_many()
            .col_expr(genero::Column::NombreGenero, Expr::value(genre.name.clone()))
            .filter(genero::Column::GeneroId.eq(genre.genre_id))
            .exec(&self.db)
            .await?;
        debug!(genre_id = genre.genre_id, rows = res.rows_affected, "genre update");
        Ok(res.rows_affected > 0)
    }

    pub async fn delete(&self, genre_id: i32) -> AppResult<bool> {
        let res = genero::Entity::delete_by_id(genre_id).exec(&self.db).await?;
        debug!(genre_id, rows = res.rows_affected, "genre delete");
        Ok(res.rows_affected > 0)
    }
}
