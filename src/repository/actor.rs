use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use tracing::debug;

use crate::{entities::actor, error::AppResult, models::Actor};

#[derive(Clone)]
pub struct ActorRepository {
    db: DatabaseConnection,
}

impl ActorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the actor and returns it with the id assigned by the store.
    pub async fn create(&self, actor: Actor) -> AppResult<Actor> {
        let model = actor::ActiveModel {
            actor_id: Default::default(),
            nombre_actor: Set(actor.first_name),
            apellidos_actor: Set(actor.last_name),
        };
        let saved = model.insert(&self.db).await?;
        debug!(actor_id = saved.actor_id, "actor created");
        Ok(saved.into())
    }

    pub async fn find_by_id(&self, actor_id: i32) -> AppResult<Option<Actor>> {
        let found = actor::Entity::find_by_id(actor_id).one(&self.db).await?;
        Ok(found.map(Actor::from))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Actor>> {
        let rows = actor::Entity::find().order_by_asc(actor::Column::ActorId).all(&self.db).await?;
        Ok(rows.into_iter().map(Actor::from).collect())
    }

    /// Replaces both names of the actor with `actor.actor_id`. Returns whether a row changed.
    pub async fn update(&self, actor: &Actor) -> AppResult<bool> {
        let res = actor::Entity::update_many()
            .col_expr(actor::Column::NombreActor, Expr::value(actor.first_name.clone()))
            .col_expr(actor::Column::ApellidosActor, Expr::value(actor.last_name.clone()))
            .filter(actor::Column::ActorId.eq(actor.actor_id))
            .exec(&self.db)
            .await?;
        debug!(actor_id = actor.actor_id, rows = res.rows_affected, "actor update");
        Ok(res.rows_affected > 0)
    }

    pub async fn delete(&self, actor_id: i32) -> AppResult<bool> {
        let res = actor::Entity::delete_by_id(actor_id).exec(&self.db).await?;
        debug!(actor_id, rows = res.rows_affected, "actor delete");
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn keanu() -> Actor {
        Actor { actor_id: 0, first_name: "Keanu".into(), last_name: "Reeves".into() }
    }

    #[tokio::test]
    async fn create_then_read_back() {
        let repo = ActorRepository::new(db::memory().await);

        let created = repo.create(keanu()).await.unwrap();
        assert!(created.actor_id > 0);

        let found = repo.find_by_id(created.actor_id).await.unwrap().unwrap();
        assert_eq!(found, Actor { actor_id: created.actor_id, ..keanu() });
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let repo = ActorRepository::new(db::memory().await);

        let a = repo.create(keanu()).await.unwrap();
        let b = repo.create(keanu()).await.unwrap();
        assert_ne!(a.actor_id, b.actor_id);

        let all = repo.find_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|a| a.actor_id).collect();
        assert_eq!(ids, vec![a.actor_id, b.actor_id]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = ActorRepository::new(db::memory().await);
        assert!(repo.find_by_id(42).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_names() {
        let repo = ActorRepository::new(db::memory().await);
        let created = repo.create(keanu()).await.unwrap();

        let changed = Actor { last_name: "Reeve".into(), ..created.clone() };
        assert!(repo.update(&changed).await.unwrap());
        assert_eq!(repo.find_by_id(created.actor_id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn update_missing_row_changes_nothing() {
        let repo = ActorRepository::new(db::memory().await);
        let ghost = Actor { actor_id: 99, ..keanu() };
        assert!(!repo.update(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let repo = ActorRepository::new(db::memory().await);
        let created = repo.create(keanu()).await.unwrap();
        let other = repo.create(keanu()).await.unwrap();

        assert!(repo.delete(created.actor_id).await.unwrap());
        assert!(!repo.delete(created.actor_id).await.unwrap());
        assert!(!repo.delete(1234).await.unwrap());

        assert_eq!(repo.find_all().await.unwrap(), vec![other]);
    }
}
