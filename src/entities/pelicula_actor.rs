use sea_orm::entity::prelude::*;

/// Link row between a movie and one of its actors.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pelicula_actor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pelicula_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub actor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pelicula::Entity",
        from = "Column::PeliculaId",
        to = "super::pelicula::Column::PeliculaId",
        on_delete = "Cascade"
    )]
    Pelicula,
    #[sea_orm(
        belongs_to = "super::actor::Entity",
        from = "Column::ActorId",
        to = "super::actor::Column::ActorId",
        on_delete = "Cascade"
    )]
    Actor,
}

impl Related<super::pelicula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pelicula.def()
    }
}

impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
