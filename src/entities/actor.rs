use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub actor_id: i32,
    pub nombre_actor: String,
    pub apellidos_actor: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pelicula_actor::Entity")]
    PeliculaActor,
}

impl Related<super::pelicula_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeliculaActor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
