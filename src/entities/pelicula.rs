use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pelicula")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pelicula_id: i32,
    pub titulo: String,
    pub subtitulada: bool,
    pub estreno: bool,
    pub genero_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::genero::Entity",
        from = "Column::GeneroId",
        to = "super::genero::Column::GeneroId"
    )]
    Genero,
    #[sea_orm(has_many = "super::pelicula_actor::Entity")]
    PeliculaActor,
}

impl Related<super::genero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genero.def()
    }
}

impl Related<super::pelicula_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeliculaActor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
