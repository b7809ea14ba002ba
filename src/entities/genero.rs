use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genero")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub genero_id: i32,
    pub nombre_genero: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pelicula::Entity")]
    Pelicula,
}

impl Related<super::pelicula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pelicula.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
