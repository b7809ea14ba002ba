use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::ActorId))
                    .col(string(Actor::NombreActor))
                    .col(string(Actor::ApellidosActor))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genero::Table)
                    .if_not_exists()
                    .col(pk_auto(Genero::GeneroId))
                    .col(string(Genero::NombreGenero))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Genero::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    ActorId,
    NombreActor,
    ApellidosActor,
}

#[derive(DeriveIden)]
enum Genero {
    Table,
    GeneroId,
    NombreGenero,
}
