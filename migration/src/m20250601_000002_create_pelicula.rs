use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pelicula::Table)
                    .if_not_exists()
                    .col(pk_auto(Pelicula::PeliculaId))
                    .col(string(Pelicula::Titulo))
                    .col(boolean(Pelicula::Subtitulada))
                    .col(boolean(Pelicula::Estreno))
                    .col(integer(Pelicula::GeneroId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pelicula_genero")
                            .from(Pelicula::Table, Pelicula::GeneroId)
                            .to(Genero::Table, Genero::GeneroId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pelicula_titulo")
                    .table(Pelicula::Table)
                    .col(Pelicula::Titulo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PeliculaActor::Table)
                    .if_not_exists()
                    .col(integer(PeliculaActor::PeliculaId))
                    .col(integer(PeliculaActor::ActorId))
                    .primary_key(
                        Index::create().col(PeliculaActor::PeliculaId).col(PeliculaActor::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pelicula_actor_pelicula")
                            .from(PeliculaActor::Table, PeliculaActor::PeliculaId)
                            .to(Pelicula::Table, Pelicula::PeliculaId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pelicula_actor_actor")
                            .from(PeliculaActor::Table, PeliculaActor::ActorId)
                            .to(Actor::Table, Actor::ActorId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pelicula_actor_actor")
                    .table(PeliculaActor::Table)
                    .col(PeliculaActor::ActorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PeliculaActor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Pelicula::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Pelicula {
    Table,
    PeliculaId,
    Titulo,
    Subtitulada,
    Estreno,
    GeneroId,
}

#[derive(DeriveIden)]
enum PeliculaActor {
    Table,
    PeliculaId,
    ActorId,
}

#[derive(DeriveIden)]
enum Genero {
    Table,
    GeneroId,
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    ActorId,
}
