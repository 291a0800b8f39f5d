use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000002_film::Film, m20260830_000004_specie::Specie};

static FK_FILM_SPECIE_FILM_ID: &str = "fk_film_specie_film_id";
static FK_FILM_SPECIE_SPECIE_ID: &str = "fk_film_specie_specie_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmSpecie::Table)
                    .if_not_exists()
                    .col(integer(FilmSpecie::FilmId))
                    .col(integer(FilmSpecie::SpecieId))
                    .primary_key(
                        Index::create()
                            .col(FilmSpecie::FilmId)
                            .col(FilmSpecie::SpecieId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_SPECIE_FILM_ID)
                    .from_tbl(FilmSpecie::Table)
                    .from_col(FilmSpecie::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_SPECIE_SPECIE_ID)
                    .from_tbl(FilmSpecie::Table)
                    .from_col(FilmSpecie::SpecieId)
                    .to_tbl(Specie::Table)
                    .to_col(Specie::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_FILM_SPECIE_SPECIE_ID, FK_FILM_SPECIE_FILM_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(FilmSpecie::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(FilmSpecie::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmSpecie {
    Table,
    FilmId,
    SpecieId,
}
