use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000001_planet::Planet, m20260830_000002_film::Film};

static FK_FILM_PLANET_FILM_ID: &str = "fk_film_planet_film_id";
static FK_FILM_PLANET_PLANET_ID: &str = "fk_film_planet_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmPlanet::Table)
                    .if_not_exists()
                    .col(integer(FilmPlanet::FilmId))
                    .col(integer(FilmPlanet::PlanetId))
                    .primary_key(
                        Index::create()
                            .col(FilmPlanet::FilmId)
                            .col(FilmPlanet::PlanetId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_PLANET_FILM_ID)
                    .from_tbl(FilmPlanet::Table)
                    .from_col(FilmPlanet::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_PLANET_PLANET_ID)
                    .from_tbl(FilmPlanet::Table)
                    .from_col(FilmPlanet::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_FILM_PLANET_PLANET_ID, FK_FILM_PLANET_FILM_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(FilmPlanet::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(FilmPlanet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmPlanet {
    Table,
    FilmId,
    PlanetId,
}
