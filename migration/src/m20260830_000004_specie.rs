use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000001_planet::Planet;

static FK_SPECIE_HOMEWORLD_ID: &str = "fk_specie_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specie::Table)
                    .if_not_exists()
                    .col(pk_auto(Specie::Id))
                    .col(string(Specie::Name))
                    .col(string_null(Specie::Classification))
                    .col(string_null(Specie::Designation))
                    .col(integer_null(Specie::AverageHeight))
                    .col(integer_null(Specie::AverageLifespan))
                    .col(string_null(Specie::EyeColors))
                    .col(string_null(Specie::HairColors))
                    .col(string_null(Specie::SkinColors))
                    .col(string_null(Specie::Language))
                    .col(integer_null(Specie::HomeworldId))
                    .col(string_null(Specie::Url))
                    .col(timestamp(Specie::Created))
                    .col(timestamp(Specie::Edited))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIE_HOMEWORLD_ID)
                    .from_tbl(Specie::Table)
                    .from_col(Specie::HomeworldId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIE_HOMEWORLD_ID)
                    .table(Specie::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Specie::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Specie {
    Table,
    Id,
    Name,
    Classification,
    Designation,
    AverageHeight,
    AverageLifespan,
    EyeColors,
    HairColors,
    SkinColors,
    Language,
    HomeworldId,
    Url,
    Created,
    Edited,
}
