use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000001_planet::Planet;

static FK_CHARACTER_HOMEWORLD_ID: &str = "fk_character_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(string_null(Character::BirthYear))
                    .col(string_null(Character::EyeColor))
                    .col(string_null(Character::Gender))
                    .col(string_null(Character::HairColor))
                    .col(integer_null(Character::Height))
                    .col(integer_null(Character::Mass))
                    .col(string_null(Character::SkinColor))
                    .col(integer_null(Character::HomeworldId))
                    .col(string_null(Character::Url))
                    .col(timestamp(Character::Created))
                    .col(timestamp(Character::Edited))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_HOMEWORLD_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::HomeworldId)
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
                    .name(FK_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    EyeColor,
    Gender,
    HairColor,
    Height,
    Mass,
    SkinColor,
    HomeworldId,
    Url,
    Created,
    Edited,
}
