use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000001_planet::Planet, m20260830_000003_character::Character,
    m20260830_000005_vehicle::Vehicle, m20260830_000006_user::User,
};

static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_CHARACTER_ID: &str = "fk_favorite_character_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";
static FK_FAVORITE_VEHICLE_ID: &str = "fk_favorite_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::VehicleId))
                    .col(timestamp(Favorite::Created))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_VEHICLE_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_FAVORITE_VEHICLE_ID,
            FK_FAVORITE_PLANET_ID,
            FK_FAVORITE_CHARACTER_ID,
            FK_FAVORITE_USER_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Favorite::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
    VehicleId,
    Created,
}
