use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000003_character::Character, m20260830_000005_vehicle::Vehicle};

static FK_VEHICLE_PILOT_VEHICLE_ID: &str = "fk_vehicle_pilot_vehicle_id";
static FK_VEHICLE_PILOT_CHARACTER_ID: &str = "fk_vehicle_pilot_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehiclePilot::Table)
                    .if_not_exists()
                    .col(integer(VehiclePilot::VehicleId))
                    .col(integer(VehiclePilot::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(VehiclePilot::VehicleId)
                            .col(VehiclePilot::CharacterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_PILOT_VEHICLE_ID)
                    .from_tbl(VehiclePilot::Table)
                    .from_col(VehiclePilot::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_PILOT_CHARACTER_ID)
                    .from_tbl(VehiclePilot::Table)
                    .from_col(VehiclePilot::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_VEHICLE_PILOT_CHARACTER_ID, FK_VEHICLE_PILOT_VEHICLE_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(VehiclePilot::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(VehiclePilot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VehiclePilot {
    Table,
    VehicleId,
    CharacterId,
}
