use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::Model))
                    .col(string(Vehicle::VehicleClass))
                    .col(string_null(Vehicle::Manufacturer))
                    .col(double_null(Vehicle::LengthM))
                    .col(big_integer_null(Vehicle::CostInCredits))
                    .col(string_null(Vehicle::Crew))
                    .col(string_null(Vehicle::Passengers))
                    .col(integer_null(Vehicle::MaxAtmospheringSpeed))
                    .col(big_integer_null(Vehicle::CargoCapacity))
                    .col(string_null(Vehicle::Consumables))
                    .col(string_null(Vehicle::Url))
                    .col(timestamp(Vehicle::Created))
                    .col(timestamp(Vehicle::Edited))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Manufacturer,
    LengthM,
    CostInCredits,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
    Url,
    Created,
    Edited,
}
