use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DeleteResult, EntityTrait, ModelTrait,
    PaginatorTrait, QueryOrder,
};

use crate::{
    error::Error,
    model::{
        catalog::{NewVehicle, VehicleUpdate},
        db::{CharacterModel, VehicleModel},
    },
};

/// Repository for vehicles and the vehicle-pilot edge.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewVehicle) -> Result<VehicleModel, Error> {
        let now = Utc::now().naive_utc();
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(new.name),
            model: ActiveValue::Set(new.model),
            vehicle_class: ActiveValue::Set(new.vehicle_class),
            manufacturer: ActiveValue::Set(new.manufacturer),
            length_m: ActiveValue::Set(new.length_m),
            cost_in_credits: ActiveValue::Set(new.cost_in_credits),
            crew: ActiveValue::Set(new.crew),
            passengers: ActiveValue::Set(new.passengers),
            max_atmosphering_speed: ActiveValue::Set(new.max_atmosphering_speed),
            cargo_capacity: ActiveValue::Set(new.cargo_capacity),
            consumables: ActiveValue::Set(new.consumables),
            url: ActiveValue::Set(new.url),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(vehicle.insert(self.db).await?)
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, Error> {
        Ok(entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?)
    }

    /// Returns one page of vehicles (1-based page) plus the total row count.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<(Vec<VehicleModel>, u64), Error> {
        let paginator = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let vehicles = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((vehicles, total))
    }

    /// Applies the set fields of `changes` and refreshes `edited`.
    pub async fn update(
        &self,
        vehicle_id: i32,
        changes: VehicleUpdate,
    ) -> Result<VehicleModel, Error> {
        let vehicle = self
            .get(vehicle_id)
            .await?
            .ok_or(Error::NotFound("vehicle"))?;
        let mut vehicle: entity::vehicle::ActiveModel = vehicle.into();

        if let Some(name) = changes.name {
            vehicle.name = ActiveValue::Set(name);
        }
        if let Some(model) = changes.model {
            vehicle.model = ActiveValue::Set(model);
        }
        if let Some(vehicle_class) = changes.vehicle_class {
            vehicle.vehicle_class = ActiveValue::Set(vehicle_class);
        }
        if let Some(manufacturer) = changes.manufacturer {
            vehicle.manufacturer = ActiveValue::Set(Some(manufacturer));
        }
        if let Some(length_m) = changes.length_m {
            vehicle.length_m = ActiveValue::Set(Some(length_m));
        }
        if let Some(cost_in_credits) = changes.cost_in_credits {
            vehicle.cost_in_credits = ActiveValue::Set(Some(cost_in_credits));
        }
        if let Some(crew) = changes.crew {
            vehicle.crew = ActiveValue::Set(Some(crew));
        }
        if let Some(passengers) = changes.passengers {
            vehicle.passengers = ActiveValue::Set(Some(passengers));
        }
        if let Some(max_atmosphering_speed) = changes.max_atmosphering_speed {
            vehicle.max_atmosphering_speed = ActiveValue::Set(Some(max_atmosphering_speed));
        }
        if let Some(cargo_capacity) = changes.cargo_capacity {
            vehicle.cargo_capacity = ActiveValue::Set(Some(cargo_capacity));
        }
        if let Some(consumables) = changes.consumables {
            vehicle.consumables = ActiveValue::Set(Some(consumables));
        }
        if let Some(url) = changes.url {
            vehicle.url = ActiveValue::Set(Some(url));
        }
        vehicle.edited = ActiveValue::Set(Utc::now().naive_utc());

        Ok(vehicle.update(self.db).await?)
    }

    /// Deletes a vehicle. Its pilot edges and favorites cascade.
    ///
    /// Returns OK regardless of the vehicle existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, Error> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
            .map_err(Error::on_delete)
    }

    /// Inserts a vehicle-pilot edge. A duplicate edge or a dangling id
    /// surfaces as [`Error::Conflict`].
    pub async fn add_pilot(&self, vehicle_id: i32, character_id: i32) -> Result<(), Error> {
        let edge = entity::vehicle_pilot::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            character_id: ActiveValue::Set(character_id),
        };
        edge.insert(self.db).await?;

        Ok(())
    }

    /// Removes a vehicle-pilot edge. Removing an edge that does not exist is
    /// a no-op; check [`DeleteResult::rows_affected`].
    pub async fn remove_pilot(
        &self,
        vehicle_id: i32,
        character_id: i32,
    ) -> Result<DeleteResult, Error> {
        Ok(
            entity::prelude::VehiclePilot::delete_by_id((vehicle_id, character_id))
                .exec(self.db)
                .await?,
        )
    }

    pub async fn pilots(&self, vehicle_id: i32) -> Result<Vec<CharacterModel>, Error> {
        let vehicle = self
            .get(vehicle_id)
            .await?
            .ok_or(Error::NotFound("vehicle"))?;

        Ok(vehicle
            .find_related(entity::prelude::Character)
            .all(self.db)
            .await?)
    }
}
