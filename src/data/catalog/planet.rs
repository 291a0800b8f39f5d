use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DeleteResult, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::{
    error::Error,
    model::{
        catalog::{NewPlanet, PlanetUpdate},
        db::PlanetModel,
    },
};

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewPlanet) -> Result<PlanetModel, Error> {
        let now = Utc::now().naive_utc();
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(new.name),
            diameter: ActiveValue::Set(new.diameter),
            rotation_period: ActiveValue::Set(new.rotation_period),
            orbital_period: ActiveValue::Set(new.orbital_period),
            gravity: ActiveValue::Set(new.gravity),
            population: ActiveValue::Set(new.population),
            climate: ActiveValue::Set(new.climate),
            terrain: ActiveValue::Set(new.terrain),
            surface_water: ActiveValue::Set(new.surface_water),
            url: ActiveValue::Set(new.url),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(planet.insert(self.db).await?)
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<PlanetModel>, Error> {
        Ok(entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?)
    }

    /// Returns one page of planets (1-based page) plus the total row count.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<(Vec<PlanetModel>, u64), Error> {
        let paginator = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let planets = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((planets, total))
    }

    /// Applies the set fields of `changes` and refreshes `edited`.
    pub async fn update(&self, planet_id: i32, changes: PlanetUpdate) -> Result<PlanetModel, Error> {
        let planet = self
            .get(planet_id)
            .await?
            .ok_or(Error::NotFound("planet"))?;
        let mut planet: entity::planet::ActiveModel = planet.into();

        if let Some(name) = changes.name {
            planet.name = ActiveValue::Set(name);
        }
        if let Some(diameter) = changes.diameter {
            planet.diameter = ActiveValue::Set(Some(diameter));
        }
        if let Some(rotation_period) = changes.rotation_period {
            planet.rotation_period = ActiveValue::Set(Some(rotation_period));
        }
        if let Some(orbital_period) = changes.orbital_period {
            planet.orbital_period = ActiveValue::Set(Some(orbital_period));
        }
        if let Some(gravity) = changes.gravity {
            planet.gravity = ActiveValue::Set(Some(gravity));
        }
        if let Some(population) = changes.population {
            planet.population = ActiveValue::Set(Some(population));
        }
        if let Some(climate) = changes.climate {
            planet.climate = ActiveValue::Set(Some(climate));
        }
        if let Some(terrain) = changes.terrain {
            planet.terrain = ActiveValue::Set(Some(terrain));
        }
        if let Some(surface_water) = changes.surface_water {
            planet.surface_water = ActiveValue::Set(Some(surface_water));
        }
        if let Some(url) = changes.url {
            planet.url = ActiveValue::Set(Some(url));
        }
        planet.edited = ActiveValue::Set(Utc::now().naive_utc());

        Ok(planet.update(self.db).await?)
    }

    /// Deletes a planet. Characters and species pointing at it as homeworld
    /// have that reference set to NULL; its favorites and film edges cascade.
    ///
    /// Returns OK regardless of the planet existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, Error> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
            .map_err(Error::on_delete)
    }
}
