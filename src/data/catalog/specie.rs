use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DeleteResult, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::{
    error::Error,
    model::{
        catalog::{NewSpecie, SpecieUpdate},
        db::SpecieModel,
    },
};

pub struct SpecieRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecieRepository<'a> {
    /// Creates a new instance of [`SpecieRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a specie. A dangling `homeworld_id` surfaces as
    /// [`Error::Conflict`].
    pub async fn create(&self, new: NewSpecie) -> Result<SpecieModel, Error> {
        let now = Utc::now().naive_utc();
        let specie = entity::specie::ActiveModel {
            name: ActiveValue::Set(new.name),
            classification: ActiveValue::Set(new.classification),
            designation: ActiveValue::Set(new.designation),
            average_height: ActiveValue::Set(new.average_height),
            average_lifespan: ActiveValue::Set(new.average_lifespan),
            eye_colors: ActiveValue::Set(new.eye_colors),
            hair_colors: ActiveValue::Set(new.hair_colors),
            skin_colors: ActiveValue::Set(new.skin_colors),
            language: ActiveValue::Set(new.language),
            homeworld_id: ActiveValue::Set(new.homeworld_id),
            url: ActiveValue::Set(new.url),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(specie.insert(self.db).await?)
    }

    pub async fn get(&self, specie_id: i32) -> Result<Option<SpecieModel>, Error> {
        Ok(entity::prelude::Specie::find_by_id(specie_id)
            .one(self.db)
            .await?)
    }

    /// Returns one page of species (1-based page) plus the total row count.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<(Vec<SpecieModel>, u64), Error> {
        let paginator = entity::prelude::Specie::find()
            .order_by_asc(entity::specie::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let species = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((species, total))
    }

    /// Applies the set fields of `changes` and refreshes `edited`.
    pub async fn update(&self, specie_id: i32, changes: SpecieUpdate) -> Result<SpecieModel, Error> {
        let specie = self
            .get(specie_id)
            .await?
            .ok_or(Error::NotFound("specie"))?;
        let mut specie: entity::specie::ActiveModel = specie.into();

        if let Some(name) = changes.name {
            specie.name = ActiveValue::Set(name);
        }
        if let Some(classification) = changes.classification {
            specie.classification = ActiveValue::Set(Some(classification));
        }
        if let Some(designation) = changes.designation {
            specie.designation = ActiveValue::Set(Some(designation));
        }
        if let Some(average_height) = changes.average_height {
            specie.average_height = ActiveValue::Set(Some(average_height));
        }
        if let Some(average_lifespan) = changes.average_lifespan {
            specie.average_lifespan = ActiveValue::Set(Some(average_lifespan));
        }
        if let Some(eye_colors) = changes.eye_colors {
            specie.eye_colors = ActiveValue::Set(Some(eye_colors));
        }
        if let Some(hair_colors) = changes.hair_colors {
            specie.hair_colors = ActiveValue::Set(Some(hair_colors));
        }
        if let Some(skin_colors) = changes.skin_colors {
            specie.skin_colors = ActiveValue::Set(Some(skin_colors));
        }
        if let Some(language) = changes.language {
            specie.language = ActiveValue::Set(Some(language));
        }
        if let Some(homeworld_id) = changes.homeworld_id {
            specie.homeworld_id = ActiveValue::Set(Some(homeworld_id));
        }
        if let Some(url) = changes.url {
            specie.url = ActiveValue::Set(Some(url));
        }
        specie.edited = ActiveValue::Set(Utc::now().naive_utc());

        Ok(specie.update(self.db).await?)
    }

    /// Deletes a specie. Its association edges cascade.
    ///
    /// Returns OK regardless of the specie existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, specie_id: i32) -> Result<DeleteResult, Error> {
        entity::prelude::Specie::delete_by_id(specie_id)
            .exec(self.db)
            .await
            .map_err(Error::on_delete)
    }
}
