use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DeleteResult, EntityTrait, ModelTrait,
    PaginatorTrait, QueryOrder,
};

use crate::{
    error::Error,
    model::{
        catalog::{CharacterUpdate, NewCharacter},
        db::{CharacterModel, FilmModel, SpecieModel},
    },
};

/// Repository for characters and the character-specie edge.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a character. A dangling `homeworld_id` surfaces as
    /// [`Error::Conflict`].
    pub async fn create(&self, new: NewCharacter) -> Result<CharacterModel, Error> {
        let now = Utc::now().naive_utc();
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(new.name),
            birth_year: ActiveValue::Set(new.birth_year),
            eye_color: ActiveValue::Set(new.eye_color),
            gender: ActiveValue::Set(new.gender),
            hair_color: ActiveValue::Set(new.hair_color),
            height: ActiveValue::Set(new.height),
            mass: ActiveValue::Set(new.mass),
            skin_color: ActiveValue::Set(new.skin_color),
            homeworld_id: ActiveValue::Set(new.homeworld_id),
            url: ActiveValue::Set(new.url),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(character.insert(self.db).await?)
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<CharacterModel>, Error> {
        Ok(entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?)
    }

    /// Returns one page of characters (1-based page) plus the total row count.
    pub async fn list(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<CharacterModel>, u64), Error> {
        let paginator = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let characters = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((characters, total))
    }

    /// Applies the set fields of `changes` and refreshes `edited`.
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterUpdate,
    ) -> Result<CharacterModel, Error> {
        let character = self
            .get(character_id)
            .await?
            .ok_or(Error::NotFound("character"))?;
        let mut character: entity::character::ActiveModel = character.into();

        if let Some(name) = changes.name {
            character.name = ActiveValue::Set(name);
        }
        if let Some(birth_year) = changes.birth_year {
            character.birth_year = ActiveValue::Set(Some(birth_year));
        }
        if let Some(eye_color) = changes.eye_color {
            character.eye_color = ActiveValue::Set(Some(eye_color));
        }
        if let Some(gender) = changes.gender {
            character.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(hair_color) = changes.hair_color {
            character.hair_color = ActiveValue::Set(Some(hair_color));
        }
        if let Some(height) = changes.height {
            character.height = ActiveValue::Set(Some(height));
        }
        if let Some(mass) = changes.mass {
            character.mass = ActiveValue::Set(Some(mass));
        }
        if let Some(skin_color) = changes.skin_color {
            character.skin_color = ActiveValue::Set(Some(skin_color));
        }
        if let Some(homeworld_id) = changes.homeworld_id {
            character.homeworld_id = ActiveValue::Set(Some(homeworld_id));
        }
        if let Some(url) = changes.url {
            character.url = ActiveValue::Set(Some(url));
        }
        character.edited = ActiveValue::Set(Utc::now().naive_utc());

        Ok(character.update(self.db).await?)
    }

    /// Deletes a character. Its favorites and association edges cascade.
    ///
    /// Returns OK regardless of the character existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, Error> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
            .map_err(Error::on_delete)
    }

    /// Inserts a character-specie edge. A duplicate edge or a dangling id
    /// surfaces as [`Error::Conflict`].
    pub async fn add_specie(&self, character_id: i32, specie_id: i32) -> Result<(), Error> {
        let edge = entity::character_specie::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            specie_id: ActiveValue::Set(specie_id),
        };
        edge.insert(self.db).await?;

        Ok(())
    }

    /// Removes a character-specie edge. Removing an edge that does not exist
    /// is a no-op; check [`DeleteResult::rows_affected`].
    pub async fn remove_specie(
        &self,
        character_id: i32,
        specie_id: i32,
    ) -> Result<DeleteResult, Error> {
        Ok(
            entity::prelude::CharacterSpecie::delete_by_id((character_id, specie_id))
                .exec(self.db)
                .await?,
        )
    }

    pub async fn species(&self, character_id: i32) -> Result<Vec<SpecieModel>, Error> {
        let character = self
            .get(character_id)
            .await?
            .ok_or(Error::NotFound("character"))?;

        Ok(character
            .find_related(entity::prelude::Specie)
            .all(self.db)
            .await?)
    }

    pub async fn films(&self, character_id: i32) -> Result<Vec<FilmModel>, Error> {
        let character = self
            .get(character_id)
            .await?
            .ok_or(Error::NotFound("character"))?;

        Ok(character
            .find_related(entity::prelude::Film)
            .all(self.db)
            .await?)
    }
}
