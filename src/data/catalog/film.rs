use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DeleteResult, EntityTrait, ModelTrait,
    PaginatorTrait, QueryOrder,
};

use crate::{
    error::Error,
    model::{
        catalog::{FilmUpdate, NewFilm},
        db::{CharacterModel, FilmModel, PlanetModel, SpecieModel},
    },
};

/// Repository for films and the three many-to-many edges films own
/// (characters, planets, species).
pub struct FilmRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilmRepository<'a> {
    /// Creates a new instance of [`FilmRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewFilm) -> Result<FilmModel, Error> {
        let now = Utc::now().naive_utc();
        let film = entity::film::ActiveModel {
            title: ActiveValue::Set(new.title),
            director: ActiveValue::Set(new.director),
            producer: ActiveValue::Set(new.producer),
            episode_id: ActiveValue::Set(new.episode_id),
            opening_crawl: ActiveValue::Set(new.opening_crawl),
            release_date: ActiveValue::Set(new.release_date),
            url: ActiveValue::Set(new.url),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(film.insert(self.db).await?)
    }

    pub async fn get(&self, film_id: i32) -> Result<Option<FilmModel>, Error> {
        Ok(entity::prelude::Film::find_by_id(film_id)
            .one(self.db)
            .await?)
    }

    /// Returns one page of films (1-based page) plus the total row count.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<(Vec<FilmModel>, u64), Error> {
        let paginator = entity::prelude::Film::find()
            .order_by_asc(entity::film::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let films = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((films, total))
    }

    /// Applies the set fields of `changes` and refreshes `edited`.
    pub async fn update(&self, film_id: i32, changes: FilmUpdate) -> Result<FilmModel, Error> {
        let film = self.get(film_id).await?.ok_or(Error::NotFound("film"))?;
        let mut film: entity::film::ActiveModel = film.into();

        if let Some(title) = changes.title {
            film.title = ActiveValue::Set(title);
        }
        if let Some(director) = changes.director {
            film.director = ActiveValue::Set(Some(director));
        }
        if let Some(producer) = changes.producer {
            film.producer = ActiveValue::Set(Some(producer));
        }
        if let Some(episode_id) = changes.episode_id {
            film.episode_id = ActiveValue::Set(Some(episode_id));
        }
        if let Some(opening_crawl) = changes.opening_crawl {
            film.opening_crawl = ActiveValue::Set(Some(opening_crawl));
        }
        if let Some(release_date) = changes.release_date {
            film.release_date = ActiveValue::Set(Some(release_date));
        }
        if let Some(url) = changes.url {
            film.url = ActiveValue::Set(Some(url));
        }
        film.edited = ActiveValue::Set(Utc::now().naive_utc());

        Ok(film.update(self.db).await?)
    }

    /// Deletes a film. Its association edges and favorites cascade.
    ///
    /// Returns OK regardless of the film existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, film_id: i32) -> Result<DeleteResult, Error> {
        entity::prelude::Film::delete_by_id(film_id)
            .exec(self.db)
            .await
            .map_err(Error::on_delete)
    }

    /// Inserts a film-character edge. A duplicate edge or a dangling id
    /// surfaces as [`Error::Conflict`].
    pub async fn add_character(&self, film_id: i32, character_id: i32) -> Result<(), Error> {
        let edge = entity::film_character::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            character_id: ActiveValue::Set(character_id),
        };
        edge.insert(self.db).await?;

        Ok(())
    }

    /// Removes a film-character edge. Removing an edge that does not exist
    /// is a no-op; check [`DeleteResult::rows_affected`].
    pub async fn remove_character(
        &self,
        film_id: i32,
        character_id: i32,
    ) -> Result<DeleteResult, Error> {
        Ok(
            entity::prelude::FilmCharacter::delete_by_id((film_id, character_id))
                .exec(self.db)
                .await?,
        )
    }

    pub async fn characters(&self, film_id: i32) -> Result<Vec<CharacterModel>, Error> {
        let film = self.get(film_id).await?.ok_or(Error::NotFound("film"))?;

        Ok(film
            .find_related(entity::prelude::Character)
            .all(self.db)
            .await?)
    }

    /// Inserts a film-planet edge. A duplicate edge or a dangling id
    /// surfaces as [`Error::Conflict`].
    pub async fn add_planet(&self, film_id: i32, planet_id: i32) -> Result<(), Error> {
        let edge = entity::film_planet::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            planet_id: ActiveValue::Set(planet_id),
        };
        edge.insert(self.db).await?;

        Ok(())
    }

    /// Removes a film-planet edge. Removing an edge that does not exist is a
    /// no-op; check [`DeleteResult::rows_affected`].
    pub async fn remove_planet(&self, film_id: i32, planet_id: i32) -> Result<DeleteResult, Error> {
        Ok(
            entity::prelude::FilmPlanet::delete_by_id((film_id, planet_id))
                .exec(self.db)
                .await?,
        )
    }

    pub async fn planets(&self, film_id: i32) -> Result<Vec<PlanetModel>, Error> {
        let film = self.get(film_id).await?.ok_or(Error::NotFound("film"))?;

        Ok(film
            .find_related(entity::prelude::Planet)
            .all(self.db)
            .await?)
    }

    /// Inserts a film-specie edge. A duplicate edge or a dangling id
    /// surfaces as [`Error::Conflict`].
    pub async fn add_specie(&self, film_id: i32, specie_id: i32) -> Result<(), Error> {
        let edge = entity::film_specie::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            specie_id: ActiveValue::Set(specie_id),
        };
        edge.insert(self.db).await?;

        Ok(())
    }

    /// Removes a film-specie edge. Removing an edge that does not exist is a
    /// no-op; check [`DeleteResult::rows_affected`].
    pub async fn remove_specie(&self, film_id: i32, specie_id: i32) -> Result<DeleteResult, Error> {
        Ok(
            entity::prelude::FilmSpecie::delete_by_id((film_id, specie_id))
                .exec(self.db)
                .await?,
        )
    }

    pub async fn species(&self, film_id: i32) -> Result<Vec<SpecieModel>, Error> {
        let film = self.get(film_id).await?.ok_or(Error::NotFound("film"))?;

        Ok(film
            .find_related(entity::prelude::Specie)
            .all(self.db)
            .await?)
    }
}
