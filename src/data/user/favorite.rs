use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::Error,
    model::{db::FavoriteModel, user::NewFavorite},
};

/// The single catalog row a favorite points at.
///
/// The favorite table keeps three nullable foreign keys; constructing one of
/// these variants is the only way to create a favorite, which is what makes
/// "exactly one target" hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
    Vehicle(i32),
}

impl FavoriteTarget {
    /// Validates an API payload into a target, rejecting zero or multiple
    /// set ids.
    pub fn try_from_new(new: &NewFavorite) -> Result<Self, Error> {
        match (new.character_id, new.planet_id, new.vehicle_id) {
            (Some(id), None, None) => Ok(Self::Character(id)),
            (None, Some(id), None) => Ok(Self::Planet(id)),
            (None, None, Some(id)) => Ok(Self::Vehicle(id)),
            _ => Err(Error::Conflict(
                "a favorite must reference exactly one of character_id, planet_id, or vehicle_id"
                    .to_string(),
            )),
        }
    }
}

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a favorite linking `user_id` to one catalog row. A dangling
    /// user or target id surfaces as [`Error::Conflict`].
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, Error> {
        let mut favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match target {
            FavoriteTarget::Character(id) => {
                favorite.character_id = ActiveValue::Set(Some(id));
            }
            FavoriteTarget::Planet(id) => {
                favorite.planet_id = ActiveValue::Set(Some(id));
            }
            FavoriteTarget::Vehicle(id) => {
                favorite.vehicle_id = ActiveValue::Set(Some(id));
            }
        }

        Ok(favorite.insert(self.db).await?)
    }

    pub async fn get(&self, favorite_id: i32) -> Result<Option<FavoriteModel>, Error> {
        Ok(entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await?)
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<FavoriteModel>, Error> {
        Ok(entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Deletes one of a user's favorites. The user filter keeps one user
    /// from deleting another's favorite by id.
    ///
    /// Returns OK regardless of the favorite existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, favorite_id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::Id.eq(favorite_id))
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?)
    }
}
