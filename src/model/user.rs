//! Input types and DTOs for user accounts and favorites.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::db::{FavoriteModel, UserModel};

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// User account response shape. The password is never serialized back out.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created: user.created,
            edited: user.edited,
        }
    }
}

/// Payload for creating a favorite; exactly one target id must be set.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct NewFavorite {
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub created: NaiveDateTime,
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            planet_id: favorite.planet_id,
            vehicle_id: favorite.vehicle_id,
            created: favorite.created,
        }
    }
}
