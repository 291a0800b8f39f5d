mod user;

use holocron_test_utils::prelude::*;

use crate::{
    data::user::{
        favorite::{FavoriteRepository, FavoriteTarget},
        user::UserRepository,
    },
    error::Error,
    model::user::{NewFavorite, NewUser, UserUpdate},
};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "hunter2".to_string(),
        email: Some(format!("{username}@tatooine.example")),
    }
}
