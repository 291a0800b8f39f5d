use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::Error,
    model::{
        db::UserModel,
        user::{NewUser, UserUpdate},
    },
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user. A username or email collision surfaces as
    /// [`Error::Conflict`].
    pub async fn create(&self, new: NewUser) -> Result<UserModel, Error> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(new.username),
            password: ActiveValue::Set(new.password),
            email: ActiveValue::Set(new.email),
            created: ActiveValue::Set(now),
            edited: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?)
    }

    /// Lookup used by the authentication collaborator.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, Error> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?)
    }

    /// Returns one page of users (1-based page) plus the total row count.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<(Vec<UserModel>, u64), Error> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((users, total))
    }

    /// Applies the set fields of `changes` and refreshes `edited`.
    pub async fn update(&self, user_id: i32, changes: UserUpdate) -> Result<UserModel, Error> {
        let user = self.get(user_id).await?.ok_or(Error::NotFound("user"))?;
        let mut user: entity::user::ActiveModel = user.into();

        if let Some(username) = changes.username {
            user.username = ActiveValue::Set(username);
        }
        if let Some(password) = changes.password {
            user.password = ActiveValue::Set(password);
        }
        if let Some(email) = changes.email {
            user.email = ActiveValue::Set(Some(email));
        }
        user.edited = ActiveValue::Set(Utc::now().naive_utc());

        Ok(user.update(self.db).await?)
    }

    /// Deletes a user. Their favorites cascade.
    ///
    /// Returns OK regardless of the user existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, Error> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
            .map_err(Error::on_delete)
    }
}
