use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::user::{
        favorite::{FavoriteRepository, FavoriteTarget},
        user::UserRepository,
    },
    error::Error,
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        app::AppState,
        user::{FavoriteDto, NewFavorite, NewUser, UserDto, UserUpdate},
    },
};

pub static USER_TAG: &str = "user";

/// Create a user account
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(new): Json<NewUser>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let user = user_repo.create(new).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))).into_response())
}

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of users", body = PageDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let (users, total) = user_repo.list(query.page(), query.page_size()).await?;
    let page = PageDto {
        items: users.into_iter().map(UserDto::from).collect::<Vec<_>>(),
        total,
        page: query.page(),
        page_size: query.page_size(),
    };

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Get one user by id
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let user = user_repo.get(user_id).await?.ok_or(Error::NotFound("user"))?;

    Ok((StatusCode::OK, Json(UserDto::from(user))).into_response())
}

/// Update a user's set fields
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(changes): Json<UserUpdate>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let user = user_repo.update(user_id, changes).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))).into_response())
}

/// Delete a user and their favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let result = user_repo.delete(user_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("user"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Favorite a character, planet, or vehicle for a user
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    request_body = NewFavorite,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 409, description = "Payload does not name exactly one target, or an id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(new): Json<NewFavorite>,
) -> Result<impl IntoResponse, Error> {
    let favorite_repo = FavoriteRepository::new(&state.db);

    let target = FavoriteTarget::try_from_new(&new)?;
    let favorite = favorite_repo.create(user_id, target).await?;

    Ok((StatusCode::CREATED, Json(FavoriteDto::from(favorite))).into_response())
}

/// List a user's favorites
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);
    let favorite_repo = FavoriteRepository::new(&state.db);

    user_repo.get(user_id).await?.ok_or(Error::NotFound("user"))?;

    let favorites = favorite_repo.list_by_user(user_id).await?;
    let dtos: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Remove one of a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/{favorite_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User id"),
        ("favorite_id" = i32, Path, description = "Favorite id")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "Favorite not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path((user_id, favorite_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_repo = FavoriteRepository::new(&state.db);

    let result = favorite_repo.delete(user_id, favorite_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("favorite"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
