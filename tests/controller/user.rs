//! Handler tests for the user and favorite endpoints.

use holocron::controller::user::{
    create_favorite, create_user, delete_favorite, delete_user, get_user, list_favorites,
    list_users,
};
use holocron::model::{
    api::{PageDto, PageQuery},
    user::{FavoriteDto, NewFavorite, NewUser, UserDto},
};

use super::*;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "hunter2".to_string(),
        email: Some(format!("{username}@tatooine.example")),
    }
}

/// Expect 201 with the created user, and no password field in the body
#[tokio::test]
async fn create_user_returns_created_without_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = create_user(State(test.app_state::<AppState>()), Json(new_user("leia"))).await;
    let resp = result.into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["username"], "leia");
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 409 when the username is already taken
#[tokio::test]
async fn create_user_duplicate_username_returns_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    factory::insert_user(&test.db, "leia").await?;

    let mut duplicate = new_user("leia");
    duplicate.email = Some("organa@alderaan.example".to_string());
    let result = create_user(State(test.app_state::<AppState>()), Json(duplicate)).await;
    let resp = result.into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when the user does not exist
#[tokio::test]
async fn get_user_missing_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = get_user(State(test.app_state::<AppState>()), Path(42)).await;
    let resp = result.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with a page of users and the total count
#[tokio::test]
async fn list_users_returns_page() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    factory::insert_user(&test.db, "leia").await?;
    factory::insert_user(&test.db, "luke").await?;

    let result = list_users(
        State(test.app_state::<AppState>()),
        Query(PageQuery {
            page: Some(1),
            page_size: Some(1),
        }),
    )
    .await;
    let resp = result.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let page: PageDto<UserDto> = body_json(resp).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 1);

    Ok(())
}

/// Expect 204 on delete, then 404 for the vanished user
#[tokio::test]
async fn delete_user_then_get_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let leia = factory::insert_user(&test.db, "leia").await?;

    let result = delete_user(State(test.app_state::<AppState>()), Path(leia.id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = get_user(State(test.app_state::<AppState>()), Path(leia.id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 when the favorite payload names no target
#[tokio::test]
async fn create_favorite_empty_payload_returns_conflict() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let leia = factory::insert_user(&test.db, "leia").await?;

    let result = create_favorite(
        State(test.app_state::<AppState>()),
        Path(leia.id),
        Json(NewFavorite::default()),
    )
    .await;
    let resp = result.into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect the favorite round trip: create, list, delete, list empty
#[tokio::test]
async fn favorite_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let leia = factory::insert_user(&test.db, "leia").await?;
    let alderaan = factory::insert_planet(&test.db, "Alderaan").await?;

    let result = create_favorite(
        State(test.app_state::<AppState>()),
        Path(leia.id),
        Json(NewFavorite {
            planet_id: Some(alderaan.id),
            ..Default::default()
        }),
    )
    .await;
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let favorite: FavoriteDto = body_json(resp).await;
    assert_eq!(favorite.planet_id, Some(alderaan.id));

    let result = list_favorites(State(test.app_state::<AppState>()), Path(leia.id)).await;
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(favorites.len(), 1);

    let result = delete_favorite(
        State(test.app_state::<AppState>()),
        Path((leia.id, favorite.id)),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = list_favorites(State(test.app_state::<AppState>()), Path(leia.id)).await;
    let favorites: Vec<FavoriteDto> = body_json(result.into_response()).await;
    assert!(favorites.is_empty());

    Ok(())
}

/// Expect 404 when deleting a favorite the user does not own
#[tokio::test]
async fn delete_favorite_owned_by_other_user_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let leia = factory::insert_user(&test.db, "leia").await?;
    let luke = factory::insert_user(&test.db, "luke").await?;
    let alderaan = factory::insert_planet(&test.db, "Alderaan").await?;

    let result = create_favorite(
        State(test.app_state::<AppState>()),
        Path(leia.id),
        Json(NewFavorite {
            planet_id: Some(alderaan.id),
            ..Default::default()
        }),
    )
    .await;
    let favorite: FavoriteDto = body_json(result.into_response()).await;

    let result = delete_favorite(
        State(test.app_state::<AppState>()),
        Path((luke.id, favorite.id)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
