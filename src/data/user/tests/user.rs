use super::*;

/// Expect created user to round-trip through get
#[tokio::test]
async fn create_then_get_returns_inserted_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    let created = user_repo.create(new_user("leia")).await.unwrap();

    assert_eq!(created.username, "leia");
    assert_eq!(created.email, Some("leia@tatooine.example".to_string()));
    assert_eq!(created.created, created.edited);

    let fetched = user_repo.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Expect Conflict when reusing a taken username
#[tokio::test]
async fn duplicate_username_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    user_repo.create(new_user("leia")).await.unwrap();

    let mut second = new_user("leia");
    second.email = Some("organa@alderaan.example".to_string());
    let result = user_repo.create(second).await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect Conflict when reusing a taken email under a fresh username
#[tokio::test]
async fn duplicate_email_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    user_repo.create(new_user("leia")).await.unwrap();

    let mut second = new_user("organa");
    second.email = Some("leia@tatooine.example".to_string());
    let result = user_repo.create(second).await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect the username lookup to find the row, and miss cleanly
#[tokio::test]
async fn get_by_username_finds_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    let created = user_repo.create(new_user("leia")).await.unwrap();

    let fetched = user_repo.get_by_username("leia").await.unwrap();
    assert_eq!(fetched, Some(created));

    let missing = user_repo.get_by_username("palpatine").await.unwrap();
    assert!(missing.is_none());

    Ok(())
}

/// Expect list to page rows and report the total count
#[tokio::test]
async fn list_pages_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    for username in ["leia", "luke", "han"] {
        user_repo.create(new_user(username)).await.unwrap();
    }

    let (page, total) = user_repo.list(1, 2).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].username, "leia");

    Ok(())
}

/// Expect update to apply set fields and advance edited
#[tokio::test]
async fn update_advances_edited() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    let created = user_repo.create(new_user("leia")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = user_repo
        .update(
            created.id,
            UserUpdate {
                email: Some("organa@alderaan.example".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, Some("organa@alderaan.example".to_string()));
    assert_eq!(updated.username, "leia");
    assert!(updated.edited > created.edited);

    Ok(())
}

/// Expect NotFound when updating a user that does not exist
#[tokio::test]
async fn update_missing_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repo = UserRepository::new(&test.db);

    let result = user_repo.update(42, UserUpdate::default()).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect deleting a user to cascade their favorites
#[tokio::test]
async fn delete_cascades_favorites() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Planet,
        entity::prelude::Character,
        entity::prelude::Vehicle,
        entity::prelude::Favorite
    )?;
    let user_repo = UserRepository::new(&test.db);
    let favorite_repo = FavoriteRepository::new(&test.db);

    let leia = user_repo.create(new_user("leia")).await.unwrap();
    let alderaan = factory::insert_planet(&test.db, "Alderaan").await?;
    favorite_repo
        .create(leia.id, FavoriteTarget::Planet(alderaan.id))
        .await
        .unwrap();

    let result = user_repo.delete(leia.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    use sea_orm::EntityTrait;
    let favorites = entity::prelude::Favorite::find()
        .all(&test.db)
        .await
        .unwrap();
    assert!(favorites.is_empty());

    Ok(())
}
