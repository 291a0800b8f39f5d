use super::*;

/// Expect created planet to round-trip through get with generated id and
/// timestamps
#[tokio::test]
async fn create_then_get_returns_inserted_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;
    let planet_repo = PlanetRepository::new(&test.db);

    let created = planet_repo.create(new_planet("Alderaan")).await.unwrap();

    assert_eq!(created.name, "Alderaan");
    assert_eq!(created.diameter, Some(12_500));
    assert_eq!(created.climate, Some("temperate".to_string()));
    assert_eq!(created.created, created.edited);

    let fetched = planet_repo.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Expect None when the planet does not exist
#[tokio::test]
async fn get_missing_returns_none() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;
    let planet_repo = PlanetRepository::new(&test.db);

    let fetched = planet_repo.get(42).await.unwrap();

    assert!(fetched.is_none());

    Ok(())
}

/// Expect list to page rows and report the total count
#[tokio::test]
async fn list_pages_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;
    let planet_repo = PlanetRepository::new(&test.db);

    for name in ["Tatooine", "Alderaan", "Hoth"] {
        planet_repo.create(new_planet(name)).await.unwrap();
    }

    let (first_page, total) = planet_repo.list(1, 2).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Tatooine");

    let (second_page, _) = planet_repo.list(2, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Hoth");

    Ok(())
}

/// Expect update to apply changed fields and advance edited past its prior
/// value
#[tokio::test]
async fn update_applies_changes_and_advances_edited() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;
    let planet_repo = PlanetRepository::new(&test.db);

    let created = planet_repo.create(new_planet("Alderaan")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = planet_repo
        .update(
            created.id,
            PlanetUpdate {
                terrain: Some("debris field".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.terrain, Some("debris field".to_string()));
    assert_eq!(updated.name, "Alderaan");
    assert_eq!(updated.created, created.created);
    assert!(updated.edited > created.edited);

    Ok(())
}

/// Expect NotFound when updating a planet that does not exist
#[tokio::test]
async fn update_missing_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;
    let planet_repo = PlanetRepository::new(&test.db);

    let result = planet_repo.update(42, PlanetUpdate::default()).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect deleting a referenced planet to null out character homeworlds
/// rather than fail (documented SET NULL policy)
#[tokio::test]
async fn delete_nulls_character_homeworld() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Character)?;
    let planet_repo = PlanetRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);

    let planet = planet_repo.create(new_planet("Alderaan")).await.unwrap();
    let character = character_repo
        .create(new_character("Leia Organa", Some(planet.id)))
        .await
        .unwrap();
    assert_eq!(character.homeworld_id, Some(planet.id));

    let result = planet_repo.delete(planet.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    let character = character_repo.get(character.id).await.unwrap().unwrap();
    assert_eq!(character.homeworld_id, None);

    Ok(())
}

/// Expect no rows to be affected when deleting a planet that does not exist
#[tokio::test]
async fn delete_missing_is_noop() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;
    let planet_repo = PlanetRepository::new(&test.db);

    let result = planet_repo.delete(42).await.unwrap();

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
