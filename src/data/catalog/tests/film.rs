use super::*;

/// Expect created film to round-trip through get
#[tokio::test]
async fn create_then_get_returns_inserted_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Film)?;
    let film_repo = FilmRepository::new(&test.db);

    let created = film_repo.create(new_film("A New Hope")).await.unwrap();

    assert_eq!(created.title, "A New Hope");
    assert_eq!(created.episode_id, Some(4));

    let fetched = film_repo.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Expect update to refresh edited while leaving created untouched
#[tokio::test]
async fn update_advances_edited() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Film)?;
    let film_repo = FilmRepository::new(&test.db);

    let created = film_repo.create(new_film("A New Hope")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = film_repo
        .update(
            created.id,
            FilmUpdate {
                director: Some("Irvin Kershner".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.director, Some("Irvin Kershner".to_string()));
    assert_eq!(updated.created, created.created);
    assert!(updated.edited > created.edited);

    Ok(())
}

/// Expect attached characters to be readable through the edge, and a
/// detached character to disappear from it
#[tokio::test]
async fn attach_and_detach_character_edge() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Film,
        entity::prelude::Character,
        entity::prelude::FilmCharacter
    )?;
    let film_repo = FilmRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);

    let film = film_repo.create(new_film("A New Hope")).await.unwrap();
    let luke = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();

    film_repo.add_character(film.id, luke.id).await.unwrap();

    let characters = film_repo.characters(film.id).await.unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Luke Skywalker");

    let result = film_repo.remove_character(film.id, luke.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    let characters = film_repo.characters(film.id).await.unwrap();
    assert!(characters.is_empty());

    Ok(())
}

/// Expect Conflict when attaching the same film-character edge twice
#[tokio::test]
async fn attach_duplicate_edge_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Film,
        entity::prelude::Character,
        entity::prelude::FilmCharacter
    )?;
    let film_repo = FilmRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);

    let film = film_repo.create(new_film("A New Hope")).await.unwrap();
    let luke = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();

    film_repo.add_character(film.id, luke.id).await.unwrap();
    let result = film_repo.add_character(film.id, luke.id).await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect Conflict when attaching a character that does not exist
#[tokio::test]
async fn attach_dangling_character_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Film,
        entity::prelude::Character,
        entity::prelude::FilmCharacter
    )?;
    let film_repo = FilmRepository::new(&test.db);

    let film = film_repo.create(new_film("A New Hope")).await.unwrap();

    let result = film_repo.add_character(film.id, 42).await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect detaching an edge that does not exist to be a no-op, not an error
#[tokio::test]
async fn detach_missing_edge_is_noop() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Film,
        entity::prelude::Character,
        entity::prelude::FilmCharacter
    )?;
    let film_repo = FilmRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);

    let film = film_repo.create(new_film("A New Hope")).await.unwrap();
    let luke = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();

    let result = film_repo.remove_character(film.id, luke.id).await.unwrap();

    assert_eq!(result.rows_affected, 0);

    Ok(())
}

/// Expect the planet edge to behave like the character edge
#[tokio::test]
async fn attach_and_detach_planet_edge() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Film,
        entity::prelude::FilmPlanet
    )?;
    let film_repo = FilmRepository::new(&test.db);
    let planet_repo = PlanetRepository::new(&test.db);

    let film = film_repo.create(new_film("A New Hope")).await.unwrap();
    let planet = planet_repo.create(new_planet("Tatooine")).await.unwrap();

    film_repo.add_planet(film.id, planet.id).await.unwrap();

    let planets = film_repo.planets(film.id).await.unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Tatooine");

    let result = film_repo.remove_planet(film.id, planet.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);
    assert!(film_repo.planets(film.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect deleting a film to cascade its association edges
#[tokio::test]
async fn delete_cascades_edges() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Film,
        entity::prelude::Character,
        entity::prelude::FilmCharacter
    )?;
    let film_repo = FilmRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);

    let film = film_repo.create(new_film("A New Hope")).await.unwrap();
    let luke = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();
    film_repo.add_character(film.id, luke.id).await.unwrap();

    let result = film_repo.delete(film.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    // The character survives; only the edge is gone
    let luke = character_repo.get(luke.id).await.unwrap();
    assert!(luke.is_some());

    use sea_orm::EntityTrait;
    let edges = entity::prelude::FilmCharacter::find()
        .all(&test.db)
        .await
        .unwrap();
    assert!(edges.is_empty());

    Ok(())
}
