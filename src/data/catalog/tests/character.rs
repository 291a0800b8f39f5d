use super::*;

/// Expect created character to round-trip through get with its homeworld
#[tokio::test]
async fn create_with_homeworld() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Character)?;
    let planet_repo = PlanetRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);

    let planet = planet_repo.create(new_planet("Tatooine")).await.unwrap();
    let created = character_repo
        .create(new_character("Luke Skywalker", Some(planet.id)))
        .await
        .unwrap();

    assert_eq!(created.name, "Luke Skywalker");
    assert_eq!(created.homeworld_id, Some(planet.id));

    let fetched = character_repo.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Expect Conflict when the homeworld id does not resolve
#[tokio::test]
async fn create_with_dangling_homeworld_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Character)?;
    let character_repo = CharacterRepository::new(&test.db);

    let result = character_repo
        .create(new_character("Luke Skywalker", Some(42)))
        .await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect update to advance edited and apply partial changes
#[tokio::test]
async fn update_advances_edited() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Character)?;
    let character_repo = CharacterRepository::new(&test.db);

    let created = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = character_repo
        .update(
            created.id,
            CharacterUpdate {
                hair_color: Some("grey".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.hair_color, Some("grey".to_string()));
    assert_eq!(updated.birth_year, created.birth_year);
    assert!(updated.edited > created.edited);

    Ok(())
}

/// Expect the specie edge to attach, read, and detach
#[tokio::test]
async fn attach_and_detach_specie_edge() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Character,
        entity::prelude::Specie,
        entity::prelude::CharacterSpecie
    )?;
    let character_repo = CharacterRepository::new(&test.db);
    let specie_repo = SpecieRepository::new(&test.db);

    let luke = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();
    let human = specie_repo.create(new_specie("Human", None)).await.unwrap();

    character_repo.add_specie(luke.id, human.id).await.unwrap();

    let species = character_repo.species(luke.id).await.unwrap();
    assert_eq!(species.len(), 1);
    assert_eq!(species[0].name, "Human");

    let result = character_repo
        .remove_specie(luke.id, human.id)
        .await
        .unwrap();
    assert_eq!(result.rows_affected, 1);
    assert!(character_repo.species(luke.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect Conflict when attaching the same character-specie edge twice
#[tokio::test]
async fn attach_duplicate_specie_edge_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Planet,
        entity::prelude::Character,
        entity::prelude::Specie,
        entity::prelude::CharacterSpecie
    )?;
    let character_repo = CharacterRepository::new(&test.db);
    let specie_repo = SpecieRepository::new(&test.db);

    let luke = character_repo
        .create(new_character("Luke Skywalker", None))
        .await
        .unwrap();
    let human = specie_repo.create(new_specie("Human", None)).await.unwrap();

    character_repo.add_specie(luke.id, human.id).await.unwrap();
    let result = character_repo.add_specie(luke.id, human.id).await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect a character's films to be readable from the character side
#[tokio::test]
async fn films_reader_traverses_edge() -> Result<(), TestError> {
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

    let films = character_repo.films(luke.id).await.unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].title, "A New Hope");

    Ok(())
}
