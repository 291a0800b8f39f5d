use super::*;

/// Expect created specie to round-trip through get
#[tokio::test]
async fn create_then_get_returns_inserted_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Specie)?;
    let specie_repo = SpecieRepository::new(&test.db);

    let created = specie_repo.create(new_specie("Wookiee", None)).await.unwrap();

    assert_eq!(created.name, "Wookiee");
    assert_eq!(created.language, Some("Galactic Basic".to_string()));

    let fetched = specie_repo.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Expect Conflict when the homeworld id does not resolve
#[tokio::test]
async fn create_with_dangling_homeworld_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Specie)?;
    let specie_repo = SpecieRepository::new(&test.db);

    let result = specie_repo.create(new_specie("Wookiee", Some(42))).await;

    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

/// Expect deleting the homeworld to null the specie's reference
#[tokio::test]
async fn planet_delete_nulls_homeworld() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Specie)?;
    let planet_repo = PlanetRepository::new(&test.db);
    let specie_repo = SpecieRepository::new(&test.db);

    let kashyyyk = planet_repo.create(new_planet("Kashyyyk")).await.unwrap();
    let wookiee = specie_repo
        .create(new_specie("Wookiee", Some(kashyyyk.id)))
        .await
        .unwrap();

    planet_repo.delete(kashyyyk.id).await.unwrap();

    let wookiee = specie_repo.get(wookiee.id).await.unwrap().unwrap();
    assert_eq!(wookiee.homeworld_id, None);

    Ok(())
}

/// Expect update to advance edited
#[tokio::test]
async fn update_advances_edited() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Specie)?;
    let specie_repo = SpecieRepository::new(&test.db);

    let created = specie_repo.create(new_specie("Wookiee", None)).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = specie_repo
        .update(
            created.id,
            SpecieUpdate {
                language: Some("Shyriiwook".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.language, Some("Shyriiwook".to_string()));
    assert!(updated.edited > created.edited);

    Ok(())
}

/// Expect list to page rows and report the total count
#[tokio::test]
async fn list_pages_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Specie)?;
    let specie_repo = SpecieRepository::new(&test.db);

    for name in ["Human", "Wookiee", "Ewok"] {
        specie_repo.create(new_specie(name, None)).await.unwrap();
    }

    let (page, total) = specie_repo.list(1, 2).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);

    Ok(())
}
