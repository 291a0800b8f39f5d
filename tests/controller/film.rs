//! Handler tests for the film endpoints and their association edges.

use holocron::controller::film::{
    attach_film_character, create_film, delete_film, detach_film_character, get_film,
    get_film_characters, list_films,
};
use holocron::model::{
    api::{PageDto, PageQuery},
    catalog::{CharacterDto, FilmDto, NewFilm},
};

use super::*;

fn new_film(title: &str) -> NewFilm {
    NewFilm {
        title: title.to_string(),
        director: Some("George Lucas".to_string()),
        producer: Some("Gary Kurtz, Rick McCallum".to_string()),
        episode_id: Some(4),
        opening_crawl: Some("It is a period of civil war.".to_string()),
        release_date: None,
        url: None,
    }
}

/// Expect 201 on create, then 200 with the same film on get
#[tokio::test]
async fn create_then_get_film() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Film)?;

    let result = create_film(
        State(test.app_state::<AppState>()),
        Json(new_film("A New Hope")),
    )
    .await;
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: FilmDto = body_json(resp).await;

    let result = get_film(State(test.app_state::<AppState>()), Path(created.id)).await;
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: FilmDto = body_json(resp).await;
    assert_eq!(fetched.title, "A New Hope");

    Ok(())
}

/// Expect 200 with a page of films and the total count
#[tokio::test]
async fn list_films_returns_page() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Film)?;

    factory::insert_film(&test.db, "A New Hope").await?;
    factory::insert_film(&test.db, "The Empire Strikes Back").await?;

    let result = list_films(
        State(test.app_state::<AppState>()),
        Query(PageQuery {
            page: None,
            page_size: None,
        }),
    )
    .await;
    let resp = result.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let page: PageDto<FilmDto> = body_json(resp).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);

    Ok(())
}

/// Expect the character edge round trip through the handlers
#[tokio::test]
async fn attach_list_detach_film_character() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let film = factory::insert_film(&test.db, "A New Hope").await?;
    let luke = factory::insert_character(&test.db, "Luke Skywalker", None).await?;

    let result = attach_film_character(
        State(test.app_state::<AppState>()),
        Path((film.id, luke.id)),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = get_film_characters(State(test.app_state::<AppState>()), Path(film.id)).await;
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterDto> = body_json(resp).await;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Luke Skywalker");

    let result = detach_film_character(
        State(test.app_state::<AppState>()),
        Path((film.id, luke.id)),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = get_film_characters(State(test.app_state::<AppState>()), Path(film.id)).await;
    let characters: Vec<CharacterDto> = body_json(result.into_response()).await;
    assert!(characters.is_empty());

    Ok(())
}

/// Expect 409 when attaching the same edge twice
#[tokio::test]
async fn attach_film_character_twice_returns_conflict() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let film = factory::insert_film(&test.db, "A New Hope").await?;
    let luke = factory::insert_character(&test.db, "Luke Skywalker", None).await?;

    let result = attach_film_character(
        State(test.app_state::<AppState>()),
        Path((film.id, luke.id)),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = attach_film_character(
        State(test.app_state::<AppState>()),
        Path((film.id, luke.id)),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when deleting a film that does not exist
#[tokio::test]
async fn delete_film_missing_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Film)?;

    let result = delete_film(State(test.app_state::<AppState>()), Path(42)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
