use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::character::CharacterRepository,
    error::Error,
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        app::AppState,
        catalog::{CharacterDto, CharacterUpdate, FilmDto, NewCharacter, SpecieDto},
    },
};

pub static CHARACTER_TAG: &str = "character";

/// Create a character
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = NewCharacter,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 409, description = "Homeworld id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(new): Json<NewCharacter>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let character = character_repo.create(new).await?;

    Ok((StatusCode::CREATED, Json(CharacterDto::from(character))).into_response())
}

/// List characters, one page at a time
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of characters", body = PageDto<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let (characters, total) = character_repo.list(query.page(), query.page_size()).await?;
    let page = PageDto {
        items: characters
            .into_iter()
            .map(CharacterDto::from)
            .collect::<Vec<_>>(),
        total,
        page: query.page(),
        page_size: query.page_size(),
    };

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Get one character by id
#[utoipa::path(
    get,
    path = "/api/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let character = character_repo
        .get(character_id)
        .await?
        .ok_or(Error::NotFound("character"))?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))).into_response())
}

/// Update a character's set fields
#[utoipa::path(
    put,
    path = "/api/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "Character id")),
    request_body = CharacterUpdate,
    responses(
        (status = 200, description = "The updated character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 409, description = "Homeworld id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
    Json(changes): Json<CharacterUpdate>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let character = character_repo.update(character_id, changes).await?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))).into_response())
}

/// Delete a character; edges and favorites pointing at it cascade
#[utoipa::path(
    delete,
    path = "/api/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "Character id")),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let result = character_repo.delete(character_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("character"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List a character's species
#[utoipa::path(
    get,
    path = "/api/characters/{character_id}/species",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character's species", body = Vec<SpecieDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_species(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let species = character_repo.species(character_id).await?;
    let dtos: Vec<SpecieDto> = species.into_iter().map(SpecieDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Attach a specie to a character
#[utoipa::path(
    post,
    path = "/api/characters/{character_id}/species/{specie_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character id"),
        ("specie_id" = i32, Path, description = "Specie id")
    ),
    responses(
        (status = 204, description = "Specie attached"),
        (status = 409, description = "Edge already exists or an id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_character_specie(
    State(state): State<AppState>,
    Path((character_id, specie_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    character_repo.add_specie(character_id, specie_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Detach a specie from a character; detaching a missing edge is a no-op
#[utoipa::path(
    delete,
    path = "/api/characters/{character_id}/species/{specie_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character id"),
        ("specie_id" = i32, Path, description = "Specie id")
    ),
    responses(
        (status = 204, description = "Specie detached"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_character_specie(
    State(state): State<AppState>,
    Path((character_id, specie_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    character_repo
        .remove_specie(character_id, specie_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List the films a character appears in
#[utoipa::path(
    get,
    path = "/api/characters/{character_id}/films",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character's films", body = Vec<FilmDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_films(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let films = character_repo.films(character_id).await?;
    let dtos: Vec<FilmDto> = films.into_iter().map(FilmDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}
