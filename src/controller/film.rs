use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::film::FilmRepository,
    error::Error,
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        app::AppState,
        catalog::{CharacterDto, FilmDto, FilmUpdate, NewFilm, PlanetDto, SpecieDto},
    },
};

pub static FILM_TAG: &str = "film";

/// Create a film
#[utoipa::path(
    post,
    path = "/api/films",
    tag = FILM_TAG,
    request_body = NewFilm,
    responses(
        (status = 201, description = "Film created", body = FilmDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_film(
    State(state): State<AppState>,
    Json(new): Json<NewFilm>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let film = film_repo.create(new).await?;

    Ok((StatusCode::CREATED, Json(FilmDto::from(film))).into_response())
}

/// List films, one page at a time
#[utoipa::path(
    get,
    path = "/api/films",
    tag = FILM_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of films", body = PageDto<FilmDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_films(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let (films, total) = film_repo.list(query.page(), query.page_size()).await?;
    let page = PageDto {
        items: films.into_iter().map(FilmDto::from).collect::<Vec<_>>(),
        total,
        page: query.page(),
        page_size: query.page_size(),
    };

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Get one film by id
#[utoipa::path(
    get,
    path = "/api/films/{film_id}",
    tag = FILM_TAG,
    params(("film_id" = i32, Path, description = "Film id")),
    responses(
        (status = 200, description = "The film", body = FilmDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let film = film_repo.get(film_id).await?.ok_or(Error::NotFound("film"))?;

    Ok((StatusCode::OK, Json(FilmDto::from(film))).into_response())
}

/// Update a film's set fields
#[utoipa::path(
    put,
    path = "/api/films/{film_id}",
    tag = FILM_TAG,
    params(("film_id" = i32, Path, description = "Film id")),
    request_body = FilmUpdate,
    responses(
        (status = 200, description = "The updated film", body = FilmDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_film(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
    Json(changes): Json<FilmUpdate>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let film = film_repo.update(film_id, changes).await?;

    Ok((StatusCode::OK, Json(FilmDto::from(film))).into_response())
}

/// Delete a film and its association edges
#[utoipa::path(
    delete,
    path = "/api/films/{film_id}",
    tag = FILM_TAG,
    params(("film_id" = i32, Path, description = "Film id")),
    responses(
        (status = 204, description = "Film deleted"),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_film(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let result = film_repo.delete(film_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("film"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List the characters appearing in a film
#[utoipa::path(
    get,
    path = "/api/films/{film_id}/characters",
    tag = FILM_TAG,
    params(("film_id" = i32, Path, description = "Film id")),
    responses(
        (status = 200, description = "Characters in the film", body = Vec<CharacterDto>),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film_characters(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let characters = film_repo.characters(film_id).await?;
    let dtos: Vec<CharacterDto> = characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Attach a character to a film
#[utoipa::path(
    post,
    path = "/api/films/{film_id}/characters/{character_id}",
    tag = FILM_TAG,
    params(
        ("film_id" = i32, Path, description = "Film id"),
        ("character_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 204, description = "Character attached"),
        (status = 409, description = "Edge already exists or an id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_film_character(
    State(state): State<AppState>,
    Path((film_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    film_repo.add_character(film_id, character_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Detach a character from a film; detaching a missing edge is a no-op
#[utoipa::path(
    delete,
    path = "/api/films/{film_id}/characters/{character_id}",
    tag = FILM_TAG,
    params(
        ("film_id" = i32, Path, description = "Film id"),
        ("character_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 204, description = "Character detached"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_film_character(
    State(state): State<AppState>,
    Path((film_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    film_repo.remove_character(film_id, character_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List the planets appearing in a film
#[utoipa::path(
    get,
    path = "/api/films/{film_id}/planets",
    tag = FILM_TAG,
    params(("film_id" = i32, Path, description = "Film id")),
    responses(
        (status = 200, description = "Planets in the film", body = Vec<PlanetDto>),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film_planets(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let planets = film_repo.planets(film_id).await?;
    let dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Attach a planet to a film
#[utoipa::path(
    post,
    path = "/api/films/{film_id}/planets/{planet_id}",
    tag = FILM_TAG,
    params(
        ("film_id" = i32, Path, description = "Film id"),
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 204, description = "Planet attached"),
        (status = 409, description = "Edge already exists or an id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_film_planet(
    State(state): State<AppState>,
    Path((film_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    film_repo.add_planet(film_id, planet_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Detach a planet from a film; detaching a missing edge is a no-op
#[utoipa::path(
    delete,
    path = "/api/films/{film_id}/planets/{planet_id}",
    tag = FILM_TAG,
    params(
        ("film_id" = i32, Path, description = "Film id"),
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 204, description = "Planet detached"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_film_planet(
    State(state): State<AppState>,
    Path((film_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    film_repo.remove_planet(film_id, planet_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List the species appearing in a film
#[utoipa::path(
    get,
    path = "/api/films/{film_id}/species",
    tag = FILM_TAG,
    params(("film_id" = i32, Path, description = "Film id")),
    responses(
        (status = 200, description = "Species in the film", body = Vec<SpecieDto>),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film_species(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    let species = film_repo.species(film_id).await?;
    let dtos: Vec<SpecieDto> = species.into_iter().map(SpecieDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Attach a specie to a film
#[utoipa::path(
    post,
    path = "/api/films/{film_id}/species/{specie_id}",
    tag = FILM_TAG,
    params(
        ("film_id" = i32, Path, description = "Film id"),
        ("specie_id" = i32, Path, description = "Specie id")
    ),
    responses(
        (status = 204, description = "Specie attached"),
        (status = 409, description = "Edge already exists or an id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_film_specie(
    State(state): State<AppState>,
    Path((film_id, specie_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    film_repo.add_specie(film_id, specie_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Detach a specie from a film; detaching a missing edge is a no-op
#[utoipa::path(
    delete,
    path = "/api/films/{film_id}/species/{specie_id}",
    tag = FILM_TAG,
    params(
        ("film_id" = i32, Path, description = "Film id"),
        ("specie_id" = i32, Path, description = "Specie id")
    ),
    responses(
        (status = 204, description = "Specie detached"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_film_specie(
    State(state): State<AppState>,
    Path((film_id, specie_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let film_repo = FilmRepository::new(&state.db);

    film_repo.remove_specie(film_id, specie_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
