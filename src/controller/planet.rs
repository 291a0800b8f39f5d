use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::planet::PlanetRepository,
    error::Error,
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        app::AppState,
        catalog::{NewPlanet, PlanetDto, PlanetUpdate},
    },
};

pub static PLANET_TAG: &str = "planet";

/// Create a planet
#[utoipa::path(
    post,
    path = "/api/planets",
    tag = PLANET_TAG,
    request_body = NewPlanet,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(new): Json<NewPlanet>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let planet = planet_repo.create(new).await?;

    Ok((StatusCode::CREATED, Json(PlanetDto::from(planet))).into_response())
}

/// List planets, one page at a time
#[utoipa::path(
    get,
    path = "/api/planets",
    tag = PLANET_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of planets", body = PageDto<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let (planets, total) = planet_repo.list(query.page(), query.page_size()).await?;
    let page = PageDto {
        items: planets.into_iter().map(PlanetDto::from).collect::<Vec<_>>(),
        total,
        page: query.page(),
        page_size: query.page_size(),
    };

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Get one planet by id
#[utoipa::path(
    get,
    path = "/api/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "Planet id")),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let planet = planet_repo
        .get(planet_id)
        .await?
        .ok_or(Error::NotFound("planet"))?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))).into_response())
}

/// Update a planet's set fields
#[utoipa::path(
    put,
    path = "/api/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "Planet id")),
    request_body = PlanetUpdate,
    responses(
        (status = 200, description = "The updated planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(changes): Json<PlanetUpdate>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let planet = planet_repo.update(planet_id, changes).await?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))).into_response())
}

/// Delete a planet; characters and species born there keep their rows with
/// the homeworld cleared
#[utoipa::path(
    delete,
    path = "/api/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "Planet id")),
    responses(
        (status = 204, description = "Planet deleted"),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let result = planet_repo.delete(planet_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("planet"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
