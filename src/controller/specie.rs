use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::specie::SpecieRepository,
    error::Error,
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        app::AppState,
        catalog::{NewSpecie, SpecieDto, SpecieUpdate},
    },
};

pub static SPECIE_TAG: &str = "specie";

/// Create a specie
#[utoipa::path(
    post,
    path = "/api/species",
    tag = SPECIE_TAG,
    request_body = NewSpecie,
    responses(
        (status = 201, description = "Specie created", body = SpecieDto),
        (status = 409, description = "Homeworld id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_specie(
    State(state): State<AppState>,
    Json(new): Json<NewSpecie>,
) -> Result<impl IntoResponse, Error> {
    let specie_repo = SpecieRepository::new(&state.db);

    let specie = specie_repo.create(new).await?;

    Ok((StatusCode::CREATED, Json(SpecieDto::from(specie))).into_response())
}

/// List species, one page at a time
#[utoipa::path(
    get,
    path = "/api/species",
    tag = SPECIE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of species", body = PageDto<SpecieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_species(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let specie_repo = SpecieRepository::new(&state.db);

    let (species, total) = specie_repo.list(query.page(), query.page_size()).await?;
    let page = PageDto {
        items: species.into_iter().map(SpecieDto::from).collect::<Vec<_>>(),
        total,
        page: query.page(),
        page_size: query.page_size(),
    };

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Get one specie by id
#[utoipa::path(
    get,
    path = "/api/species/{specie_id}",
    tag = SPECIE_TAG,
    params(("specie_id" = i32, Path, description = "Specie id")),
    responses(
        (status = 200, description = "The specie", body = SpecieDto),
        (status = 404, description = "Specie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specie(
    State(state): State<AppState>,
    Path(specie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let specie_repo = SpecieRepository::new(&state.db);

    let specie = specie_repo
        .get(specie_id)
        .await?
        .ok_or(Error::NotFound("specie"))?;

    Ok((StatusCode::OK, Json(SpecieDto::from(specie))).into_response())
}

/// Update a specie's set fields
#[utoipa::path(
    put,
    path = "/api/species/{specie_id}",
    tag = SPECIE_TAG,
    params(("specie_id" = i32, Path, description = "Specie id")),
    request_body = SpecieUpdate,
    responses(
        (status = 200, description = "The updated specie", body = SpecieDto),
        (status = 404, description = "Specie not found", body = ErrorDto),
        (status = 409, description = "Homeworld id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_specie(
    State(state): State<AppState>,
    Path(specie_id): Path<i32>,
    Json(changes): Json<SpecieUpdate>,
) -> Result<impl IntoResponse, Error> {
    let specie_repo = SpecieRepository::new(&state.db);

    let specie = specie_repo.update(specie_id, changes).await?;

    Ok((StatusCode::OK, Json(SpecieDto::from(specie))).into_response())
}

/// Delete a specie; its association edges cascade
#[utoipa::path(
    delete,
    path = "/api/species/{specie_id}",
    tag = SPECIE_TAG,
    params(("specie_id" = i32, Path, description = "Specie id")),
    responses(
        (status = 204, description = "Specie deleted"),
        (status = 404, description = "Specie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_specie(
    State(state): State<AppState>,
    Path(specie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let specie_repo = SpecieRepository::new(&state.db);

    let result = specie_repo.delete(specie_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("specie"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
