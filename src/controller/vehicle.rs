use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::vehicle::VehicleRepository,
    error::Error,
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        app::AppState,
        catalog::{CharacterDto, NewVehicle, VehicleDto, VehicleUpdate},
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = NewVehicle,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(new): Json<NewVehicle>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let vehicle = vehicle_repo.create(new).await?;

    Ok((StatusCode::CREATED, Json(VehicleDto::from(vehicle))).into_response())
}

/// List vehicles, one page at a time
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of vehicles", body = PageDto<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let (vehicles, total) = vehicle_repo.list(query.page(), query.page_size()).await?;
    let page = PageDto {
        items: vehicles
            .into_iter()
            .map(VehicleDto::from)
            .collect::<Vec<_>>(),
        total,
        page: query.page(),
        page_size: query.page_size(),
    };

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Get one vehicle by id
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let vehicle = vehicle_repo
        .get(vehicle_id)
        .await?
        .ok_or(Error::NotFound("vehicle"))?;

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))).into_response())
}

/// Update a vehicle's set fields
#[utoipa::path(
    put,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "Vehicle id")),
    request_body = VehicleUpdate,
    responses(
        (status = 200, description = "The updated vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    Json(changes): Json<VehicleUpdate>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let vehicle = vehicle_repo.update(vehicle_id, changes).await?;

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))).into_response())
}

/// Delete a vehicle; pilot edges and favorites pointing at it cascade
#[utoipa::path(
    delete,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let result = vehicle_repo.delete(vehicle_id).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound("vehicle"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List a vehicle's pilots
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}/pilots",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "The vehicle's pilots", body = Vec<CharacterDto>),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_pilots(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let pilots = vehicle_repo.pilots(vehicle_id).await?;
    let dtos: Vec<CharacterDto> = pilots.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Attach a pilot to a vehicle
#[utoipa::path(
    post,
    path = "/api/vehicles/{vehicle_id}/pilots/{character_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle id"),
        ("character_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 204, description = "Pilot attached"),
        (status = 409, description = "Edge already exists or an id is dangling", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_vehicle_pilot(
    State(state): State<AppState>,
    Path((vehicle_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    vehicle_repo.add_pilot(vehicle_id, character_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Detach a pilot from a vehicle; detaching a missing edge is a no-op
#[utoipa::path(
    delete,
    path = "/api/vehicles/{vehicle_id}/pilots/{character_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle id"),
        ("character_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 204, description = "Pilot detached"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_vehicle_pilot(
    State(state): State<AppState>,
    Path((vehicle_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    vehicle_repo.remove_pilot(vehicle_id, character_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
