//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`. Handlers sharing a path are registered in one `routes!` call
//! so each path is mounted once with every method it supports.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`; the
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User accounts and favorites"),
        (name = controller::film::FILM_TAG, description = "Films and their association edges"),
        (name = controller::character::CHARACTER_TAG, description = "Characters"),
        (name = controller::specie::SPECIE_TAG, description = "Species"),
        (name = controller::planet::PLANET_TAG, description = "Planets"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::create_user,
            controller::user::list_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::user::create_favorite,
            controller::user::list_favorites
        ))
        .routes(routes!(controller::user::delete_favorite))
        .routes(routes!(
            controller::film::create_film,
            controller::film::list_films
        ))
        .routes(routes!(
            controller::film::get_film,
            controller::film::update_film,
            controller::film::delete_film
        ))
        .routes(routes!(controller::film::get_film_characters))
        .routes(routes!(
            controller::film::attach_film_character,
            controller::film::detach_film_character
        ))
        .routes(routes!(controller::film::get_film_planets))
        .routes(routes!(
            controller::film::attach_film_planet,
            controller::film::detach_film_planet
        ))
        .routes(routes!(controller::film::get_film_species))
        .routes(routes!(
            controller::film::attach_film_specie,
            controller::film::detach_film_specie
        ))
        .routes(routes!(
            controller::character::create_character,
            controller::character::list_characters
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::character::get_character_species))
        .routes(routes!(
            controller::character::attach_character_specie,
            controller::character::detach_character_specie
        ))
        .routes(routes!(controller::character::get_character_films))
        .routes(routes!(
            controller::specie::create_specie,
            controller::specie::list_species
        ))
        .routes(routes!(
            controller::specie::get_specie,
            controller::specie::update_specie,
            controller::specie::delete_specie
        ))
        .routes(routes!(
            controller::planet::create_planet,
            controller::planet::list_planets
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::vehicle::create_vehicle,
            controller::vehicle::list_vehicles
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(controller::vehicle::get_vehicle_pilots))
        .routes(routes!(
            controller::vehicle::attach_vehicle_pilot,
            controller::vehicle::detach_vehicle_pilot
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
