//! Input types and DTOs for the catalog entities.
//!
//! Each entity has a `New*` insert payload (required fields are non-optional,
//! so a missing required attribute is rejected at deserialization), a
//! `*Update` partial-update payload (every field optional; absent fields are
//! left unchanged), and a `*Dto` response shape built from the entity model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::db::{CharacterModel, FilmModel, PlanetModel, SpecieModel, VehicleModel};

// Film

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewFilm {
    pub title: String,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub url: Option<String>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct FilmUpdate {
    pub title: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub url: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<FilmModel> for FilmDto {
    fn from(film: FilmModel) -> Self {
        Self {
            id: film.id,
            title: film.title,
            director: film.director,
            producer: film.producer,
            episode_id: film.episode_id,
            opening_crawl: film.opening_crawl,
            release_date: film.release_date,
            url: film.url,
            created: film.created,
            edited: film.edited,
        }
    }
}

// Character

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewCharacter {
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            eye_color: character.eye_color,
            gender: character.gender,
            hair_color: character.hair_color,
            height: character.height,
            mass: character.mass,
            skin_color: character.skin_color,
            homeworld_id: character.homeworld_id,
            url: character.url,
            created: character.created,
            edited: character.edited,
        }
    }
}

// Specie

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewSpecie {
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct SpecieUpdate {
    pub name: Option<String>,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecieDto {
    pub id: i32,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<SpecieModel> for SpecieDto {
    fn from(specie: SpecieModel) -> Self {
        Self {
            id: specie.id,
            name: specie.name,
            classification: specie.classification,
            designation: specie.designation,
            average_height: specie.average_height,
            average_lifespan: specie.average_lifespan,
            eye_colors: specie.eye_colors,
            hair_colors: specie.hair_colors,
            skin_colors: specie.skin_colors,
            language: specie.language,
            homeworld_id: specie.homeworld_id,
            url: specie.url,
            created: specie.created,
            edited: specie.edited,
        }
    }
}

// Planet

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct PlanetUpdate {
    pub name: Option<String>,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub url: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            url: planet.url,
            created: planet.created,
            edited: planet.edited,
        }
    }
}

// Vehicle

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewVehicle {
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: Option<String>,
    pub length_m: Option<f64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct VehicleUpdate {
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length_m: Option<f64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: Option<String>,
    pub length_m: Option<f64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub url: Option<String>,
    pub created: NaiveDateTime,
    pub edited: NaiveDateTime,
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            vehicle_class: vehicle.vehicle_class,
            manufacturer: vehicle.manufacturer,
            length_m: vehicle.length_m,
            cost_in_credits: vehicle.cost_in_credits,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
            cargo_capacity: vehicle.cargo_capacity,
            consumables: vehicle.consumables,
            url: vehicle.url,
            created: vehicle.created,
            edited: vehicle.edited,
        }
    }
}
