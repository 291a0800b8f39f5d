//! Insert helpers for seeding test rows.
//!
//! Each helper inserts one row with standard test values through the entity
//! ActiveModel directly, so the test-utils crate does not depend on the main
//! holocron crate's repositories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn insert_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entity::user::Model, TestError> {
    let now = Utc::now().naive_utc();
    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password: ActiveValue::Set("hunter2".to_string()),
        email: ActiveValue::Set(Some(format!("{username}@tatooine.example"))),
        created: ActiveValue::Set(now),
        edited: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

pub async fn insert_planet(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::planet::Model, TestError> {
    let now = Utc::now().naive_utc();
    let planet = entity::planet::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        diameter: ActiveValue::Set(Some(12_500)),
        rotation_period: ActiveValue::Set(Some(24)),
        orbital_period: ActiveValue::Set(Some(364)),
        gravity: ActiveValue::Set(Some("1 standard".to_string())),
        population: ActiveValue::Set(Some(2_000_000_000)),
        climate: ActiveValue::Set(Some("temperate".to_string())),
        terrain: ActiveValue::Set(Some("grasslands, mountains".to_string())),
        surface_water: ActiveValue::Set(Some(40)),
        url: ActiveValue::Set(None),
        created: ActiveValue::Set(now),
        edited: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(planet.insert(db).await?)
}

pub async fn insert_character(
    db: &DatabaseConnection,
    name: &str,
    homeworld_id: Option<i32>,
) -> Result<entity::character::Model, TestError> {
    let now = Utc::now().naive_utc();
    let character = entity::character::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        birth_year: ActiveValue::Set(Some("19BBY".to_string())),
        eye_color: ActiveValue::Set(Some("blue".to_string())),
        gender: ActiveValue::Set(Some("male".to_string())),
        hair_color: ActiveValue::Set(Some("blond".to_string())),
        height: ActiveValue::Set(Some(172)),
        mass: ActiveValue::Set(Some(77)),
        skin_color: ActiveValue::Set(Some("fair".to_string())),
        homeworld_id: ActiveValue::Set(homeworld_id),
        url: ActiveValue::Set(None),
        created: ActiveValue::Set(now),
        edited: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(character.insert(db).await?)
}

pub async fn insert_film(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entity::film::Model, TestError> {
    let now = Utc::now().naive_utc();
    let film = entity::film::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        director: ActiveValue::Set(Some("George Lucas".to_string())),
        producer: ActiveValue::Set(Some("Gary Kurtz, Rick McCallum".to_string())),
        episode_id: ActiveValue::Set(Some(4)),
        opening_crawl: ActiveValue::Set(Some("It is a period of civil war.".to_string())),
        release_date: ActiveValue::Set(None),
        url: ActiveValue::Set(None),
        created: ActiveValue::Set(now),
        edited: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(film.insert(db).await?)
}

pub async fn insert_specie(
    db: &DatabaseConnection,
    name: &str,
    homeworld_id: Option<i32>,
) -> Result<entity::specie::Model, TestError> {
    let now = Utc::now().naive_utc();
    let specie = entity::specie::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        classification: ActiveValue::Set(Some("mammal".to_string())),
        designation: ActiveValue::Set(Some("sentient".to_string())),
        average_height: ActiveValue::Set(Some(180)),
        average_lifespan: ActiveValue::Set(Some(120)),
        eye_colors: ActiveValue::Set(Some("brown, blue, green".to_string())),
        hair_colors: ActiveValue::Set(Some("blonde, brown, black".to_string())),
        skin_colors: ActiveValue::Set(Some("pale to dark".to_string())),
        language: ActiveValue::Set(Some("Galactic Basic".to_string())),
        homeworld_id: ActiveValue::Set(homeworld_id),
        url: ActiveValue::Set(None),
        created: ActiveValue::Set(now),
        edited: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(specie.insert(db).await?)
}

pub async fn insert_vehicle(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::vehicle::Model, TestError> {
    let now = Utc::now().naive_utc();
    let vehicle = entity::vehicle::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        model: ActiveValue::Set("T-16 skyhopper".to_string()),
        vehicle_class: ActiveValue::Set("repulsorcraft".to_string()),
        manufacturer: ActiveValue::Set(Some("Incom Corporation".to_string())),
        length_m: ActiveValue::Set(Some(10.4)),
        cost_in_credits: ActiveValue::Set(Some(14_500)),
        crew: ActiveValue::Set(Some("1".to_string())),
        passengers: ActiveValue::Set(Some("1".to_string())),
        max_atmosphering_speed: ActiveValue::Set(Some(1200)),
        cargo_capacity: ActiveValue::Set(Some(50)),
        consumables: ActiveValue::Set(Some("0".to_string())),
        url: ActiveValue::Set(None),
        created: ActiveValue::Set(now),
        edited: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(vehicle.insert(db).await?)
}
