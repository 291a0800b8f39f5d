mod character;
mod film;
mod planet;
mod specie;

use holocron_test_utils::prelude::*;

use crate::{
    data::catalog::{
        character::CharacterRepository, film::FilmRepository, planet::PlanetRepository,
        specie::SpecieRepository, vehicle::VehicleRepository,
    },
    error::Error,
    model::catalog::{
        CharacterUpdate, FilmUpdate, NewCharacter, NewFilm, NewPlanet, NewSpecie, NewVehicle,
        PlanetUpdate, SpecieUpdate, VehicleUpdate,
    },
};

fn new_planet(name: &str) -> NewPlanet {
    NewPlanet {
        name: name.to_string(),
        diameter: Some(12_500),
        rotation_period: Some(24),
        orbital_period: Some(364),
        gravity: Some("1 standard".to_string()),
        population: Some(2_000_000_000),
        climate: Some("temperate".to_string()),
        terrain: Some("grasslands, mountains".to_string()),
        surface_water: Some(40),
        url: None,
    }
}

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

fn new_character(name: &str, homeworld_id: Option<i32>) -> NewCharacter {
    NewCharacter {
        name: name.to_string(),
        birth_year: Some("19BBY".to_string()),
        eye_color: Some("blue".to_string()),
        gender: Some("male".to_string()),
        hair_color: Some("blond".to_string()),
        height: Some(172),
        mass: Some(77),
        skin_color: Some("fair".to_string()),
        homeworld_id,
        url: None,
    }
}

fn new_specie(name: &str, homeworld_id: Option<i32>) -> NewSpecie {
    NewSpecie {
        name: name.to_string(),
        classification: Some("mammal".to_string()),
        designation: Some("sentient".to_string()),
        average_height: Some(180),
        average_lifespan: Some(120),
        eye_colors: Some("brown, blue, green".to_string()),
        hair_colors: Some("blonde, brown, black".to_string()),
        skin_colors: Some("pale to dark".to_string()),
        language: Some("Galactic Basic".to_string()),
        homeworld_id,
        url: None,
    }
}

fn new_vehicle(name: &str) -> NewVehicle {
    NewVehicle {
        name: name.to_string(),
        model: "T-16 skyhopper".to_string(),
        vehicle_class: "repulsorcraft".to_string(),
        manufacturer: Some("Incom Corporation".to_string()),
        length_m: Some(10.4),
        cost_in_credits: Some(14_500),
        crew: Some("1".to_string()),
        passengers: Some("1".to_string()),
        max_atmosphering_speed: Some(1200),
        cargo_capacity: Some(50),
        consumables: Some("0".to_string()),
        url: None,
    }
}
