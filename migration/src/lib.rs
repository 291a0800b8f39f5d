pub use sea_orm_migration::prelude::*;

mod m20260830_000001_planet;
mod m20260830_000002_film;
mod m20260830_000003_character;
mod m20260830_000004_specie;
mod m20260830_000005_vehicle;
mod m20260830_000006_user;
mod m20260830_000007_favorite;
mod m20260830_000008_film_character;
mod m20260830_000009_film_planet;
mod m20260830_000010_film_specie;
mod m20260830_000011_character_specie;
mod m20260830_000012_vehicle_pilot;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_planet::Migration),
            Box::new(m20260830_000002_film::Migration),
            Box::new(m20260830_000003_character::Migration),
            Box::new(m20260830_000004_specie::Migration),
            Box::new(m20260830_000005_vehicle::Migration),
            Box::new(m20260830_000006_user::Migration),
            Box::new(m20260830_000007_favorite::Migration),
            Box::new(m20260830_000008_film_character::Migration),
            Box::new(m20260830_000009_film_planet::Migration),
            Box::new(m20260830_000010_film_specie::Migration),
            Box::new(m20260830_000011_character_specie::Migration),
            Box::new(m20260830_000012_vehicle_pilot::Migration),
        ]
    }
}
