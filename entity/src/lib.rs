pub mod prelude;

pub mod character;
pub mod character_specie;
pub mod favorite;
pub mod film;
pub mod film_character;
pub mod film_planet;
pub mod film_specie;
pub mod planet;
pub mod specie;
pub mod user;
pub mod vehicle;
pub mod vehicle_pilot;
