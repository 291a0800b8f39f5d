pub use super::character::Entity as Character;
pub use super::character_specie::Entity as CharacterSpecie;
pub use super::favorite::Entity as Favorite;
pub use super::film::Entity as Film;
pub use super::film_character::Entity as FilmCharacter;
pub use super::film_planet::Entity as FilmPlanet;
pub use super::film_specie::Entity as FilmSpecie;
pub use super::planet::Entity as Planet;
pub use super::specie::Entity as Specie;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_pilot::Entity as VehiclePilot;
