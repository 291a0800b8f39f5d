//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so call sites don't import from the generated `entity`
//! crate directly.

/// A user account. Owns zero or more [`FavoriteModel`] rows.
pub type UserModel = entity::user::Model;

/// A film, linked many-to-many with characters, species, and planets.
pub type FilmModel = entity::film::Model;

/// A character, optionally tied to a homeworld planet.
pub type CharacterModel = entity::character::Model;

/// A species, optionally tied to a homeworld planet.
pub type SpecieModel = entity::specie::Model;

/// A planet. Referenced by character/specie homeworlds and film appearances.
pub type PlanetModel = entity::planet::Model;

/// A vehicle, linked many-to-many with its pilot characters.
pub type VehicleModel = entity::vehicle::Model;

/// A user's bookmark on exactly one catalog row (character, planet, or
/// vehicle).
pub type FavoriteModel = entity::favorite::Model;
