//! HTTP handlers for the admin API.
//!
//! Each handler builds the repositories it needs from [`AppState`], maps
//! models into DTOs, and lets [`Error`]'s `IntoResponse` impl translate
//! failures into status codes.
//!
//! [`AppState`]: crate::model::app::AppState
//! [`Error`]: crate::error::Error

pub mod character;
pub mod film;
pub mod planet;
pub mod specie;
pub mod user;
pub mod vehicle;
