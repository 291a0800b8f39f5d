//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain: the catalog entities and their many-to-many edges,
//! and user accounts with their favorites.

pub mod catalog;
pub mod user;
