//! Application models and type definitions.
//!
//! DTOs for the admin API, repository input types, application state, and
//! database model type aliases. These bridge the gap between database
//! entities and HTTP handlers.

pub mod api;
pub mod app;
pub mod catalog;
pub mod db;
pub mod user;
