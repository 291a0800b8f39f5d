//! Holocron server library.
//!
//! A Star Wars catalog backed by a relational store: films, characters,
//! species, planets, and vehicles, plus user accounts and per-user favorites.
//! The crate exposes the data-access layer (`data`), the HTTP admin API
//! (`controller`/`router`), and the startup wiring that runs migrations and
//! serves the router.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
