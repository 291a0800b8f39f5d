//! Catalog repositories.
//!
//! One repository per catalog entity. Many-to-many edges are owned by one
//! side: films own their character/planet/specie edges, characters own the
//! specie edge, vehicles own the pilot edge.

pub mod character;
pub mod film;
pub mod planet;
pub mod specie;
pub mod vehicle;

#[cfg(test)]
mod tests;
