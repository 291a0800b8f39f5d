//! User account and favorite repositories.

pub mod favorite;
pub mod user;

#[cfg(test)]
mod tests;
