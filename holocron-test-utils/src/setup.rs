use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database. sqlx enables
    /// `PRAGMA foreign_keys` by default, so FK and cascade behavior in
    /// tests matches the real store.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Convert the database connection into any state type constructed from
    /// it. This allows conversion to AppState without creating a circular
    /// dependency on the main holocron crate.
    pub fn app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every catalog, user, and association table, for tests that span
/// several entities (favorites, cascades, the end-to-end scenarios).
#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::Planet,
            entity::prelude::Film,
            entity::prelude::Character,
            entity::prelude::Specie,
            entity::prelude::Vehicle,
            entity::prelude::User,
            entity::prelude::Favorite,
            entity::prelude::FilmCharacter,
            entity::prelude::FilmPlanet,
            entity::prelude::FilmSpecie,
            entity::prelude::CharacterSpecie,
            entity::prelude::VehiclePilot
        )
    }};
}
