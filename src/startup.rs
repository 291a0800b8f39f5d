//! Database connection and HTTP server startup.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;

use crate::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run any pending migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bring the application up: database, migrations, router, listener.
pub async fn run(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    let state = AppState::from(db);

    let app = router::routes().with_state(state);

    let listener = TcpListener::bind(&config.address).await?;
    tracing::info!("listening on {}", config.address);

    axum::serve(listener, app).await?;

    Ok(())
}
