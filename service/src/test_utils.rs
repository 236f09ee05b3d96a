use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// A fresh in-memory database, migrated and seeded with the default roster.
pub(crate) async fn make_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would otherwise get its own empty in-memory database.
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("Database must exist");
    migration::Migrator::up(&db, None)
        .await
        .expect("Migration success");
    db
}
