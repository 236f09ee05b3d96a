use rocket::figment::providers::{Env, Serialized};
use rocket::figment::Figment;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};

/// Settings the HTTP server does not own. Address and port stay with Rocket's
/// own configuration (`ROCKET_PORT`, `Rocket.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    pub database_url: String,
    pub sqlx_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://pub_golf.db?mode=rwc".to_string(),
            sqlx_logging: false,
        }
    }
}

impl AppConfig {
    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Defaults overridden by `DATABASE_URL` and `SQLX_LOGGING`.
    pub fn figment() -> Figment {
        Self::defaults().merge(Env::raw().only(&["database_url", "sqlx_logging"]))
    }

    pub fn from_env() -> Result<Self, rocket::figment::Error> {
        Self::figment().extract()
    }

    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);
        Database::connect(opt).await
    }
}
