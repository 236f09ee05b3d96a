pub use sea_orm_migration::prelude::*;
mod enums;
mod m20241019_000001_create_teams_users_and_holes;
mod m20241019_000002_create_user_scores;
mod m20241019_000003_seed_roster;
mod macros;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241019_000001_create_teams_users_and_holes::Migration),
            Box::new(m20241019_000002_create_user_scores::Migration),
            Box::new(m20241019_000003_seed_roster::Migration),
        ]
    }
}
