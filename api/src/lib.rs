mod config;
pub mod error;
mod mutation;
mod query;

use rocket_okapi::openapi_get_routes;

#[macro_use]
extern crate rocket;

use dotenvy::dotenv;
use migration::MigratorTrait;
use rocket::serde::json::Json;
use rocket::{Build, Catcher, Rocket, Route};
use rocket_cors::CorsOptions;
use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, HideShowConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};
use sea_orm::DatabaseConnection;

pub use config::AppConfig;
pub use error::{Error, ErrorBody, LaunchError};

#[catch(400)]
fn bad_request() -> Json<ErrorBody> {
    Json("Invalid input data".into())
}

#[catch(404)]
fn general_not_found() -> Json<ErrorBody> {
    Json("Api endpoint not found".into())
}

#[catch(422)]
fn unprocessable_entity() -> Json<ErrorBody> {
    Json("Invalid input data".into())
}

#[catch(500)]
fn internal_error() -> Json<ErrorBody> {
    Json("Unknown error".into())
}

/// Every API route, plus `/openapi.json`.
pub fn routes() -> Vec<Route> {
    openapi_get_routes![
        query::get_teams,
        query::get_team_users,
        query::get_users,
        query::get_holes,
        query::get_hole,
        query::get_hole_scores,
        query::get_hole_scorecard,
        query::get_hole_standings,
        query::get_user_score,
        query::get_scores,
        query::get_standings,
        mutation::update_hole_par,
        mutation::update_user_score,
        mutation::reset,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![bad_request, general_not_found, unprocessable_entity, internal_error]
}

/// The API over an already migrated database, without CORS or docs UI.
pub fn build(db: DatabaseConnection) -> Rocket<Build> {
    rocket::build()
        .manage(db)
        .mount("/", routes())
        .register("/", catchers())
}

pub async fn launch() -> Result<Rocket<Build>, LaunchError> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let db = config.connect().await?;
    migration::Migrator::up(&db, None).await?;
    log::info!("Database schema is up to date");

    let cors = CorsOptions::default().to_cors()?;

    Ok(build(db)
        .attach(cors)
        .mount(
            "/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/rapidoc",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "../openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        ))
}
