use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use sea_orm::DatabaseConnection;

use service::dto::{Message, ParUpdate, SipsUpdate};

use crate::error::Error;

/// # Set the par of a hole
///
/// Any integer is accepted.
///
/// # Errors
///
/// - `404` - The hole does not exist
#[openapi(tag = "Hole")]
#[put("/holes/<hole_id>", data = "<update>")]
pub(crate) async fn update_hole_par(
    db: &State<DatabaseConnection>,
    hole_id: i32,
    update: Json<ParUpdate>,
) -> Result<Json<Message>, Error> {
    service::set_hole_par(db.inner(), hole_id, update.par).await?;
    Ok(Json("Hole par updated successfully".into()))
}

/// # Record a player's sips on a hole
///
/// A second submission for the same player and hole replaces the first.
///
/// # Errors
///
/// - `400` - `sips` is negative
///
/// - `404` - The user or the hole does not exist
#[openapi(tag = "Score")]
#[put("/users/<user_id>/holes/<hole_id>/score", data = "<update>")]
pub(crate) async fn update_user_score(
    db: &State<DatabaseConnection>,
    user_id: i32,
    hole_id: i32,
    update: Json<SipsUpdate>,
) -> Result<Json<Message>, Error> {
    service::upsert_score(db.inner(), user_id, hole_id, update.sips).await?;
    Ok(Json("Score updated successfully".into()))
}

/// # Start over
///
/// Deletes every score and sets every par back to 0, in one transaction.
#[openapi(tag = "Standings")]
#[post("/reset")]
pub(crate) async fn reset(db: &State<DatabaseConnection>) -> Result<Json<Message>, Error> {
    service::reset_all(db.inner()).await?;
    Ok(Json("Scores and pars reset successfully".into()))
}
