use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use sea_orm::DatabaseConnection;

use service::dto::{Hole, Player, Score, ScorecardEntry, Team};
use service::standings::{HoleResult, OverallStandings};

use crate::error::{Error, HoleError, ScoreError, TeamError};

#[openapi(tag = "Team")]
#[get("/teams")]
pub(crate) async fn get_teams(db: &State<DatabaseConnection>) -> Result<Json<Vec<Team>>, Error> {
    Ok(Json(service::list_teams(db.inner()).await?))
}

/// # Members of a team
///
/// # Errors
///
/// - `TeamError::NotFound` - No team has this id
#[openapi(tag = "Team")]
#[get("/teams/<team_id>/users")]
pub(crate) async fn get_team_users(
    db: &State<DatabaseConnection>,
    team_id: i32,
) -> Result<Json<Vec<Player>>, Error> {
    if !service::team_exists(db.inner(), team_id).await? {
        return Err(TeamError::NotFound.into());
    }
    Ok(Json(service::list_players_by_team(db.inner(), team_id).await?))
}

#[openapi(tag = "User")]
#[get("/users")]
pub(crate) async fn get_users(db: &State<DatabaseConnection>) -> Result<Json<Vec<Player>>, Error> {
    Ok(Json(service::list_players(db.inner()).await?))
}

#[openapi(tag = "Hole")]
#[get("/holes")]
pub(crate) async fn get_holes(db: &State<DatabaseConnection>) -> Result<Json<Vec<Hole>>, Error> {
    Ok(Json(service::list_holes(db.inner()).await?))
}

#[openapi(tag = "Hole")]
#[get("/holes/<hole_id>")]
pub(crate) async fn get_hole(
    db: &State<DatabaseConnection>,
    hole_id: i32,
) -> Result<Json<Hole>, Error> {
    match service::get_hole(db.inner(), hole_id).await? {
        Some(hole) => Ok(Json(hole)),
        None => Err(HoleError::NotFound.into()),
    }
}

#[openapi(tag = "Score")]
#[get("/holes/<hole_id>/scores")]
pub(crate) async fn get_hole_scores(
    db: &State<DatabaseConnection>,
    hole_id: i32,
) -> Result<Json<Vec<Score>>, Error> {
    if service::get_hole(db.inner(), hole_id).await?.is_none() {
        return Err(HoleError::NotFound.into());
    }
    Ok(Json(service::list_scores_by_hole(db.inner(), hole_id).await?))
}

/// # Scorecard of a hole
///
/// Every player with their sips for the hole, `null` where nothing is recorded yet.
#[openapi(tag = "Score")]
#[get("/holes/<hole_id>/scorecard")]
pub(crate) async fn get_hole_scorecard(
    db: &State<DatabaseConnection>,
    hole_id: i32,
) -> Result<Json<Vec<ScorecardEntry>>, Error> {
    Ok(Json(service::get_scorecard(db.inner(), hole_id).await?))
}

/// # Team results for one hole
///
/// Average sips per team, difference from par, and the leading team.
#[openapi(tag = "Standings")]
#[get("/holes/<hole_id>/standings")]
pub(crate) async fn get_hole_standings(
    db: &State<DatabaseConnection>,
    hole_id: i32,
) -> Result<Json<HoleResult>, Error> {
    Ok(Json(service::get_hole_standings(db.inner(), hole_id).await?))
}

#[openapi(tag = "Score")]
#[get("/users/<user_id>/holes/<hole_id>/score")]
pub(crate) async fn get_user_score(
    db: &State<DatabaseConnection>,
    user_id: i32,
    hole_id: i32,
) -> Result<Json<Score>, Error> {
    match service::get_score(db.inner(), user_id, hole_id).await? {
        Some(score) => Ok(Json(score)),
        None => Err(ScoreError::NotFound.into()),
    }
}

#[openapi(tag = "Score")]
#[get("/scores")]
pub(crate) async fn get_scores(db: &State<DatabaseConnection>) -> Result<Json<Vec<Score>>, Error> {
    Ok(Json(service::list_scores(db.inner()).await?))
}

/// # Overall standings
///
/// Results for every hole, the number of holes each team has won, and the
/// overall leader. Level teams are not reported as a tie: the team listed
/// first wins.
#[openapi(tag = "Standings")]
#[get("/standings")]
pub(crate) async fn get_standings(
    db: &State<DatabaseConnection>,
) -> Result<Json<OverallStandings>, Error> {
    Ok(Json(service::get_standings(db.inner()).await?))
}
