use entity::prelude::*;
use entity::*;

use itertools::Itertools;

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, TransactionTrait};

use crate::dto;
use crate::error::{db_error, GenericError};
use crate::standings::{self, HoleResult, OverallStandings, Roster};

/// Roster and scores read together, so standings never mix two states of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub roster: Roster,
    pub scores: Vec<dto::Score>,
}

pub async fn list_teams(db: &impl ConnectionTrait) -> Result<Vec<dto::Team>, GenericError> {
    Ok(Team::find()
        .order_by_asc(team::Column::Id)
        .all(db)
        .await
        .map_err(db_error("Unable to get teams from database"))?
        .into_iter()
        .map(dto::Team::from)
        .collect_vec())
}

pub async fn team_exists(db: &impl ConnectionTrait, team_id: i32) -> Result<bool, GenericError> {
    Ok(Team::find_by_id(team_id)
        .one(db)
        .await
        .map_err(db_error("Unable to get team from database"))?
        .is_some())
}

pub async fn list_players(db: &impl ConnectionTrait) -> Result<Vec<dto::Player>, GenericError> {
    Ok(User::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(db_error("Unable to get users from database"))?
        .into_iter()
        .map(dto::Player::from)
        .collect_vec())
}

pub async fn list_players_by_team(
    db: &impl ConnectionTrait,
    team_id: i32,
) -> Result<Vec<dto::Player>, GenericError> {
    Ok(User::find()
        .filter(user::Column::TeamId.eq(team_id))
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(db_error("Unable to get team members from database"))?
        .into_iter()
        .map(dto::Player::from)
        .collect_vec())
}

pub async fn player_exists(db: &impl ConnectionTrait, user_id: i32) -> Result<bool, GenericError> {
    Ok(User::find_by_id(user_id)
        .one(db)
        .await
        .map_err(db_error("Unable to get user from database"))?
        .is_some())
}

pub async fn list_holes(db: &impl ConnectionTrait) -> Result<Vec<dto::Hole>, GenericError> {
    Ok(Hole::find()
        .order_by_asc(hole::Column::Id)
        .all(db)
        .await
        .map_err(db_error("Unable to get holes from database"))?
        .into_iter()
        .map(dto::Hole::from)
        .collect_vec())
}

pub async fn get_hole(
    db: &impl ConnectionTrait,
    hole_id: i32,
) -> Result<Option<dto::Hole>, GenericError> {
    Ok(Hole::find_by_id(hole_id)
        .one(db)
        .await
        .map_err(db_error("Unable to get hole from database"))?
        .map(dto::Hole::from))
}

pub async fn list_scores(db: &impl ConnectionTrait) -> Result<Vec<dto::Score>, GenericError> {
    Ok(UserScore::find()
        .order_by_asc(user_score::Column::Id)
        .all(db)
        .await
        .map_err(db_error("Unable to get scores from database"))?
        .into_iter()
        .map(dto::Score::from)
        .collect_vec())
}

pub async fn list_scores_by_hole(
    db: &impl ConnectionTrait,
    hole_id: i32,
) -> Result<Vec<dto::Score>, GenericError> {
    Ok(UserScore::find()
        .filter(user_score::Column::HoleId.eq(hole_id))
        .order_by_asc(user_score::Column::Id)
        .all(db)
        .await
        .map_err(db_error("Unable to get hole scores from database"))?
        .into_iter()
        .map(dto::Score::from)
        .collect_vec())
}

pub async fn get_score(
    db: &impl ConnectionTrait,
    user_id: i32,
    hole_id: i32,
) -> Result<Option<dto::Score>, GenericError> {
    Ok(UserScore::find()
        .filter(
            user_score::Column::UserId
                .eq(user_id)
                .and(user_score::Column::HoleId.eq(hole_id)),
        )
        .one(db)
        .await
        .map_err(db_error("Unable to get score from database"))?
        .map(dto::Score::from))
}

pub async fn load_roster(db: &impl ConnectionTrait) -> Result<Roster, GenericError> {
    Ok(Roster {
        teams: list_teams(db).await?,
        players: list_players(db).await?,
        holes: list_holes(db).await?,
    })
}

pub async fn load_snapshot(db: &DatabaseConnection) -> Result<Snapshot, GenericError> {
    let txn = db
        .begin()
        .await
        .map_err(db_error("Unable to start snapshot transaction"))?;
    let roster = load_roster(&txn).await?;
    let scores = list_scores(&txn).await?;
    txn.commit()
        .await
        .map_err(db_error("Unable to finish snapshot transaction"))?;
    Ok(Snapshot { roster, scores })
}

pub async fn get_standings(db: &DatabaseConnection) -> Result<OverallStandings, GenericError> {
    let snapshot = load_snapshot(db).await?;
    Ok(snapshot.roster.standings(&snapshot.scores))
}

pub async fn get_hole_standings(
    db: &DatabaseConnection,
    hole_id: i32,
) -> Result<HoleResult, GenericError> {
    let snapshot = load_snapshot(db).await?;
    let hole = snapshot
        .roster
        .holes
        .iter()
        .find(|hole| hole.id == hole_id)
        .ok_or(GenericError::NotFound("Hole not found"))?;
    Ok(standings::compute_hole_result(
        hole,
        &snapshot.roster.teams,
        &snapshot.roster.players,
        &snapshot.scores,
    ))
}

/// Every player with their sips for the hole, `None` where nothing is recorded yet.
pub async fn get_scorecard(
    db: &impl ConnectionTrait,
    hole_id: i32,
) -> Result<Vec<dto::ScorecardEntry>, GenericError> {
    if get_hole(db, hole_id).await?.is_none() {
        return Err(GenericError::NotFound("Hole not found"));
    }
    let scores = list_scores_by_hole(db, hole_id).await?;
    Ok(list_players(db)
        .await?
        .into_iter()
        .map(|player| {
            let sips = scores
                .iter()
                .find(|score| score.user_id == player.id)
                .map(|score| score.sips);
            dto::ScorecardEntry { player, sips }
        })
        .collect_vec())
}
