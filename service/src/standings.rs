//! Team standings for pub golf.
//!
//! Everything here is a pure transformation of in-memory records. Scores that
//! point at unknown players or holes, and players without a team, simply do not
//! count; nothing in this module fails.
//!
//! Lower average sips is better. When two teams are level, the one that comes
//! first in the team list is reported as the leader, both per hole and overall.

use std::collections::HashMap;

use itertools::Itertools;
use rocket_okapi::okapi::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::dto::{Hole, Player, Score, Team};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamHoleResult {
    pub team: Team,
    /// `None` until a member of the team has scored the hole.
    pub average_sips: Option<f64>,
    pub difference_from_par: Option<f64>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    pub hole: Hole,
    pub team_results: Vec<TeamHoleResult>,
    pub winning_team: Option<Team>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamTally {
    pub team: Team,
    pub holes_won: u32,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverallStandings {
    pub hole_results: Vec<HoleResult>,
    pub team_tallies: Vec<TeamTally>,
    pub overall_winner: Option<Team>,
}

/// The reference data a tournament is scored against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub holes: Vec<Hole>,
}

impl Roster {
    pub fn hole_result(&self, hole: &Hole, scores: &[Score]) -> HoleResult {
        compute_hole_result(hole, &self.teams, &self.players, scores)
    }

    pub fn standings(&self, scores: &[Score]) -> OverallStandings {
        compute_overall_standings(&self.holes, &self.teams, &self.players, scores)
    }
}

pub fn compute_hole_result(
    hole: &Hole,
    teams: &[Team],
    players: &[Player],
    scores: &[Score],
) -> HoleResult {
    let team_of: HashMap<i32, i32> = players
        .iter()
        .filter_map(|player| player.team_id.map(|team_id| (player.id, team_id)))
        .collect();

    // A repeated (player, hole) pair keeps its last value, as the store's upsert would.
    let sips_by_player: HashMap<i32, i32> = scores
        .iter()
        .filter(|score| score.hole_id == hole.id)
        .map(|score| (score.user_id, score.sips))
        .collect();

    let sips_by_team = sips_by_player
        .iter()
        .filter_map(|(player_id, sips)| team_of.get(player_id).map(|team_id| (*team_id, *sips)))
        .into_group_map();

    let team_results = teams
        .iter()
        .map(|team| {
            let average_sips = sips_by_team.get(&team.id).and_then(|sips| mean(sips));
            TeamHoleResult {
                team: team.clone(),
                average_sips,
                difference_from_par: average_sips.map(|average| average - f64::from(hole.par)),
            }
        })
        .collect_vec();

    let winning_team = leading_team(&team_results).cloned();

    HoleResult {
        hole: hole.clone(),
        team_results,
        winning_team,
    }
}

pub fn compute_overall_standings(
    holes: &[Hole],
    teams: &[Team],
    players: &[Player],
    scores: &[Score],
) -> OverallStandings {
    let hole_results = holes
        .iter()
        .map(|hole| compute_hole_result(hole, teams, players, scores))
        .collect_vec();

    let wins = hole_results
        .iter()
        .filter_map(|result| result.winning_team.as_ref())
        .counts_by(|team| team.id);

    let team_tallies = teams
        .iter()
        .map(|team| TeamTally {
            team: team.clone(),
            holes_won: wins
                .get(&team.id)
                .map_or(0, |count| u32::try_from(*count).unwrap_or(u32::MAX)),
        })
        .collect_vec();

    let mut most_wins = 0;
    let mut overall_winner = None;
    for tally in &team_tallies {
        if tally.holes_won > most_wins {
            most_wins = tally.holes_won;
            overall_winner = Some(tally.team.clone());
        }
    }

    OverallStandings {
        hole_results,
        team_tallies,
        overall_winner,
    }
}

fn mean(sips: &[i32]) -> Option<f64> {
    if sips.is_empty() {
        return None;
    }
    let total: i64 = sips.iter().map(|s| i64::from(*s)).sum();
    Some(total as f64 / sips.len() as f64)
}

/// First team with the strictly lowest average.
fn leading_team(results: &[TeamHoleResult]) -> Option<&Team> {
    let mut leader: Option<(&Team, f64)> = None;
    for result in results {
        let Some(average) = result.average_sips else {
            continue;
        };
        match leader {
            Some((_, best)) if average >= best => {}
            _ => leader = Some((&result.team, average)),
        }
    }
    leader.map(|(team, _)| team)
}
