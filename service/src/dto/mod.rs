mod forms;

pub use forms::*;

use chrono::NaiveDateTime;
use rocket_okapi::okapi::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

/// A player. Exposed as a "user" on the wire, like the routes that serve it.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub team_id: Option<i32>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    pub id: i32,
    pub name: String,
    pub par: i32,
    pub location: Option<String>,
    pub time: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub user_id: i32,
    pub hole_id: i32,
    pub sips: i32,
}

/// One row of a hole's scorecard: every player, scored or not.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct ScorecardEntry {
    pub player: Player,
    pub sips: Option<i32>,
}

impl From<entity::team::Model> for Team {
    fn from(model: entity::team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<entity::user::Model> for Player {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            team_id: model.team_id,
        }
    }
}

impl From<entity::hole::Model> for Hole {
    fn from(model: entity::hole::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            par: model.par,
            location: model.location,
            time: model.time,
        }
    }
}

impl From<entity::user_score::Model> for Score {
    fn from(model: entity::user_score::Model) -> Self {
        Self {
            user_id: model.user_id,
            hole_id: model.hole_id,
            sips: model.sips,
        }
    }
}
