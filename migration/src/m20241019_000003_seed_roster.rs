use chrono::NaiveDateTime;
use entity::prelude::{Hole, Team, User, UserScore};
use entity::{hole, team, user};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const TEAMS: [&str; 4] = ["Blue", "Purple", "Red", "Green"];

const PLAYERS: [(&str, &str); 13] = [
    ("Logan", "Blue"),
    ("Rod", "Blue"),
    ("Emily", "Blue"),
    ("Georgia", "Blue"),
    ("Hamish", "Purple"),
    ("Clair", "Purple"),
    ("Riley", "Purple"),
    ("Shak", "Red"),
    ("Bertie", "Red"),
    ("Tyler", "Red"),
    ("Sam", "Green"),
    ("Bugg", "Green"),
    ("Charlie", "Green"),
];

/// (name, location, start time)
const HOLES: [(&str, &str, &str); 9] = [
    ("Red Brick Hotel", "83 Annerley Road Woolloongabba", "2024-10-19T14:00:00"),
    ("Brisbane Brewing Co", "601 Stanley Street Woolloongabba", "2024-10-19T15:45:00"),
    ("Rose and Crown", "275 Grey Street South Bank", "2024-10-19T16:30:00"),
    ("Hop and Pickle", "6 Little Stanley Street South Brisbane", "2024-10-19T17:15:00"),
    ("The Charming Squire", "133 Grey Street South Brisbane", "2024-10-19T18:00:00"),
    ("Criterion Tavern", "239 George Street Brisbane", "2024-10-19T18:45:00"),
    ("Gilhooleys", "Albert Street & Charlotte Street Brisbane City", "2024-10-19T20:15:00"),
    ("Winghaus Edward Street", "144 Edward Street Brisbane City", "2024-10-19T21:00:00"),
    ("Pig 'n' Whistle", "123 Eagle Street Brisbane City", "2024-10-19T21:45:00"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let mut team_ids = Vec::with_capacity(TEAMS.len());
        for name in TEAMS {
            let team = team::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
            }
            .insert(db)
            .await?;
            team_ids.push((name, team.id));
        }

        for (name, team_name) in PLAYERS {
            let team_id = team_ids
                .iter()
                .find(|(team, _)| *team == team_name)
                .map(|(_, id)| *id);
            user::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
                team_id: Set(team_id),
            }
            .insert(db)
            .await?;
        }

        for (name, location, time) in HOLES {
            let time = time
                .parse::<NaiveDateTime>()
                .map_err(|e| DbErr::Custom(format!("invalid seed time {time}: {e}")))?;
            hole::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
                par: Set(0),
                location: Set(Some(location.to_string())),
                time: Set(Some(time)),
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        UserScore::delete_many().exec(db).await?;
        User::delete_many().exec(db).await?;
        Team::delete_many().exec(db).await?;
        Hole::delete_many().exec(db).await?;
        Ok(())
    }
}
