extern crate rocket;

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;
    use rocket::config::LogLevel;
    use rocket::figment::Profile;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use rocket::{async_test, Config};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use serde_json::{json, Value};
    use service::dto::{Hole, Message, Player, Score, SipsUpdate, Team};

    async fn make_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("Database must exist");
        migration::Migrator::up(&db, None)
            .await
            .expect("Migration success");
        db
    }

    async fn make_tracked_client() -> Client {
        let config = Config {
            profile: Profile::Global,
            log_level: LogLevel::Critical,
            ..Default::default()
        };
        Client::tracked(api::build(make_db().await).configure(config))
            .await
            .expect("valid rocket instance")
    }

    async fn put_sips(client: &Client, user_id: i32, hole_id: i32, sips: i32) -> Status {
        client
            .put(format!("/users/{user_id}/holes/{hole_id}/score"))
            .json(&SipsUpdate { sips })
            .dispatch()
            .await
            .status()
    }

    async fn put_par(client: &Client, hole_id: i32, par: i32) -> Status {
        client
            .put(format!("/holes/{hole_id}"))
            .json(&json!({ "par": par }))
            .dispatch()
            .await
            .status()
    }

    async fn get_json(client: &Client, uri: &str) -> (Status, Value) {
        let res = client.get(uri.to_string()).dispatch().await;
        let status = res.status();
        (status, res.into_json::<Value>().await.unwrap_or(Value::Null))
    }

    #[async_test]
    async fn teams_and_their_members() {
        let client = make_tracked_client().await;

        let teams = client
            .get("/teams")
            .dispatch()
            .await
            .into_json::<Vec<Team>>()
            .await
            .unwrap();
        let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Blue", "Purple", "Red", "Green"]);

        let members = client
            .get("/teams/2/users")
            .dispatch()
            .await
            .into_json::<Vec<Player>>()
            .await
            .unwrap();
        let names: Vec<_> = members.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Hamish", "Clair", "Riley"]);
        assert!(members.iter().all(|p| p.team_id == Some(2)));

        let (status, body) = get_json(&client, "/teams/99/users").await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body, json!({ "error": "Team not found" }));

        let (status, body) = get_json(&client, "/users").await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body.as_array().map(Vec::len), Some(13));
    }

    #[async_test]
    async fn hole_wire_format() {
        let client = make_tracked_client().await;

        let (status, body) = get_json(&client, "/holes/1").await;

        assert_eq!(status, Status::Ok);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Red Brick Hotel",
                "par": 0,
                "location": "83 Annerley Road Woolloongabba",
                "time": "2024-10-19T14:00:00",
            })
        );

        let (status, body) = get_json(&client, "/holes/99").await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body, json!({ "error": "Hole not found" }));
    }

    #[async_test]
    async fn par_can_be_changed() {
        let client = make_tracked_client().await;

        let res = client
            .put("/holes/4")
            .json(&json!({ "par": 3 }))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(
            res.into_json::<Message>().await,
            Some(Message::from("Hole par updated successfully"))
        );

        let holes = client
            .get("/holes")
            .dispatch()
            .await
            .into_json::<Vec<Hole>>()
            .await
            .unwrap();
        let pars: Vec<_> = holes.iter().map(|h| h.par).collect();
        assert_eq!(pars, vec![0, 0, 0, 3, 0, 0, 0, 0, 0]);

        assert_eq!(put_par(&client, 99, 3).await, Status::NotFound);
    }

    #[async_test]
    async fn resubmitting_a_score_overwrites_it() {
        let client = make_tracked_client().await;

        assert_eq!(put_sips(&client, 1, 1, 3).await, Status::Ok);
        assert_eq!(put_sips(&client, 1, 1, 5).await, Status::Ok);

        let score = client
            .get("/users/1/holes/1/score")
            .dispatch()
            .await
            .into_json::<Score>()
            .await;
        assert_eq!(
            score,
            Some(Score {
                user_id: 1,
                hole_id: 1,
                sips: 5
            })
        );
        let (_, scores) = get_json(&client, "/scores").await;
        assert_eq!(scores.as_array().map(Vec::len), Some(1));
        let (_, hole_scores) = get_json(&client, "/holes/1/scores").await;
        assert_eq!(hole_scores, json!([{ "user_id": 1, "hole_id": 1, "sips": 5 }]));
    }

    #[async_test]
    async fn bad_submissions_are_rejected() {
        let client = make_tracked_client().await;

        assert_eq!(put_sips(&client, 1, 1, -1).await, Status::BadRequest);
        assert_eq!(put_sips(&client, 999, 1, 1).await, Status::NotFound);
        assert_eq!(put_sips(&client, 1, 999, 1).await, Status::NotFound);

        let res = client
            .put("/users/1/holes/1/score")
            .header(ContentType::JSON)
            .body(r#"{ "sips": "three" }"#)
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::UnprocessableEntity);
        assert_eq!(
            res.into_json::<Value>().await,
            Some(json!({ "error": "Invalid input data" }))
        );

        let res = client
            .put("/users/abc/holes/1/score")
            .json(&SipsUpdate { sips: 1 })
            .dispatch()
            .await;
        assert_eq!(res.status().class(), rocket::http::StatusClass::ClientError);
        assert!(res.into_json::<Value>().await.unwrap()["error"].is_string());

        let (_, scores) = get_json(&client, "/scores").await;
        assert_eq!(scores, json!([]));
    }

    #[async_test]
    async fn json_bodies_are_read_whatever_the_content_type() {
        let client = make_tracked_client().await;

        let res = client
            .put("/users/1/holes/1/score")
            .header(ContentType::Plain)
            .body(r#"{"sips": 3}"#)
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);

        let res = client.put("/holes/1").body(r#"{"par": 3}"#).dispatch().await;
        assert_eq!(res.status(), Status::Ok);

        let res = client
            .put("/users/1/holes/2/score")
            .header(ContentType::Plain)
            .body(r#"{"sips": -1}"#)
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::BadRequest);

        let (_, score) = get_json(&client, "/users/1/holes/1/score").await;
        assert_eq!(score["sips"], 3);
        let (_, hole) = get_json(&client, "/holes/1").await;
        assert_eq!(hole["par"], 3);
    }

    #[async_test]
    async fn missing_score_and_unknown_route() {
        let client = make_tracked_client().await;

        let (status, body) = get_json(&client, "/users/1/holes/1/score").await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body, json!({ "error": "Score not found" }));

        let (status, body) = get_json(&client, "/no/such/endpoint").await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body, json!({ "error": "Api endpoint not found" }));
    }

    #[async_test]
    async fn scorecard_shows_unscored_players_as_null() {
        let client = make_tracked_client().await;
        assert_eq!(put_sips(&client, 3, 2, 6).await, Status::Ok);

        let (status, card) = get_json(&client, "/holes/2/scorecard").await;

        assert_eq!(status, Status::Ok);
        let card = card.as_array().unwrap();
        assert_eq!(card.len(), 13);
        assert_eq!(card[0]["sips"], Value::Null);
        assert_eq!(card[2]["player"]["name"], "Emily");
        assert_eq!(card[2]["sips"], 6);
    }

    // Blue: players 1-4, Purple: 5-7, Red: 8-10, Green: 11-13.
    #[async_test]
    async fn standings_after_three_holes() {
        let client = make_tracked_client().await;
        for hole_id in 1..=3 {
            assert_eq!(put_par(&client, hole_id, 2).await, Status::Ok);
            for user_id in 1..=13 {
                let sips = match (hole_id, user_id) {
                    (1 | 2, 8..=10) => 1,
                    (3, 1..=4) => 0,
                    _ => 3,
                };
                assert_eq!(put_sips(&client, user_id, hole_id, sips).await, Status::Ok);
            }
        }

        let (status, standings) = get_json(&client, "/standings").await;
        assert_eq!(status, Status::Ok);

        let holes = standings["holeResults"].as_array().unwrap();
        assert_eq!(holes.len(), 9);
        let winners: Vec<_> = holes.iter().map(|h| h["winningTeam"]["name"].clone()).collect();
        assert_eq!(winners[..3], [json!("Red"), json!("Red"), json!("Blue")]);
        assert!(winners[3..].iter().all(Value::is_null));
        for hole in &holes[3..] {
            assert!(hole["teamResults"]
                .as_array()
                .unwrap()
                .iter()
                .all(|t| t["averageSips"].is_null() && t["differenceFromPar"].is_null()));
        }

        let first = &holes[0]["teamResults"];
        assert_eq!(first[0]["averageSips"], json!(3.0));
        assert_eq!(first[0]["differenceFromPar"], json!(1.0));
        assert_eq!(first[2]["averageSips"], json!(1.0));
        assert_eq!(first[2]["differenceFromPar"], json!(-1.0));

        let tallies: Vec<_> = standings["teamTallies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["holesWon"].as_u64().unwrap())
            .collect();
        assert_eq!(tallies, vec![1, 0, 2, 0]);
        assert_eq!(standings["overallWinner"], json!({ "id": 3, "name": "Red" }));

        let (status, hole) = get_json(&client, "/holes/3/standings").await;
        assert_eq!(status, Status::Ok);
        assert_eq!(hole, holes[2]);
        let (status, _) = get_json(&client, "/holes/99/standings").await;
        assert_eq!(status, Status::NotFound);
    }

    #[async_test]
    async fn empty_tournament_has_no_winner() {
        let client = make_tracked_client().await;

        let (_, standings) = get_json(&client, "/standings").await;

        assert_eq!(standings["overallWinner"], Value::Null);
        assert!(standings["holeResults"]
            .as_array()
            .unwrap()
            .iter()
            .all(|h| h["winningTeam"].is_null()));
    }

    #[async_test]
    async fn reset_clears_everything() {
        let client = make_tracked_client().await;
        for hole_id in 1..=9 {
            assert_eq!(put_par(&client, hole_id, 4).await, Status::Ok);
            assert_eq!(put_sips(&client, hole_id, hole_id, 2).await, Status::Ok);
        }

        let res = client.post("/reset").dispatch().await;
        assert_eq!(res.status(), Status::Ok);

        let (_, scores) = get_json(&client, "/scores").await;
        assert_eq!(scores, json!([]));
        let holes = client
            .get("/holes")
            .dispatch()
            .await
            .into_json::<Vec<Hole>>()
            .await
            .unwrap();
        assert!(holes.iter().all(|h| h.par == 0));
    }

    #[async_test]
    async fn openapi_document_is_served() {
        let client = make_tracked_client().await;

        let (status, doc) = get_json(&client, "/openapi.json").await;

        assert_eq!(status, Status::Ok);
        assert!(doc["paths"]["/standings"].is_object());
    }
}
