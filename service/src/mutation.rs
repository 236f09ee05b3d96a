use entity::prelude::*;
use entity::*;

use log::{info, warn};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::ActiveValue::Set;
use sea_orm::{NotSet, TransactionTrait};

use crate::error::{db_error, GenericError};
use crate::query::{get_hole, player_exists};

/// Any integer is accepted; callers that care keep par above zero themselves.
pub async fn set_hole_par(
    db: &impl ConnectionTrait,
    hole_id: i32,
    par: i32,
) -> Result<(), GenericError> {
    if get_hole(db, hole_id).await?.is_none() {
        return Err(GenericError::NotFound("Hole not found"));
    }
    Hole::update_many()
        .col_expr(hole::Column::Par, Expr::value(par))
        .filter(hole::Column::Id.eq(hole_id))
        .exec(db)
        .await
        .map_err(db_error("Unable to update hole par"))?;
    info!("Par of hole {hole_id} set to {par}");
    Ok(())
}

/// Records `sips` for the pair, replacing whatever was there. Two writers racing on
/// the same pair both succeed and the later commit is what stays.
pub async fn upsert_score(
    db: &impl ConnectionTrait,
    user_id: i32,
    hole_id: i32,
    sips: i32,
) -> Result<(), GenericError> {
    if sips < 0 {
        return Err(GenericError::BadRequest("Invalid input data"));
    }
    if !player_exists(db, user_id).await? {
        warn!("Score submitted for unknown user {user_id}");
        return Err(GenericError::NotFound("User not found"));
    }
    if get_hole(db, hole_id).await?.is_none() {
        warn!("Score submitted for unknown hole {hole_id}");
        return Err(GenericError::NotFound("Hole not found"));
    }

    let score = user_score::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        hole_id: Set(hole_id),
        sips: Set(sips),
    };
    UserScore::insert(score)
        .on_conflict(
            OnConflict::columns([user_score::Column::UserId, user_score::Column::HoleId])
                .update_column(user_score::Column::Sips)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(db_error("Unable to save score"))?;
    Ok(())
}

/// Clears every score and zeroes every par. Either both happen or neither does.
pub async fn reset_all(db: &DatabaseConnection) -> Result<(), GenericError> {
    let txn = db
        .begin()
        .await
        .map_err(db_error("Unable to start reset transaction"))?;

    let cleared = UserScore::delete_many()
        .exec(&txn)
        .await
        .map_err(db_error("Unable to clear scores"))?;
    Hole::update_many()
        .col_expr(hole::Column::Par, Expr::value(0))
        .exec(&txn)
        .await
        .map_err(db_error("Unable to reset pars"))?;

    txn.commit()
        .await
        .map_err(db_error("Unable to commit reset"))?;
    info!("Reset: {} scores cleared, all pars set to 0", cleared.rows_affected);
    Ok(())
}
