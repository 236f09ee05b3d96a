use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(crate) enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub(crate) enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    TeamId,
}

#[derive(DeriveIden)]
pub(crate) enum Hole {
    #[sea_orm(iden = "holes")]
    Table,
    Id,
    Name,
    Par,
    Location,
    Time,
}

#[derive(DeriveIden)]
pub(crate) enum UserScore {
    #[sea_orm(iden = "user_scores")]
    Table,
    Id,
    UserId,
    HoleId,
    Sips,
}
