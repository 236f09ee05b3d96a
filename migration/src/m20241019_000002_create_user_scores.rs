use sea_orm_migration::prelude::*;

use crate::enums::*;
use crate::macros::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserScore::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserScore::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserScore::UserId).integer().not_null())
                    .col(ColumnDef::new(UserScore::HoleId).integer().not_null())
                    .col(ColumnDef::new(UserScore::Sips).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserScore::Table, UserScore::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserScore::Table, UserScore::HoleId)
                            .to(Hole::Table, Hole::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upserts target this index with ON CONFLICT (user_id, hole_id).
        manager
            .create_index(
                Index::create()
                    .name("unique_user_hole_score")
                    .table(UserScore::Table)
                    .col(UserScore::UserId)
                    .col(UserScore::HoleId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(UserScore, manager);
        Ok(())
    }
}
