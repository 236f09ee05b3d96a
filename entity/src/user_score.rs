use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub hole_id: i32,
    pub sips: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::hole::Entity",
        from = "Column::HoleId",
        to = "super::hole::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hole,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::hole::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
