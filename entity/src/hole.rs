use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "holes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub par: i32,
    pub location: Option<String>,
    pub time: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_score::Entity")]
    UserScore,
}

impl Related<super::user_score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserScore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
