pub use super::hole::Entity as Hole;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
pub use super::user_score::Entity as UserScore;
