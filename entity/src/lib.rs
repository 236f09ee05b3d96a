pub mod prelude;

pub mod hole;
pub mod team;
pub mod user;
pub mod user_score;
