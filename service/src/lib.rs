pub mod dto;
pub mod error;
pub mod mutation;
pub mod query;
pub mod standings;

pub use mutation::*;
pub use query::*;

pub use sea_orm;

#[cfg(test)]
mod test_utils;
