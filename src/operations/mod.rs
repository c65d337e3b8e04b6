pub mod creation;
pub mod query;
