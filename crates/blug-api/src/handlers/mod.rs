//! Route handlers

pub mod authors;
pub mod health;
pub mod posts;
pub mod reactions;
pub mod tags;
pub mod users;
