//! HTTP handlers delegating to the standings core

pub mod health;
pub mod league;
pub mod season;
