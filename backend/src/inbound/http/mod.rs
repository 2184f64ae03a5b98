//! HTTP inbound adapter exposing REST endpoints.

pub mod health;
pub mod outcome;
pub mod payload;
pub mod schemas;
pub mod state;
pub mod users;
