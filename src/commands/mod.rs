//! Command implementations for the matchday CLI

pub mod common;
pub mod favorite;
pub mod league;
pub mod leagues;
pub mod refresh;
pub mod send;
pub mod serve;
pub mod show;
pub mod teams;
pub mod watch;

pub use common::CommandContext;
