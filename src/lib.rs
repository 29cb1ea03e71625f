//! Kingdom Wars tower-conquest bot.
//!
//! The decision policy lives in [`game`]; [`http`] is the thin actix-web shell
//! the game engine talks to every turn.

pub mod config;
pub mod game;
pub mod http;
pub mod metrics;
pub mod protocol;
