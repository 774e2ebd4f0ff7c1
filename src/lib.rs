#![cfg_attr(not(feature = "std"), no_std)]

pub mod core;
pub mod protocol;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod presentation;
#[cfg(feature = "std")]
pub mod report;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod prelude;

pub use crate::core::*;
pub use protocol::*;
#[cfg(feature = "std")]
pub use config::{Pacing, ReportConfig, SessionConfig};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{
    AutoPlayer, CliInput, InputError, Player, PlayerController, RandomPlayer, ScriptedPlayer,
};
#[cfg(feature = "std")]
pub use presentation::{ConsoleSink, PresentationSink, RecordingSink};
#[cfg(feature = "std")]
pub use report::{HttpReporter, NullReporter, ReportError, ResultReporter};
#[cfg(feature = "std")]
pub use session::{GameSession, SessionError};
