//! Core coin game engine (no_std compatible)
//!
//! This module contains the pure game logic: the coin, the four-turn phase
//! machine, the transition rule and the computer's decision policy. It needs
//! no allocator and no runtime; everything asynchronous lives in the session
//! layer on top of it.

pub mod ai;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use ai::fair_decision;
pub use common::{Actor, CoinState, CoinView, Decision, GameError, GamePhase, TurnRecord};
pub use config::*;
pub use game::{GameEngine, GameResult};
