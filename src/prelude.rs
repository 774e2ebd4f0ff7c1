//! Commonly used types and utilities for ease of import.

pub use crate::{
    CoinState, CoinView, Decision, GameEngine, GameError, GamePhase, GameResult, InputEvent,
    Presentation,
};

pub use crate::{
    GameSession, NullReporter, Pacing, PlayerController, PresentationSink, ResultReporter,
    SessionConfig, SessionError,
};
