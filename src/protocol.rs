//! Messages crossing the engine boundary: inbound input events, outbound
//! presentation requests and the outcome record sent to the result endpoint.

use crate::core::{CoinView, Decision, GameResult};

/// Events produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PlayerChoseFlip,
    PlayerChoseDontFlip,
    /// Begin a new game. Only honoured when no game is running.
    StartRequested,
}

impl InputEvent {
    /// Decision carried by the event, if it is a player choice.
    pub fn decision(self) -> Option<Decision> {
        match self {
            InputEvent::PlayerChoseFlip => Some(Decision::Flip),
            InputEvent::PlayerChoseDontFlip => Some(Decision::DontFlip),
            InputEvent::StartRequested => None,
        }
    }
}

impl From<Decision> for InputEvent {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Flip => InputEvent::PlayerChoseFlip,
            Decision::DontFlip => InputEvent::PlayerChoseDontFlip,
        }
    }
}

/// Requests emitted towards whatever renders the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Coin as the player may currently see it.
    ShowState(CoinView),
    /// Status line. An empty string clears it.
    ShowMessage(&'static str),
    /// Offer the flip / don't-flip choice for player turn 1 or 2.
    PromptPlayerChoice { turn: u8 },
    /// Withdraw the choice once a decision was accepted.
    DismissPlayerChoice,
    ShowResult(GameResult),
}

/// Body of the result notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OutcomeReport {
    pub player_wins: bool,
    pub computer_wins: bool,
}

impl From<&GameResult> for OutcomeReport {
    fn from(result: &GameResult) -> Self {
        Self {
            player_wins: result.player_wins(),
            computer_wins: result.computer_wins(),
        }
    }
}
