//! Common types for the coin game: coin faces, decisions, actors, phases and errors.

use ::core::fmt;

/// Face of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CoinState {
    Heads,
    Tails,
}

impl CoinState {
    /// The opposite face.
    pub const fn flipped(self) -> Self {
        match self {
            CoinState::Heads => CoinState::Tails,
            CoinState::Tails => CoinState::Heads,
        }
    }
}

impl fmt::Display for CoinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinState::Heads => write!(f, "Heads"),
            CoinState::Tails => write!(f, "Tails"),
        }
    }
}

/// A flip / don't-flip choice made by either actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    Flip,
    DontFlip,
}

impl Decision {
    pub const fn is_flip(self) -> bool {
        matches!(self, Decision::Flip)
    }

    /// Transition rule: a flip turns the coin over, anything else leaves it alone.
    pub const fn apply(self, coin: CoinState) -> CoinState {
        match self {
            Decision::Flip => coin.flipped(),
            Decision::DontFlip => coin,
        }
    }
}

impl From<bool> for Decision {
    fn from(flip: bool) -> Self {
        if flip {
            Decision::Flip
        } else {
            Decision::DontFlip
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Flip => write!(f, "Flip"),
            Decision::DontFlip => write!(f, "Don't Flip"),
        }
    }
}

/// Who made a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    Computer,
    Player,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Computer => f.pad("Computer"),
            Actor::Player => f.pad("Player"),
        }
    }
}

/// One decision in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub actor: Actor,
    pub decision: Decision,
}

/// What the player is allowed to see of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinView {
    /// Face is concealed while the game is in play.
    Hidden,
    Face(CoinState),
}

impl fmt::Display for CoinView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinView::Hidden => write!(f, "?"),
            CoinView::Face(face) => write!(f, "{}", face),
        }
    }
}

/// Position of a game in its fixed turn sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Idle,
    ComputerTurn1,
    AwaitingPlayerTurn1,
    ComputerTurn2,
    AwaitingPlayerTurn2,
    Resolved,
}

impl GamePhase {
    pub const fn is_computer_turn(self) -> bool {
        matches!(self, GamePhase::ComputerTurn1 | GamePhase::ComputerTurn2)
    }

    /// Player turn number (1 or 2) when waiting on the player.
    pub const fn player_turn(self) -> Option<u8> {
        match self {
            GamePhase::AwaitingPlayerTurn1 => Some(1),
            GamePhase::AwaitingPlayerTurn2 => Some(2),
            _ => None,
        }
    }

    pub const fn is_awaiting_player(self) -> bool {
        self.player_turn().is_some()
    }

    /// Idle and Resolved are the only phases where a new game may begin.
    pub const fn accepts_start(self) -> bool {
        matches!(self, GamePhase::Idle | GamePhase::Resolved)
    }

    /// True while the coin face must stay concealed.
    pub const fn conceals_coin(self) -> bool {
        !self.accepts_start()
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Idle => "idle",
            GamePhase::ComputerTurn1 => "on the computer's first turn",
            GamePhase::AwaitingPlayerTurn1 => "awaiting the player's first turn",
            GamePhase::ComputerTurn2 => "on the computer's second turn",
            GamePhase::AwaitingPlayerTurn2 => "awaiting the player's second turn",
            GamePhase::Resolved => "resolved",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`GameEngine`](crate::GameEngine) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// An event arrived while the game was in a phase that does not accept it.
    #[error("{operation} rejected: game is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: GamePhase,
    },
    /// The result was requested before the final turn.
    #[error("no result yet: game is {phase}")]
    NotResolved { phase: GamePhase },
}
