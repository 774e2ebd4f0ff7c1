use rand::Rng;

use super::{
    ai,
    common::{Actor, CoinState, CoinView, Decision, GameError, GamePhase, TurnRecord},
    config::{
        INITIAL_FACE, LABEL_COMPUTER_WINS, LABEL_PLAYER_WINS, PLAYER_WINNING_FACE, TURN_COUNT,
        TURN_ORDER,
    },
};

/// Outcome of a resolved game. Exactly one of the two win flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "ResultRecord")
)]
pub struct GameResult {
    final_state: CoinState,
    player_wins: bool,
    computer_wins: bool,
}

/// Unchecked wire form of [`GameResult`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultRecord {
    final_state: CoinState,
    player_wins: bool,
    computer_wins: bool,
}

#[cfg(feature = "std")]
impl TryFrom<ResultRecord> for GameResult {
    type Error = &'static str;

    fn try_from(record: ResultRecord) -> Result<Self, Self::Error> {
        let result = GameResult::from_final_state(record.final_state);
        if record.player_wins != result.player_wins || record.computer_wins != result.computer_wins
        {
            return Err("win flags do not match the final face");
        }
        Ok(result)
    }
}

impl GameResult {
    /// Apply the win rule to the revealed face.
    pub const fn from_final_state(final_state: CoinState) -> Self {
        let player_wins = matches!(final_state, PLAYER_WINNING_FACE);
        Self {
            final_state,
            player_wins,
            computer_wins: !player_wins,
        }
    }

    pub const fn final_state(&self) -> CoinState {
        self.final_state
    }

    pub const fn player_wins(&self) -> bool {
        self.player_wins
    }

    pub const fn computer_wins(&self) -> bool {
        self.computer_wins
    }

    pub const fn winner(&self) -> Actor {
        if self.player_wins {
            Actor::Player
        } else {
            Actor::Computer
        }
    }

    /// Text announced to the player.
    pub const fn label(&self) -> &'static str {
        if self.player_wins {
            LABEL_PLAYER_WINS
        } else {
            LABEL_COMPUTER_WINS
        }
    }
}

/// Core game logic: the hidden coin and the fixed four-turn sequence.
///
/// The engine is a plain value owned by its caller. Every operation is a
/// guarded transition; an operation invoked in the wrong phase returns
/// [`GameError`] and leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    coin: CoinState,
    phase: GamePhase,
    decisions: [Decision; TURN_COUNT],
    made: usize,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an idle engine showing the initial face.
    pub const fn new() -> Self {
        Self {
            coin: INITIAL_FACE,
            phase: GamePhase::Idle,
            decisions: [Decision::DontFlip; TURN_COUNT],
            made: 0,
        }
    }

    /// Begin a game. Accepted when idle or after a previous game resolved;
    /// the coin goes back to the initial face and prior decisions are dropped.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.phase.accepts_start() {
            return Err(GameError::InvalidState {
                operation: "start",
                phase: self.phase,
            });
        }
        *self = Self::new();
        self.phase = GamePhase::ComputerTurn1;
        log::debug!("game started with coin on {}", self.coin);
        Ok(())
    }

    /// Discard any game in progress and return to idle.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Draw the computer's decision and apply it.
    pub fn run_computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Decision, GameError> {
        // Checked before the draw so a rejected call does not consume randomness.
        if !self.phase.is_computer_turn() {
            return Err(GameError::InvalidState {
                operation: "run_computer_turn",
                phase: self.phase,
            });
        }
        let decision = ai::fair_decision(rng);
        self.apply_computer_decision(decision)?;
        Ok(decision)
    }

    /// Apply a computer decision chosen elsewhere (replays, scripted games).
    pub fn apply_computer_decision(&mut self, decision: Decision) -> Result<(), GameError> {
        let next = match self.phase {
            GamePhase::ComputerTurn1 => GamePhase::AwaitingPlayerTurn1,
            GamePhase::ComputerTurn2 => GamePhase::AwaitingPlayerTurn2,
            phase => {
                return Err(GameError::InvalidState {
                    operation: "computer decision",
                    phase,
                })
            }
        };
        self.record(decision);
        self.phase = next;
        Ok(())
    }

    /// Apply the player's decision for the open player turn.
    pub fn submit_player_decision(&mut self, decision: Decision) -> Result<(), GameError> {
        let next = match self.phase {
            GamePhase::AwaitingPlayerTurn1 => GamePhase::ComputerTurn2,
            GamePhase::AwaitingPlayerTurn2 => GamePhase::Resolved,
            phase => {
                return Err(GameError::InvalidState {
                    operation: "submit_player_decision",
                    phase,
                })
            }
        };
        self.record(decision);
        self.phase = next;
        Ok(())
    }

    /// Outcome of a resolved game.
    pub fn result(&self) -> Result<GameResult, GameError> {
        match self.phase {
            GamePhase::Resolved => Ok(GameResult::from_final_state(self.coin)),
            phase => Err(GameError::NotResolved { phase }),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Actual face of the coin, regardless of whether it is revealed.
    pub fn coin_state(&self) -> CoinState {
        self.coin
    }

    /// The coin as the player may see it in the current phase.
    pub fn view(&self) -> CoinView {
        if self.phase.conceals_coin() {
            CoinView::Hidden
        } else {
            CoinView::Face(self.coin)
        }
    }

    /// Decisions made so far, in turn order.
    pub fn turns(&self) -> impl Iterator<Item = TurnRecord> + '_ {
        TURN_ORDER
            .iter()
            .zip(self.decisions.iter())
            .take(self.made)
            .map(|(&actor, &decision)| TurnRecord { actor, decision })
    }

    /// Number of decisions made so far.
    pub fn turns_taken(&self) -> usize {
        self.made
    }

    fn record(&mut self, decision: Decision) {
        self.coin = decision.apply(self.coin);
        self.decisions[self.made] = decision;
        self.made += 1;
    }
}
