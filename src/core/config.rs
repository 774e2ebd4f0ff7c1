use super::common::{Actor, CoinState};

/// Number of decisions in every game.
pub const TURN_COUNT: usize = 4;
/// Fixed actor order of the four turns.
pub const TURN_ORDER: [Actor; TURN_COUNT] =
    [Actor::Computer, Actor::Player, Actor::Computer, Actor::Player];
/// Face the coin shows when a game starts.
pub const INITIAL_FACE: CoinState = CoinState::Heads;
/// Face that wins the game for the player. The computer wins on the other one.
pub const PLAYER_WINNING_FACE: CoinState = CoinState::Tails;

pub const DEFAULT_THINKING_DELAY_MS: u64 = 3000;
pub const DEFAULT_TURN_PAUSE_MS: u64 = 300;
pub const DEFAULT_REVEAL_PAUSE_MS: u64 = 500;

pub const DEFAULT_REPORT_ENDPOINT: &str =
    "https://coin-flip-backend-647009581501.europe-north1.run.app/game";
pub const DEFAULT_REPORT_TIMEOUT_SECS: u64 = 10;

pub const MSG_COMPUTER_THINKING: &str = "Computer is thinking...";
pub const MSG_PLAYER_TURN: &str = "It's your turn to make a move!";
pub const MSG_PLAYER_TURN_AGAIN: &str = "It's your turn to make a move again!";
pub const LABEL_PLAYER_WINS: &str = "You win!";
pub const LABEL_COMPUTER_WINS: &str = "Computer wins!";

/// Status prompt shown when the given player turn (1 or 2) opens.
pub const fn player_turn_message(turn: u8) -> &'static str {
    if turn <= 1 {
        MSG_PLAYER_TURN
    } else {
        MSG_PLAYER_TURN_AGAIN
    }
}
