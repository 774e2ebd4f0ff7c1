use std::collections::VecDeque;

use rand::rngs::SmallRng;

use crate::core::{ai, Decision};

use super::Player;

/// Flips a fair coin on every turn, like the computer does.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn choose(&mut self, _turn: u8) -> Decision {
        ai::fair_decision(&mut self.rng)
    }
}

/// Plays a fixed list of decisions, then keeps the coin as it is.
pub struct ScriptedPlayer {
    script: VecDeque<Decision>,
}

impl ScriptedPlayer {
    pub fn new(script: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose(&mut self, _turn: u8) -> Decision {
        self.script.pop_front().unwrap_or(Decision::DontFlip)
    }
}
