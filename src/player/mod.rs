//! Player input
//!
//! The human side of the game reaches the session through a
//! [`PlayerController`]. Each player turn opens a single-use channel; the first
//! decision consumes it and anything arriving while no turn is open is
//! rejected instead of leaking into a later turn.
//!
//! Input drivers built on the controller:
//! - CliInput: reads commands from stdin
//! - AutoPlayer: answers prompts with a [`Player`] strategy (demo, sim, tests)

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{oneshot, Notify};

use crate::{core::Decision, protocol::InputEvent};

/// Interface implemented by automated decision makers.
pub trait Player: Send {
    /// Choose a decision for player turn 1 or 2.
    fn choose(&mut self, turn: u8) -> Decision;
}

/// Reasons an input event was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no player turn is open")]
    NoOpenTurn,
    #[error("a game is already in progress")]
    GameInProgress,
    #[error("player input is closed")]
    Closed,
}

#[derive(Default)]
struct InputState {
    open_turn: Option<(u8, oneshot::Sender<Decision>)>,
    in_game: bool,
    start_requested: bool,
    closed: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<InputState>,
    start: Notify,
}

/// Cloneable handle through which input reaches a session.
#[derive(Clone, Default)]
pub struct PlayerController {
    shared: Arc<Shared>,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, InputState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Answer the open player turn. Returns the turn number that was answered.
    pub fn submit(&self, decision: Decision) -> Result<u8, InputError> {
        let (turn, sender) = {
            let mut state = self.state();
            if state.closed {
                return Err(InputError::Closed);
            }
            state.open_turn.take().ok_or(InputError::NoOpenTurn)?
        };
        // A dropped receiver means the session already gave up on this turn.
        sender.send(decision).map_err(|_| InputError::NoOpenTurn)?;
        Ok(turn)
    }

    /// Route an inbound event.
    pub fn dispatch(&self, event: InputEvent) -> Result<(), InputError> {
        match event.decision() {
            Some(decision) => self.submit(decision).map(|_| ()),
            None => self.request_start(),
        }
    }

    /// Ask a serving session to begin a new game.
    pub fn request_start(&self) -> Result<(), InputError> {
        {
            let mut state = self.state();
            if state.closed {
                return Err(InputError::Closed);
            }
            if state.in_game {
                return Err(InputError::GameInProgress);
            }
            state.start_requested = true;
        }
        self.shared.start.notify_one();
        Ok(())
    }

    /// Shut input down. An open turn fails and a serving session stops.
    pub fn close(&self) {
        {
            let mut state = self.state();
            state.closed = true;
            state.open_turn = None;
            state.start_requested = false;
        }
        self.shared.start.notify_one();
    }

    pub fn is_closed(&self) -> bool {
        self.state().closed
    }

    /// True while a player turn is waiting for a decision.
    pub fn is_awaiting(&self) -> bool {
        self.state().open_turn.is_some()
    }

    pub(crate) fn begin_game(&self) {
        self.state().in_game = true;
    }

    pub(crate) fn end_game(&self) {
        let mut state = self.state();
        state.in_game = false;
        state.open_turn = None;
    }

    /// Open the single-use channel for a player turn.
    pub(crate) fn open_turn(&self, turn: u8) -> Result<oneshot::Receiver<Decision>, InputError> {
        let mut state = self.state();
        if state.closed {
            return Err(InputError::Closed);
        }
        let (sender, receiver) = oneshot::channel();
        state.open_turn = Some((turn, sender));
        Ok(receiver)
    }

    pub(crate) fn cancel_turn(&self) {
        self.state().open_turn = None;
    }

    /// Wait until a start is requested, or fail once input is closed. The
    /// request is consumed and the game marked running under one lock, so a
    /// second request cannot queue another game in between.
    pub(crate) async fn wait_for_start(&self) -> Result<(), InputError> {
        loop {
            let notified = self.shared.start.notified();
            {
                let mut state = self.state();
                if state.closed {
                    return Err(InputError::Closed);
                }
                if state.start_requested {
                    state.start_requested = false;
                    state.in_game = true;
                    return Ok(());
                }
            }
            notified.await;
        }
    }
}

pub mod ai;
pub use ai::{RandomPlayer, ScriptedPlayer};

pub mod auto;
pub use auto::AutoPlayer;

pub mod cli;
pub use cli::CliInput;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepted_start_blocks_further_requests() {
        let controller = PlayerController::new();
        controller.request_start().unwrap();
        controller.wait_for_start().await.unwrap();
        assert_eq!(controller.request_start(), Err(InputError::GameInProgress));

        controller.end_game();
        assert_eq!(controller.request_start(), Ok(()));
    }

    #[tokio::test]
    async fn close_wakes_a_waiting_start() {
        let controller = PlayerController::new();
        let closer = controller.clone();
        let waiter = tokio::spawn(async move { controller.wait_for_start().await });
        tokio::task::yield_now().await;
        closer.close();
        assert_eq!(waiter.await.unwrap(), Err(InputError::Closed));
    }
}
