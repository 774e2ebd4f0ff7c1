#![cfg(feature = "std")]

use std::sync::Arc;
use std::time::Duration;
use std::vec::Vec;

use rand::rngs::SmallRng;
use tokio::task::JoinHandle;

use crate::{
    config::SessionConfig,
    core::{
        config::{player_turn_message, MSG_COMPUTER_THINKING},
        CoinView, GameEngine, GameError, GamePhase, GameResult, INITIAL_FACE,
    },
    player::{InputError, PlayerController},
    presentation::PresentationSink,
    protocol::{OutcomeReport, Presentation},
    report::ResultReporter,
};

/// Reasons a game session stopped before resolving.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("player turn {turn} timed out")]
    PlayerTimeout { turn: u8 },
    #[error("player input closed before the game finished")]
    InputClosed,
}

impl From<InputError> for SessionError {
    fn from(_: InputError) -> Self {
        SessionError::InputClosed
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Drives a [`GameEngine`] through its turns against a human (or automated)
/// player, pacing the presentation and reporting each resolved game.
pub struct GameSession {
    engine: GameEngine,
    rng: SmallRng,
    sink: Box<dyn PresentationSink>,
    reporter: Arc<dyn ResultReporter>,
    controller: PlayerController,
    config: SessionConfig,
    pending_reports: Vec<JoinHandle<()>>,
}

impl GameSession {
    pub fn new(
        sink: Box<dyn PresentationSink>,
        reporter: Arc<dyn ResultReporter>,
        controller: PlayerController,
        config: SessionConfig,
        rng: SmallRng,
    ) -> Self {
        Self {
            engine: GameEngine::new(),
            rng,
            sink,
            reporter,
            controller,
            config,
            pending_reports: Vec::new(),
        }
    }

    /// Handle through which input reaches this session.
    pub fn controller(&self) -> PlayerController {
        self.controller.clone()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play one complete game. A game that fails part way is abandoned: the
    /// engine goes back to idle and nothing is reported.
    pub async fn play(&mut self) -> Result<GameResult, SessionError> {
        self.controller.begin_game();
        let outcome = self.play_round().await;
        self.controller.end_game();
        if let Err(e) = &outcome {
            log::warn!("game abandoned: {}", e);
            self.engine.reset();
        }
        outcome
    }

    /// Play a game for every start request until input closes. Returns the
    /// number of games that resolved.
    pub async fn serve(&mut self) -> Result<usize, SessionError> {
        let mut played = 0;
        loop {
            if self.controller.wait_for_start().await.is_err() {
                return Ok(played);
            }
            match self.play().await {
                Ok(_) => played += 1,
                Err(SessionError::PlayerTimeout { .. }) => {}
                Err(SessionError::InputClosed) => return Ok(played),
                Err(e) => return Err(e),
            }
        }
    }

    /// Wait for every report spawned so far. Failures were already logged.
    pub async fn flush_reports(&mut self) {
        for handle in self.pending_reports.drain(..) {
            if let Err(e) = handle.await {
                log::warn!("report task failed: {}", e);
            }
        }
    }

    async fn play_round(&mut self) -> Result<GameResult, SessionError> {
        self.engine.start()?;
        log::info!("game started");
        self.sink.present(Presentation::ShowMessage(""));
        self.sink.present(Presentation::ShowState(CoinView::Face(INITIAL_FACE)));
        pause(self.config.pacing.reveal).await;
        self.show_state();

        loop {
            let phase = self.engine.phase();
            if phase.is_computer_turn() {
                self.computer_turn().await?;
            } else if let Some(turn) = phase.player_turn() {
                self.player_turn(turn).await?;
            } else {
                break;
            }
            // The resolving transition is shown by the reveal below.
            if self.engine.phase() != GamePhase::Resolved {
                self.show_state();
            }
        }

        let result = self.engine.result()?;
        log::info!(
            "game resolved on {}: {}",
            result.final_state(),
            result.label()
        );
        self.sink.present(Presentation::ShowMessage(""));
        pause(self.config.pacing.reveal).await;
        self.show_state();
        self.sink.present(Presentation::ShowResult(result));
        self.spawn_report(&result);
        Ok(result)
    }

    async fn computer_turn(&mut self) -> Result<(), SessionError> {
        self.sink.present(Presentation::ShowMessage(MSG_COMPUTER_THINKING));
        pause(self.config.pacing.thinking).await;
        let decision = self.engine.run_computer_turn(&mut self.rng)?;
        log::debug!("computer chose {}", decision);
        Ok(())
    }

    async fn player_turn(&mut self, turn: u8) -> Result<(), SessionError> {
        pause(self.config.pacing.turn_pause).await;
        self.sink.present(Presentation::ShowMessage(player_turn_message(turn)));
        // The turn must be open before the prompt goes out.
        let receiver = self.controller.open_turn(turn)?;
        self.sink.present(Presentation::PromptPlayerChoice { turn });

        let answer = match self.config.player_timeout {
            Some(limit) => match tokio::time::timeout(limit, receiver).await {
                Ok(answer) => answer,
                Err(_) => {
                    self.controller.cancel_turn();
                    log::warn!("player turn {} timed out after {:?}", turn, limit);
                    return Err(SessionError::PlayerTimeout { turn });
                }
            },
            None => receiver.await,
        };
        let decision = answer.map_err(|_| SessionError::InputClosed)?;

        self.sink.present(Presentation::DismissPlayerChoice);
        self.engine.submit_player_decision(decision)?;
        log::debug!("player chose {} on turn {}", decision, turn);
        Ok(())
    }

    fn show_state(&mut self) {
        self.sink.present(Presentation::ShowState(self.engine.view()));
    }

    fn spawn_report(&mut self, result: &GameResult) {
        self.pending_reports.retain(|handle| !handle.is_finished());
        let reporter = Arc::clone(&self.reporter);
        let outcome = OutcomeReport::from(result);
        self.pending_reports.push(tokio::spawn(async move {
            if let Err(e) = reporter.report(&outcome).await {
                log::warn!("failed to report game result: {}", e);
            }
        }));
    }
}
