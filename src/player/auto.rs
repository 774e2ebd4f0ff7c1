use crate::{
    presentation::PresentationSink,
    protocol::Presentation,
};

use super::{Player, PlayerController};

/// Sink adapter that answers every prompt with a [`Player`]'s choice.
///
/// Requests are forwarded to the wrapped sink first, so the rendering sees the
/// prompt before the answer arrives. The session opens the turn before it
/// prompts, which lets the answer be submitted synchronously from here.
pub struct AutoPlayer<P, S> {
    player: P,
    inner: S,
    controller: PlayerController,
}

impl<P: Player, S: PresentationSink> AutoPlayer<P, S> {
    pub fn new(player: P, inner: S, controller: PlayerController) -> Self {
        Self {
            player,
            inner,
            controller,
        }
    }
}

impl<P: Player, S: PresentationSink> PresentationSink for AutoPlayer<P, S> {
    fn present(&mut self, request: Presentation) {
        self.inner.present(request);
        if let Presentation::PromptPlayerChoice { turn } = request {
            let decision = self.player.choose(turn);
            log::debug!("auto player answers turn {} with {}", turn, decision);
            if let Err(e) = self.controller.submit(decision) {
                log::warn!("auto player decision for turn {} rejected: {}", turn, e);
            }
        }
    }
}
