use std::io::{self, Write};

use crate::{
    core::{CoinState, CoinView, GameResult},
    protocol::Presentation,
};

use super::PresentationSink;

/// Renders the game on stdout.
pub struct ConsoleSink {
    out: io::Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

fn coin_art(view: CoinView) -> [&'static str; 3] {
    match view {
        CoinView::Hidden => ["  .---.  ", " |  ?  | ", "  '---'  "],
        CoinView::Face(CoinState::Heads) => ["  .---.  ", " | (H) | ", "  '---'  "],
        CoinView::Face(CoinState::Tails) => ["  .---.  ", " | (T) | ", "  '---'  "],
    }
}

fn render_result(out: &mut impl Write, result: &GameResult) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║              GAME OVER               ║")?;
    writeln!(out, "╚══════════════════════════════════════╝")?;
    writeln!(out, "The coin landed on {}.", result.final_state())?;
    match result.winner() {
        crate::core::Actor::Player => writeln!(out, "\n🎉 {}", result.label())?,
        crate::core::Actor::Computer => writeln!(out, "\n💀 {}", result.label())?,
    }
    writeln!(out, "Type 's' to play again or 'q' to quit.")
}

impl ConsoleSink {
    fn render(&mut self, request: Presentation) -> io::Result<()> {
        let mut out = self.out.lock();
        match request {
            Presentation::ShowState(view) => {
                for line in coin_art(view) {
                    writeln!(out, "    {}", line)?;
                }
            }
            Presentation::ShowMessage("") => {}
            Presentation::ShowMessage(text) => writeln!(out, "{}", text)?,
            Presentation::PromptPlayerChoice { turn } => {
                write!(out, "Turn {}/2 - [f]lip or [d]on't flip? ", turn)?;
            }
            Presentation::DismissPlayerChoice => writeln!(out)?,
            Presentation::ShowResult(result) => render_result(&mut out, &result)?,
        }
        out.flush()
    }
}

impl PresentationSink for ConsoleSink {
    fn present(&mut self, request: Presentation) {
        if let Err(e) = self.render(request) {
            log::warn!("failed to write to terminal: {}", e);
        }
    }
}
