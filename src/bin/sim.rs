use std::sync::Arc;

use coinflip::{
    AutoPlayer, GameSession, NullReporter, PlayerController, Presentation, PresentationSink,
    RandomPlayer, SessionConfig,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Simulated games have nobody watching.
struct Unrendered;

impl PresentationSink for Unrendered {
    fn present(&mut self, _request: Presentation) {}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    coinflip::init_logging(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: u64 = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let controller = PlayerController::new();
    let player = RandomPlayer::new(SmallRng::seed_from_u64(seed.wrapping_add(1)));
    let sink = AutoPlayer::new(player, Unrendered, controller.clone());
    let mut session = GameSession::new(
        Box::new(sink),
        Arc::new(NullReporter),
        controller,
        SessionConfig::headless(),
        SmallRng::seed_from_u64(seed),
    );

    let mut player_wins = 0u64;
    let mut computer_wins = 0u64;
    for _ in 0..games {
        let result = session.play().await?;
        if result.player_wins() {
            player_wins += 1;
        } else {
            computer_wins += 1;
        }
    }
    session.flush_reports().await;

    let rate = if games == 0 {
        0.0
    } else {
        player_wins as f64 / games as f64
    };
    let result = json!({
        "games": games,
        "player_wins": player_wins,
        "computer_wins": computer_wins,
        "player_win_rate": rate,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
