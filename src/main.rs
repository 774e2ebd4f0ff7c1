#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::sync::Arc;
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
use coinflip::{
    init_logging, AutoPlayer, CliInput, ConsoleSink, GameSession, HttpReporter,
    NullReporter, Pacing, PlayerController, RandomPlayer, ReportConfig, ResultReporter,
    SessionConfig, DEFAULT_REPORT_ENDPOINT, DEFAULT_REPORT_TIMEOUT_SECS,
    DEFAULT_THINKING_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log debug output (overridden by COINFLIP_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameOptions {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// How long the computer "thinks" before each decision.
    #[arg(long, default_value_t = DEFAULT_THINKING_DELAY_MS)]
    thinking_ms: u64,
    /// Skip every presentation delay.
    #[arg(long)]
    fast: bool,
    /// Abandon the game when a player turn stays open this long.
    #[arg(long)]
    turn_timeout_secs: Option<u64>,
    /// Endpoint that receives each game's outcome.
    #[arg(long, default_value = DEFAULT_REPORT_ENDPOINT)]
    report_url: String,
    /// Do not report outcomes anywhere.
    #[arg(long)]
    no_report: bool,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        options: GameOptions,
    },
    /// Watch a random player take on the computer for one game.
    Demo {
        #[command(flatten)]
        options: GameOptions,
    },
}

#[cfg(feature = "std")]
impl GameOptions {
    fn session_config(&self) -> SessionConfig {
        let pacing = if self.fast {
            Pacing::headless()
        } else {
            Pacing::default().with_thinking(Duration::from_millis(self.thinking_ms))
        };
        SessionConfig {
            pacing,
            player_timeout: self.turn_timeout_secs.map(Duration::from_secs),
        }
    }

    fn report_config(&self) -> ReportConfig {
        if self.no_report {
            ReportConfig::disabled()
        } else {
            ReportConfig {
                endpoint: Some(self.report_url.clone()),
                timeout: Duration::from_secs(DEFAULT_REPORT_TIMEOUT_SECS),
            }
        }
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn build_reporter(config: &ReportConfig) -> anyhow::Result<Arc<dyn ResultReporter>> {
    let reporter: Arc<dyn ResultReporter> = match &config.endpoint {
        Some(endpoint) => Arc::new(HttpReporter::new(endpoint.as_str(), config.timeout)?),
        None => Arc::new(NullReporter),
    };
    Ok(reporter)
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    match cli.command {
        Commands::Play { options } => {
            let reporter = build_reporter(&options.report_config())?;
            let controller = PlayerController::new();
            let mut session = GameSession::new(
                Box::new(ConsoleSink::new()),
                reporter,
                controller.clone(),
                options.session_config(),
                options.rng(),
            );
            CliInput::new(controller.clone()).spawn()?;

            std::println!("\n╔══════════════════════════════════════════════════════════╗");
            std::println!("║                  FLIP IT OR LEAVE IT                     ║");
            std::println!("╚══════════════════════════════════════════════════════════╝");
            std::println!("Tails wins it for you, Heads for the computer.");
            std::println!("Type 's' to start, 'help' for help, 'q' to quit.");

            let played = session.serve().await;
            session.flush_reports().await;
            let played = played?;
            println!("Thanks for playing! Games finished: {}", played);
        }
        Commands::Demo { options } => {
            let reporter = build_reporter(&options.report_config())?;
            let controller = PlayerController::new();
            let mut rng = options.rng();
            let player = RandomPlayer::new(SmallRng::from_rng(&mut rng));
            let sink = AutoPlayer::new(player, ConsoleSink::new(), controller.clone());
            let mut session = GameSession::new(
                Box::new(sink),
                reporter,
                controller,
                options.session_config(),
                rng,
            );
            let result = session.play().await;
            session.flush_reports().await;
            let result = result?;
            for turn in session.engine().turns() {
                println!("{:>8}: {}", turn.actor, turn.decision);
            }
            println!("Final face: {}", result.final_state());
        }
    }
    Ok(())
}
