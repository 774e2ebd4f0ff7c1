use std::io::{self, BufRead};
use std::string::String;
use std::thread;

use crate::protocol::InputEvent;

use super::{InputError, PlayerController};

/// A parsed line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(InputEvent),
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "f" | "flip" => Ok(Command::Input(InputEvent::PlayerChoseFlip)),
        "d" | "dont" | "don't" | "no" => Ok(Command::Input(InputEvent::PlayerChoseDontFlip)),
        "s" | "start" | "play" => Ok(Command::Input(InputEvent::StartRequested)),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{}' - type 'help' for options", other)),
    }
}

/// Reads commands from stdin on a dedicated thread and feeds them to a
/// [`PlayerController`]. End of input or `quit` closes the controller.
pub struct CliInput {
    controller: PlayerController,
}

impl CliInput {
    pub fn new(controller: PlayerController) -> Self {
        Self { controller }
    }

    pub fn spawn(self) -> io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("cli-input".into())
            .spawn(move || self.run(io::stdin().lock()))
    }

    fn run(self, reader: impl BufRead) {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("stdin read failed: {}", e);
                    break;
                }
            }
        }
        self.controller.close();
    }

    /// Handle one line of input. Returns `false` once input should stop.
    pub fn handle_line(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }
        match parse_command(line) {
            Ok(Command::Input(event)) => match self.controller.dispatch(event) {
                Ok(()) => true,
                Err(InputError::NoOpenTurn) => {
                    std::println!("✗ It's not your turn - wait for the prompt.");
                    true
                }
                Err(InputError::GameInProgress) => {
                    std::println!("✗ A game is already running.");
                    true
                }
                Err(InputError::Closed) => false,
            },
            Ok(Command::Help) => {
                print_help();
                true
            }
            Ok(Command::Quit) => false,
            Err(e) => {
                std::println!("✗ {}", e);
                true
            }
        }
    }
}

fn print_help() {
    std::println!("\n╔════════════════════════════════════════════════════════╗");
    std::println!("║                     COIN FLIP HELP                     ║");
    std::println!("╠════════════════════════════════════════════════════════╣");
    std::println!("║ The coin starts on Heads and is hidden once play       ║");
    std::println!("║ begins. You and the computer each get two turns.       ║");
    std::println!("║ Tails at the end: you win. Heads: the computer wins.   ║");
    std::println!("║                                                        ║");
    std::println!("║   s, start   - start a new game                        ║");
    std::println!("║   f, flip    - flip the coin on your turn              ║");
    std::println!("║   d, dont    - leave the coin as it is                 ║");
    std::println!("║   q, quit    - leave the game                          ║");
    std::println!("╚════════════════════════════════════════════════════════╝\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_choices_case_insensitively() {
        assert_eq!(
            parse_command("F"),
            Ok(Command::Input(InputEvent::PlayerChoseFlip))
        );
        assert_eq!(
            parse_command(" don't "),
            Ok(Command::Input(InputEvent::PlayerChoseDontFlip))
        );
        assert_eq!(
            parse_command("Start"),
            Ok(Command::Input(InputEvent::StartRequested))
        );
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_unknown_and_empty_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("heads").is_err());
    }

    #[test]
    fn choice_without_open_turn_keeps_reading() {
        let controller = PlayerController::new();
        let input = CliInput::new(controller.clone());
        assert!(input.handle_line("flip"));
        assert!(!controller.is_awaiting());
        assert!(!input.handle_line("quit"));
    }

    #[test]
    fn end_of_input_closes_the_controller() {
        let controller = PlayerController::new();
        CliInput::new(controller.clone()).run(io::Cursor::new("help\n"));
        assert!(controller.is_closed());
    }
}
