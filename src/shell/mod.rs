//! Textual front end.
//!
//! The shell keeps at most one `Session`, turns command lines into engine
//! calls and prints the results. The computer answers on its own whenever
//! it is to move after a command.

mod command;

pub use command::{Command, ParseError};

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use log::debug;

use crate::core::{BoardPos, ConfigError, GameConfig, Player, DEFAULT_LEVEL};
use crate::rules::GameResult;
use crate::session::Session;

pub const PROMPT: &str = "kalah> ";

pub const HELP: &str = "\
Mancala/Kalah - all commands:
NEW <p> <s>:    Creates a new game with <p> pits per player and <s>
                seeds per pit. The difficulty and the opening player
                are copied from the previous game, if there is one.
                The first game starts at level 3 with the human
                player opening.

LEVEL <i>:      Sets the difficulty (1 and above, 1 to 7 are
                reasonable). Takes effect on the machine's next move.

MOVE <p>:       Takes the seeds out of your pit <p> (1 to pits per
                player). If the game does not end, the machine moves
                right after you.

SWITCH:         Restarts the game with the other opening player.

PRINT:          Displays the board. The first line shows the
                machine's store and pits, the second line your pits
                and store. Facing pits share a column.

HELP:           Prints this help text.

QUIT:           Exits the program.
";

const NO_BOARD: &str = "There is currently no board present.";

/// Interactive shell state.
#[derive(Debug)]
pub struct Shell {
    game: Option<Session>,
    level: u32,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl Shell {
    /// Shell whose first game starts at `level`.
    #[must_use]
    pub fn new(level: u32) -> Self {
        Self { game: None, level }
    }

    /// Current game, if one was started.
    #[must_use]
    pub fn game(&self) -> Option<&Session> {
        self.game.as_ref()
    }

    /// Read commands until `QUIT` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            if self.execute(&line?, out)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Handle one input line, including any computer moves that follow.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> io::Result<ControlFlow<()>> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(ControlFlow::Continue(())),
            Err(err) => {
                print_err(out, err)?;
                return Ok(ControlFlow::Continue(()));
            }
        };
        debug!("command {command:?}");

        match command {
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Print => match &self.game {
                Some(game) => writeln!(out, "{game}")?,
                None => print_err(out, NO_BOARD)?,
            },
            Command::New { pits, seeds } => self.new_game(pits, seeds, out)?,
            Command::Switch => match &self.game {
                Some(game) => self.game = Some(game.switched()),
                None => print_err(out, NO_BOARD)?,
            },
            Command::Level(level) => self.set_level(level, out)?,
            Command::Move(pit) => self.human_move(pit, out)?,
        }

        self.machine_moves(out)?;
        Ok(ControlFlow::Continue(()))
    }

    fn new_game(&mut self, pits: i64, seeds: i64, out: &mut impl Write) -> io::Result<()> {
        let Ok(pits) = usize::try_from(pits) else {
            return print_err(out, ConfigError::NoPits);
        };
        if seeds < 0 {
            return print_err(out, "Seeds per pit must not be negative.");
        }
        let Ok(seeds) = u32::try_from(seeds) else {
            let seeds = seeds.unsigned_abs();
            return print_err(out, ConfigError::TooManySeeds { pits, seeds });
        };
        let game = match &self.game {
            Some(game) => game.renewed(pits, seeds),
            None => Session::new(GameConfig::new(pits, seeds).with_level(self.level)),
        };
        match game {
            Ok(game) => {
                self.game = Some(game);
                Ok(())
            }
            Err(err) => print_err(out, err),
        }
    }

    fn set_level(&mut self, level: i64, out: &mut impl Write) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return print_err(out, NO_BOARD);
        };
        let Ok(level) = u32::try_from(level) else {
            return print_err(out, "Level must be greater than 0.");
        };
        match game.set_level(level) {
            Ok(()) => {
                self.level = level;
                Ok(())
            }
            Err(_) => print_err(out, "Level must be greater than 0."),
        }
    }

    fn human_move(&mut self, pit: i64, out: &mut impl Write) -> io::Result<()> {
        let Some(game) = &self.game else {
            return print_err(out, NO_BOARD);
        };
        let Ok(pit) = usize::try_from(pit) else {
            return print_err(out, "Pit must be a positive integer.");
        };
        if game.next() != Player::Human && !game.is_game_over() {
            return print_err(out, "It is not your turn.");
        }
        match game.play(pit) {
            Ok(next) => {
                if next.is_game_over() {
                    print_result(&next, out)?;
                } else if next.next() == Player::Human {
                    writeln!(out, "Machine must miss a turn.")?;
                }
                self.game = Some(next);
                Ok(())
            }
            Err(err) => print_err(out, err),
        }
    }

    /// Let the computer move for as long as it has the turn.
    fn machine_moves(&mut self, out: &mut impl Write) -> io::Result<()> {
        while let Some(game) = &self.game {
            if game.is_game_over() || game.next() != Player::Computer {
                break;
            }
            let next = match game.machine_move() {
                Ok(next) => next,
                Err(err) => return print_err(out, err),
            };

            let n = next.pits_per_player();
            let source = next.source_pit_of_last_move().unwrap_or_default();
            let target = match next.target_pit_of_last_move() {
                Some(BoardPos::Store(owner)) => format!("the {owner}'s store"),
                Some(pos) => format!("pit {}", pos.number(n).unwrap_or_default()),
                None => String::from("nowhere"),
            };
            writeln!(out, "Machine chose pit {source} with seeds reaching {target}.")?;
            if next.is_game_over() {
                print_result(&next, out)?;
            } else if next.next() == Player::Computer {
                writeln!(out, "You must miss a turn.")?;
            }
            self.game = Some(next);
        }
        Ok(())
    }
}

fn print_result(game: &Session, out: &mut impl Write) -> io::Result<()> {
    let human = game.seeds_of_player(Player::Human);
    let computer = game.seeds_of_player(Player::Computer);
    match game.winner() {
        Some(GameResult::Winner(Player::Human)) => writeln!(
            out,
            "Congratulations! You won with {human} seeds versus {computer} seeds of the machine."
        ),
        Some(GameResult::Winner(Player::Computer)) => writeln!(
            out,
            "Sorry! Machine wins with {computer} seeds versus your {human}."
        ),
        Some(GameResult::Tie) => writeln!(out, "Nobody wins. Tie with {human} for each player."),
        None => Ok(()),
    }
}

fn print_err(out: &mut impl Write, message: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "Error! {message}")
}
