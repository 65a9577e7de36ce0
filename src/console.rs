//! Line-oriented text session: name prompts, turn prompts and results.
//!
//! The console is generic over its reader and writer so whole sessions can
//! be driven from scripted input.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail};
use rand::Rng;

use crate::ai::ComputerPlayer;
use crate::common::Outcome;
use crate::config::FLEET;
use crate::game::{Game, Seat, TurnReport};

/// Prompt shown before every target is read.
pub const TARGET_PROMPT: &str = "Enter target (For example A1): ";

/// Who chooses the targets for a seat.
#[derive(Debug, Clone)]
pub enum Controller {
    /// Targets are read from the console input.
    Human,
    /// Targets are chosen by a [`ComputerPlayer`] and echoed to the output.
    Computer(ComputerPlayer),
}

impl Controller {
    /// Computer controller hunting the standard fleet.
    pub fn computer() -> Self {
        Controller::Computer(ComputerPlayer::new(&FLEET))
    }

    fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }
}

/// Interactive session over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Run a full session: greet, ask for names, place both fleets at random
    /// and play until one side wins. Returns the finished game.
    pub fn run<G: Rng + ?Sized>(
        &mut self,
        rng: &mut G,
        controllers: &mut [Controller; 2],
    ) -> anyhow::Result<Game> {
        writeln!(self.output, "Welcome to BattleShip!")?;
        let name1 = self.ask_name(&controllers[0], "\nFirst player's name: ", "Computer 1")?;
        let name2 = self.ask_name(&controllers[1], "\nSecond player's name: ", "Computer 2")?;

        let mut game = Game::with_random_fleets(name1, name2, rng)?;
        self.play(&mut game, controllers, rng)?;
        Ok(game)
    }

    fn ask_name(
        &mut self,
        controller: &Controller,
        prompt: &str,
        fallback: &str,
    ) -> anyhow::Result<String> {
        if controller.is_human() {
            self.read_line(prompt)
        } else {
            Ok(fallback.to_string())
        }
    }

    /// Play `game` to completion, alternating between the two controllers.
    pub fn play<G: Rng + ?Sized>(
        &mut self,
        game: &mut Game,
        controllers: &mut [Controller; 2],
        rng: &mut G,
    ) -> anyhow::Result<()> {
        while let Some(seat) = game.current_seat() {
            let player = game.player(seat);
            writeln!(self.output, "{}'s turn:", player.name())?;
            write!(self.output, "{}", player.tracking())?;

            let report = match &mut controllers[seat.index()] {
                Controller::Human => {
                    let line = self.read_line(TARGET_PROMPT)?;
                    game.take_turn(&line)?
                }
                Controller::Computer(ai) => {
                    let target = ai
                        .select_target(game.player(seat).tracking(), rng)
                        .ok_or_else(|| anyhow!("no untargeted cells left for {:?}", seat))?;
                    writeln!(self.output, "{}{}", TARGET_PROMPT, target)?;
                    game.take_shot(target)?
                }
            };
            self.report(&report)?;
        }

        writeln!(self.output, "Game Over!")?;
        if let Some(winner) = game.winner() {
            writeln!(self.output, "{} wins!", winner.name())?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, report: &TurnReport) -> anyhow::Result<()> {
        match report {
            TurnReport::Fired {
                outcome: Outcome::Hit,
                ..
            } => writeln!(self.output, "Hit!")?,
            TurnReport::Fired {
                outcome: Outcome::Miss,
                ..
            } => writeln!(self.output, "Miss!")?,
            TurnReport::Forfeited { .. } => {
                writeln!(self.output, "Invalid input!")?;
                writeln!(self.output, "Switching player...")?;
            }
        }
        Ok(())
    }

    /// Print `prompt` and read one line without its terminator. Bytes that
    /// are not valid UTF-8 are replaced, so such a target is simply invalid.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            bail!("input closed while waiting for a reply to {:?}", prompt.trim());
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
