//! Match state machine: alternating turns, forfeits and win detection.

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::common::{Cell, GameError, Outcome, TargetError};
use crate::config::{FLEET, GRID_SIZE};
use crate::player::Player;
use crate::target::Target;
use crate::turn::fire;

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// The opposing seat.
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Short label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            Seat::One => "player1",
            Seat::Two => "player2",
        }
    }

    /// Position of this seat in two-element arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameState {
    AwaitingPlayer1Move,
    AwaitingPlayer2Move,
    GameOver { winner: Seat },
}

impl GameState {
    fn awaiting(seat: Seat) -> Self {
        match seat {
            Seat::One => GameState::AwaitingPlayer1Move,
            Seat::Two => GameState::AwaitingPlayer2Move,
        }
    }
}

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnReport {
    /// A shot was resolved. `repeated` is set when the cell had already
    /// been fired at.
    Fired {
        seat: Seat,
        target: Target,
        outcome: Outcome,
        repeated: bool,
    },
    /// The input was rejected and the turn passed to the other player.
    Forfeited { seat: Seat, error: TargetError },
}

/// A two-player match owning both players and their four grids.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    state: GameState,
    turns: usize,
}

impl Game {
    /// Start a match between two players whose fleets are already placed.
    /// Player one moves first.
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            players: [player1, player2],
            state: GameState::AwaitingPlayer1Move,
            turns: 0,
        }
    }

    /// Start a standard match: both fleets placed at random on 10×10 grids.
    pub fn with_random_fleets<R: Rng + ?Sized>(
        name1: impl Into<String>,
        name2: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let p1 = Player::with_random_fleet(name1, GRID_SIZE, &FLEET, rng)?;
        let p2 = Player::with_random_fleet(name2, GRID_SIZE, &FLEET, rng)?;
        Ok(Self::new(p1, p2))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of turns taken, forfeits included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat expected to move next, or `None` once the game is over.
    pub fn current_seat(&self) -> Option<Seat> {
        match self.state {
            GameState::AwaitingPlayer1Move => Some(Seat::One),
            GameState::AwaitingPlayer2Move => Some(Seat::Two),
            GameState::GameOver { .. } => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver { .. })
    }

    /// The winning player once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::GameOver { winner } => Some(self.player(winner)),
            _ => None,
        }
    }

    /// Play one turn for the current seat with the raw target `input`.
    ///
    /// Malformed input forfeits the turn rather than failing. After every
    /// turn both tracking grids are checked; the seat whose hits cover the
    /// opponent's fleet wins.
    pub fn take_turn(&mut self, input: &str) -> Result<TurnReport, GameError> {
        self.advance(input.parse::<Target>())
    }

    /// Play one turn for the current seat at an already parsed target.
    pub fn take_shot(&mut self, target: Target) -> Result<TurnReport, GameError> {
        self.advance(Ok(target))
    }

    fn advance(&mut self, parsed: Result<Target, TargetError>) -> Result<TurnReport, GameError> {
        let seat = self.current_seat().ok_or(GameError::GameOver)?;
        self.turns += 1;

        let report = match parsed {
            Ok(target) => self.fire_at(seat, target),
            Err(error) => TurnReport::Forfeited { seat, error },
        };
        match &report {
            TurnReport::Fired {
                target,
                outcome,
                repeated,
                ..
            } => debug!(
                "{:?} fired at {}: {:?}{}",
                seat,
                target,
                outcome,
                if *repeated { " (repeat)" } else { "" }
            ),
            TurnReport::Forfeited { error, .. } => {
                warn!("{:?} forfeits the turn: {}", seat, error)
            }
        }

        self.state = match self.finished() {
            Some(winner) => {
                info!("game over after {} turns, {:?} wins", self.turns, winner);
                GameState::GameOver { winner }
            }
            None => GameState::awaiting(seat.other()),
        };
        Ok(report)
    }

    fn fire_at(&mut self, seat: Seat, target: Target) -> TurnReport {
        let [p1, p2] = &mut self.players;
        let (shooter, opponent) = match seat {
            Seat::One => (p1, &*p2),
            Seat::Two => (p2, &*p1),
        };
        let repeated = matches!(
            shooter.tracking().get(target.row, target.col),
            Some(Cell::Hit | Cell::Miss)
        );
        match fire(opponent.ships(), shooter.tracking_mut(), target) {
            Ok(outcome) => TurnReport::Fired {
                seat,
                target,
                outcome,
                repeated,
            },
            Err(error) => TurnReport::Forfeited { seat, error },
        }
    }

    fn finished(&self) -> Option<Seat> {
        [Seat::One, Seat::Two]
            .into_iter()
            .find(|&seat| self.player(seat).has_sunk(self.player(seat.other())))
    }
}
