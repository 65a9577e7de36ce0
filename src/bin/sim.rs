use anyhow::Context;
use battleship_duel::{ComputerPlayer, Game, GameState, Seat, FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct PlayerSummary {
    name: String,
    shots: usize,
    hits: usize,
}

#[derive(Serialize)]
struct MatchSummary {
    player1: PlayerSummary,
    player2: PlayerSummary,
    turns: usize,
    state: GameState,
    winner: Option<&'static str>,
}

fn summary(game: &Game, seat: Seat) -> PlayerSummary {
    let player = game.player(seat);
    PlayerSummary {
        name: player.name().to_string(),
        shots: player.shots_recorded(),
        hits: player.tracking().hits(),
    }
}

fn main() -> anyhow::Result<()> {
    battleship_duel::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse().context("seed1 must be an unsigned integer")?;
    let seed2: u64 = args[2].parse().context("seed2 must be an unsigned integer")?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Game::with_random_fleets("player1", "player2", &mut rng1)?;
    let mut ais = [ComputerPlayer::new(&FLEET), ComputerPlayer::new(&FLEET)];

    while let Some(seat) = game.current_seat() {
        let rng = match seat {
            Seat::One => &mut rng1,
            Seat::Two => &mut rng2,
        };
        let target = ais[seat.index()]
            .select_target(game.player(seat).tracking(), rng)
            .context("ran out of targets before the game ended")?;
        game.take_shot(target)?;
    }

    let result = MatchSummary {
        player1: summary(&game, Seat::One),
        player2: summary(&game, Seat::Two),
        turns: game.turns(),
        state: game.state(),
        winner: match game.state() {
            GameState::GameOver { winner } => Some(winner.label()),
            _ => None,
        },
    };

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
