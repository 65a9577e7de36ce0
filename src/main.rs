use std::io;

use battleship_duel::{init_logging, Console, Controller};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player Battleship on the terminal", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player1: PlayerType,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player2: PlayerType,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerType {
    Human,
    Ai,
}

impl From<PlayerType> for Controller {
    fn from(kind: PlayerType) -> Self {
        match kind {
            PlayerType::Human => Controller::Human,
            PlayerType::Ai => Controller::computer(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut controllers = [Controller::from(cli.player1), Controller::from(cli.player2)];

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&mut rng, &mut controllers)?;
    Ok(())
}
