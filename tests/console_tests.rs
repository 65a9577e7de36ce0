use std::io::Cursor;

use battleship_duel::{
    place_ship, Cell, Console, Controller, Game, GameState, Grid, Orientation, Placement, Player,
    Seat, GRID_SIZE, TARGET_PROMPT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn small_game() -> Game {
    let mut alice = Grid::new(GRID_SIZE);
    place_ship(&mut alice, Placement::new(3, 4, Orientation::Horizontal, 2)).unwrap();
    let mut bob = Grid::new(GRID_SIZE);
    place_ship(&mut bob, Placement::new(0, 0, Orientation::Horizontal, 2)).unwrap();
    Game::new(Player::new("Alice", alice), Player::new("Bob", bob))
}

fn play_script(script: &str) -> (Game, String, anyhow::Result<()>) {
    play_bytes(script.as_bytes())
}

fn play_bytes(script: &[u8]) -> (Game, String, anyhow::Result<()>) {
    let mut game = small_game();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut controllers = [Controller::Human, Controller::Human];
    let mut console = Console::new(Cursor::new(script), Vec::new());
    let result = console.play(&mut game, &mut controllers, &mut rng);
    let (_, out) = console.into_inner();
    (game, String::from_utf8(out).unwrap(), result)
}

#[test]
fn test_scripted_game_announces_winner() {
    let (game, out, result) = play_script("A0\nE3\nB0\n");
    result.unwrap();
    assert_eq!(game.state(), GameState::GameOver { winner: Seat::One });
    assert!(out.starts_with("Alice's turn:\n   A B C D E F G H I J \n"));
    assert!(out.contains("Bob's turn:\n"));
    assert_eq!(out.matches(TARGET_PROMPT).count(), 3);
    assert_eq!(out.matches("Hit!\n").count(), 3);
    assert!(out.ends_with("Game Over!\nAlice wins!\n"));
}

#[test]
fn test_tracking_grid_shows_previous_shots() {
    let (_, out, result) = play_script("A0\nJ9\nC0\nJ8\nB0\n");
    result.unwrap();
    // Alice's third turn shows her hit at A0 and miss at C0
    assert!(out.contains(" 0 X ~ 0 ~ ~ ~ ~ ~ ~ ~ \n"));
    assert!(out.contains("Miss!\n"));
}

#[test]
fn test_invalid_input_switches_player() {
    // Alice forfeits, Bob hits, Alice misses, Bob sinks Alice's destroyer
    let (game, out, result) = play_script("K5\nE3\nJ9\nF3\n");
    result.unwrap();
    assert!(out.contains("Invalid input!\nSwitching player...\nBob's turn:\n"));
    assert_eq!(game.state(), GameState::GameOver { winner: Seat::Two });
    assert!(out.ends_with("Bob wins!\n"));
}

#[test]
fn test_non_utf8_target_forfeits_the_turn() {
    let (game, out, result) = play_bytes(b"\xff1\nE3\nJ9\nF3\n");
    result.unwrap();
    assert!(out.contains("Invalid input!\nSwitching player...\nBob's turn:\n"));
    assert_eq!(game.state(), GameState::GameOver { winner: Seat::Two });
    assert_eq!(game.player(Seat::One).tracking().count(Cell::Miss), 1);
}

#[test]
fn test_non_utf8_name_is_accepted() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut controllers = [Controller::Human, Controller::Human];
    let mut console = Console::new(Cursor::new(&b"Al\xffce\nBob\n"[..]), Vec::new());
    // names are read, then input runs out on the first target prompt
    assert!(console.run(&mut rng, &mut controllers).is_err());
    let (_, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Al\u{FFFD}ce's turn:\n"));
}

#[test]
fn test_windows_line_endings_are_accepted() {
    let (game, _, result) = play_script("A0\r\nE3\r\nB0\r\n");
    result.unwrap();
    assert_eq!(game.state(), GameState::GameOver { winner: Seat::One });
}

#[test]
fn test_closed_input_is_an_error() {
    let (game, out, result) = play_script("A0\n");
    assert!(result.is_err());
    assert_eq!(game.state(), GameState::AwaitingPlayer2Move);
    assert!(!out.contains("Game Over!"));
}

#[test]
fn test_run_prompts_for_names() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut controllers = [Controller::Human, Controller::Human];
    let mut console = Console::new(Cursor::new("Alice\n\n".as_bytes()), Vec::new());
    // both names given, then input runs out on the first target prompt
    assert!(console.run(&mut rng, &mut controllers).is_err());
    let (_, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with(
        "Welcome to BattleShip!\n\nFirst player's name: \nSecond player's name: Alice's turn:\n"
    ));
}

#[test]
fn test_computer_vs_computer_session() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut controllers = [Controller::computer(), Controller::computer()];
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
    let game = console.run(&mut rng, &mut controllers).unwrap();
    let (_, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();

    assert!(game.is_over());
    let winner = game.winner().unwrap().name().to_string();
    assert!(winner == "Computer 1" || winner == "Computer 2");
    assert!(out.ends_with(&format!("Game Over!\n{} wins!\n", winner)));
    assert!(!out.contains("name: "));
}

#[test]
fn test_human_against_computer() {
    let mut game = small_game();
    let mut rng = SmallRng::seed_from_u64(4);
    let mut controllers = [Controller::Human, Controller::computer()];
    let mut console = Console::new(Cursor::new("A0\nB0\n".as_bytes()), Vec::new());
    console.play(&mut game, &mut controllers, &mut rng).unwrap();
    let (_, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();
    // the computer gets a single shot before Alice finishes Bob's destroyer
    assert_eq!(game.state(), GameState::GameOver { winner: Seat::One });
    let computer_turn = out.split("Bob's turn:\n").nth(1).unwrap();
    let echoed = computer_turn
        .lines()
        .find_map(|line| line.strip_prefix(TARGET_PROMPT))
        .unwrap();
    assert!(echoed.parse::<battleship_duel::Target>().is_ok());
    assert!(out.ends_with("Alice wins!\n"));
}
