use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter, e.g. `debug` or
/// `battleship_duel::fleet=debug`.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Initialize logging with a filter taken from the `BATTLESHIP_LOG` environment
/// variable. Defaults to `warn`. Records go to stderr so they never mix with
/// the game's prompts on stdout.
pub fn init_logging() {
    let _ = Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
