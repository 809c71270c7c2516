mod config;
mod game_loop;
mod render;

use std::io;
use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};
use config::{CONFIG_FILE, Config, get_config_loader};
use game_loop::GameLoop;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Seed for the computer's tie-breaking, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Log search decisions to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config = match get_config_loader(&args.config).load_existing() {
        Ok(Some(config)) => {
            log!("Using config {}", args.config);
            config
        }
        Ok(None) => {
            log!("No config file at {}, using defaults", args.config);
            Config::default()
        }
        Err(e) => {
            eprintln!("{}; using default settings", e);
            Config::default()
        }
    };

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Tie-break seed: {}", rng.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = GameLoop::new(stdin.lock(), stdout.lock(), &mut rng, &config.symbols);

    if let Err(e) = game.play(config.first_player.mark()) {
        log!("Game aborted: {}", e);
        eprintln!("{}", e);
    }
}
