//! Mastermind Solver - CLI
//!
//! Replays every possible secret, plays a single game, or gathers statistics
//! over all secrets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{PlayConfig, ReplayConfig, run_play, run_replay, run_test_all},
    output::{ConsoleObserver, print_play_result, print_replay_summary, print_test_all_statistics},
    solver::{CANDIDATE_COUNT, GameConfig},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Brute-force Mastermind solver using clue-consistent candidate filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Do not print the secret code when a game starts
    #[arg(long, global = true)]
    hide_secret: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game for every possible secret in order (default)
    Replay {
        /// Stop after this many games
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Play a single game
    Play {
        /// Secret code, e.g. RGBY or "red,green,blue,yellow" (random if omitted)
        #[arg(short = 'c', long)]
        secret: Option<String>,

        /// Seed for the random secret
        #[arg(long, conflicts_with = "secret")]
        seed: Option<u64>,
    },

    /// Solve every possible secret silently and report statistics
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let reveal_secret = !cli.hide_secret;

    // Default to replaying every secret if no command given
    let command = cli.command.unwrap_or(Commands::Replay { limit: None });

    match command {
        Commands::Replay { limit } => {
            run_replay_command(limit, reveal_secret);
            Ok(())
        }
        Commands::Play { secret, seed } => run_play_command(secret, seed, reveal_secret),
        Commands::TestAll { limit } => {
            run_test_all_command(limit);
            Ok(())
        }
    }
}

fn run_replay_command(limit: Option<usize>, reveal_secret: bool) {
    let config = ReplayConfig {
        limit,
        game: GameConfig::default(),
    };
    let mut observer = ConsoleObserver::new(reveal_secret);

    let summary = run_replay(&config, &mut observer);
    print_replay_summary(&summary);
}

fn run_play_command(secret: Option<String>, seed: Option<u64>, reveal_secret: bool) -> Result<()> {
    let config = PlayConfig {
        secret,
        seed,
        game: GameConfig::default(),
    };
    let mut observer = ConsoleObserver::new(reveal_secret);

    let result = run_play(&config, &mut observer).context("Invalid secret code")?;
    print_play_result(&result);
    Ok(())
}

fn run_test_all_command(limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets\n",
        limit.map_or(CANDIDATE_COUNT, |l| l.min(CANDIDATE_COUNT))
    );

    let stats = run_test_all(GameConfig::default(), limit);
    print_test_all_statistics(&stats);
}
