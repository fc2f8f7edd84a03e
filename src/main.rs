//! Wordle Host - CLI
//!
//! Play against a classic or adversarial host in a TUI or a plain terminal,
//! inspect how the host answers a guess, or benchmark the session store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_host::{
    commands::{BenchmarkConfig, analyze_guess, run_benchmark, run_simple},
    config::GameConfig,
    engine::SessionStore,
    output::{print_analysis_result, print_benchmark_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_host",
    about = "Five-letter word game host with classic and adversarial modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: GameConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show how the adversarial host would answer a guess
    Analyze {
        /// Word to analyze
        guess: String,
    },

    /// Play many games concurrently against one session store
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = cli.config.build_store()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&store, &cli.config),
        Commands::Simple => run_simple(&store, &cli.config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Analyze { guess } => run_analyze_command(&guess, &store),
        Commands::Benchmark { count } => run_benchmark_command(count, &store, &cli.config),
    }
}

fn run_analyze_command(guess: &str, store: &SessionStore) -> Result<()> {
    let result = analyze_guess(guess, store.default_words()).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, store: &SessionStore, config: &GameConfig) -> Result<()> {
    let mode = if config.host_cheating() { "adversarial" } else { "classic" };
    println!("Running benchmark: {count} {mode} games...");

    let result = run_benchmark(
        store,
        BenchmarkConfig {
            games: count,
            seed: config.seed.unwrap_or_else(rand::random),
            host_cheating: config.host_cheating(),
        },
    )?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(store: &SessionStore, config: &GameConfig) -> Result<()> {
    use wordle_host::interactive::{App, run_tui};

    let app = App::new(store, config.host_cheating(), config.max_attempts)?;
    run_tui(app)
}
