use anyhow::{Context, Result};
use checkers_agents::{search, Controller, EngineConfig, Evaluator, Heuristic};
use checkers_core::{format_move, perft_detailed, perft_divide, GameState, Mode, Side};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers", about = "Checkers move engine")]
struct Cli {
    /// JSON file with engine settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed RNG seed, overriding the config file
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a move for the described game and write it out
    Move {
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
        #[arg(long, default_value = "output.txt")]
        output: PathBuf,
    },
    /// Count move-tree leaves
    Perft {
        depth: u8,
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the static evaluation for the side to move
    Eval {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Run a fixed-depth search and report the result
    Search {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        depth: Option<u8>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command {
        Command::Move { input, output } => run_move(config, &input, &output),
        Command::Perft { depth, input } => run_perft(depth, input.as_deref()),
        Command::Eval { input } => run_eval(input.as_deref()),
        Command::Search { input, depth } => run_search(&config, input.as_deref(), depth),
    }
}

fn load_state(path: &Path) -> Result<GameState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    GameState::from_description(&text)
        .with_context(|| format!("parsing game description in {}", path.display()))
}

/// Reads the description at `path`, or starts from the opening with Black to move.
fn state_or_opening(path: Option<&Path>) -> Result<GameState> {
    match path {
        Some(path) => load_state(path),
        None => Ok(GameState::new(Side::Black, Mode::Game, 100.0)),
    }
}

fn run_move(config: EngineConfig, input: &Path, output: &Path) -> Result<()> {
    let mut state = load_state(input)?;
    let mut controller = Controller::new(config);

    let text = match controller.play(&mut state) {
        Some(outcome) => {
            if let Some(board) = &outcome.board {
                print!("{}", board);
            }
            format_move(&outcome.mv, state.side)
        }
        None => String::new(),
    };

    std::fs::write(output, text).with_context(|| format!("writing {}", output.display()))
}

fn run_perft(depth: u8, input: Option<&Path>) -> Result<()> {
    let state = state_or_opening(input)?;

    println!("Running perft({}) for {}...", depth, state.side);
    print!("{}", state.board);

    if depth <= 3 {
        let results = perft_divide(&state.board, state.side, depth);
        let mut total = 0;

        for (mv, count) in &results {
            println!("{}: {}", mv, count);
            total += count;
        }

        println!("\nTotal: {}", total);
    } else {
        let start = Instant::now();
        let results = perft_detailed(&state.board, state.side, depth);
        let elapsed = start.elapsed();

        println!("Nodes: {}", results.nodes);
        println!("Captures: {}", results.captures);
        println!("Pieces taken: {}", results.pieces_taken);
        println!("Promotions: {}", results.promotions);
        println!("Time: {:.2}s", elapsed.as_secs_f64());
        println!("NPS: {:.0}", results.nodes as f64 / elapsed.as_secs_f64());
    }

    Ok(())
}

fn run_eval(input: Option<&Path>) -> Result<()> {
    let state = state_or_opening(input)?;

    print!("{}", state.board);
    println!(
        "Evaluation: {} (from {}'s perspective)",
        Heuristic.score(&state.board, state.side, state.side.opponent()),
        state.side
    );

    Ok(())
}

fn run_search(config: &EngineConfig, input: Option<&Path>, depth: Option<u8>) -> Result<()> {
    let state = state_or_opening(input)?;
    let depth = depth.unwrap_or_else(|| config.depth_for(state.time_remaining));
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Searching to depth {} for {}...", depth, state.side);

    let start = Instant::now();
    let result = search(&state.board, state.side, depth, &Heuristic, &mut rng);
    let elapsed = start.elapsed();

    match result.best_move {
        Some(best_move) => {
            println!("\nBest move: {}", best_move);
            println!("{}", format_move(&best_move, state.side).trim_end());
            match result.score {
                Some(score) => println!("Score: {}", score),
                None => println!("Score: n/a (only move)"),
            }
            println!("Nodes: {}", result.nodes);
            println!("Evaluations: {}", result.evaluations);
            println!("Time: {:.2}s", elapsed.as_secs_f64());
        }
        None => println!("No legal moves available"),
    }

    Ok(())
}
