//! AI Simulator CLI: batches of AI-vs-AI Xeri games on an in-memory store.
//!
//! Games run through the same turn engine as live play, so every result is a
//! legal game. Per-game metrics go to a JSONL or JSON file.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiTier, OutputFormat};
use xeri_backend::domain::{Difficulty, PlayerNo};
use xeri_backend::telemetry::{init_tracing, LogFormat};
use xeri_backend::EngineConfig;

#[derive(Parser)]
#[command(name = "xeri-simulator")]
#[command(about = "Fast in-memory Xeri simulator for AI tuning")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI tier for both seats (shortcut for --seat1 and --seat2)
    #[arg(long, conflicts_with_all = ["seat1", "seat2"])]
    seats: Option<AiTier>,

    /// AI tier for seat 1 (moves first)
    #[arg(long, default_value = "medium")]
    seat1: AiTier,

    /// AI tier for seat 2
    #[arg(long, default_value = "medium")]
    seat2: AiTier,

    /// Base seed; game N uses seed + N - 1. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(filter, format)?;

    let config = EngineConfig::from_env()?;
    let seats: [Difficulty; 2] = match args.seats {
        Some(tier) => [tier.into(), tier.into()],
        None => [args.seat1.into(), args.seat2.into()],
    };
    let base_seed = args.seed.unwrap_or_else(rand::random);

    if args.show_output {
        info!(
            games = args.games,
            seat1 = %seats[0],
            seat2 = %seats[1],
            base_seed,
            "Starting AI simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let simulator = Simulator::new(config);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_number in 1..=args.games {
        let game_start = Instant::now();
        let seed = base_seed.wrapping_add(u64::from(game_number - 1));

        match simulator.simulate_game(seed, seats) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(game_number, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_number, e);
                }
                if args.verbose {
                    info!(
                        game_number,
                        outcome = ?result.session.outcome,
                        "Game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_number, seed, code = %e.code(), "Game failed: {}", e);
            }
        }
    }

    let elapsed = start.elapsed();
    let path = output_writer.output_path().to_path_buf();
    output_writer.finish()?;

    if args.show_output {
        info!("Results written to: {}", path.display());
        print_summary(&results, errors, elapsed, args.games, seats);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    seats: [Difficulty; 2],
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    let mut points = [0u64; 2];
    let mut xeris = [0u64; 2];
    for result in results {
        match result.session.winner() {
            Some(p) => wins[p.index()] += 1,
            None => draws += 1,
        }
        for p in PlayerNo::BOTH {
            let stats = result.session.stats[p.index()];
            points[p.index()] += u64::from(stats.total_points);
            xeris[p.index()] += u64::from(stats.xeri_count);
        }
    }

    let n = results.len() as f64;
    println!("\n=== Results by Seat ===");
    for p in PlayerNo::BOTH {
        let i = p.index();
        println!(
            "Seat {} ({}): wins={} ({:.1}%), avg points={:.1}, avg xeris={:.2}",
            p.number(),
            seats[i],
            wins[i],
            f64::from(wins[i]) / n * 100.0,
            points[i] as f64 / n,
            xeris[i] as f64 / n
        );
    }
    println!("Draws: {} ({:.1}%)", draws, f64::from(draws) / n * 100.0);
}
