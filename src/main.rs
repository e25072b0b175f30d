//! tictactoe_minimax - terminal front-end
//!
//! Human vs CPU, CPU vs CPU, and board analysis on top of the search
//! library.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tictactoe_minimax::{
    Algorithm, Analysis, Board, GameState, Move, Outcome, PlayConfig, Player, Position, analyze,
    outcome, parallel, rules,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlayConfig::default(),
    };
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            human,
            algorithm,
            delay_ms,
            parallel,
        } => run_play(config.with_overrides(algorithm, human, delay_ms, parallel)),
        Command::Watch {
            algorithm_x,
            algorithm_o,
            delay_ms,
        } => {
            let config = config.with_overrides(None, None, delay_ms, None);
            let algorithm_x = algorithm_x.unwrap_or(*config.algorithm());
            let algorithm_o = algorithm_o.unwrap_or(*config.algorithm());
            run_watch(&config, algorithm_x, algorithm_o)
        }
        Command::Analyze {
            board,
            to_move,
            algorithm,
            json,
        } => {
            let algorithm = algorithm.unwrap_or(*config.algorithm());
            run_analyze(&board, to_move, algorithm, json)
        }
    }
}

/// Human vs CPU over stdin.
#[instrument(skip(config), fields(human = %config.human(), algorithm = %config.algorithm()))]
fn run_play(config: PlayConfig) -> Result<()> {
    let human = *config.human();
    let mut state = GameState::new();
    let mut lines = io::stdin().lock().lines();

    info!("Starting human vs CPU game");
    println!(
        "You are {}. Enter a cell number (1-9) or a name like 'center'; 'q' quits.",
        human
    );

    loop {
        println!("\n{}\n", state.board().display());

        let outcome = state.outcome();
        if outcome.is_terminal() {
            println!("{}", verdict_for(outcome, human));
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            let again = match lines.next() {
                Some(line) => line?.trim().eq_ignore_ascii_case("y"),
                None => false,
            };
            if !again {
                break;
            }
            state.reset();
            continue;
        }

        if state.to_move() == human {
            print!("Your move ({}): ", human);
            io::stdout().flush()?;

            let Some(line) = lines.next() else { break };
            let line = line.context("Failed to read from stdin")?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                break;
            }

            let Some(pos) = Position::from_label_or_number(input) else {
                println!("'{input}' is not a cell. Use 1-9 or a name like 'center'.");
                continue;
            };
            if let Err(e) = state.place(pos) {
                println!("{}", e);
            }
        } else {
            pause(*config.cpu_delay_ms());
            let mv = cpu_move(&mut state, *config.algorithm(), *config.parallel())?;
            println!("CPU plays {}", mv);
        }
    }

    info!("Leaving play mode");
    Ok(())
}

/// CPU vs CPU, printing each position.
#[instrument(skip(config))]
fn run_watch(config: &PlayConfig, algorithm_x: Algorithm, algorithm_o: Algorithm) -> Result<()> {
    let mut state = GameState::new();
    println!("{}\n", state.board().display());

    while !state.outcome().is_terminal() {
        pause(*config.cpu_delay_ms());
        let side = state.to_move();
        let algorithm = match side {
            Player::X => algorithm_x,
            Player::O => algorithm_o,
        };
        let mv = cpu_move(&mut state, algorithm, *config.parallel())?;
        if mv.is_none() {
            break;
        }
        println!("{} ({}) plays {}\n", side, algorithm, mv);
        println!("{}\n", state.board().display());
    }

    println!("{}", verdict(state.outcome()));
    Ok(())
}

/// Everything `analyze --json` reports.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    board: Board,
    to_move: Player,
    algorithm: Algorithm,
    outcome: Outcome,
    evaluation: i32,
    #[serde(flatten)]
    analysis: Analysis,
}

/// Scores every empty square of a board given on the command line.
#[instrument]
fn run_analyze(
    text: &str,
    to_move: Option<Player>,
    algorithm: Algorithm,
    json: bool,
) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board '{}'", text))?;
    if !rules::turn_parity_ok(&board) {
        warn!(%board, "Board is not reachable by alternating play; scores assume it anyway");
    }

    let side = to_move.unwrap_or_else(|| board.implied_to_move());
    let report = AnalysisReport {
        board,
        to_move: side,
        algorithm,
        outcome: outcome(&board),
        evaluation: rules::evaluate(&board),
        analysis: analyze(&board, side, algorithm),
    };

    if json {
        let text = serde_json::to_string_pretty(&report)
            .context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}\n", report.board.display());
    println!("Outcome: {}", report.outcome);
    println!("To move: {} ({})", report.to_move, report.algorithm);
    let analysis = &report.analysis;
    match &analysis.expected {
        Some(expected) => {
            for candidate in expected {
                let label = candidate.position.label();
                println!("  {label:<14} expected {:+.3}", candidate.expected);
            }
        }
        None => {
            for candidate in &analysis.candidates {
                if let Some(pos) = candidate.position() {
                    println!("  {:<14} score {:+}", pos.label(), candidate.score);
                }
            }
        }
    }
    println!("Best: {}", analysis.best);
    println!("Nodes searched: {}", analysis.stats.nodes);
    Ok(())
}

/// Plays the CPU's move, searching the root in parallel when asked.
fn cpu_move(state: &mut GameState, algorithm: Algorithm, use_parallel: bool) -> Result<Move> {
    if !use_parallel {
        return Ok(state.play_best(algorithm)?);
    }

    let mv = parallel::best_move(state.board(), state.to_move(), algorithm);
    if let Some(pos) = mv.position() {
        state.place(pos)?;
    }
    Ok(mv)
}

fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}

fn verdict(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(player) => format!("Player {} wins!", player),
        Outcome::Draw => "Game is a draw".to_string(),
        Outcome::InProgress => "Game is still in progress".to_string(),
    }
}

fn verdict_for(outcome: Outcome, human: Player) -> String {
    match outcome.winner() {
        Some(winner) if winner == human => "You win!".to_string(),
        Some(_) => "CPU wins.".to_string(),
        None => verdict(outcome),
    }
}
