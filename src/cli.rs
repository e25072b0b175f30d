//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use tictactoe_minimax::{Algorithm, Player};

/// Tic-tac-toe with an unbeatable CPU
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Optimal tic-tac-toe move search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML play config
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the CPU in the terminal
    Play {
        /// Mark you play (x moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Search used for CPU moves (minimax, alpha_beta, expectimax)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Pause before each CPU move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Score root moves in parallel (`--parallel=false` overrides the config)
        #[arg(long, num_args = 0..=1, require_equals = true)]
        #[arg(default_missing_value = "true")]
        parallel: Option<bool>,
    },

    /// Watch two CPUs play each other
    Watch {
        /// Search used by X
        #[arg(long)]
        algorithm_x: Option<Algorithm>,

        /// Search used by O
        #[arg(long)]
        algorithm_o: Option<Algorithm>,

        /// Pause between moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Score every move on a board, e.g. `analyze "XOX/OXO/___"`
    Analyze {
        /// Nine squares in row-major order: X, O, and _ . or - for empty
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long)]
        to_move: Option<Player>,

        /// Search used to score moves
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
