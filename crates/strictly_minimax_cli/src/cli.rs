//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Board, Player, Strategy};

/// Strictly Minimax - optimal tic-tac-toe by exhaustive game-tree search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_minimax.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Side the human plays (x or o)
        #[arg(long)]
        human: Option<Player>,

        /// Search strategy (minimax or alpha-beta)
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Print search statistics after each engine move
        #[arg(long)]
        stats: bool,
    },

    /// Print the best move for a position
    Solve {
        /// Nine cells row-major, e.g. "XO./.X./..." (`.`, `_` or a digit for empty)
        #[arg(short, long)]
        board: Board,

        /// Search strategy (minimax or alpha-beta)
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides to the end
    SelfPlay {
        /// Search strategy (minimax or alpha-beta)
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Print search statistics after each move
        #[arg(long)]
        stats: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from(["strictly_minimax", "solve", "--board", "XO./OX./...", "--json"])
            .unwrap();
        match cli.command {
            Command::Solve { board, strategy, json } => {
                assert_eq!(board, "XO./OX./...".parse::<Board>().unwrap());
                assert_eq!(strategy, None);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_with_global_config() {
        let cli = Cli::try_parse_from([
            "strictly_minimax",
            "play",
            "--human",
            "o",
            "--strategy",
            "minimax",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Command::Play { human, strategy, stats } => {
                assert_eq!(human, Some(Player::O));
                assert_eq!(strategy, Some(Strategy::Minimax));
                assert!(!stats);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["strictly_minimax", "solve", "--board", "XO"]).is_err());
    }
}
