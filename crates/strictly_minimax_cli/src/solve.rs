//! One-shot position analysis.

use anyhow::{Result, bail};
use serde::Serialize;
use std::io::Write;
use strictly_minimax::{
    Board, GameStatus, Player, SearchOutcome, Searcher, Strategy, check_board, player, status,
    terminal,
};
use tracing::instrument;

/// What `solve` reports about a position.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// The position, one row per line.
    pub board: String,
    /// Side to move.
    pub to_move: Player,
    /// Whether the game is over.
    pub status: GameStatus,
    /// Strategy used for the search.
    pub strategy: Strategy,
    /// Best move, absent on a finished game.
    pub best: Option<SearchOutcome>,
}

/// Analyses `board` and builds a report.
///
/// # Errors
///
/// Fails if the board could not arise from legal play.
#[instrument(skip(board))]
pub fn analyse(board: &Board, strategy: Strategy) -> Result<SolveReport> {
    if let Err(violations) = check_board(board) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>();
        bail!("Malformed board: {}", descriptions.join("; "));
    }

    let best = if terminal(board) {
        None
    } else {
        Some(Searcher::new(strategy).search(board)?)
    };

    Ok(SolveReport {
        board: board.to_string(),
        to_move: player(board),
        status: status(board),
        strategy,
        best,
    })
}

/// Writes the analysis of `board` as text or JSON.
pub fn solve<W: Write>(board: &Board, strategy: Strategy, json: bool, mut output: W) -> Result<()> {
    let report = analyse(board, strategy)?;

    if json {
        serde_json::to_writer_pretty(&mut output, &report)?;
        writeln!(output)?;
        return Ok(());
    }

    writeln!(output, "{}\n", report.board)?;
    writeln!(output, "Status: {}", report.status)?;
    match report.best {
        Some(best) => {
            writeln!(output, "To move: {}", report.to_move)?;
            writeln!(output, "Best move: {}", best.action)?;
            let verdict = match best.value {
                1 => "X wins",
                -1 => "O wins",
                _ => "draw",
            };
            writeln!(output, "Value: {} ({} with best play)", best.value, verdict)?;
            writeln!(
                output,
                "Searched {} nodes ({} leaves, {} cutoffs) with {}",
                best.stats.nodes, best.stats.leaves, best.stats.cutoffs, report.strategy
            )?;
        }
        None => writeln!(output, "No move: the game is over.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::Action;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_analyse_finds_win() {
        let report = analyse(&board("XO./OX./..."), Strategy::Minimax).unwrap();
        assert_eq!(report.to_move, Player::X);
        assert_eq!(report.status, GameStatus::InProgress);
        let best = report.best.unwrap();
        assert_eq!(best.action, Action::new(2, 2));
        assert_eq!(best.value, 1);
    }

    #[test]
    fn test_analyse_finished_game() {
        let report = analyse(&board("XXX/OO./..."), Strategy::AlphaBeta).unwrap();
        assert_eq!(report.status, GameStatus::Won(Player::X));
        assert!(report.best.is_none());
    }

    #[test]
    fn test_analyse_rejects_malformed() {
        let err = analyse(&board("OOO/.../..."), Strategy::AlphaBeta).unwrap_err();
        assert!(err.to_string().starts_with("Malformed board"), "{}", err);
    }

    #[test]
    fn test_text_report() {
        let mut output = Vec::new();
        solve(&board("XO./OX./..."), Strategy::AlphaBeta, false, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Best move: (2, 2)"), "{}", output);
        assert!(output.contains("Value: 1 (X wins with best play)"), "{}", output);
    }

    #[test]
    fn test_json_report() {
        let mut output = Vec::new();
        solve(&board("XX./.O./..."), Strategy::AlphaBeta, true, &mut output).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["to_move"], "O");
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["strategy"], "alpha-beta");
        assert_eq!(json["best"]["action"]["row"], 0);
        assert_eq!(json["best"]["action"]["col"], 2);
        assert_eq!(json["best"]["value"], 0);
    }
}
