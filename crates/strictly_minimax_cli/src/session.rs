//! Game loops: human against engine, and engine against itself.

use crate::config::EngineConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_minimax::{
    Action, Board, GameStatus, Player, SearchOutcome, Searcher, initial_state, player, result,
    status, terminal, winning_line,
};
use tracing::{debug, info, instrument, warn};

/// Plays one game over `input`/`output` with the human on `config.human()`.
///
/// The human enters a keypad number 1-9 or `row,col`. Rejected input is
/// explained and asked for again. `quit` or end of input stops the game
/// early; the status at that point is returned.
#[instrument(skip_all, fields(human = %config.human(), strategy = %config.strategy()))]
pub fn play<R: BufRead, W: Write>(
    config: &EngineConfig,
    mut input: R,
    mut output: W,
) -> Result<GameStatus> {
    let searcher = Searcher::new(*config.strategy());
    let human = *config.human();
    let mut board = initial_state();

    writeln!(
        output,
        "You are {}. Enter a move as a number 1-9 or `row,col`; `quit` to leave.",
        human
    )?;
    info!("Game started");

    while !terminal(&board) {
        writeln!(output, "\n{}\n", board)?;
        let mover = player(&board);
        board = if mover == human {
            match read_human_move(&board, mover, &mut input, &mut output)? {
                Some(next) => next,
                None => {
                    writeln!(output, "Bye.")?;
                    info!("Human left the game");
                    return Ok(status(&board));
                }
            }
        } else {
            let outcome = searcher.search(&board)?;
            announce(&mut output, mover, &outcome, *config.show_stats())?;
            result(&board, outcome.action)?
        };
    }

    writeln!(output, "\n{}\n", board)?;
    let final_status = status(&board);
    match final_status {
        GameStatus::Won(winner) if winner == human => writeln!(output, "You win!")?,
        GameStatus::Won(_) => writeln!(output, "The engine wins.")?,
        _ => {}
    }
    describe_end(&mut output, &board)?;
    info!(status = %final_status, "Game finished");
    Ok(final_status)
}

/// Plays the engine against itself, printing every position. Returns the
/// final board.
#[instrument(skip_all, fields(strategy = %config.strategy()))]
pub fn self_play<W: Write>(config: &EngineConfig, mut output: W) -> Result<Board> {
    let searcher = Searcher::new(*config.strategy());
    let mut board = initial_state();

    while !terminal(&board) {
        writeln!(output, "{}\n", board)?;
        let mover = player(&board);
        let outcome = searcher.search(&board)?;
        announce(&mut output, mover, &outcome, *config.show_stats())?;
        board = result(&board, outcome.action)?;
        writeln!(output)?;
    }

    writeln!(output, "{}\n", board)?;
    describe_end(&mut output, &board)?;
    Ok(board)
}

/// Prompts until the human enters a legal move; `None` if they quit.
fn read_human_move<R: BufRead, W: Write>(
    board: &Board,
    mover: Player,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Board>> {
    loop {
        write!(output, "Your move ({}): ", mover)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        match result(board, action) {
            Ok(next) => return Ok(Some(next)),
            Err(e) => {
                warn!(%action, error = %e.kind, "Human move rejected");
                writeln!(output, "{}", e.kind)?;
            }
        }
    }
}

fn announce<W: Write>(
    output: &mut W,
    mover: Player,
    outcome: &SearchOutcome,
    show_stats: bool,
) -> Result<()> {
    writeln!(output, "Engine ({}) plays {}", mover, outcome.action)?;
    if show_stats {
        writeln!(
            output,
            "  value {}, {} nodes, {} leaves, {} cutoffs",
            outcome.value, outcome.stats.nodes, outcome.stats.leaves, outcome.stats.cutoffs
        )?;
    }
    Ok(())
}

fn describe_end<W: Write>(output: &mut W, board: &Board) -> Result<()> {
    match winning_line(board) {
        Some((winner, line)) => writeln!(output, "{} wins on the {}.", winner, line)?,
        None => writeln!(output, "Draw.")?,
    }
    Ok(())
}
