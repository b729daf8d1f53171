//! Console front end: reads grid references, fires, and prints boards.
//!
//! The session is generic over its input and output so it can be driven
//! by stdin/stdout or by scripted buffers.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::core::{
    format_coordinate, parse_coordinate, CellSymbol, Coordinate, FireOutcome, GameConfig,
    GameEngine, GameStatus,
};

/// Totals across every round of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub shots: usize,
}

/// Print a rendered view with row letters and 1-based column numbers.
pub fn print_grid<W: Write>(
    out: &mut W,
    view: &[Vec<CellSymbol>],
    alphabet: &str,
) -> std::io::Result<()> {
    let cols = view.first().map_or(0, Vec::len);
    write!(out, "  ")?;
    for c in 1..=cols {
        write!(out, "{:>3}", c)?;
    }
    writeln!(out)?;
    for (row, letter) in view.iter().zip(alphabet.chars()) {
        write!(out, "{} ", letter)?;
        for cell in row {
            write!(out, "{:>3}", cell.to_string())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn describe(point: Coordinate, alphabet: &str) -> String {
    format_coordinate(point, alphabet).unwrap_or_else(|| point.to_string())
}

/// Play rounds until the player quits, declines a replay, or input ends.
pub fn run_session<I, O, R>(
    input: I,
    out: &mut O,
    rng: &mut R,
    config: GameConfig,
) -> anyhow::Result<SessionSummary>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let alphabet = config.alphabet;
    let cheat_code = config.cheat_code;
    let mut engine = GameEngine::new(config)?;
    let mut lines = input.lines();
    let mut summary = SessionSummary::default();

    'session: loop {
        engine.new_round(rng)?;
        summary.rounds_played += 1;
        log::info!("round {} started", summary.rounds_played);
        writeln!(
            out,
            "\n{} ships are hidden on a {}x{} grid. Enter a target like A1, or 'quit'.",
            engine.ships_remaining(),
            engine.grid().rows(),
            engine.grid().cols()
        )?;

        while engine.status() == GameStatus::InProgress {
            writeln!(out)?;
            print_grid(out, &engine.grid().render_player_view(), alphabet)?;
            write!(out, "Target ({} ships remaining): ", engine.ships_remaining())?;
            out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                summary.shots += engine.shots_fired();
                break 'session;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                summary.shots += engine.shots_fired();
                break 'session;
            }
            if line == cheat_code {
                writeln!(out, "\nShip positions:")?;
                print_grid(out, &engine.grid().render_omniscient_view(), alphabet)?;
                continue;
            }

            let point = match parse_coordinate(line, alphabet) {
                Ok(p) if engine.grid().is_point_valid(p) => p,
                Ok(_) => {
                    writeln!(out, "{} is off the grid.", line)?;
                    continue;
                }
                Err(e) => {
                    writeln!(out, "{}. Example: A1", e)?;
                    continue;
                }
            };
            let name = describe(point, alphabet);
            match engine.fire(point)? {
                FireOutcome::AlreadyFired => writeln!(out, "{}: already fired there.", name)?,
                FireOutcome::Miss => writeln!(out, "{}: miss.", name)?,
                FireOutcome::Hit => writeln!(out, "{}: HIT!", name)?,
                FireOutcome::Sunk(ship) => writeln!(out, "{}: you sank the {}!", name, ship)?,
            }
        }

        summary.rounds_won += 1;
        summary.shots += engine.shots_fired();
        writeln!(out)?;
        print_grid(out, &engine.grid().render_player_view(), alphabet)?;
        writeln!(out, "All ships sunk in {} shots!", engine.shots_fired())?;
        write!(out, "Play again? (y/n): ")?;
        out.flush()?;
        match lines.next().transpose()? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    writeln!(out)?;
    Ok(summary)
}
