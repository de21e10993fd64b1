#![cfg(feature = "std")]

//! Interactive shell: shows the recommended cell, reads the outcome back
//! and loops until every ship is sunk.

use std::io::{BufRead, Write};
use std::string::String;

use crate::{common::Outcome, game::TargetingEngine};
use rand::Rng;

/// Display toggles for an interactive session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Print the probability field before each recommendation.
    pub show_field: bool,
}

/// Parse a typed outcome. Accepts the menu number or the word.
pub fn parse_outcome(input: &str) -> Option<Outcome> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "m" | "miss" | "water" => Some(Outcome::Miss),
        "2" | "h" | "hit" => Some(Outcome::Hit),
        "3" | "s" | "sunk" | "sink" => Some(Outcome::Sunk),
        _ => None,
    }
}

/// Run a full session on `input`/`output`. Returns the number of turns played.
pub fn run_session<I, O, R>(
    engine: &mut TargetingEngine,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    options: ShellOptions,
) -> anyhow::Result<usize>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    while !engine.is_finished() {
        let target = engine.next_target(rng)?;

        if options.show_field {
            writeln!(output, "\nProbability field:")?;
            write!(output, "{}", engine.probability_field())?;
        }
        writeln!(output, "\n{}", engine.grid())?;
        writeln!(output, "Remaining ships: {:?}", engine.fleet().lengths())?;
        writeln!(output, "You should attack: {}", target)?;

        let outcome = prompt_outcome(input, output)?;
        if let Err(e) = engine.apply_result(target, outcome) {
            log::warn!("rejected {:?} at {}: {}", outcome, target, e);
            writeln!(output, "Error: {}", e)?;
        }
    }

    writeln!(output, "\n{}", engine.grid())?;
    writeln!(output, "Game over!")?;
    writeln!(output, "{} turns played.", engine.turns())?;
    Ok(engine.turns())
}

fn prompt_outcome<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> anyhow::Result<Outcome> {
    loop {
        write!(output, "What was the result? [1] miss  [2] hit  [3] sunk: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow::anyhow!("input closed before the game finished"));
        }
        match parse_outcome(&line) {
            Some(outcome) => return Ok(outcome),
            None => writeln!(output, "Invalid answer '{}'", line.trim())?,
        }
    }
}
