use crate::bots::RacerBot;
use crate::util::parse_round;
use anyhow::{Context, Result};
use overdrive_core::{format_command, Action, GameState, RaceRules};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub const STATE_FILE: &str = "state.json";

pub fn state_path(rounds_dir: &Path, round: u32) -> PathBuf {
    rounds_dir.join(round.to_string()).join(STATE_FILE)
}

/// Reads and validates one round snapshot.
pub fn load_state(path: &Path, rules: &RaceRules) -> Result<GameState> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading state {}", path.display()))?;
    let state: GameState = serde_json::from_str(&data)
        .with_context(|| format!("failed parsing state {}", path.display()))?;
    state
        .validate(rules)
        .with_context(|| format!("invalid state {}", path.display()))?;
    Ok(state)
}

/// Decides one round and returns the command line for it.
pub fn play_round(
    bot: &mut dyn RacerBot,
    rules: &RaceRules,
    rounds_dir: &Path,
    round: u32,
) -> Result<String> {
    let state = load_state(&state_path(rounds_dir, round), rules)?;
    if state.current_round != round {
        warn!(
            round,
            state_round = state.current_round,
            "state file round does not match announced round"
        );
    }
    let action = bot.next_action(&state);
    Ok(format_command(round, &action))
}

/// Answers every round number read from `input` until it closes. A round that
/// cannot be played is answered with `NOTHING` so the match keeps going.
/// Returns the number of rounds answered.
pub fn run_turn_loop<R: BufRead, W: Write>(
    bot: &mut dyn RacerBot,
    rules: &RaceRules,
    rounds_dir: &Path,
    input: R,
    mut output: W,
) -> Result<usize> {
    info!(bot = bot.id(), rounds_dir = %rounds_dir.display(), "turn loop started");
    let mut answered = 0usize;

    for line in input.lines() {
        let line = line.context("failed reading round number")?;
        if line.trim().is_empty() {
            continue;
        }
        let round = match parse_round(&line) {
            Ok(round) => round,
            Err(err) => {
                warn!("skipping line {line:?}: {err:#}");
                continue;
            }
        };

        let command = play_round(bot, rules, rounds_dir, round).unwrap_or_else(|err| {
            error!(round, "round failed, answering NOTHING: {err:#}");
            format_command(round, &Action::Nothing)
        });
        debug!(round, %command, "answering");

        writeln!(output, "{command}").context("failed writing command")?;
        output.flush().context("failed flushing command")?;
        answered += 1;
    }

    info!(answered, "turn loop finished");
    Ok(answered)
}
