use crate::bots::{bot_ids, create_bot};
use crate::runner::{load_state, state_path, STATE_FILE};
use crate::util::parse_bot_csv;
use anyhow::{anyhow, Context, Result};
use overdrive_core::{format_command, GameState, RaceRules};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct ReplayConfig {
    pub bots: Vec<String>,
    pub rules: RaceRules,
    pub rounds_dir: PathBuf,
    pub jobs: Option<usize>,
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub round: u32,
    pub bot_id: String,
    pub command: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReplaySummary {
    pub bot_id: String,
    pub decisions: usize,
    /// Keyed by command word, e.g. `USE_TWEET`.
    pub action_counts: BTreeMap<String, usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayReport {
    pub rounds_dir: String,
    pub rounds: Vec<u32>,
    /// Rounds whose state could not be loaded.
    pub skipped_rounds: Vec<u32>,
    pub jobs: Option<usize>,
    pub bots: Vec<BotReplaySummary>,
    pub decisions: Vec<DecisionRecord>,
}

pub fn resolve_bots(input: Option<&str>) -> Result<Vec<String>> {
    match input {
        None => Ok(bot_ids().iter().map(|id| (*id).to_string()).collect()),
        Some(raw) => parse_bot_csv(raw),
    }
}

/// Round numbers with a state file under `rounds_dir`, ascending.
pub fn discover_rounds(rounds_dir: &Path) -> Result<Vec<u32>> {
    let entries = fs::read_dir(rounds_dir)
        .with_context(|| format!("failed listing rounds in {}", rounds_dir.display()))?;
    let mut rounds = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed reading {}", rounds_dir.display()))?;
        let Some(round) = entry
            .file_name()
            .to_str()
            .and_then(|name| name.parse::<u32>().ok())
        else {
            continue;
        };
        if entry.path().join(STATE_FILE).is_file() {
            rounds.push(round);
        }
    }
    rounds.sort_unstable();
    Ok(rounds)
}

pub fn run_replay(config: ReplayConfig) -> Result<ReplayReport> {
    if config.bots.is_empty() {
        return Err(anyhow!("replay requires at least one bot"));
    }
    if let Some(unknown) = config
        .bots
        .iter()
        .find(|id| create_bot(id, &config.rules).is_none())
    {
        let available = bot_ids().join(", ");
        return Err(anyhow!("unknown bot '{unknown}'. available: {available}"));
    }
    if let Some(jobs) = config.jobs {
        if jobs == 0 {
            return Err(anyhow!("replay --jobs must be >= 1 when provided"));
        }
    }

    let mut states: Vec<(u32, GameState)> = Vec::new();
    let mut skipped_rounds = Vec::new();
    for round in discover_rounds(&config.rounds_dir)? {
        match load_state(&state_path(&config.rounds_dir, round), &config.rules) {
            Ok(state) => states.push((round, state)),
            Err(err) => {
                warn!(round, "skipping round: {err:#}");
                skipped_rounds.push(round);
            }
        }
    }
    if states.is_empty() {
        return Err(anyhow!(
            "no playable rounds found under {}",
            config.rounds_dir.display()
        ));
    }

    let replay_jobs: Vec<(&str, usize)> = config
        .bots
        .iter()
        .flat_map(|bot| (0..states.len()).map(move |index| (bot.as_str(), index)))
        .collect();

    let run_one = |&(bot_id, index): &(&str, usize)| -> Result<DecisionRecord> {
        let (round, state) = &states[index];
        let mut bot = create_bot(bot_id, &config.rules)
            .ok_or_else(|| anyhow!("unknown bot '{bot_id}'"))?;
        let action = bot.next_action(state);
        Ok(DecisionRecord {
            round: *round,
            bot_id: bot_id.to_string(),
            command: format_command(*round, &action),
        })
    };

    let results: Vec<Result<DecisionRecord>> = if let Some(jobs) = config.jobs {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build rayon threadpool")?;
        pool.install(|| replay_jobs.par_iter().map(run_one).collect())
    } else {
        replay_jobs.par_iter().map(run_one).collect()
    };

    let mut decisions = Vec::with_capacity(results.len());
    for result in results {
        decisions.push(result?);
    }
    decisions.sort_by(|a, b| a.bot_id.cmp(&b.bot_id).then(a.round.cmp(&b.round)));

    let mut grouped: BTreeMap<&str, BotReplaySummary> = BTreeMap::new();
    for record in &decisions {
        let summary = grouped
            .entry(record.bot_id.as_str())
            .or_insert_with(|| BotReplaySummary {
                bot_id: record.bot_id.clone(),
                decisions: 0,
                action_counts: BTreeMap::new(),
            });
        summary.decisions += 1;
        *summary
            .action_counts
            .entry(command_word(&record.command).to_string())
            .or_default() += 1;
    }

    let report = ReplayReport {
        rounds_dir: config.rounds_dir.display().to_string(),
        rounds: states.iter().map(|(round, _)| *round).collect(),
        skipped_rounds,
        jobs: config.jobs,
        bots: grouped.into_values().collect(),
        decisions,
    };

    info!(
        rounds = report.rounds.len(),
        skipped = report.skipped_rounds.len(),
        bots = report.bots.len(),
        "replay finished"
    );

    if let Some(out) = &config.out {
        write_report(out, &report)?;
    }
    Ok(report)
}

/// `C;12;USE_TWEET 3 56` -> `USE_TWEET`
fn command_word(command: &str) -> &str {
    command
        .rsplit(';')
        .next()
        .and_then(|action| action.split_whitespace().next())
        .unwrap_or(command)
}

fn write_report(path: &Path, report: &ReplayReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }
    let encoded = serde_json::to_vec_pretty(report)?;
    fs::write(path, encoded).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_word_strips_round_and_arguments() {
        assert_eq!(command_word("C;12;USE_TWEET 3 56"), "USE_TWEET");
        assert_eq!(command_word("C;1;ACCELERATE"), "ACCELERATE");
    }

    #[test]
    fn default_bot_list_is_the_full_roster() {
        assert_eq!(resolve_bots(None).unwrap(), vec!["cascade", "cruise"]);
        assert_eq!(resolve_bots(Some("cruise")).unwrap(), vec!["cruise"]);
    }
}
