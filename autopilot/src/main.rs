use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use overdrive_autopilot::bots::{bot_ids, create_bot, describe_bots, RacerBot};
use overdrive_autopilot::config::AutopilotConfig;
use overdrive_autopilot::replay::{resolve_bots, run_replay, ReplayConfig};
use overdrive_autopilot::runner::{load_state, run_turn_loop};
use overdrive_core::{format_command, RaceRules};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "overdrive-autopilot")]
#[command(about = "Single-turn decision bot for the Overdrive racing game")]
struct Cli {
    /// JSON config file (bot, rounds_dir, rules); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read round numbers on stdin and answer each with a command line (default)
    Play {
        #[arg(long)]
        bot: Option<String>,
        #[arg(long)]
        rounds_dir: Option<PathBuf>,
    },
    /// Decide a single state file and print its command line
    Decide {
        #[arg(long)]
        state: PathBuf,
        /// Round to stamp on the command; defaults to the state's current round
        #[arg(long)]
        round: Option<u32>,
        #[arg(long)]
        bot: Option<String>,
    },
    /// Re-run bots over a directory of recorded rounds
    Replay {
        #[arg(long)]
        rounds_dir: Option<PathBuf>,
        #[arg(long)]
        bots: Option<String>,
        #[arg(long)]
        jobs: Option<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List available bots
    ListBots,
    /// Print the effective race rules as JSON
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Cli { config, command } = Cli::parse();
    let config = AutopilotConfig::load(config.as_deref())?;

    match command.unwrap_or(Commands::Play {
        bot: None,
        rounds_dir: None,
    }) {
        Commands::Play { bot, rounds_dir } => {
            let bot_id = bot.unwrap_or_else(|| config.bot.clone());
            let rounds_dir = rounds_dir.unwrap_or_else(|| config.rounds_dir.clone());
            let mut bot = resolve_bot(&bot_id, &config.rules)?;
            let stdin = io::stdin();
            run_turn_loop(
                bot.as_mut(),
                &config.rules,
                &rounds_dir,
                stdin.lock(),
                io::stdout(),
            )?;
        }
        Commands::Decide { state, round, bot } => {
            let bot_id = bot.unwrap_or_else(|| config.bot.clone());
            let mut bot = resolve_bot(&bot_id, &config.rules)?;
            let snapshot = load_state(&state, &config.rules)?;
            let round = round.unwrap_or(snapshot.current_round);
            let action = bot.next_action(&snapshot);
            println!("{}", format_command(round, &action));
        }
        Commands::Replay {
            rounds_dir,
            bots,
            jobs,
            output,
        } => {
            let bots = resolve_bots(bots.as_deref())?;
            let rounds_dir = rounds_dir.unwrap_or_else(|| config.rounds_dir.clone());
            let report = run_replay(ReplayConfig {
                bots,
                rules: config.rules.clone(),
                rounds_dir,
                jobs,
                out: output.clone(),
            })?;

            println!("rounds_dir={}", report.rounds_dir);
            println!("rounds={}", report.rounds.len());
            println!("skipped={}", report.skipped_rounds.len());
            println!(
                "jobs={}",
                report
                    .jobs
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "auto".to_string())
            );
            for summary in &report.bots {
                let counts = summary
                    .action_counts
                    .iter()
                    .map(|(word, count)| format!("{word}={count}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("  {:10} decisions={} {counts}", summary.bot_id, summary.decisions);
            }
            if let Some(path) = output {
                println!("output={}", path.display());
            }
        }
        Commands::ListBots => {
            for (id, description) in describe_bots() {
                println!("{id:20} {description}");
            }
        }
        Commands::Rules => {
            println!("{}", serde_json::to_string_pretty(&config.rules)?);
        }
    }

    Ok(())
}

fn resolve_bot(id: &str, rules: &RaceRules) -> Result<Box<dyn RacerBot>> {
    create_bot(id, rules).ok_or_else(|| {
        let available = bot_ids().join(", ");
        anyhow!("unknown bot '{id}'. available: {available}")
    })
}
