//! verdoc-sim: run the upload flow without a browser.
//!
//! Submits one file to the flow controller at t=0 and fires every
//! timer it schedules on a virtual millisecond clock, printing each
//! effect with the time it was produced. Useful for:
//!
//! - Checking validation messages for a given name/type/size
//! - Seeing the full progress and status sequence with timings
//! - Reproducing reset-during-upload and double-submit races
//!
//! # Usage
//!
//! ```text
//! cargo run --bin verdoc-sim -- --name scan.pdf --mime application/pdf --size 2097152
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use verdoc_flow::{
    Effect, Effects, FlowEvents, FlowState, ScheduledTask, SelectedFile, TaskId, UploadConfig,
    UploadFlowController,
};

/// Headless driver for the verdoc upload flow.
///
/// Runs a single scripted flow against the real controller on a
/// virtual clock and prints the resulting effect transcript.
#[derive(Parser)]
#[command(name = "verdoc-sim", version)]
struct Cli {
    /// File name to submit.
    #[arg(long, default_value = "document.pdf")]
    name: String,

    /// MIME type to submit.
    #[arg(long, default_value = "application/pdf")]
    mime: String,

    /// File size in bytes.
    #[arg(long, default_value_t = 2 * 1024 * 1024)]
    size: u64,

    /// Submit an empty selection instead of a file.
    #[arg(long)]
    empty: bool,

    /// Issue a hard reset at this virtual time (ms).
    #[arg(long)]
    reset_at_ms: Option<u64>,

    /// Submit the same file again at this virtual time (ms).
    #[arg(long)]
    resubmit_at_ms: Option<u64>,

    /// Output the transcript as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Full upload config as a JSON string.
    ///
    /// The JSON must be a valid `UploadConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,
}

/// Errors in the command-line arguments.
#[derive(Debug, thiserror::Error)]
enum SimError {
    #[error("--name must not be empty")]
    EmptyName,

    #[error("error parsing --config-json: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

/// User actions scripted at fixed virtual times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Reset,
    Resubmit,
}

/// One effect with the virtual time it was produced at.
#[derive(Serialize)]
struct Entry {
    at_ms: u64,
    effect: Effect,
}

/// Full JSON report.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a UploadConfig,
    transcript: &'a [Entry],
    final_state: &'a FlowState,
    elapsed_ms: u64,
}

/// Virtual-clock host for the controller.
struct Simulation {
    flow: UploadFlowController,
    now_ms: u64,
    timer: Option<(u64, TaskId)>,
    transcript: Vec<Entry>,
}

impl Simulation {
    const fn new(config: UploadConfig) -> Self {
        Self {
            flow: UploadFlowController::new(config),
            now_ms: 0,
            timer: None,
            transcript: Vec::new(),
        }
    }

    fn record(&mut self, effects: Effects) {
        for effect in effects {
            match &effect {
                Effect::Schedule(ScheduledTask { id, delay_ms, .. }) => {
                    self.timer = Some((self.now_ms + u64::from(*delay_ms), *id));
                }
                Effect::Cancel(id) if self.timer.is_some_and(|(_, t)| t == *id) => {
                    self.timer = None;
                }
                _ => {}
            }
            self.transcript.push(Entry {
                at_ms: self.now_ms,
                effect,
            });
        }
    }

    /// Run timers and scripted actions in time order until both run out.
    ///
    /// An action due at the same time as a timer runs first.
    fn run(&mut self, files: &[SelectedFile], mut script: Vec<(u64, Action)>) {
        let effects = self.flow.on_select(files);
        self.record(effects);

        script.sort_by_key(|(at, _)| *at);
        let mut script = script.into_iter().peekable();

        loop {
            let next_action = script.peek().map(|(at, _)| *at);
            let next_timer = self.timer.map(|(due, _)| due);
            let take_action = match (next_action, next_timer) {
                (None, None) => break,
                (Some(at), Some(due)) => at <= due,
                (Some(_), None) => true,
                (None, Some(_)) => false,
            };
            let effects = if take_action {
                let Some((at, action)) = script.next() else {
                    break;
                };
                self.now_ms = self.now_ms.max(at);
                match action {
                    Action::Reset => self.flow.on_reset(),
                    Action::Resubmit => self.flow.on_select(files),
                }
            } else {
                let Some((due, id)) = self.timer.take() else {
                    break;
                };
                self.now_ms = due;
                self.flow.on_timer(id)
            };
            self.record(effects);
        }
    }
}

fn load_config(cli: &Cli) -> Result<UploadConfig, SimError> {
    if cli.name.is_empty() {
        return Err(SimError::EmptyName);
    }
    match &cli.config_json {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(UploadConfig::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let files = if cli.empty {
        Vec::new()
    } else {
        vec![SelectedFile::new(cli.name.clone(), cli.mime.clone(), cli.size)]
    };
    let script: Vec<(u64, Action)> = cli
        .reset_at_ms
        .map(|at| (at, Action::Reset))
        .into_iter()
        .chain(cli.resubmit_at_ms.map(|at| (at, Action::Resubmit)))
        .collect();

    let mut sim = Simulation::new(config);
    sim.run(&files, script);

    if cli.json {
        let report = Report {
            config: sim.flow.config(),
            transcript: &sim.transcript,
            final_state: sim.flow.state(),
            elapsed_ms: sim.now_ms,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing transcript: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for entry in &sim.transcript {
            println!("{:>6}ms  {}", entry.at_ms, entry.effect);
        }
        println!();
        println!("Final state after {}ms: {:?}", sim.now_ms, sim.flow.state());
    }

    ExitCode::SUCCESS
}
