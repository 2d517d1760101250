//! Touring machine driver.
//!
//! Loads a raw program file at `$0200` and steps it, printing the state
//! register before every step. By default each step waits for Enter.
//! Log output goes to stderr so stdout stays parseable with `--json`.
//!
//! ```text
//! touring program.bin
//! touring --mode interval --hz 4 program.bin
//! touring --mode free --json program.bin
//! ```

mod runner;
mod strobe;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use emu_core::{MasterClock, Strobe};
use emu_touring::{MAX_PROGRAM_LEN, Machine};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use runner::{RunnerConfig, StopReason};
use strobe::{FreeRunning, IntervalStrobe, KeypressStrobe};

/// Step budget for `--mode free` when `--max-steps` is not given.
const FREE_RUN_STEPS: u64 = 1_000_000;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Wait for Enter before each step.
    Step,
    /// Step at a fixed rate.
    Interval,
    /// Step as fast as possible.
    Free,
}

#[derive(Parser, Debug)]
#[command(name = "touring")]
#[command(about = "Single-step a Touring machine program", long_about = None)]
struct Args {
    /// Raw program image, loaded at $0200
    program: PathBuf,

    /// How steps are paced
    #[arg(long, value_enum, default_value_t = Mode::Step)]
    mode: Mode,

    /// Steps per second in interval mode
    #[arg(long, default_value_t = 10)]
    hz: u64,

    /// Stop after this many steps
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print the final registers as JSON
    #[arg(long)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    let data = fs::read(&args.program)
        .with_context(|| format!("failed to read {}", args.program.display()))?;
    if data.len() > MAX_PROGRAM_LEN {
        bail!(
            "{} is {} bytes; at most {MAX_PROGRAM_LEN} bytes fit in memory",
            args.program.display(),
            data.len()
        );
    }
    let mut machine = Machine::new(&data)?;
    log::info!("loaded {} ({} bytes)", args.program.display(), data.len());

    let config = RunnerConfig {
        max_steps: match args.mode {
            Mode::Free => Some(args.max_steps.unwrap_or(FREE_RUN_STEPS)),
            Mode::Step | Mode::Interval => args.max_steps,
        },
        echo_state: args.mode != Mode::Free,
    };
    let mut strobe: Box<dyn Strobe> = match args.mode {
        Mode::Step => Box::new(KeypressStrobe::new(io::stdin().lock())),
        Mode::Interval => Box::new(IntervalStrobe::new(MasterClock::new(args.hz))),
        Mode::Free => Box::new(FreeRunning),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let reason = runner::run(&mut machine, &mut strobe, &mut out, config)?;
    if reason == StopReason::StepLimit {
        log::warn!("stopped after {} steps at PC={:#06X}", machine.steps(), machine.pc());
    }

    runner::report(&machine, reason, args.json, &mut out)?;
    Ok(())
}
