//! Flappy entry point
//!
//! There is no window here: the binary runs the autopilot against the
//! simulation and prints a JSON summary of the session.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use flappy::highscores::RunRecord;
use flappy::{Autopilot, Command, FrameDriver, Game, GamePhase, Snapshot, Tuning};

#[derive(Parser, Debug)]
#[command(name = "flappy")]
#[command(about = "Run headless Flappy sessions with the autopilot")]
struct Args {
    /// Seed for the pipe height stream
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of runs to play before quitting
    #[arg(long, default_value_t = 3)]
    runs: u32,

    /// Hard cap on total ticks across all runs
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// JSON tuning file (missing fields use defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Pace ticks at 32 per second instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print the default tuning as JSON and exit
    #[arg(long)]
    dump_tuning: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    flaps: u64,
    best_score: u32,
    /// Score of the run in progress (or the last one) when the loop stopped
    last_score: u32,
    runs_played: u32,
    /// Most recent runs only
    runs: Vec<RunRecord>,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("loading tuning from {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.dump_tuning {
        println!("{}", Tuning::default().to_json()?);
        return Ok(());
    }
    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }

    let tuning = load_tuning(args.tuning.as_ref())?;
    log::info!("Flappy starting (seed {}, {} runs)", args.seed, args.runs);

    let mut driver = FrameDriver::new(Game::with_tuning(tuning, args.seed));
    let mut bot = Autopilot::new(true);
    let runs = args.runs;

    let input = |snap: &Snapshot| {
        // Quit instead of restarting once the requested runs are done
        if snap.phase == GamePhase::GameOver && snap.runs_played >= runs {
            return Some(Command::Quit);
        }
        bot.next_command(snap)
    };

    let ticks = if args.realtime {
        driver.run_realtime(args.max_ticks, input)
    } else {
        driver.run_for(args.max_ticks, input)
    };

    let game = driver.game();
    if game.phase() == GamePhase::Playing {
        log::warn!("Tick limit reached mid-run (score {})", game.score());
    }

    let summary = Summary {
        seed: args.seed,
        ticks,
        flaps: bot.flaps(),
        best_score: game.best_score(),
        last_score: game.score(),
        runs_played: game.scores().runs_played(),
        runs: game.scores().recent().copied().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

