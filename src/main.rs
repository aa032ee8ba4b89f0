//! Dash Runner entry point
//!
//! Headless demo driver: runs the deterministic sim under a trivial autopilot
//! and prints the run summary as JSON. Usage:
//!
//! ```text
//! dash-runner [seed] [tuning.json]
//! ```

use dash_runner::consts::SIM_DT;
use dash_runner::sim::{GamePhase, GameState, TickInput, tick};
use dash_runner::tuning::Tuning;

/// Hard cap on demo length: five minutes of simulated time
const MAX_TICKS: u64 = 120 * 300;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .map(|s| s.parse::<u64>().unwrap_or_else(|_| exit_usage(&s)))
        .unwrap_or(0xDA5);
    let tuning = match args.next() {
        Some(path) => match Tuning::from_json_file(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("starting run (seed {seed})");
    let mut state = GameState::new(seed, tuning);
    let input = TickInput {
        idle_mode: true,
        ..TickInput::default()
    };

    let mut steps = 0u64;
    while state.phase != GamePhase::GameOver && steps < MAX_TICKS {
        tick(&mut state, &input, SIM_DT);
        steps += 1;
    }

    let summary = state.summary();
    log::info!(
        "run over after {:.1}s: {} spawned, {} cleared, final speed {:.0} px/s",
        summary.survived_secs,
        summary.obstacles_spawned,
        summary.obstacles_cleared,
        summary.final_speed,
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}

fn exit_usage(arg: &str) -> u64 {
    eprintln!("invalid seed {arg:?}; usage: dash-runner [seed] [tuning.json]");
    std::process::exit(2);
}
