//! headless-round: play rounds of the combat core without a renderer.
//!
//! Usage:
//!   headless-round play --rounds 5 --seed 42
//!   headless-round play --config tuning.json --max-seconds 300
//!   headless-round config > tuning.json

use std::path::PathBuf;
use std::process;

use tracing::{error, info, warn};

use invaders_core::commands::PlayerCommand;
use invaders_core::config::SimConfig;
use invaders_core::constants::TICK_RATE;
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::persistence::{HighScoreStore, InMemoryHighScore};
use invaders_sim::SimulationEngine;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => cmd_play(&args[2..]),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn print_usage() {
    eprintln!(
        "headless-round: play invader rounds with a scripted pilot\n\
         \n\
         Commands:\n\
         \n\
         play      Play one or more rounds and print a JSON summary per round\n\
         \n\
           --rounds <N>        Rounds to play (default: 1)\n\
           --seed <N>          RNG seed; round i uses seed + i (default: random)\n\
           --config <path>     JSON tuning file (missing fields use defaults)\n\
           --max-seconds <N>   Give up on a round after N simulated seconds (default: 600)\n\
         \n\
         config    Print the default tuning as JSON\n\
         \n\
         Environment:\n\
         \n\
           RUST_LOG            Log filter (default: info)\n\
           LOG_FORMAT=json     Emit logs as JSON lines on stderr\n"
    );
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse::<T>().ok();
        }
    }
    None
}

fn parse_config_path(args: &[String]) -> Option<PathBuf> {
    parse_flag::<String>(args, "--config").map(PathBuf::from)
}

// --- Config command ---

fn cmd_config() {
    match serde_json::to_string_pretty(&SimConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(error = %e, "failed to serialize default config");
            process::exit(1);
        }
    }
}

// --- Play command ---

fn load_config(args: &[String]) -> SimConfig {
    let Some(path) = parse_config_path(args) else {
        return SimConfig::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read config");
            process::exit(1);
        }
    };
    match SimConfig::from_json_str(&text) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %path.display(), error = %e, "invalid config");
            process::exit(1);
        }
    }
}

fn cmd_play(args: &[String]) {
    let base = load_config(args);
    let rounds: u32 = parse_flag(args, "--rounds").unwrap_or(1);
    let seed: Option<u64> = parse_flag(args, "--seed").or(base.seed);
    let max_seconds: u64 = parse_flag(args, "--max-seconds").unwrap_or(600);
    let max_ticks = max_seconds * TICK_RATE as u64;

    let mut high_score = InMemoryHighScore::default();

    for round in 0..rounds {
        let config = SimConfig {
            seed: seed.map(|s| s.wrapping_add(round as u64)),
            ..base.clone()
        };
        let mut engine = match SimulationEngine::try_new(config) {
            Ok(engine) => engine,
            Err(e) => {
                error!(error = %e, "invalid config");
                process::exit(1);
            }
        };

        let mut ended = None;
        let mut last = GameStateSnapshot::default();
        for _ in 0..max_ticks {
            engine.queue_commands(autopilot(&last));
            last = engine.tick();
            ended = last.events.iter().find_map(|event| match event {
                GameEvent::RoundEnded {
                    outcome,
                    cause,
                    final_score,
                } => Some((*outcome, *cause, *final_score)),
                _ => None,
            });
            if ended.is_some() {
                break;
            }
        }

        let Some((outcome, cause, final_score)) = ended else {
            warn!(
                round,
                score = engine.score(),
                max_seconds,
                "round did not finish in time"
            );
            continue;
        };

        let new_best = high_score.offer(final_score);
        info!(round, ?outcome, final_score, new_best, "round finished");

        let summary = serde_json::json!({
            "round": round,
            "outcome": outcome,
            "cause": cause,
            "score": final_score,
            "invaders_destroyed": last.score.invaders_destroyed,
            "seconds": last.time.elapsed_secs,
            "best": high_score.best(),
        });
        println!("{summary}");
    }
}

/// Scripted pilot: slide under the nearest invader and keep firing.
fn autopilot(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let Some(ship) = &snapshot.ship else {
        return Vec::new();
    };
    let ship_x = ship.bounds.center.x;

    let target = snapshot
        .invaders
        .iter()
        .map(|inv| inv.bounds.center.x)
        .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()));

    let velocity = match target {
        // Positive deflection moves the ship toward smaller x.
        Some(x) => ((ship_x - x) / 4.0).clamp(-1.0, 1.0),
        None => 0.0,
    };

    vec![PlayerCommand::Steer { velocity }, PlayerCommand::Fire]
}
