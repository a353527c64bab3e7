//! Headless match-3 simulator (default binary).
//!
//! Builds a board from `MATCH3_*` environment variables, resolves the cascades
//! of the initial fill, then keeps playing the first hinted swap until the
//! board has no legal move left. Logs go to stderr, results to stdout.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use match3::core::Game;
use match3::engine::{find_hint, play_swap, resolve_cascade, GameConfig, OutputFormat};

const MAX_TURNS: usize = 256;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env();
    let mut game = config.build().context("failed to build the board")?;
    let initial = game.board().snapshot();

    if config.output == OutputFormat::Text {
        println!("initial board ({}):", game.types());
        print!("{}", game.board());
    }

    let opening = resolve_cascade(&mut game, config.max_cascades)?;
    if opening.truncated {
        warn!(rounds = opening.rounds.len(), "opening cascade hit the round limit");
    }
    info!(points = opening.total, "opening cascade resolved");

    let turns = play(&mut game, &config)?;
    let summary = game.board().snapshot();

    match config.output {
        OutputFormat::Text => {
            println!();
            println!("final board after {turns} turns:");
            print!("{}", game.board());
            println!("score: {}", game.score());
        }
        OutputFormat::Json => {
            let report = json!({
                "initial": serde_json::to_value(&initial)?,
                "final": serde_json::to_value(&summary)?,
                "turns": turns,
                "score": game.score(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Play hinted swaps until none is left. Returns the number of turns played.
fn play(game: &mut Game, config: &GameConfig) -> Result<usize> {
    let mut turns = 0;
    while turns < MAX_TURNS {
        let Some((a, b)) = find_hint(game.board()) else {
            info!(turns, "no moves left");
            break;
        };
        let report = play_swap(game, a, b, config.max_cascades)
            .with_context(|| format!("hinted swap {a} <-> {b} was rejected"))?;
        turns += 1;
        info!(
            turn = turns,
            %a,
            %b,
            rounds = report.rounds.len(),
            points = report.total,
            score = game.score(),
            "swap played"
        );
    }
    Ok(turns)
}
