//! Unattended game runner.
//!
//! Drives a session at a fixed 60 Hz with a predictive controller on
//! both paddles, logging rally outcomes and optionally recording a
//! postcard tape of wire notes for a display sink to replay.

mod ai;
mod notes;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pong_core::{Field, GameParams, GameState, Mode, Outcome, Session, Shapes, Side};
use proto::Note;

const FRAME_MS: f32 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Headless paddle game runner with AI on both sides")]
struct Cli {
    /// Seed for the serve-angle generator
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of 60 Hz frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Free play instead of a competitive match
    #[arg(long)]
    free: bool,

    /// Free play: stop the game after a miss until restarted
    #[arg(long)]
    need_restart: bool,

    /// Free play: show per-side tallies
    #[arg(long)]
    has_counter: bool,

    /// Do not pause when a rally ends
    #[arg(long)]
    no_miss_pause: bool,

    /// Lives per player in a competitive match
    #[arg(long, default_value_t = 3)]
    lives: u32,

    /// Ball speed slider (speed is slider * 0.05 px/ms)
    #[arg(long, default_value_t = 7.0)]
    ball_slider: f32,

    /// Paddle step in px per move
    #[arg(long, default_value_t = 5.0)]
    paddle_slider: f32,

    /// Record wire notes to this file
    #[arg(long)]
    tape: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mode = if cli.free {
        Mode::Free {
            need_restart: cli.need_restart,
            has_counter: cli.has_counter,
        }
    } else {
        Mode::Competitive { lives: cli.lives }
    };
    let params = GameParams::from_settings(mode, !cli.no_miss_pause, cli.ball_slider, cli.paddle_slider);
    let mut session = Session::new(params, Shapes::default(), Field::default(), cli.seed);
    let mut tape: Vec<Note> = Vec::new();

    notes::record_transition(session.start(), &mut tape);
    log::info!(
        "running {} frames, seed {}, {} mode",
        cli.frames,
        cli.seed,
        if cli.free { "free" } else { "competitive" }
    );

    let mut stamp = 0.0f32;
    let mut rallies = 0u32;
    for frame in 0..cli.frames {
        for side in [Side::Left, Side::Right] {
            if let Some(dir) = ai::paddle_dir(&session, side) {
                session.queue_move(side, dir);
            }
        }
        stamp += FRAME_MS;
        let outcome = session.frame(stamp);
        notes::record_frame(&mut session, &mut tape);

        match outcome {
            Outcome::Continue => {}
            Outcome::Miss { side, .. } => {
                rallies += 1;
                log::info!("frame {frame}: rally ended at the {side:?} goal");
                if session.state() == GameState::Miss {
                    notes::record_transition(session.toggle(), &mut tape);
                }
            }
            Outcome::Loss { side } => {
                rallies += 1;
                log::info!("frame {frame}: {side:?} is out of lives, game over");
                break;
            }
        }
    }
    log::info!("finished with {rallies} rallies ended");

    if let Some(path) = &cli.tape {
        let bytes = postcard::to_allocvec(&tape)?;
        fs::write(path, bytes).with_context(|| format!("writing tape to {}", path.display()))?;
        log::info!("wrote {} notes to {}", tape.len(), path.display());
    }
    Ok(())
}
