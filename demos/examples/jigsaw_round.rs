// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jigsaw round.
//!
//! Play a 3×3 round by dragging every piece onto its board slot, then print the
//! scoreboard and messages. Pass a TOML file to override the defaults.
//!
//! Run:
//! - `cargo run -p dragndrop_demos --example jigsaw_round`
//! - `RUST_LOG=info cargo run -p dragndrop_demos --example jigsaw_round -- game.toml`

use std::time::{Duration, Instant};

use dragndrop_jigsaw::{Difficulty, Game, GameConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let start = Instant::now();
    let mut game = Game::new(config, SmallRng::seed_from_u64(2025), start)?;
    game.choose_difficulty(Difficulty::Custom("3"), start)?;
    println!("picture: {}", game.board().picture());

    let mut clock = start;
    for _ in 0..2 {
        let count = game.board().pieces().len();
        for i in 0..count {
            clock += Duration::from_millis(1_250);
            let (piece, _) = game.board().pieces()[i];
            let slot = game.board().board_anchors(game.scene())[i];
            let Some(from) = game.scene().bounding_rect(piece).map(|r| r.center()) else {
                continue;
            };
            let Some(to) = game.scene().bounding_rect(slot).map(|r| r.center()) else {
                continue;
            };
            game.pointer_down(from);
            game.pointer_move(to);
            if let Some(done) = game.pointer_up(to, clock) {
                println!(
                    "completed in {:.2}s (rank {:?}), next picture {}",
                    done.time.as_secs_f64(),
                    done.rank,
                    done.next_picture
                );
            }
        }
    }

    println!("scoreboard:");
    for (rank, time) in game.scoreboard().times().iter().enumerate() {
        println!("  {}. {:.2}", rank + 1, time.as_secs_f64());
    }
    for message in game.messages().messages() {
        println!("[{:.2}] {}", message.opacity, message.text);
    }
    Ok(())
}
