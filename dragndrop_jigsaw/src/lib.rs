// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragndrop Jigsaw: a picture puzzle played on the dragndrop engine.
//!
//! A picture is cut into `size × size` square pieces which start shuffled in a
//! toolbox. The player drags them onto a board of drop anchors; when every
//! board anchor holds its own piece the round is won, the time goes on the
//! scoreboard, and a new round starts with another picture.
//!
//! - [`GameConfig`]: pictures, difficulty presets, and layout, loaded from TOML.
//! - [`Game`]: the game loop. Feed it pointer input and a clock.
//! - [`Board`]: builds toolbox and board regions and checks completeness.
//! - [`Chrono`], [`Scoreboard`], [`MessageBoard`]: the widgets around the board.
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use dragndrop_jigsaw::{Difficulty, Game, GameConfig};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let t0 = Instant::now();
//! let mut game = Game::new(GameConfig::default(), SmallRng::seed_from_u64(1), t0).unwrap();
//! let size = game.choose_difficulty(Difficulty::Preset(0), t0).unwrap();
//! assert_eq!(size.piece_count(), 9);
//! assert_eq!(game.chrono_display(t0 + Duration::from_millis(1500)), "1.50");
//! ```
//!
//! Rounds are logged at `info` level through `tracing`.

pub mod board;
pub mod chrono;
pub mod config;
pub mod error;
pub mod game;
pub mod messages;
pub mod pieces;
pub mod scoreboard;
pub mod size;

pub use board::Board;
pub use chrono::Chrono;
pub use config::{GameConfig, MessageConfig, Region};
pub use error::{ConfigError, GameError};
pub use game::{Game, RoundCompleted};
pub use messages::{Message, MessageBoard};
pub use pieces::{PieceStyle, piece_styles};
pub use scoreboard::Scoreboard;
pub use size::{Difficulty, PuzzleSize};
