// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and game setup.

use std::path::PathBuf;

use thiserror::Error;

/// Problems loading or validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// There is no picture to play with.
    #[error("the picture pool is empty")]
    NoPictures,
    /// A difficulty preset is not a playable size.
    #[error("difficulty preset {0} is not a playable puzzle size")]
    InvalidPreset(u32),
    /// A region has a zero or negative extent.
    #[error("region `{0}` must have a positive width and height")]
    EmptyRegion(&'static str),
}

/// Problems starting or driving a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Puzzles have between two and thirty-two pieces per side.
    #[error(
        "a puzzle needs {min} to {max} pieces per side, got {got}",
        min = crate::PuzzleSize::MIN,
        max = crate::PuzzleSize::MAX
    )]
    InvalidPuzzleSize {
        /// Requested pieces per side.
        got: u32,
    },
    /// The custom difficulty field does not hold an integer.
    #[error("custom difficulty {0:?} is not a number")]
    InvalidCustomDifficulty(String),
    /// A preset index outside the menu.
    #[error("there is no difficulty preset #{0}")]
    UnknownPreset(usize),
    /// The action needs a round, and no difficulty was chosen yet.
    #[error("no round in progress; choose a difficulty first")]
    NoRound,
}
