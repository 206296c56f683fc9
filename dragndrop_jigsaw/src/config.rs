// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Game configuration, loaded from TOML.
//!
//! Every key is optional; missing keys take the defaults of [`GameConfig::default`].
//!
//! ```toml
//! pictures = ["media/octocat.jpg", "media/roses.jpg"]
//! presets = [3, 4, 5]
//! scoreboard_len = 3
//!
//! [messages]
//! capacity = 3
//! fade_step = 0.34
//!
//! [toolbox]
//! x = 0.0
//! y = 0.0
//! width = 480.0
//! height = 480.0
//! ```

use std::path::Path;

use kurbo::Rect;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::size::PuzzleSize;

/// An axis-aligned area of the page.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Region {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Region {
    /// The region as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Message board settings.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Messages shown at once.
    pub capacity: usize,
    /// Opacity lost by older messages each time a new one arrives.
    pub fade_step: f64,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            fade_step: 0.34,
        }
    }
}

/// Everything a [`Game`](crate::Game) needs besides its random source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pictures a round can use.
    pub pictures: Vec<String>,
    /// Pieces per side offered by the difficulty menu.
    pub presets: Vec<u32>,
    /// Best times kept on the scoreboard.
    pub scoreboard_len: usize,
    /// Message board settings.
    pub messages: MessageConfig,
    /// Where scrambled pieces start.
    pub toolbox: Region,
    /// Where the picture is rebuilt.
    pub board: Region,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pictures: vec![
                "media/octocat.jpg".into(),
                "media/roses.jpg".into(),
                "media/futura.jpg".into(),
                "media/hongkong.jpg".into(),
            ],
            presets: vec![3, 4, 5],
            scoreboard_len: 3,
            messages: MessageConfig::default(),
            toolbox: Region {
                x: 0.0,
                y: 0.0,
                width: 480.0,
                height: 480.0,
            },
            board: Region {
                x: 520.0,
                y: 0.0,
                width: 480.0,
                height: 480.0,
            },
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the invariants the game relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pictures.is_empty() {
            return Err(ConfigError::NoPictures);
        }
        if let Some(&bad) = self.presets.iter().find(|&&n| PuzzleSize::new(n).is_err()) {
            return Err(ConfigError::InvalidPreset(bad));
        }
        for (name, region) in [("toolbox", &self.toolbox), ("board", &self.board)] {
            if !(region.width > 0.0 && region.height > 0.0) {
                return Err(ConfigError::EmptyRegion(name));
            }
        }
        Ok(())
    }
}
