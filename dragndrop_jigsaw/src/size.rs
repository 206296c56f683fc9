// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Puzzle sizes and the difficulty menu.

use crate::error::GameError;

/// Number of pieces per side of a square puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleSize(u32);

impl PuzzleSize {
    /// Smallest playable size. Piece backgrounds are spread over `size - 1` steps.
    pub const MIN: u32 = 2;
    /// Largest playable size.
    pub const MAX: u32 = 32;

    /// Validate a size.
    pub fn new(pieces_per_side: u32) -> Result<Self, GameError> {
        if !(Self::MIN..=Self::MAX).contains(&pieces_per_side) {
            return Err(GameError::InvalidPuzzleSize {
                got: pieces_per_side,
            });
        }
        Ok(Self(pieces_per_side))
    }

    /// Pieces per side.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Pieces per side as an index bound.
    pub fn side(self) -> usize {
        self.0 as usize
    }

    /// Total number of pieces.
    pub fn piece_count(self) -> usize {
        self.side() * self.side()
    }
}

/// A choice from the difficulty menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Difficulty<'a> {
    /// One of the configured presets, by menu position.
    Preset(usize),
    /// The free-form field, as typed.
    Custom(&'a str),
}

impl Difficulty<'_> {
    /// Resolve the choice against the configured presets.
    pub fn resolve(&self, presets: &[u32]) -> Result<PuzzleSize, GameError> {
        match *self {
            Self::Preset(i) => {
                let n = presets.get(i).ok_or(GameError::UnknownPreset(i))?;
                PuzzleSize::new(*n)
            }
            Self::Custom(text) => {
                let n = text
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| GameError::InvalidCustomDifficulty(text.to_owned()))?;
                PuzzleSize::new(n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_below_two_are_rejected() {
        assert_eq!(
            PuzzleSize::new(1),
            Err(GameError::InvalidPuzzleSize { got: 1 })
        );
        assert_eq!(
            PuzzleSize::new(0),
            Err(GameError::InvalidPuzzleSize { got: 0 })
        );
        assert_eq!(PuzzleSize::new(4).map(PuzzleSize::piece_count), Ok(16));
    }

    #[test]
    fn sizes_above_max_are_rejected() {
        assert_eq!(
            PuzzleSize::new(PuzzleSize::MAX).map(PuzzleSize::piece_count),
            Ok(1024)
        );
        assert_eq!(
            PuzzleSize::new(33),
            Err(GameError::InvalidPuzzleSize { got: 33 })
        );
        assert_eq!(
            Difficulty::Custom("100000").resolve(&[3, 4, 5]),
            Err(GameError::InvalidPuzzleSize { got: 100_000 })
        );
    }

    #[test]
    fn presets_resolve_by_position() {
        let presets = [3, 4, 5];
        assert_eq!(Difficulty::Preset(1).resolve(&presets), PuzzleSize::new(4));
        assert_eq!(
            Difficulty::Preset(3).resolve(&presets),
            Err(GameError::UnknownPreset(3))
        );
    }

    #[test]
    fn custom_input_is_parsed() {
        let presets = [3, 4, 5];
        assert_eq!(Difficulty::Custom(" 7 ").resolve(&presets), PuzzleSize::new(7));
        assert_eq!(
            Difficulty::Custom("seven").resolve(&presets),
            Err(GameError::InvalidCustomDifficulty("seven".into()))
        );
        assert_eq!(
            Difficulty::Custom("1").resolve(&presets),
            Err(GameError::InvalidPuzzleSize { got: 1 })
        );
    }
}
