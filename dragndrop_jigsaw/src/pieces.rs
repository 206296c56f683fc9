// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicing a picture into square pieces.
//!
//! A piece shows the whole picture scaled to `size × 100%` and shifted so only
//! its own cell is visible, the way a CSS sprite works.

use crate::size::PuzzleSize;

/// How one piece renders its slice of the picture.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceStyle {
    /// Piece number, row-major; piece `i` belongs in board slot `i`.
    pub index: usize,
    /// Row on the finished picture.
    pub row: usize,
    /// Column on the finished picture.
    pub col: usize,
    /// Picture the piece is cut from.
    pub picture: String,
    /// Background size in percent of the piece, both axes.
    pub background_size: f64,
    /// Background position in percent, `(x, y)`.
    pub background_position: (f64, f64),
}

impl PieceStyle {
    /// `background-image` value.
    pub fn background_image(&self) -> String {
        format!("url(\"{}\")", self.picture)
    }

    /// Inline style for a web view.
    pub fn css(&self) -> String {
        format!(
            "background-image: {}; background-size: {}% {}%; background-repeat: no-repeat; \
             background-position: {}% {}%;",
            self.background_image(),
            self.background_size,
            self.background_size,
            self.background_position.0,
            self.background_position.1,
        )
    }

    /// Class marking which piece this is.
    pub fn class(&self) -> String {
        format!("piece-{}", self.index)
    }
}

/// Styles of all `size²` pieces of `picture`, in row-major order.
pub fn piece_styles(picture: &str, size: PuzzleSize) -> Vec<PieceStyle> {
    let side = size.side();
    let step = 100.0 / f64::from(size.get() - 1);
    let background_size = 100.0 * f64::from(size.get());
    (0..size.piece_count())
        .map(|index| {
            let row = index / side;
            let col = index % side;
            #[allow(
                clippy::cast_precision_loss,
                reason = "Rows and columns are tiny."
            )]
            let background_position = (step * col as f64, step * row as f64);
            PieceStyle {
                index,
                row,
                col,
                picture: picture.to_owned(),
                background_size,
                background_position,
            }
        })
        .collect()
}
