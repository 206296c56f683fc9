// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Best completion times.

use std::time::Duration;

/// The fastest completion times, ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    len: usize,
    times: Vec<Duration>,
}

impl Scoreboard {
    /// An empty scoreboard keeping `len` times.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            times: Vec::with_capacity(len + 1),
        }
    }

    /// Add a time; only the `len` fastest are kept.
    ///
    /// Returns the rank of the new time (0 is best) if it made the board.
    pub fn record(&mut self, time: Duration) -> Option<usize> {
        let rank = self.times.partition_point(|t| *t <= time);
        if rank >= self.len {
            return None;
        }
        self.times.insert(rank, time);
        self.times.truncate(self.len);
        Some(rank)
    }

    /// Kept times, fastest first.
    pub fn times(&self) -> &[Duration] {
        &self.times
    }

    /// Number of times kept.
    pub fn capacity(&self) -> usize {
        self.len
    }
}
