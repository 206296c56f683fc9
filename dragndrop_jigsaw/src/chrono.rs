// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round chronometer.

use std::time::{Duration, Instant};

/// Measures the time since the last lap.
///
/// Time is passed in explicitly so callers (and tests) control the clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chrono {
    lap: Instant,
}

impl Chrono {
    /// Start measuring at `now`.
    pub fn start(now: Instant) -> Self {
        Self { lap: now }
    }

    /// Time since the last lap.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.lap)
    }

    /// Seconds since the last lap with two decimals, as displayed.
    pub fn display(&self, now: Instant) -> String {
        format_seconds(self.elapsed(now))
    }

    /// Close the current lap at `now` and start a new one. Returns the lap time.
    pub fn reset(&mut self, now: Instant) -> Duration {
        let lap_time = self.elapsed(now);
        self.lap = now;
        lap_time
    }
}

/// `12.346s` → `"12.35"`.
pub fn format_seconds(d: Duration) -> String {
    format!("{:.2}", d.as_secs_f64())
}
