// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Messages addressed to the player, newest first, older ones fading out.

/// A line on the message board.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Text shown.
    pub text: String,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

/// A short stack of messages.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageBoard {
    capacity: usize,
    fade_step: f64,
    messages: Vec<Message>,
}

impl MessageBoard {
    /// A board showing at most `capacity` messages.
    pub fn new(capacity: usize, fade_step: f64) -> Self {
        Self {
            capacity,
            fade_step,
            messages: Vec::new(),
        }
    }

    /// Show `text` on top; older messages fade and the oldest may drop off.
    pub fn say(&mut self, text: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        for m in &mut self.messages {
            m.opacity = (m.opacity - self.fade_step).max(0.0);
        }
        self.messages.truncate(self.capacity - 1);
        self.messages.insert(
            0,
            Message {
                text: text.into(),
                opacity: 1.0,
            },
        );
    }

    /// Messages, newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
