//! Scripted input source.

use async_trait::async_trait;
use std::collections::VecDeque;

use crate::input::{Action, InputSnapshot};
use crate::traits::InputSource;

/// Replays snapshots in order, then presses Exit on every later frame.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
    captured: usize,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            captured: 0,
        }
    }

    /// Number of frames captured so far.
    pub fn captured(&self) -> usize {
        self.captured
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn capture(&mut self) -> InputSnapshot {
        self.captured += 1;
        // Yield so the loop behaves like it would against a real frame wait.
        tokio::task::yield_now().await;
        self.frames
            .pop_front()
            .unwrap_or_else(|| InputSnapshot::press(Action::Exit))
    }
}
