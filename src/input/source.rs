//! Terminal input source.

use async_trait::async_trait;
use crossterm::event::EventStream;
use futures::StreamExt;
use std::time::Duration;
use tokio::time::Instant;

use super::keybindings::KeybindingConfig;
use super::snapshot::{Action, InputSnapshot};
use crate::traits::InputSource;

/// Collects crossterm events for one frame interval into a snapshot.
pub struct CrosstermInput {
    events: EventStream,
    bindings: KeybindingConfig,
    frame_interval: Duration,
}

impl CrosstermInput {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            events: EventStream::new(),
            bindings: KeybindingConfig::default(),
            frame_interval,
        }
    }

    pub fn with_bindings(mut self, bindings: KeybindingConfig) -> Self {
        self.bindings = bindings;
        self
    }
}

#[async_trait]
impl InputSource for CrosstermInput {
    async fn capture(&mut self) -> InputSnapshot {
        let deadline = Instant::now() + self.frame_interval;
        let mut snapshot = InputSnapshot::new();

        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => break,
                event = self.events.next() => match event {
                    Some(Ok(event)) => self.bindings.record(&mut snapshot, &event),
                    Some(Err(e)) => {
                        tracing::warn!("Terminal input error: {}", e);
                        tokio::time::sleep_until(deadline).await;
                        break;
                    }
                    None => {
                        // Input closed; nothing can ever reach the loop again.
                        tracing::info!("Terminal input stream ended");
                        snapshot.pressed.insert(Action::Exit);
                        break;
                    }
                },
            }
        }

        snapshot
    }
}
