//! Headless platform driven by a script, for exercising the loop

use std::collections::VecDeque;

use super::Platform;
use crate::sim::{GameState, InputEvent};

/// Platform that replays queued events and records every rendered frame
///
/// It reports itself closed after `frame_limit` frames or after `close`.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    pending: VecDeque<Vec<InputEvent>>,
    frame_limit: usize,
    closed: bool,
    /// Snapshot of the state handed to each `render` call
    pub rendered: Vec<GameState>,
    pub close_calls: u32,
    pub polls: u64,
}

impl ScriptedPlatform {
    pub fn with_frame_limit(frame_limit: usize) -> Self {
        Self {
            frame_limit,
            ..Default::default()
        }
    }

    /// Queue a batch of events, delivered together by one poll
    pub fn queue(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.pending.push_back(events.into_iter().collect());
    }
}

impl Platform for ScriptedPlatform {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        self.polls += 1;
        if let Some(batch) = self.pending.pop_front() {
            events.extend(batch);
        }
    }

    fn is_open(&self) -> bool {
        !self.closed && self.rendered.len() < self.frame_limit
    }

    fn close(&mut self) {
        self.closed = true;
        self.close_calls += 1;
    }

    fn render(&mut self, state: &GameState) {
        self.rendered.push(state.clone());
    }
}
