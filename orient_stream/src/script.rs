//! Scripted event replay — an [`EventSource`] that plays back an in-code
//! sequence of device events with inter-event delays.
//!
//! Used by the `orient_panel` status binary to drive a filter without
//! hardware, and by integration-style tests that want a realistic
//! pairing/sweep/pose sequence.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::events::{DeviceEvent, EventSource};

// ════════════════════════════════════════════════════════════════════════════
// ScriptStep / ScriptSource
// ════════════════════════════════════════════════════════════════════════════

/// One scripted step: wait `delay`, then emit `event`.
#[derive(Clone, Copy, Debug)]
pub struct ScriptStep {
    pub delay: Duration,
    pub event: DeviceEvent,
}

impl ScriptStep {
    pub fn after_ms(delay_ms: u64, event: DeviceEvent) -> Self {
        ScriptStep {
            delay: Duration::from_millis(delay_ms),
            event,
        }
    }
}

/// Replays a fixed step sequence, then hangs up (the sender drops, so the
/// receiving pump sees a disconnect after the last event).
pub struct ScriptSource {
    steps: Vec<ScriptStep>,
}

impl ScriptSource {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        ScriptSource { steps }
    }

    /// Wall-clock length of the full replay.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }
}

impl EventSource for ScriptSource {
    fn run(self: Box<Self>, tx: Sender<DeviceEvent>) {
        for step in self.steps {
            if !step.delay.is_zero() {
                thread::sleep(step.delay);
            }
            if tx.send(step.event).is_err() {
                return;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
