//! Cooperative event pump — interleaves device delivery with rendering.
//!
//! One [`EventPump::run`] call per frame blocks for at most the caller's
//! timeout waiting for the first pending event, then drains everything
//! already queued.  Device delivery and rendering thus share one thread
//! of control; nothing else ever mutates the filter.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::events::{DeviceError, DeviceEvent};
use crate::filter::OrientationFilter;

// ════════════════════════════════════════════════════════════════════════════
// EventPump
// ════════════════════════════════════════════════════════════════════════════

/// Receiving end of a device event stream, applied to a filter on demand.
pub struct EventPump {
    rx: Receiver<DeviceEvent>,
}

impl EventPump {
    pub fn new(rx: Receiver<DeviceEvent>) -> Self {
        EventPump { rx }
    }

    /// Pump pending events into `filter` for up to `timeout`.
    ///
    /// Blocks until the first event arrives or the timeout elapses, then
    /// drains whatever else is already queued without blocking again.
    /// Returns the number of events applied.
    pub fn run(&mut self, filter: &mut OrientationFilter, timeout: Duration) -> usize {
        let mut applied = 0;
        match self.rx.recv_timeout(timeout) {
            Ok(event) => {
                filter.apply(event);
                applied += 1;
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                return 0;
            }
        }
        while let Ok(event) = self.rx.try_recv() {
            filter.apply(event);
            applied += 1;
        }
        applied
    }

    /// Block until the band reports [`DeviceEvent::Paired`], applying every
    /// event seen along the way.
    ///
    /// Fails with [`DeviceError::NotFound`] if no pairing arrives within
    /// `timeout` — the fatal startup case, surfaced before the loop runs.
    pub fn wait_for_pairing(
        &mut self,
        filter: &mut OrientationFilter,
        timeout: Duration,
    ) -> Result<(), DeviceError> {
        let deadline = Instant::now() + timeout;
        loop {
            let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                return Err(DeviceError::NotFound);
            };
            match self.rx.recv_timeout(remaining) {
                Ok(event) => {
                    let paired = event == DeviceEvent::Paired;
                    filter.apply(event);
                    if paired {
                        return Ok(());
                    }
                }
                Err(_) => return Err(DeviceError::NotFound),
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
