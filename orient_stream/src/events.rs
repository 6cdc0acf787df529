//! Device event model — one tagged enum for every armband notification.
//!
//! The public interface is [`DeviceEvent`] delivered over an `mpsc` channel.
//! Consumers don't need to know whether events came from real hardware or
//! a simulator; anything implementing [`EventSource`] can feed the stream.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use glam::Quat;

use crate::pose::Pose;

// ════════════════════════════════════════════════════════════════════════════
// OrientationSample
// ════════════════════════════════════════════════════════════════════════════

/// One raw orientation reading: a unit quaternion plus a device timestamp
/// in microseconds.  Transient — consumed by the filter on arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSample {
    pub quat:      Quat,
    pub timestamp: u64,
}

// ════════════════════════════════════════════════════════════════════════════
// Arm
// ════════════════════════════════════════════════════════════════════════════

/// Which arm the band was synced onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arm {
    Left,
    Right,
}

impl Arm {
    pub fn label(self) -> &'static str {
        match self {
            Arm::Left  => "left",
            Arm::Right => "right",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DeviceEvent
// ════════════════════════════════════════════════════════════════════════════

/// Every notification the armband can deliver, as one tagged enum.
///
/// Lifecycle events (`Paired`, `ArmSynced`, `Locked`, …) are informational
/// bookkeeping; `Orientation` and `Pose` carry the data the drawing
/// pipeline runs on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceEvent {
    /// Band connected to the host.
    Paired,
    /// Band disconnected; readings are stale after this.
    Unpaired,
    /// New orientation sample at device rate.
    Orientation(OrientationSample),
    /// Pose classification changed.
    Pose(Pose),
    /// Sync gesture recognized — band knows which arm it's on.
    ArmSynced(Arm),
    /// Band moved or removed from the arm.
    ArmUnsynced,
    /// Band locked; no pose events until unlocked.
    Locked,
    /// Band unlocked; pose events flow again.
    Unlocked,
}

// ════════════════════════════════════════════════════════════════════════════
// DeviceError
// ════════════════════════════════════════════════════════════════════════════

/// Fatal device acquisition failures, surfaced before the frame loop starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceError {
    /// No band paired within the acquisition window.
    NotFound,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NotFound => write!(f, "unable to find an armband"),
        }
    }
}

impl std::error::Error for DeviceError {}

// ════════════════════════════════════════════════════════════════════════════
// EventSource trait — unified interface for hw, sim, and replay
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`DeviceEvent`]s over a channel.
pub trait EventSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<DeviceEvent>);
}

/// Spawn an event source on its own thread and return the receiving end.
pub fn spawn_source<S: EventSource>(source: S) -> Receiver<DeviceEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    struct OneShot(DeviceEvent);

    impl EventSource for OneShot {
        fn run(self: Box<Self>, tx: Sender<DeviceEvent>) {
            let _ = tx.send(self.0);
        }
    }

    #[test]
    fn spawned_source_delivers_over_channel() {
        let rx = spawn_source(OneShot(DeviceEvent::Paired));
        assert_eq!(rx.recv().unwrap(), DeviceEvent::Paired);
    }

    #[test]
    fn receiver_disconnects_when_source_finishes() {
        let rx = spawn_source(OneShot(DeviceEvent::Locked));
        assert_eq!(rx.recv().unwrap(), DeviceEvent::Locked);
        assert!(rx.recv().is_err());
    }

    #[test]
    fn device_error_displays() {
        assert_eq!(DeviceError::NotFound.to_string(), "unable to find an armband");
    }
}
