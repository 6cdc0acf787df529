//! Keyboard/mouse device simulator.
//!
//! The visualizer's window thread sends [`SimInput`]s here; this translator
//! turns them into the same [`DeviceEvent`] stream real hardware would
//! produce, including the pairing handshake.  The rest of the program
//! cannot tell the difference.

use std::sync::mpsc::{Receiver, Sender};

use glam::{EulerRot, Quat};

use orient_stream::{Arm, DeviceEvent, EventSource, OrientationSample, Pose};

// ════════════════════════════════════════════════════════════════════════════
// SimInput
// ════════════════════════════════════════════════════════════════════════════

/// Raw input from the simulation window.
#[derive(Clone, Copy, Debug)]
pub enum SimInput {
    /// Aim angles in radians (mouse position + accumulated scroll roll).
    Aim { yaw: f32, pitch: f32, roll: f32 },
    /// Pose implied by the current key state; sent every frame, deduped here.
    Hold(Pose),
}

// ════════════════════════════════════════════════════════════════════════════
// SimSource
// ════════════════════════════════════════════════════════════════════════════

/// Event source driven by [`SimInput`]s from the window loop.
///
/// Emits the startup handshake (`Paired`, `ArmSynced`, `Unlocked`) first,
/// then translates inputs as they arrive.  Pose events are only forwarded
/// on change, matching how the device reports discrete transitions.
pub struct SimSource {
    pub rx: Receiver<SimInput>,
}

impl EventSource for SimSource {
    fn run(self: Box<Self>, tx: Sender<DeviceEvent>) {
        let handshake = [
            DeviceEvent::Paired,
            DeviceEvent::ArmSynced(Arm::Right),
            DeviceEvent::Unlocked,
        ];
        for event in handshake {
            if tx.send(event).is_err() {
                return;
            }
        }

        let mut timestamp = 0u64;
        let mut last_pose = Pose::Rest;

        for input in self.rx {
            let event = match input {
                SimInput::Aim { yaw, pitch, roll } => {
                    timestamp += 1;
                    DeviceEvent::Orientation(OrientationSample {
                        quat: Quat::from_euler(EulerRot::ZYX, yaw, pitch, roll),
                        timestamp,
                    })
                }
                SimInput::Hold(pose) => {
                    if pose == last_pose {
                        continue;
                    }
                    last_pose = pose;
                    DeviceEvent::Pose(pose)
                }
            };
            if tx.send(event).is_err() {
                return;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
