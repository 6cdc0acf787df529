//! Orientation filter — discretization and zero-offset calibration.
//!
//! The filter consumes [`DeviceEvent`]s through a single [`apply`] dispatch
//! and maintains three integer angle readings in `[0, R]`, where `R` is the
//! discretization resolution chosen at construction.  Accessors report each
//! reading minus its zero offset, so after a double-tap calibration the
//! wearer's reference posture reads as `R/2` on pitch and yaw.
//!
//! [`apply`]: OrientationFilter::apply

use std::f32::consts::PI;

use tracing::{debug, info};

use crate::euler::EulerAngles;
use crate::events::{Arm, DeviceEvent, OrientationSample};
use crate::pose::Pose;

// ════════════════════════════════════════════════════════════════════════════
// Discretized / ZeroOffset
// ════════════════════════════════════════════════════════════════════════════

/// Integer angle readings in `[0, R]`, one per axis.
///
/// Each value is `trunc((angle + half_range) / full_range × R)` — truncated,
/// not rounded, matching the device vendor's reference arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Discretized {
    pub roll:  i32,
    pub pitch: i32,
    pub yaw:   i32,
}

/// Per-axis offsets subtracted from every reported reading.
///
/// All zero at construction.  A double-tap calibration overwrites pitch and
/// yaw with `reading − R/2`; roll is never recalibrated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroOffset {
    pub roll:  i32,
    pub pitch: i32,
    pub yaw:   i32,
}

// ════════════════════════════════════════════════════════════════════════════
// OrientationFilter
// ════════════════════════════════════════════════════════════════════════════

/// Stateful view of the device stream: discretized orientation, current
/// pose, and band lifecycle flags.  Single-writer — owned by the frame loop.
#[derive(Debug)]
pub struct OrientationFilter {
    resolution: i32,
    reading:    Discretized,
    zero:       ZeroOffset,
    pose:       Pose,
    on_arm:     bool,
    which_arm:  Option<Arm>,
    unlocked:   bool,
}

impl OrientationFilter {
    /// `resolution` is the discretization range R (1800 for drawing,
    /// 18 for the console panel).
    pub fn new(resolution: i32) -> Self {
        OrientationFilter {
            resolution,
            reading:   Discretized::default(),
            zero:      ZeroOffset::default(),
            pose:      Pose::default(),
            on_arm:    false,
            which_arm: None,
            unlocked:  false,
        }
    }

    // ── event dispatch ───────────────────────────────────────────────────

    /// Fold one device event into the filter state.
    pub fn apply(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Paired     => info!("armband paired"),
            DeviceEvent::Unpaired   => {
                // Band is gone; clear the leftover readings and flags.
                self.reading  = Discretized::default();
                self.on_arm   = false;
                self.unlocked = false;
                info!("armband unpaired");
            }
            DeviceEvent::Orientation(sample) => self.ingest(sample),
            DeviceEvent::Pose(pose)          => self.classify(pose),
            DeviceEvent::ArmSynced(arm) => {
                self.on_arm    = true;
                self.which_arm = Some(arm);
                info!(arm = arm.label(), "arm sync successful");
            }
            DeviceEvent::ArmUnsynced => {
                self.on_arm = false;
                info!("arm unsynced");
            }
            DeviceEvent::Locked => {
                self.unlocked = false;
                debug!("band locked");
            }
            DeviceEvent::Unlocked => {
                self.unlocked = true;
                debug!("band unlocked");
            }
        }
    }

    // ── orientation ──────────────────────────────────────────────────────

    /// Convert one quaternion sample to Euler angles and rescale each axis
    /// into `[0, R]`, placing the angle's natural zero at mid-range.
    fn ingest(&mut self, sample: OrientationSample) {
        let e = EulerAngles::from(sample.quat);
        let r = self.resolution as f32;
        self.reading = Discretized {
            roll:  ((e.roll + PI) / (2.0 * PI) * r) as i32,
            pitch: ((e.pitch + PI / 2.0) / PI * r) as i32,
            yaw:   ((e.yaw + PI) / (2.0 * PI) * r) as i32,
        };
    }

    // ── pose cascade ─────────────────────────────────────────────────────

    /// Pose transitions drive calibration: a double tap captures the current
    /// pitch/yaw as the new zero reference.  Fist start/stop edges are only
    /// logged here — the drawing state machine reads the pose per frame.
    ///
    /// The cascade is ordered: a double tap entered directly from a fist
    /// does NOT recalibrate.  Roll is never recalibrated.
    fn classify(&mut self, pose: Pose) {
        if pose == Pose::Fist {
            debug!("fist start");
        } else if self.pose == Pose::Fist {
            debug!("fist stop");
        } else if pose == Pose::DoubleTap {
            let mid = self.resolution / 2;
            self.zero.pitch = self.reading.pitch - mid;
            self.zero.yaw   = self.reading.yaw - mid;
            info!(
                pitch = self.zero.pitch,
                yaw = self.zero.yaw,
                "calibration captured"
            );
        }
        self.pose = pose;
    }

    // ── accessors ────────────────────────────────────────────────────────

    /// Zero-adjusted roll reading.
    pub fn roll(&self) -> i32 {
        self.reading.roll - self.zero.roll
    }

    /// Zero-adjusted pitch reading.
    pub fn pitch(&self) -> i32 {
        self.reading.pitch - self.zero.pitch
    }

    /// Zero-adjusted yaw reading.
    pub fn yaw(&self) -> i32 {
        self.reading.yaw - self.zero.yaw
    }

    /// Current pose classification.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn resolution(&self) -> i32 {
        self.resolution
    }

    /// Raw (un-adjusted) discretized readings.
    pub fn reading(&self) -> Discretized {
        self.reading
    }

    pub fn on_arm(&self) -> bool {
        self.on_arm
    }

    pub fn which_arm(&self) -> Option<Arm> {
        self.which_arm
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{EulerRot, Quat};

    fn orientation(q: Quat) -> DeviceEvent {
        DeviceEvent::Orientation(OrientationSample { quat: q, timestamp: 0 })
    }

    fn euler(yaw: f32, pitch: f32, roll: f32) -> Quat {
        Quat::from_euler(EulerRot::ZYX, yaw, pitch, roll)
    }

    #[test]
    fn identity_maps_to_mid_range() {
        for r in [1800, 18] {
            let mut f = OrientationFilter::new(r);
            f.apply(orientation(Quat::IDENTITY));
            assert_eq!(f.reading(), Discretized { roll: r / 2, pitch: r / 2, yaw: r / 2 });
        }
    }

    #[test]
    fn discretization_is_idempotent() {
        let mut f = OrientationFilter::new(1800);
        let q = euler(0.42, -0.2, 1.3);
        f.apply(orientation(q));
        let first = f.reading();
        f.apply(orientation(q));
        assert_eq!(f.reading(), first);
    }

    #[test]
    fn discretization_is_monotonic_in_yaw() {
        let mut f = OrientationFilter::new(1800);
        let mut prev = i32::MIN;
        for i in -8..=8 {
            f.apply(orientation(euler(i as f32 * 0.3, 0.0, 0.0)));
            assert!(f.reading().yaw >= prev);
            prev = f.reading().yaw;
        }
    }

    #[test]
    fn degenerate_pitch_sample_never_poisons_reading() {
        let mut f = OrientationFilter::new(1800);
        // asin argument ≈ 1.0000001 before clamping
        let q = Quat::from_xyzw(0.0, 0.707_106_85, 0.0, 0.707_106_85);
        f.apply(orientation(q));
        assert_eq!(f.reading().pitch, 1800);
    }

    #[test]
    fn calibration_centers_pitch_and_yaw() {
        let mut f = OrientationFilter::new(1800);
        f.apply(orientation(euler(0.5, 0.25, -0.7)));
        let roll_before = f.roll();
        f.apply(DeviceEvent::Pose(Pose::DoubleTap));
        // Reported pitch/yaw now sit exactly at mid-range.
        assert_eq!(f.pitch(), 900);
        assert_eq!(f.yaw(), 900);
        // Roll untouched by calibration.
        assert_eq!(f.roll(), roll_before);
    }

    #[test]
    fn double_tap_from_fist_does_not_recalibrate() {
        let mut f = OrientationFilter::new(1800);
        f.apply(orientation(euler(0.5, 0.25, 0.0)));
        f.apply(DeviceEvent::Pose(Pose::Fist));
        let (pitch, yaw) = (f.pitch(), f.yaw());
        f.apply(DeviceEvent::Pose(Pose::DoubleTap));
        assert_eq!(f.pitch(), pitch);
        assert_eq!(f.yaw(), yaw);
        // From rest the same tap does recalibrate.
        f.apply(DeviceEvent::Pose(Pose::Rest));
        f.apply(DeviceEvent::Pose(Pose::DoubleTap));
        assert_eq!(f.pitch(), 900);
        assert_eq!(f.yaw(), 900);
    }

    #[test]
    fn unpair_resets_readings_and_flags() {
        let mut f = OrientationFilter::new(1800);
        f.apply(DeviceEvent::ArmSynced(Arm::Right));
        f.apply(DeviceEvent::Unlocked);
        f.apply(orientation(euler(0.5, 0.25, -0.7)));
        f.apply(DeviceEvent::Unpaired);
        assert_eq!(f.reading(), Discretized::default());
        assert!(!f.on_arm());
        assert!(!f.is_unlocked());
        // Arm identity is remembered across the unpair.
        assert_eq!(f.which_arm(), Some(Arm::Right));
    }

    #[test]
    fn pose_events_update_current_pose() {
        let mut f = OrientationFilter::new(18);
        assert_eq!(f.pose(), Pose::Rest);
        f.apply(DeviceEvent::Pose(Pose::FingersSpread));
        assert_eq!(f.pose(), Pose::FingersSpread);
        f.apply(DeviceEvent::Pose(Pose::Fist));
        assert_eq!(f.pose(), Pose::Fist);
    }

    #[test]
    fn lock_state_follows_events() {
        let mut f = OrientationFilter::new(18);
        f.apply(DeviceEvent::Unlocked);
        assert!(f.is_unlocked());
        f.apply(DeviceEvent::Locked);
        assert!(!f.is_unlocked());
    }
}
