//! Quaternion → Euler angle conversion (aerospace sequence).

use glam::Quat;

// ════════════════════════════════════════════════════════════════════════════
// EulerAngles
// ════════════════════════════════════════════════════════════════════════════

/// Roll/pitch/yaw decomposition of a unit quaternion, in radians.
///
/// Roll and yaw lie in `(−π, π]`; pitch in `[−π/2, π/2]`.  Recomputed for
/// every incoming sample, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles {
    pub roll:  f32,
    pub pitch: f32,
    pub yaw:   f32,
}

impl From<Quat> for EulerAngles {
    /// Standard aerospace-sequence conversion.
    ///
    /// The pitch argument is clamped to `[−1, 1]` before `asin`: floating
    /// point error on a nominally-unit quaternion can push it fractionally
    /// outside the domain, and that must not surface as NaN.
    fn from(q: Quat) -> Self {
        let roll = (2.0 * (q.w * q.x + q.y * q.z))
            .atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y));
        let pitch = (2.0 * (q.w * q.y - q.z * q.x)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (q.w * q.z + q.x * q.y))
            .atan2(1.0 - 2.0 * (q.y * q.y + q.z * q.z));
        EulerAngles { roll, pitch, yaw }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
