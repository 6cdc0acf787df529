//! Pose classifications reported by the armband.

// ════════════════════════════════════════════════════════════════════════════
// Pose
// ════════════════════════════════════════════════════════════════════════════

/// A discrete hand pose, as classified by the device.
///
/// The device can report more classifications than we act on; everything
/// that isn't a fist, double tap, or spread collapses into [`Pose::Rest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pose {
    /// Closed fist — continuous draw.
    Fist,
    /// Double finger tap — calibration / anchor reset.
    DoubleTap,
    /// All fingers spread — clear the canvas.
    FingersSpread,
    /// Anything else: rest, unknown, or unclassified.
    #[default]
    Rest,
}

impl Pose {
    /// Short lowercase label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            Pose::Fist          => "fist",
            Pose::DoubleTap     => "tap",
            Pose::FingersSpread => "spread",
            Pose::Rest          => "rest",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rest() {
        assert_eq!(Pose::default(), Pose::Rest);
    }

    #[test]
    fn labels_are_distinct() {
        let all = [Pose::Fist, Pose::DoubleTap, Pose::FingersSpread, Pose::Rest];
        for a in &all {
            for b in &all {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
