//! Stroke appearance: the six-phase color cycle and roll-driven brush width.

// ════════════════════════════════════════════════════════════════════════════
// ColorCycle
// ════════════════════════════════════════════════════════════════════════════

/// Deterministic cyclic walk through RGB space, one channel ramping at a
/// time:
///
/// ```text
/// (255,0,0) → green rises → red falls → blue rises
///           → green falls → red rises → blue falls → (255,0,0)
/// ```
///
/// One step per drawn stroke segment; full period 6×255 steps.  Never reset
/// by calibration or canvas clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCycle {
    r: u8,
    g: u8,
    b: u8,
}

impl Default for ColorCycle {
    fn default() -> Self {
        ColorCycle { r: 255, g: 0, b: 0 }
    }
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one step along the ramp.
    ///
    /// The branch order decides which phase a corner point belongs to, so
    /// it must stay exactly as written.
    pub fn step(&mut self) {
        if self.r == 255 && self.g < 255 && self.b == 0 {
            self.g += 1;
        } else if self.r > 0 && self.g == 255 {
            self.r -= 1;
        } else if self.g == 255 && self.b < 255 {
            self.b += 1;
        } else if self.g > 0 && self.b == 255 {
            self.g -= 1;
        } else if self.b == 255 && self.r < 255 {
            self.r += 1;
        } else {
            self.b -= 1;
        }
    }

    /// Current color as packed ARGB.
    pub fn argb(&self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// BrushMap
// ════════════════════════════════════════════════════════════════════════════

/// Maps the zero-adjusted roll reading to a brush edge length in pixels:
/// `max(0, (roll − offset) / divisor)`.
///
/// Couples wrist rotation to stroke thickness.  The constants are cosmetic
/// tuning — at the reference 300/200 a neutral roll of 900 gives a
/// 3-pixel brush.
#[derive(Clone, Copy, Debug)]
pub struct BrushMap {
    pub offset:  i32,
    pub divisor: i32,
}

impl Default for BrushMap {
    fn default() -> Self {
        BrushMap { offset: 300, divisor: 200 }
    }
}

impl BrushMap {
    pub fn width_for(&self, roll: i32) -> i32 {
        ((roll - self.offset) / self.divisor).max(0)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_phase_raises_green() {
        let mut c = ColorCycle::new();
        for _ in 0..255 {
            c.step();
        }
        assert_eq!(c.channels(), (255, 255, 0));
    }

    #[test]
    fn full_period_returns_to_start() {
        let mut c = ColorCycle::new();
        for _ in 0..(6 * 255) {
            c.step();
        }
        assert_eq!(c.channels(), (255, 0, 0));
    }

    #[test]
    fn phase_corners_in_order() {
        let mut c = ColorCycle::new();
        let corners = [
            (255, 255, 0),
            (0, 255, 0),
            (0, 255, 255),
            (0, 0, 255),
            (255, 0, 255),
            (255, 0, 0),
        ];
        for corner in corners {
            for _ in 0..255 {
                c.step();
            }
            assert_eq!(c.channels(), corner);
        }
    }

    #[test]
    fn argb_packs_channels() {
        let c = ColorCycle::new();
        assert_eq!(c.argb(), 0xFFFF0000);
    }

    #[test]
    fn brush_reference_values() {
        let b = BrushMap::default();
        assert_eq!(b.width_for(900), 3); // neutral roll
        assert_eq!(b.width_for(300), 0);
        assert_eq!(b.width_for(1700), 7);
    }

    #[test]
    fn brush_never_negative() {
        let b = BrushMap::default();
        assert_eq!(b.width_for(0), 0);
        assert_eq!(b.width_for(-500), 0);
    }
}
