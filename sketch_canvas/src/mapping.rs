//! Orientation reading → screen coordinate mapping.

// ════════════════════════════════════════════════════════════════════════════
// Cursor
// ════════════════════════════════════════════════════════════════════════════

/// Screen-space cursor position in pixels.
///
/// Not clamped to the surface: an extreme angle under high sensitivity maps
/// off-screen, and strokes aimed there simply clip at the canvas edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

// ════════════════════════════════════════════════════════════════════════════
// ScreenMap
// ════════════════════════════════════════════════════════════════════════════

/// Maps zero-adjusted yaw/pitch readings (in `[0, R]`, `R/2` = neutral) to
/// pixel coordinates.
///
/// Each axis takes the reading's offset from mid-range, amplifies it by a
/// sensitivity multiplier so small wrist rotations cover the whole surface,
/// and rescales from filter units to pixels around the screen center.  The
/// offset's sign flips with the per-axis inversion toggles.
#[derive(Clone, Copy, Debug)]
pub struct ScreenMap {
    resolution: i32,
    x_sens:     i32,
    y_sens:     i32,
    x_invert:   bool,
    y_invert:   bool,
}

impl ScreenMap {
    /// Reference sensitivities are 5 (x) and 3 (y); both axes start
    /// un-inverted.
    pub fn new(resolution: i32, x_sens: i32, y_sens: i32) -> Self {
        ScreenMap {
            resolution,
            x_sens,
            y_sens,
            x_invert: false,
            y_invert: false,
        }
    }

    pub fn cursor(&self, yaw: i32, pitch: i32, width: usize, height: usize) -> Cursor {
        let r = self.resolution as f64;
        let mid = self.resolution / 2;

        let dx = if self.x_invert { yaw - mid } else { mid - yaw };
        let dy = if self.y_invert { pitch - mid } else { mid - pitch };

        let x = (dx * self.x_sens) as f64 * width as f64 / r
            + mid as f64 * width as f64 / r;
        let y = (dy * self.y_sens) as f64 * height as f64 / r
            + mid as f64 * height as f64 / r;

        Cursor { x: x as i32, y: y as i32 }
    }

    pub fn toggle_x_invert(&mut self) {
        self.x_invert = !self.x_invert;
    }

    pub fn toggle_y_invert(&mut self) {
        self.y_invert = !self.y_invert;
    }

    pub fn x_invert(&self) -> bool {
        self.x_invert
    }

    pub fn y_invert(&self) -> bool {
        self.y_invert
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_map() -> ScreenMap {
        ScreenMap::new(1800, 5, 3)
    }

    #[test]
    fn centered_readings_hit_screen_center() {
        let m = reference_map();
        assert_eq!(m.cursor(900, 900, 1280, 720), Cursor { x: 640, y: 360 });
    }

    #[test]
    fn sensitivity_amplifies_offsets() {
        let m = reference_map();
        // 9 filter units right of center, ×5 sensitivity, 1280/1800 px/unit
        let c = m.cursor(909, 900, 1280, 720);
        assert_eq!(c.x, 640 - 32);
        assert_eq!(c.y, 360);
    }

    #[test]
    fn inversion_flips_offset_sign() {
        let mut m = reference_map();
        let plain = m.cursor(945, 870, 1280, 720);
        m.toggle_x_invert();
        m.toggle_y_invert();
        let flipped = m.cursor(945, 870, 1280, 720);
        assert_eq!(flipped.x - 640, 640 - plain.x);
        assert_eq!(flipped.y - 360, 360 - plain.y);
    }

    #[test]
    fn toggles_are_independent() {
        let mut m = reference_map();
        m.toggle_x_invert();
        assert!(m.x_invert());
        assert!(!m.y_invert());
        m.toggle_x_invert();
        assert!(!m.x_invert());
    }

    #[test]
    fn extreme_reading_maps_off_screen() {
        // Preserved quirk: no clamping to surface bounds.
        let m = reference_map();
        let c = m.cursor(1800, 900, 1280, 720);
        assert!(c.x < 0);
    }
}
