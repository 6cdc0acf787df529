//! The gesture-drawing state machine.
//!
//! One [`SketchEngine::step`] per frame, driven purely by the current pose.
//! The only state carried across frames is the stroke anchor, the
//! "currently drawing" flag, and the color cycle.

use orient_stream::Pose;
use tracing::trace;

use crate::canvas::Canvas;
use crate::mapping::Cursor;
use crate::paint::{BrushMap, ColorCycle};
use crate::walk::LineWalk;

// ════════════════════════════════════════════════════════════════════════════
// StrokeAction
// ════════════════════════════════════════════════════════════════════════════

/// What one state-machine step did to the canvas.  Every pose maps to
/// exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeAction {
    /// Continuing fist: stamped `cells` brush squares along the walk
    /// (zero when the cursor held still) and advanced the stroke color.
    Drew { cells: usize },
    /// Fingers spread: canvas reset to the background color.
    Cleared,
    /// Fresh fist or double tap: stroke anchor moved, nothing painted.
    Anchored,
    /// Rest: no canvas effect.
    Idle,
}

// ════════════════════════════════════════════════════════════════════════════
// SketchEngine
// ════════════════════════════════════════════════════════════════════════════

/// Moore-style drawing machine: the action each frame is a function of the
/// current pose alone.
pub struct SketchEngine {
    anchor:  (i32, i32),
    /// True while the previous frame's pose was a fist.
    drawing: bool,
    cycle:   ColorCycle,
    brush:   BrushMap,
}

impl SketchEngine {
    pub fn new(brush: BrushMap) -> Self {
        SketchEngine {
            anchor:  (0, 0),
            drawing: false,
            cycle:   ColorCycle::new(),
            brush,
        }
    }

    /// Evaluate one frame.
    ///
    /// `roll` is the zero-adjusted roll reading, which sets the brush width
    /// for this frame's stamps.
    pub fn step(
        &mut self,
        canvas: &mut Canvas,
        cursor: Cursor,
        roll: i32,
        pose: Pose,
    ) -> StrokeAction {
        match pose {
            Pose::Fist if !self.drawing => {
                // Transition frame: anchor only, never draw.
                self.anchor = (cursor.x, cursor.y);
                self.drawing = true;
                StrokeAction::Anchored
            }
            Pose::Fist => {
                let size = self.brush.width_for(roll);
                let color = self.cycle.argb();
                let mut cells = 0;
                for (x, y) in LineWalk::new(self.anchor, (cursor.x, cursor.y)) {
                    canvas.fill_square(x, y, size, color);
                    cells += 1;
                }
                // Color advances once per segment even when the cursor
                // held still.
                self.cycle.step();
                self.anchor = (cursor.x, cursor.y);
                trace!(cells, size, "stroke segment");
                StrokeAction::Drew { cells }
            }
            Pose::FingersSpread => {
                // Anchor and color survive the wipe.
                canvas.clear();
                self.drawing = false;
                StrokeAction::Cleared
            }
            Pose::DoubleTap => {
                self.anchor = (cursor.x, cursor.y);
                self.drawing = false;
                StrokeAction::Anchored
            }
            Pose::Rest => {
                self.drawing = false;
                StrokeAction::Idle
            }
        }
    }

    pub fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    pub fn color(&self) -> &ColorCycle {
        &self.cycle
    }

    pub fn brush(&self) -> BrushMap {
        self.brush
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const BG: u32 = 0xFF000000;
    const NEUTRAL_ROLL: i32 = 900; // 3-px brush under the default map

    fn setup() -> (SketchEngine, Canvas) {
        (SketchEngine::new(BrushMap::default()), Canvas::new(200, 200, BG))
    }

    fn at(x: i32, y: i32) -> Cursor {
        Cursor { x, y }
    }

    #[test]
    fn every_pose_maps_to_one_action() {
        let (mut e, mut c) = setup();
        let cases = [
            (Pose::Fist, StrokeAction::Anchored),
            (Pose::Fist, StrokeAction::Drew { cells: 0 }),
            (Pose::FingersSpread, StrokeAction::Cleared),
            (Pose::DoubleTap, StrokeAction::Anchored),
            (Pose::Rest, StrokeAction::Idle),
        ];
        for (pose, expected) in cases {
            assert_eq!(e.step(&mut c, at(10, 10), NEUTRAL_ROLL, pose), expected);
        }
    }

    #[test]
    fn fresh_fist_anchors_without_painting() {
        let (mut e, mut c) = setup();
        let action = e.step(&mut c, at(50, 50), NEUTRAL_ROLL, Pose::Fist);
        assert_eq!(action, StrokeAction::Anchored);
        assert_eq!(e.anchor(), (50, 50));
        assert!(c.pixels().iter().all(|&p| p == BG));
        // Transition frame doesn't advance the color either.
        assert_eq!(e.color().channels(), (255, 0, 0));
    }

    #[test]
    fn continuing_fist_paints_unit_step_path() {
        let (mut e, mut c) = setup();
        e.step(&mut c, at(100, 100), NEUTRAL_ROLL, Pose::Fist);
        let action = e.step(&mut c, at(103, 101), NEUTRAL_ROLL, Pose::Fist);
        assert_eq!(action, StrokeAction::Drew { cells: 3 });
        assert_eq!(e.anchor(), (103, 101));
        // Walk cells (101,101) (102,101) (103,101), each a 3×3 stamp in the
        // initial red.
        assert_eq!(c.pixel(101, 101), 0xFFFF0000);
        assert_eq!(c.pixel(103, 101), 0xFFFF0000);
        assert_eq!(c.pixel(105, 103), 0xFFFF0000);
        assert_eq!(c.pixel(99, 99), BG);
        // One color step per segment.
        assert_eq!(e.color().channels(), (255, 1, 0));
    }

    #[test]
    fn stationary_fist_paints_nothing_but_cycles_color() {
        let (mut e, mut c) = setup();
        e.step(&mut c, at(40, 40), NEUTRAL_ROLL, Pose::Fist);
        let action = e.step(&mut c, at(40, 40), NEUTRAL_ROLL, Pose::Fist);
        assert_eq!(action, StrokeAction::Drew { cells: 0 });
        assert!(c.pixels().iter().all(|&p| p == BG));
        assert_eq!(e.color().channels(), (255, 1, 0));
    }

    #[test]
    fn reentered_fist_never_draws_on_transition() {
        let (mut e, mut c) = setup();
        e.step(&mut c, at(10, 10), NEUTRAL_ROLL, Pose::Fist);
        e.step(&mut c, at(20, 10), NEUTRAL_ROLL, Pose::Fist);
        for interloper in [Pose::Rest, Pose::DoubleTap, Pose::FingersSpread] {
            e.step(&mut c, at(20, 10), NEUTRAL_ROLL, interloper);
            c.clear();
            let action = e.step(&mut c, at(90, 90), NEUTRAL_ROLL, Pose::Fist);
            assert_eq!(action, StrokeAction::Anchored);
            assert!(c.pixels().iter().all(|&p| p == BG));
        }
    }

    #[test]
    fn spread_clears_canvas_but_not_color_or_anchor() {
        let (mut e, mut c) = setup();
        e.step(&mut c, at(10, 10), NEUTRAL_ROLL, Pose::Fist);
        e.step(&mut c, at(30, 10), NEUTRAL_ROLL, Pose::Fist);
        let channels = e.color().channels();
        let anchor = e.anchor();
        let action = e.step(&mut c, at(30, 10), NEUTRAL_ROLL, Pose::FingersSpread);
        assert_eq!(action, StrokeAction::Cleared);
        assert!(c.pixels().iter().all(|&p| p == BG));
        assert_eq!(e.color().channels(), channels);
        assert_eq!(e.anchor(), anchor);
    }

    #[test]
    fn double_tap_reanchors_without_painting() {
        let (mut e, mut c) = setup();
        let action = e.step(&mut c, at(77, 33), NEUTRAL_ROLL, Pose::DoubleTap);
        assert_eq!(action, StrokeAction::Anchored);
        assert_eq!(e.anchor(), (77, 33));
        assert!(c.pixels().iter().all(|&p| p == BG));
    }

    #[test]
    fn off_canvas_stroke_clips_silently() {
        // Unclamped cursor: the walk runs off the left edge and only the
        // in-bounds cells land.
        let (mut e, mut c) = setup();
        e.step(&mut c, at(2, 50), NEUTRAL_ROLL, Pose::Fist);
        let action = e.step(&mut c, at(-4, 50), NEUTRAL_ROLL, Pose::Fist);
        assert_eq!(action, StrokeAction::Drew { cells: 6 });
        assert_eq!(c.pixel(1, 50), 0xFFFF0000);
        assert_eq!(e.anchor(), (-4, 50));
    }

    #[test]
    fn zero_width_brush_draws_nothing() {
        let (mut e, mut c) = setup();
        e.step(&mut c, at(10, 10), 0, Pose::Fist);
        let action = e.step(&mut c, at(20, 10), 0, Pose::Fist);
        // The walk still runs (and the color still advances) but every
        // stamp is degenerate.
        assert_eq!(action, StrokeAction::Drew { cells: 10 });
        assert!(c.pixels().iter().all(|&p| p == BG));
        assert_eq!(e.color().channels(), (255, 1, 0));
    }
}
