//! # sketch_canvas
//!
//! Pose-driven raster drawing on a persistent canvas.
//!
//! Per frame, the caller maps the armband's zero-adjusted yaw/pitch to a
//! screen [`Cursor`](mapping::Cursor) with a [`ScreenMap`](mapping::ScreenMap),
//! then hands cursor + roll + pose to the [`SketchEngine`](engine::SketchEngine):
//!
//! | Pose | Action |
//! |---|---|
//! | Fist (freshly entered) | Anchor the stroke; no drawing this frame |
//! | Fist (continuing) | Walk anchor → cursor one pixel step at a time, stamping the brush in the current stroke color; advance the color; re-anchor |
//! | Fingers spread | Clear the canvas to the background color |
//! | Double tap | Re-anchor without drawing |
//! | Rest | No canvas effect |
//!
//! Stroke color follows a six-phase RGB ramp ([`paint::ColorCycle`]), one
//! step per drawn segment; brush width follows wrist roll
//! ([`paint::BrushMap`]).  Cursor coordinates are never clamped to the
//! surface — strokes aimed off-screen clip at the canvas edge.

pub mod canvas;
pub mod engine;
pub mod mapping;
pub mod paint;
pub mod walk;

pub use canvas::Canvas;
pub use engine::{SketchEngine, StrokeAction};
pub use mapping::{Cursor, ScreenMap};
pub use paint::{BrushMap, ColorCycle};
pub use walk::LineWalk;
