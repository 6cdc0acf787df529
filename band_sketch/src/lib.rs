//! # band_sketch
//!
//! Draw in the air with a gesture armband.
//!
//! The wearer's wrist orientation steers a crosshair cursor; hand poses
//! drive the drawing:
//!
//! | Pose | Action |
//! |---|---|
//! | Fist | Draw — a continuous stroke follows the cursor |
//! | Fingers spread | Clear the canvas |
//! | Double tap | Recalibrate (current posture becomes screen center) and re-anchor |
//! | Rest | Nothing |
//!
//! Stroke color cycles through a six-phase RGB ramp as you draw; wrist
//! roll sets the brush width.
//!
//! ## Simulation mode
//!
//! Without hardware, a keyboard/mouse simulator feeds the same device
//! event stream:
//!
//! | Input | Effect |
//! |---|---|
//! | Mouse move | Aim the cursor |
//! | Scroll wheel | Roll the wrist (brush width) |
//! | `F` (hold) | Fist |
//! | `C` (hold) | Fingers spread |
//! | `D` | Double tap |
//! | `X` / `Y` | Toggle x / y axis inversion |
//! | `Q` or close | Quit |

pub mod app;
pub mod sim;
pub mod visualizer;

pub use app::{run, AppConfig, AppState};
