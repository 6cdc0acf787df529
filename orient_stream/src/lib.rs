//! # orient_stream
//!
//! Streaming orientation model for a wearable gesture armband.
//!
//! The device delivers unit-quaternion orientation samples and discrete
//! pose classifications.  This crate turns that stream into stable,
//! zero-calibrated integer angle readings:
//!
//! ```text
//! quaternion ──► Euler angles ──► discretized [0, R] ──► reading − zero offset
//!                                                            ▲
//!                                  double-tap calibration ───┘
//! ```
//!
//! ## Event model
//!
//! Every device notification is one [`events::DeviceEvent`] variant,
//! delivered over an `mpsc` channel by any [`events::EventSource`].
//! Consumers don't need to know whether events came from real hardware,
//! a keyboard/mouse simulator, or a scripted replay.
//!
//! ## Reading convention
//!
//! Angles are rescaled into `[0, R]` where `R` is the filter's resolution
//! (1800 for the drawing application, 18 for the console status panel).
//! `R/2` is the neutral midpoint; a double-tap pose captures the current
//! pitch/yaw so the wearer's reference posture reads as `R/2` afterwards.
//! Roll is never recalibrated.

pub mod euler;
pub mod events;
pub mod filter;
pub mod pose;
pub mod pump;
pub mod script;

pub use euler::EulerAngles;
pub use events::{Arm, DeviceError, DeviceEvent, EventSource, OrientationSample, spawn_source};
pub use filter::{Discretized, OrientationFilter, ZeroOffset};
pub use pose::Pose;
pub use pump::EventPump;
pub use script::{ScriptSource, ScriptStep};
