//! Top-level application state and the main frame loop.
//!
//! `AppState` owns the orientation filter, screen map, sketch engine, and
//! canvas — everything the per-frame pipeline touches.  One loop iteration
//! pumps pending device events, recomputes the cursor, runs one
//! state-machine step, and composites the canvas; nothing else mutates any
//! of it.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use orient_stream::{spawn_source, EventPump, OrientationFilter};
use sketch_canvas::{BrushMap, Canvas, Cursor, ScreenMap, SketchEngine, StrokeAction};

use crate::sim::{SimInput, SimSource};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
pub struct AppConfig {
    pub width:           usize,
    pub height:          usize,
    /// Discretization resolution R; readings live in [0, R].
    pub resolution:      i32,
    pub x_sens:          i32,
    pub y_sens:          i32,
    pub brush:           BrushMap,
    pub background:      u32,
    /// How long each frame blocks waiting for device events.
    pub pump_timeout:    Duration,
    /// How long to wait for the device at startup before giving up.
    pub pairing_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            width:           1280,
            height:          720,
            resolution:      1800,
            x_sens:          5,
            y_sens:          3,
            brush:           BrushMap::default(),
            background:      0xFF000000,
            pump_timeout:    Duration::from_millis(1),
            pairing_timeout: Duration::from_secs(10),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    pub filter: OrientationFilter,
    pub map:    ScreenMap,
    pub engine: SketchEngine,
    pub canvas: Canvas,
    pub cursor: Cursor,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        AppState {
            filter: OrientationFilter::new(cfg.resolution),
            map:    ScreenMap::new(cfg.resolution, cfg.x_sens, cfg.y_sens),
            engine: SketchEngine::new(cfg.brush),
            canvas: Canvas::new(cfg.width, cfg.height, cfg.background),
            cursor: Cursor {
                x: cfg.width as i32 / 2,
                y: cfg.height as i32 / 2,
            },
        }
    }

    /// One pipeline step: reading → cursor → state machine → canvas.
    pub fn frame(&mut self) -> StrokeAction {
        self.cursor = self.map.cursor(
            self.filter.yaw(),
            self.filter.pitch(),
            self.canvas.width(),
            self.canvas.height(),
        );
        self.engine.step(
            &mut self.canvas,
            self.cursor,
            self.filter.roll(),
            self.filter.pose(),
        )
    }

    pub fn status_line(&self, fps: u32) -> String {
        format!(
            "pose:{}  brush:{}  invert:{}{}  arm:{}  fps:{}",
            self.filter.pose().label(),
            self.engine.brush().width_for(self.filter.roll()),
            if self.map.x_invert() { "x" } else { "-" },
            if self.map.y_invert() { "y" } else { "-" },
            match self.filter.which_arm() {
                Some(arm) if self.filter.on_arm() => arm.label(),
                _ => "-",
            },
            fps,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// Creates the window, the simulated device source, and the event pump,
/// waits for pairing, then drives the event/render loop at ~60 fps.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    // ── sim input channel: window thread → device simulator ──────────────
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();
    let device_rx = spawn_source(SimSource { rx: sim_rx });
    let mut pump = EventPump::new(device_rx);

    let mut vis = Visualizer::new(cfg.width, cfg.height, cfg.x_sens, cfg.y_sens, sim_tx)?;
    let mut app = AppState::new(&cfg);

    // Fatal if no band answers; nothing to draw without one.
    pump.wait_for_pairing(&mut app.filter, cfg.pairing_timeout)
        .map_err(|e| e.to_string())?;
    info!("connected to an armband");

    let mut frames = 0u32;
    let mut fps = 0u32;
    let mut second = Instant::now();

    while vis.is_open() {
        let input = vis.poll_input();
        if input.quit {
            break;
        }
        if input.toggle_x {
            app.map.toggle_x_invert();
            info!(inverted = app.map.x_invert(), "x axis");
        }
        if input.toggle_y {
            app.map.toggle_y_invert();
            info!(inverted = app.map.y_invert(), "y axis");
        }

        pump.run(&mut app.filter, cfg.pump_timeout);

        let action = app.frame();
        trace!(
            roll = app.filter.roll(),
            pitch = app.filter.pitch(),
            yaw = app.filter.yaw(),
            ?action,
            "frame"
        );

        frames += 1;
        if second.elapsed() >= Duration::from_secs(1) {
            second = Instant::now();
            fps = frames;
            frames = 0;
            debug!(fps, "render rate");
        }

        let status = app.status_line(fps);
        vis.render(app.canvas.pixels(), app.cursor, &status);
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
