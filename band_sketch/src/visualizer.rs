//! Software-rendered window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                                             │
//! │   [canvas — persistent strokes]   ┼ cursor  │
//! │                                             │
//! ├─────────────────────────────────────────────┤
//! │ status line                                 │
//! │ key legend                                  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The window also doubles as the simulator's input device: each frame the
//! mouse position and scroll wheel become aim angles and the F/C/D keys
//! become pose holds, all sent to the [`SimSource`] over a channel.
//!
//! [`SimSource`]: crate::sim::SimSource

use std::f32::consts::PI;
use std::sync::mpsc::Sender;

use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

use orient_stream::Pose;
use sketch_canvas::Cursor;

use crate::sim::SimInput;

const STATUS_H:     usize = 34;
const STATUS_BG:    u32   = 0xFF16213E;
const TEXT_COLOR:   u32   = 0xFFEEEEEE;
const LEGEND_COLOR: u32   = 0xFF888888;
const CROSS_COLOR:  u32   = 0xFFFFFFFF;
const CROSS_HALF:   i32   = 8;

// ════════════════════════════════════════════════════════════════════════════
// FrameInput
// ════════════════════════════════════════════════════════════════════════════

/// Window-level commands collected during one input poll.  Aim and pose
/// inputs go straight to the simulator; these stay with the app loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub quit:     bool,
    pub toggle_x: bool,
    pub toggle_y: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:    Window,
    buf:       Vec<u32>,
    width:     usize,
    height:    usize,
    sim_tx:    Sender<SimInput>,
    x_sens:    i32,
    y_sens:    i32,
    /// Accumulated scroll-wheel roll, radians.
    sim_roll:  f32,
}

impl Visualizer {
    pub fn new(
        width: usize,
        height: usize,
        x_sens: i32,
        y_sens: i32,
        sim_tx: Sender<SimInput>,
    ) -> Result<Self, String> {
        let mut window = Window::new(
            "Band Sketch — armband air drawing",
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![0xFF000000; width * height],
            width,
            height,
            sim_tx,
            x_sens,
            y_sens,
            sim_roll: 0.0,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Drawable surface size in pixels.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Poll window input: feed the simulator, return loop-level commands.
    pub fn poll_input(&mut self) -> FrameInput {
        let mut input = FrameInput::default();
        if !self.window.is_open() {
            input.quit = true;
            return input;
        }

        let pressed = |w: &Window, k: Key| w.is_key_pressed(k, KeyRepeat::No);

        if pressed(&self.window, Key::Q) {
            input.quit = true;
            return input;
        }
        input.toggle_x = pressed(&self.window, Key::X);
        input.toggle_y = pressed(&self.window, Key::Y);

        // ── aim: mouse position + scroll roll ─────────────────────────────
        if let Some((_, sy)) = self.window.get_scroll_wheel() {
            self.sim_roll = (self.sim_roll + sy * 0.05).clamp(-PI * 0.95, PI * 0.95);
        }
        if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            let _ = self.sim_tx.send(SimInput::Aim {
                yaw:   self.mouse_to_yaw(mx),
                pitch: self.mouse_to_pitch(my),
                roll:  self.sim_roll,
            });
        }

        // ── pose: held keys, highest priority first ───────────────────────
        let pose = if self.window.is_key_down(Key::F) {
            Pose::Fist
        } else if self.window.is_key_down(Key::C) {
            Pose::FingersSpread
        } else if self.window.is_key_down(Key::D) {
            Pose::DoubleTap
        } else {
            Pose::Rest
        };
        let _ = self.sim_tx.send(SimInput::Hold(pose));

        input
    }

    /// Yaw angle whose mapped cursor lands on the mouse x (un-inverted,
    /// inverse of the screen map's sensitivity amplification).
    fn mouse_to_yaw(&self, mx: f32) -> f32 {
        (self.width as f32 / 2.0 - mx) * 2.0 * PI / (self.x_sens as f32 * self.width as f32)
    }

    fn mouse_to_pitch(&self, my: f32) -> f32 {
        (self.height as f32 / 2.0 - my) * PI / (self.y_sens as f32 * self.height as f32)
    }

    /// Composite one frame: canvas, crosshair, status bar, key legend.
    pub fn render(&mut self, canvas: &[u32], cursor: Cursor, status: &str) {
        self.buf.copy_from_slice(canvas);

        self.draw_crosshair(cursor);

        // ── status bar ────────────────────────────────────────────────────
        let bar_y = self.height - STATUS_H;
        self.fill_rect(0, bar_y, self.width, STATUS_H, STATUS_BG);
        self.draw_label(status, 10, bar_y + 6, TEXT_COLOR);
        self.draw_label(
            "f=fist c=spread d=tap x/y=invert scroll=roll q=quit",
            10,
            bar_y + 20,
            LEGEND_COLOR,
        );

        self.window
            .update_with_buffer(&self.buf, self.width, self.height)
            .ok();
    }

    // ── crosshair ─────────────────────────────────────────────────────────

    /// 16×16 crosshair centered on the (possibly off-screen) cursor, with a
    /// small gap at the center so the stroke tip stays visible.
    fn draw_crosshair(&mut self, cursor: Cursor) {
        for d in -CROSS_HALF..=CROSS_HALF {
            if d.abs() <= 1 {
                continue;
            }
            self.set_pixel(cursor.x + d, cursor.y, CROSS_COLOR);
            self.set_pixel(cursor.x, cursor.y + d, CROSS_COLOR);
        }
    }

    // ── primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.buf[row * self.width + col] = color;
            }
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buf[y as usize * self.width + x as usize] = color;
        }
    }

    /// Minimal bitmap font — 3×5 characters for the status bar.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.set_pixel((cx + col) as i32, (y + row) as i32, color);
                    }
                }
            }
            cx += 4; // 3 wide + 1 gap
            if cx + 4 > self.width {
                break;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}
