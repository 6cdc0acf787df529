//! Persistent raster canvas — a `Vec<u32>` ARGB surface mutated by brush
//! stamps and full clears, composited onto the window every frame.

// ════════════════════════════════════════════════════════════════════════════
// Canvas
// ════════════════════════════════════════════════════════════════════════════

/// Off-screen drawing surface.  Owned by the frame loop for the lifetime
/// of the session; survives pose changes and calibration.
pub struct Canvas {
    width:      usize,
    height:     usize,
    background: u32,
    buf:        Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        Canvas {
            width,
            height,
            background,
            buf: vec![background; width * height],
        }
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.buf.fill(self.background);
    }

    /// Stamp a `size`×`size` square with its top-left corner at `(x, y)`.
    ///
    /// Coordinates may lie anywhere — the stamp clips at the canvas edges,
    /// and a fully off-surface stamp is a no-op.  Non-positive sizes stamp
    /// nothing (the brush formula can go degenerate at low roll).
    pub fn fill_square(&mut self, x: i32, y: i32, size: i32, color: u32) {
        if size <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + size).min(self.width as i32);
        let y1 = (y + size).min(self.height as i32);
        for row in y0..y1 {
            for col in x0..x1 {
                self.buf[row as usize * self.width + col as usize] = color;
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    /// Row-major ARGB pixels, for compositing.
    pub fn pixels(&self) -> &[u32] {
        &self.buf
    }

    /// Single pixel read (in-bounds coordinates only).
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.buf[y * self.width + x]
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
