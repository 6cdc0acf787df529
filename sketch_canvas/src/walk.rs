//! Unit-step line interpolation between stroke anchor and cursor.

// ════════════════════════════════════════════════════════════════════════════
// LineWalk
// ════════════════════════════════════════════════════════════════════════════

/// Bounded iterator walking from one point toward another, one pixel step
/// per axis per iteration (both axes move simultaneously, so the path is
/// a diagonal followed by an axis-aligned run).
///
/// Yields every visited cell after the start, ending at the target —
/// exactly `max(|dx|, |dy|)` items, and none at all when start == target.
/// The per-cell yield is what lets the caller stamp a brush at every step
/// of a stroke instead of jumping.
#[derive(Clone, Copy, Debug)]
pub struct LineWalk {
    x:  i32,
    y:  i32,
    tx: i32,
    ty: i32,
}

impl LineWalk {
    pub fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        LineWalk {
            x:  from.0,
            y:  from.1,
            tx: to.0,
            ty: to.1,
        }
    }
}

impl Iterator for LineWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x == self.tx && self.y == self.ty {
            return None;
        }
        if self.x < self.tx {
            self.x += 1;
        } else if self.x > self.tx {
            self.x -= 1;
        }
        if self.y < self.ty {
            self.y += 1;
        } else if self.y > self.ty {
            self.y -= 1;
        }
        Some((self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.tx - self.x).abs().max((self.ty - self.y).abs()) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineWalk {}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_endpoints_yield_nothing() {
        assert_eq!(LineWalk::new((5, 5), (5, 5)).count(), 0);
    }

    #[test]
    fn chebyshev_length() {
        assert_eq!(LineWalk::new((0, 0), (7, 3)).count(), 7);
        assert_eq!(LineWalk::new((0, 0), (-2, -9)).count(), 9);
    }

    #[test]
    fn axis_aligned_walk() {
        let cells: Vec<_> = LineWalk::new((0, 0), (3, 0)).collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn diagonal_walk() {
        let cells: Vec<_> = LineWalk::new((0, 0), (-3, 3)).collect();
        assert_eq!(cells, vec![(-1, 1), (-2, 2), (-3, 3)]);
    }

    #[test]
    fn mixed_walk_ends_at_target() {
        // Anchor (100,100) to cursor (103,101): three unit steps, both axes
        // moving together while they can.
        let cells: Vec<_> = LineWalk::new((100, 100), (103, 101)).collect();
        assert_eq!(cells, vec![(101, 101), (102, 101), (103, 101)]);
    }

    #[test]
    fn size_hint_is_exact() {
        let w = LineWalk::new((2, 2), (6, -1));
        assert_eq!(w.len(), 4);
        assert_eq!(w.count(), 4);
    }
}
