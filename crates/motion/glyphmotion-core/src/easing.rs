//! Cubic-bezier timing curves.
//!
//! The evaluator inverts the x-component of the curve with a bounded
//! Newton-Raphson solve (the algorithm CSS timing functions use) and
//! returns the y-component at the solved parameter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of Newton-Raphson steps taken when inverting the x bezier.
/// A fixed count keeps per-frame cost bounded; the result is an
/// approximation (within ~1e-3 of an exact solve), not a convergence
/// guarantee.
const NEWTON_ITERATIONS: usize = 5;

/// A cubic bezier timing curve through (0,0) and (1,1), described by its
/// two inner control points `(x1, y1)` and `(x2, y2)`.
///
/// Control points are not validated for monotonicity: callers supply a
/// curve that behaves as a timing function over the evaluated domain.
/// y values outside [0,1] are legal and produce overshoot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// The identity timing function.
    pub const LINEAR: CubicBezier = CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a curve from `[x1, y1, x2, y2]`.
    pub fn from_array(pts: [f64; 4]) -> Self {
        Self::new(pts[0], pts[1], pts[2], pts[3])
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// CSS `cubic-bezier(...)` form, for handing the curve to a native
    /// animation facility.
    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({},{},{},{})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Eased progress for linear progress `t` in [0,1].
    ///
    /// Solves `bezier_x(u) == t` for the curve parameter `u`, seeded at
    /// `u = t`, then returns `bezier_y(u)`. A zero derivative aborts the
    /// solve and the current approximation is used; that degeneracy is
    /// tolerated silently, never surfaced as an error.
    pub fn evaluate(&self, t: f64) -> f64 {
        let cx = 3.0 * self.x1;
        let bx = 3.0 * (self.x2 - self.x1) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * self.y1;
        let by = 3.0 * (self.y2 - self.y1) - cy;
        let ay = 1.0 - cy - by;

        let mut x = t;
        for _ in 0..NEWTON_ITERATIONS {
            let x_calc = ((ax * x + bx) * x + cx) * x;
            let dx = (3.0 * ax * x + 2.0 * bx) * x + cx;
            if dx == 0.0 {
                break;
            }
            x -= (x_calc - t) / dx;
        }
        ((ay * x + by) * x + cy) * x
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}
