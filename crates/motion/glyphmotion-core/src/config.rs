//! Engine configuration.

use crate::easing::CubicBezier;
use serde::{Deserialize, Serialize};

/// Timing parameters for the cycling controller.
///
/// Defaults are the stock tuning: a 750 ms morph with a 150 ms
/// stagger between targets, eased by an overshooting curve. The number
/// of cycling targets is not configured here; it follows from the
/// targets and pool handed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Duration of one per-target morph, in milliseconds.
    pub duration_ms: f64,
    /// Delay between successive per-target starts within one sequence.
    pub stagger_ms: f64,
    /// Easing curve used for cycling morphs.
    pub curve: CubicBezier,
}

impl Config {
    /// The signature easing curve: slight vertical overshoot, settling
    /// flat.
    pub const SIGNATURE_CURVE: CubicBezier = CubicBezier {
        x1: 0.27,
        y1: 1.06,
        x2: 0.18,
        y2: 1.0,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: 750.0,
            stagger_ms: 150.0,
            curve: Self::SIGNATURE_CURVE,
        }
    }
}
