//! Output contracts from the core engine.
//!
//! Outputs carry the per-frame style changes, the native-tween requests
//! queued since the last update, and a list of semantic events. The host
//! adapter applies changes to its renderables, submits tween requests to
//! its native animation facility, and transports events.

use crate::tween::{Keyframe, TweenOptions};
use serde::{Deserialize, Serialize};

/// Identifier of a queued native tween, used to correlate the host's
/// completion report.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

/// One composite style string to assign to a target this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleChange {
    pub target: String,
    pub style: String,
}

/// A two-keyframe animation for the host to submit natively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenRequest {
    pub id: TweenId,
    pub target: String,
    pub keyframes: [Keyframe; 2],
    pub options: TweenOptions,
}

/// Discrete signals emitted while stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    /// A cycling sequence began dispatching.
    SequenceStarted { at_ms: f64 },
    /// A per-frame interpolation reached its final frame.
    InterpolationFinished { target: String },
    /// The host reported a native tween as finished.
    TweenFinished { id: TweenId },
}

/// Everything produced by one [`crate::engine::Engine::update`] call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<StyleChange>,
    #[serde(default)]
    pub tweens: Vec<TweenRequest>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.tweens.is_empty() && self.events.is_empty()
    }
}
