//! Error types for the motion engine.

use serde::{Deserialize, Serialize};

/// Errors raised by the motion engine.
///
/// All variants are synchronous argument/startup errors; animation itself
/// is best-effort and never fails mid-flight.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// Fade mode string was not "in" or "out".
    #[error("mode must be \"in\" or \"out\", got {mode:?}")]
    InvalidMode { mode: String },

    /// Duration must be a positive finite number of milliseconds.
    #[error("invalid duration: {ms} ms")]
    InvalidDuration { ms: f64 },

    /// An axis present in the start configuration is missing from the end
    /// configuration.
    #[error("axis {axis:?} missing from the target configuration")]
    AxisMismatch { axis: String },

    /// Cycling startup found a different number of targets than the state
    /// pool provides looks for.
    #[error("expected {expected} cycling targets, found {found}")]
    TargetCountMismatch { expected: usize, found: usize },

    /// No-repeat selection needs at least two pool entries to exclude the
    /// current one.
    #[error("state pool has {len} entries, need at least 2")]
    PoolTooSmall { len: usize },

    /// A curve argument did not contain exactly four control-point
    /// coordinates.
    #[error("bezier curve must be four numbers, got {len}")]
    InvalidCurve { len: usize },
}
