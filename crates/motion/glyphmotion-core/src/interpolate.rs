//! Per-frame style interpolation.
//!
//! [`StyleInterpolation`] eases time through a bezier curve, then
//! linearly blends every axis in value-space ("ease then lerp"). The
//! host steps it once per frame with its frame timestamp; each step is
//! O(number of axes) and never blocks.

use crate::axes::AxisConfig;
use crate::easing::CubicBezier;
use crate::error::MotionError;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Running { start_ms: f64 },
    Done,
}

/// A single in-flight interpolation between two axis configurations.
///
/// The phase machine is explicit so callers can observe completion or
/// cancel deterministically instead of relying on an implicit loop-exit
/// condition.
#[derive(Clone, Debug)]
pub struct StyleInterpolation {
    curve: CubicBezier,
    duration_ms: f64,
    from: AxisConfig,
    to: AxisConfig,
    phase: Phase,
}

impl StyleInterpolation {
    /// Validates the duration and the axis sets up front; interpolation
    /// itself cannot fail once started.
    pub fn new(
        curve: CubicBezier,
        duration_ms: f64,
        from: AxisConfig,
        to: AxisConfig,
    ) -> Result<Self, MotionError> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(MotionError::InvalidDuration { ms: duration_ms });
        }
        from.check_compatible(&to)?;
        Ok(Self {
            curve,
            duration_ms,
            from,
            to,
            phase: Phase::Idle,
        })
    }

    /// Advance to the host timestamp `now_ms` and produce the style
    /// string for this frame.
    ///
    /// The first call records the start timestamp. The final frame at
    /// progress 1 is still produced before the interpolation stops;
    /// afterwards `step` returns `None`.
    pub fn step(&mut self, now_ms: f64) -> Option<String> {
        let start_ms = match self.phase {
            Phase::Done => return None,
            Phase::Idle => {
                self.phase = Phase::Running { start_ms: now_ms };
                now_ms
            }
            Phase::Running { start_ms } => start_ms,
        };

        let elapsed = now_ms - start_ms;
        let progress = (elapsed / self.duration_ms).min(1.0);
        let eased = self.curve.evaluate(progress);

        // Axis sets were checked in new(); lerp cannot fail here.
        let current = self
            .from
            .lerp(&self.to, eased)
            .unwrap_or_else(|_| self.to.clone());

        if elapsed >= self.duration_ms {
            self.phase = Phase::Done;
        }
        Some(current.style_string())
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Stop producing frames. The last applied style stays as-is.
    pub fn cancel(&mut self) {
        self.phase = Phase::Done;
    }

    pub fn end_state(&self) -> &AxisConfig {
        &self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cfg(pairs: &[(&str, f64)]) -> AxisConfig {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    fn parse_axis(style: &str, name: &str) -> f64 {
        let needle = format!("\"{name}\" ");
        let rest = &style[style.find(&needle).unwrap() + needle.len()..];
        let end = rest.find(',').unwrap_or(rest.len());
        rest[..end].trim().parse().unwrap()
    }

    #[test]
    fn linear_midpoint_and_final_frame() {
        let from = cfg(&[("a", 0.0), ("b", 10.0)]);
        let to = cfg(&[("a", 10.0), ("b", 0.0)]);
        let mut interp =
            StyleInterpolation::new(CubicBezier::LINEAR, 100.0, from, to).unwrap();

        // first frame records the start timestamp
        let style = interp.step(1000.0).unwrap();
        assert_relative_eq!(parse_axis(&style, "a"), 0.0, epsilon = 1e-3);
        assert!(!interp.is_done());

        let style = interp.step(1050.0).unwrap();
        assert_relative_eq!(parse_axis(&style, "a"), 5.0, epsilon = 1e-3);
        assert_relative_eq!(parse_axis(&style, "b"), 5.0, epsilon = 1e-3);

        // progress clamps to 1 past the duration; the final frame is
        // still produced, then stepping stops
        let style = interp.step(1120.0).unwrap();
        assert_eq!(parse_axis(&style, "a"), 10.0);
        assert_eq!(parse_axis(&style, "b"), 0.0);
        assert!(interp.is_done());
        assert_eq!(interp.step(1130.0), None);
    }

    #[test]
    fn exact_duration_boundary_finishes() {
        let from = cfg(&[("a", 0.0)]);
        let to = cfg(&[("a", 10.0)]);
        let mut interp =
            StyleInterpolation::new(CubicBezier::LINEAR, 100.0, from, to).unwrap();
        interp.step(0.0);
        let style = interp.step(100.0).unwrap();
        assert_eq!(parse_axis(&style, "a"), 10.0);
        assert!(interp.is_done());
    }

    #[test]
    fn cancel_stops_stepping() {
        let from = cfg(&[("a", 0.0)]);
        let to = cfg(&[("a", 1.0)]);
        let mut interp =
            StyleInterpolation::new(CubicBezier::LINEAR, 100.0, from, to).unwrap();
        interp.step(0.0);
        interp.cancel();
        assert!(interp.is_done());
        assert_eq!(interp.step(50.0), None);
    }

    #[test]
    fn mismatched_axes_rejected_at_construction() {
        let from = cfg(&[("a", 0.0), ("b", 1.0)]);
        let to = cfg(&[("a", 1.0)]);
        assert!(matches!(
            StyleInterpolation::new(CubicBezier::LINEAR, 100.0, from, to),
            Err(MotionError::AxisMismatch { .. })
        ));
    }

    #[test]
    fn zero_duration_rejected() {
        let from = cfg(&[("a", 0.0)]);
        let to = cfg(&[("a", 1.0)]);
        assert!(matches!(
            StyleInterpolation::new(CubicBezier::LINEAR, 0.0, from, to),
            Err(MotionError::InvalidDuration { .. })
        ));
    }
}
