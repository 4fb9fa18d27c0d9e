//! Two-keyframe fade/slide tweens.
//!
//! A tween is submitted to the host's native animation facility rather
//! than driven frame-by-frame here; the core only builds the keyframes
//! and options. Completion is reported back by the host (see
//! [`crate::engine::Engine::tween_finished`]).

use crate::easing::CubicBezier;
use crate::error::MotionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How far the element slides toward/away from its rest position, in px.
const SLIDE_DISTANCE: f64 = 20.0;

/// Fade direction: `In` fades in while sliding up to rest, `Out` fades
/// out while sliding down away from rest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeMode {
    In,
    Out,
}

impl FromStr for FadeMode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(FadeMode::In),
            "out" => Ok(FadeMode::Out),
            other => Err(MotionError::InvalidMode { mode: other.into() }),
        }
    }
}

/// One keyframe of a native tween.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub opacity: f64,
    pub transform: String,
}

/// Options accompanying the two keyframes. `fill_forwards` keeps the
/// final keyframe applied after the animation ends (no snap-back).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenOptions {
    pub duration_ms: f64,
    pub easing: String,
    pub fill_forwards: bool,
}

/// A fade/slide transition, constructed per call and fully consumed when
/// the keyframes are built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    pub mode: FadeMode,
    pub curve: CubicBezier,
    pub duration_ms: f64,
    /// Overrides the end-state transform offset only; opacity keyframes
    /// are unaffected.
    pub custom_end: Option<String>,
}

impl TweenSpec {
    pub fn new(
        mode: FadeMode,
        curve: CubicBezier,
        duration_ms: f64,
        custom_end: Option<String>,
    ) -> Result<Self, MotionError> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(MotionError::InvalidDuration { ms: duration_ms });
        }
        Ok(Self {
            mode,
            curve,
            duration_ms,
            custom_end,
        })
    }

    /// Start and end keyframes for this tween.
    pub fn keyframes(&self) -> [Keyframe; 2] {
        let is_in = self.mode == FadeMode::In;
        let (start_opacity, end_opacity) = if is_in { (0.0, 1.0) } else { (1.0, 0.0) };
        let (start_y, end_y) = if is_in {
            (SLIDE_DISTANCE, 0.0)
        } else {
            (0.0, SLIDE_DISTANCE)
        };

        let end_offset = match &self.custom_end {
            Some(custom) => custom.clone(),
            None => format!("{end_y}px"),
        };

        [
            Keyframe {
                opacity: start_opacity,
                transform: format!("translateY({start_y}px)"),
            },
            Keyframe {
                opacity: end_opacity,
                transform: format!("translateY({end_offset})"),
            },
        ]
    }

    pub fn options(&self) -> TweenOptions {
        TweenOptions {
            duration_ms: self.duration_ms,
            easing: self.curve.to_css(),
            fill_forwards: true,
        }
    }
}
