//! Glyphmotion core (host-agnostic)
//!
//! Timed visual transitions for a browser-like host: a cubic-bezier
//! easing evaluator, a fade/slide tween builder for the host's native
//! animation facility, a per-frame style interpolator for named numeric
//! axes (font variation settings in a browser host), and the
//! randomized no-repeat cycling controller driving them.
//!
//! The crate owns no scheduler. The host steps [`Engine::update`] once
//! per frame and applies the returned [`Outputs`]; interval pacing and
//! stagger are tracked against the host-supplied timestamps.

pub mod axes;
pub mod config;
pub mod cycle;
pub mod easing;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod outputs;
pub mod presets;
pub mod tween;

// Re-exports for consumers (adapters)
pub use axes::AxisConfig;
pub use config::Config;
pub use cycle::{CyclingController, Dispatch, Selector, StatePool};
pub use easing::CubicBezier;
pub use engine::Engine;
pub use error::MotionError;
pub use interpolate::StyleInterpolation;
pub use outputs::{MotionEvent, Outputs, StyleChange, TweenId, TweenRequest};
pub use tween::{FadeMode, Keyframe, TweenOptions, TweenSpec};
