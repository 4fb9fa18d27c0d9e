//! Engine: the caller-facing surface over the drivers.
//!
//! The engine is stepped by the host: call [`Engine::update`] once per
//! frame with the host timestamp and apply the returned [`Outputs`].
//! Queued native tweens resolve when the host reports them finished via
//! [`Engine::tween_finished`]. Everything runs single-threaded and
//! cooperatively; no update call blocks.

use crate::axes::AxisConfig;
use crate::config::Config;
use crate::cycle::{CyclingController, Selector, StatePool};
use crate::easing::CubicBezier;
use crate::error::MotionError;
use crate::interpolate::StyleInterpolation;
use crate::outputs::{MotionEvent, Outputs, StyleChange, TweenId, TweenRequest};
use crate::tween::{FadeMode, TweenSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug)]
struct ActiveInterpolation {
    target: String,
    interpolation: StyleInterpolation,
}

/// The motion engine.
///
/// Owns the cycling controller, the in-flight interpolations, the
/// single-target selector state, and the RNG. Per-target recorded state
/// has exactly one writer (the controller that dispatched it); starting
/// concurrent animations on one target from two callers is a caller
/// error and is not guarded here.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    rng: StdRng,
    cycler: Option<CyclingController>,
    sequences_seen: u64,
    interpolations: Vec<ActiveInterpolation>,
    selector: Selector,
    pending_tweens: Vec<TweenId>,
    next_tween: u32,
    outputs: Outputs,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic engine for tests.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            cycler: None,
            sequences_seen: 0,
            interpolations: Vec::new(),
            selector: Selector::new(),
            pending_tweens: Vec::new(),
            next_tween: 0,
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Queue a fade/slide tween for the host's native animation
    /// facility. The returned id resolves through
    /// [`MotionEvent::TweenFinished`] once the host reports completion.
    pub fn fade_slide(
        &mut self,
        target: &str,
        mode: FadeMode,
        curve: CubicBezier,
        duration_ms: f64,
        custom_end: Option<String>,
    ) -> Result<TweenId, MotionError> {
        let spec = TweenSpec::new(mode, curve, duration_ms, custom_end)?;
        let id = TweenId(self.next_tween);
        self.next_tween = self.next_tween.wrapping_add(1);
        self.pending_tweens.push(id);
        self.outputs.tweens.push(TweenRequest {
            id,
            target: target.to_owned(),
            keyframes: spec.keyframes(),
            options: spec.options(),
        });
        Ok(id)
    }

    /// Host-reported completion of a queued tween.
    pub fn tween_finished(&mut self, id: TweenId) {
        match self.pending_tweens.iter().position(|p| *p == id) {
            Some(at) => {
                self.pending_tweens.remove(at);
                self.outputs.events.push(MotionEvent::TweenFinished { id });
            }
            None => log::warn!("completion reported for unknown tween {:?}", id),
        }
    }

    /// Start a fire-and-forget per-frame morph of `target` from one axis
    /// configuration to another. Frames appear in subsequent updates.
    pub fn animate_font_variation(
        &mut self,
        target: &str,
        curve: CubicBezier,
        duration_ms: f64,
        from: AxisConfig,
        to: AxisConfig,
    ) -> Result<(), MotionError> {
        let interpolation = StyleInterpolation::new(curve, duration_ms, from, to)?;
        self.interpolations.push(ActiveInterpolation {
            target: target.to_owned(),
            interpolation,
        });
        Ok(())
    }

    /// Begin cycling shuffled pool looks across `targets`. The caller
    /// has already discovered its renderables; a count mismatch between
    /// targets and pool declines startup entirely, scheduling nothing.
    pub fn start_cycle(
        &mut self,
        targets: Vec<String>,
        pool: StatePool,
    ) -> Result<(), MotionError> {
        let controller = CyclingController::new(
            targets,
            pool,
            self.config.curve,
            self.config.duration_ms,
            self.config.stagger_ms,
        )
        .map_err(|e| {
            log::warn!("cycling not started: {e}");
            e
        })?;
        self.cycler = Some(controller);
        self.sequences_seen = 0;
        Ok(())
    }

    pub fn is_cycling(&self) -> bool {
        self.cycler.is_some()
    }

    /// Pick the next look from `pool` for the engine's single morph
    /// target, never repeating the previous pick.
    pub fn select_next(&mut self, pool: &StatePool) -> Result<AxisConfig, MotionError> {
        self.selector.advance(pool, &mut self.rng).cloned()
    }

    /// Advance the engine to the host timestamp `now_ms`.
    pub fn update(&mut self, now_ms: f64) -> Outputs {
        if let Some(cycler) = &mut self.cycler {
            let dispatches = cycler.poll(now_ms, &mut self.rng);
            if cycler.sequences_started() > self.sequences_seen {
                self.sequences_seen = cycler.sequences_started();
                self.outputs
                    .events
                    .push(MotionEvent::SequenceStarted { at_ms: now_ms });
            }
            for dispatch in dispatches {
                // the pool's axis sets were validated at startup, so
                // construction only fails on an internal invariant breach
                match StyleInterpolation::new(
                    dispatch.curve,
                    dispatch.duration_ms,
                    dispatch.from,
                    dispatch.to,
                ) {
                    Ok(interpolation) => self.interpolations.push(ActiveInterpolation {
                        target: dispatch.target,
                        interpolation,
                    }),
                    Err(e) => {
                        log::error!("dropping cycle dispatch for {}: {e}", dispatch.target)
                    }
                }
            }
        }

        let mut changes = Vec::new();
        let mut events = Vec::new();
        self.interpolations.retain_mut(|active| {
            if let Some(style) = active.interpolation.step(now_ms) {
                changes.push(StyleChange {
                    target: active.target.clone(),
                    style,
                });
            }
            if active.interpolation.is_done() {
                events.push(MotionEvent::InterpolationFinished {
                    target: active.target.clone(),
                });
                false
            } else {
                true
            }
        });
        self.outputs.changes.extend(changes);
        self.outputs.events.extend(events);

        std::mem::take(&mut self.outputs)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
