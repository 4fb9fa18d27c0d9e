//! Randomized state cycling.
//!
//! A [`StatePool`] holds the template looks; the [`CyclingController`]
//! periodically deals a shuffled permutation of the pool to a fixed set
//! of targets with a fixed stagger between starts, and the [`Selector`]
//! is its single-target sibling that picks one new look at a time,
//! excluding immediate repetition.

use crate::axes::AxisConfig;
use crate::easing::CubicBezier;
use crate::error::MotionError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed ordered set of axis configurations, shared read-only template
/// data. Controllers copy and select from the pool but never mutate it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatePool(Vec<AxisConfig>);

impl StatePool {
    pub fn new(states: Vec<AxisConfig>) -> Self {
        Self(states)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AxisConfig> {
        self.0.get(index)
    }

    pub fn states(&self) -> &[AxisConfig] {
        &self.0
    }

    /// Uniform Fisher-Yates permutation of the pool entries.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<AxisConfig> {
        let mut out = self.0.clone();
        out.shuffle(rng);
        out
    }
}

/// Single-target no-repeat selection state.
///
/// Holds the index of the look currently applied to its target, so the
/// exclusion is explicit rather than hidden in module-level state.
#[derive(Clone, Debug, Default)]
pub struct Selector {
    current: Option<usize>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Pick a new pool entry uniformly at random, never the current one.
    ///
    /// Sampling excludes the current index directly (draw among the
    /// remaining `len - 1` indices and map back), so cost is bounded and
    /// there is no retry loop. Pools smaller than two entries cannot
    /// satisfy the no-repeat contract and are rejected.
    pub fn advance<'p, R: Rng>(
        &mut self,
        pool: &'p StatePool,
        rng: &mut R,
    ) -> Result<&'p AxisConfig, MotionError> {
        let len = pool.len();
        if len < 2 {
            return Err(MotionError::PoolTooSmall { len });
        }
        let index = match self.current {
            None => rng.gen_range(0..len),
            Some(current) => {
                let mut index = rng.gen_range(0..len - 1);
                if index >= current {
                    index += 1;
                }
                index
            }
        };
        self.current = Some(index);
        Ok(&pool.states()[index])
    }
}

/// One animation start handed to the interpolation driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub target: String,
    pub from: AxisConfig,
    pub to: AxisConfig,
    pub curve: CubicBezier,
    pub duration_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
enum CycleState {
    Idle,
    Sequencing {
        shuffled: Vec<AxisConfig>,
        next_index: usize,
        started_ms: f64,
    },
}

/// Deals a shuffled permutation of the pool to N targets on a fixed
/// recurring interval, staggering the per-target starts.
///
/// Each target's recorded current state is updated at dispatch time, not
/// at animation completion: logical state transitions immediately and
/// visual catch-up is asynchronous and may lag. A new cycle that begins
/// before the previous one has visually finished therefore interpolates
/// from the logically-updated value.
#[derive(Clone, Debug)]
pub struct CyclingController {
    targets: Vec<String>,
    current: Vec<AxisConfig>,
    pool: StatePool,
    curve: CubicBezier,
    duration_ms: f64,
    stagger_ms: f64,
    interval_ms: f64,
    next_cycle_at: Option<f64>,
    state: CycleState,
    sequences_started: u64,
}

impl CyclingController {
    /// Requires exactly as many targets as the pool has looks, all pool
    /// looks sharing one axis set; each target starts at `pool[index]`.
    /// A count mismatch or a mixed pool aborts startup entirely rather
    /// than partially animating.
    pub fn new(
        targets: Vec<String>,
        pool: StatePool,
        curve: CubicBezier,
        duration_ms: f64,
        stagger_ms: f64,
    ) -> Result<Self, MotionError> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(MotionError::InvalidDuration { ms: duration_ms });
        }
        if targets.len() != pool.len() {
            return Err(MotionError::TargetCountMismatch {
                expected: pool.len(),
                found: targets.len(),
            });
        }
        // Any pool entry may be dealt to any target, so every look must
        // carry the same axis set; otherwise a later dispatch would be
        // uninterpolatable.
        if let Some((first, rest)) = pool.states().split_first() {
            for state in rest {
                first.check_compatible(state)?;
                state.check_compatible(first)?;
            }
        }
        let n = targets.len() as f64;
        let current = pool.states().to_vec();
        Ok(Self {
            targets,
            current,
            pool,
            curve,
            duration_ms,
            stagger_ms,
            interval_ms: n * duration_ms + n * stagger_ms,
            next_cycle_at: None,
            state: CycleState::Idle,
            sequences_started: 0,
        })
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// How many sequences have begun dispatching so far.
    pub fn sequences_started(&self) -> u64 {
        self.sequences_started
    }

    /// The look most recently dispatched to target `index`.
    pub fn current_state(&self, index: usize) -> Option<&AxisConfig> {
        self.current.get(index)
    }

    /// Advance the controller to `now_ms`, returning the interpolations
    /// to start this frame. Dispatch order within one sequence is
    /// strictly index-ascending with a fixed stagger.
    pub fn poll<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> Vec<Dispatch> {
        // Arm the recurring interval on first poll; the first sequence
        // fires one full interval after startup.
        let next_cycle_at = *self
            .next_cycle_at
            .get_or_insert(now_ms + self.interval_ms);

        let mut dispatches = Vec::new();

        if self.state == CycleState::Idle && now_ms >= next_cycle_at {
            self.state = CycleState::Sequencing {
                shuffled: self.pool.shuffled(rng),
                next_index: 0,
                started_ms: now_ms,
            };
            self.next_cycle_at = Some(next_cycle_at + self.interval_ms);
            self.sequences_started += 1;
            log::debug!("cycle sequence started at {now_ms} ms");
        }

        loop {
            let (index, to) = match &mut self.state {
                CycleState::Idle => break,
                CycleState::Sequencing {
                    shuffled,
                    next_index,
                    started_ms,
                } => {
                    let due_at = *started_ms + *next_index as f64 * self.stagger_ms;
                    if now_ms < due_at {
                        break;
                    }
                    let index = *next_index;
                    *next_index += 1;
                    (index, shuffled[index].clone())
                }
            };

            dispatches.push(Dispatch {
                target: self.targets[index].clone(),
                from: self.current[index].clone(),
                to: to.clone(),
                curve: self.curve,
                duration_ms: self.duration_ms,
            });
            self.current[index] = to;

            if index + 1 >= self.targets.len() {
                self.state = CycleState::Idle;
            }
        }

        dispatches
    }
}
