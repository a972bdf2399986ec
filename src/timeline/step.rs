use std::collections::BTreeSet;

use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Vec2},
    foundation::error::{AlephError, AlephResult, LifecycleFault},
    foundation::math::finite_non_negative,
    scene::graph::EntryId,
    scene::primitive::Primitive,
};

/// How a newly created entry appears over its step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reveal {
    /// Visible from the first instant of the step.
    Instant,
    /// Opacity ramps from 0 to 1.
    Fade,
    /// Stroke is traced out, then filled.
    #[default]
    Draw,
    /// Handwriting-style reveal for text.
    Write,
    /// Scales up from nothing around its center.
    GrowFromCenter,
}

/// How a removed entry disappears over its step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conceal {
    /// Gone from the first instant of the step.
    Instant,
    /// Opacity ramps from 1 to 0.
    #[default]
    Fade,
    /// Scales down to nothing around its center.
    Shrink,
}

/// Pure function of elapsed step time, applied to an entry by a continuous transform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    /// Carry the entry's anchor around a circle.
    Orbit {
        /// Orbit center.
        center: Point,
        /// Orbit radius.
        radius: f64,
        /// Radians per second; positive is counter-clockwise.
        angular_velocity: f64,
        /// Angle at the start of the step, in radians.
        start_angle: f64,
    },
    /// Translate at constant velocity (units per second).
    Drift {
        /// Velocity vector.
        velocity: Vec2,
    },
    /// Rotate about a fixed pivot.
    Spin {
        /// Rotation pivot.
        about: Point,
        /// Radians per second.
        angular_velocity: f64,
    },
}

impl Motion {
    /// Angle of an orbit after `elapsed` seconds, or `None` for other motions.
    pub fn orbit_angle(&self, elapsed: f64) -> Option<f64> {
        match *self {
            Self::Orbit {
                angular_velocity,
                start_angle,
                ..
            } => Some(start_angle + angular_velocity * elapsed),
            _ => None,
        }
    }

    /// State of `base` after `elapsed` seconds of this motion.
    pub fn apply(&self, base: &Primitive, elapsed: f64) -> Primitive {
        match *self {
            Self::Orbit { center, radius, .. } => {
                let angle = self.orbit_angle(elapsed).unwrap_or_default();
                base.anchor_moved_to(center + Vec2::from_angle(angle) * radius)
            }
            Self::Drift { velocity } => base.translated(velocity * elapsed),
            Self::Spin {
                about,
                angular_velocity,
            } => base.rotated_about(about, angular_velocity * elapsed),
        }
    }

    pub fn validate(&self) -> AlephResult<()> {
        let ok = match *self {
            Self::Orbit {
                center,
                radius,
                angular_velocity,
                start_angle,
            } => {
                center.x.is_finite()
                    && center.y.is_finite()
                    && finite_non_negative(radius)
                    && angular_velocity.is_finite()
                    && start_angle.is_finite()
            }
            Self::Drift { velocity } => velocity.x.is_finite() && velocity.y.is_finite(),
            Self::Spin {
                about,
                angular_velocity,
            } => about.x.is_finite() && about.y.is_finite() && angular_velocity.is_finite(),
        };
        if !ok {
            return Err(AlephError::layout("motion parameters must be finite"));
        }
        Ok(())
    }
}

/// One operation inside a step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Register a new live entry.
    Create {
        /// New entry id.
        id: EntryId,
        /// Initial state.
        primitive: Primitive,
        /// Appearance over the step.
        #[serde(default)]
        reveal: Reveal,
    },
    /// Morph a live entry into `target`.
    Transform {
        /// Live entry id.
        id: EntryId,
        /// State at the end of the step.
        target: Primitive,
    },
    /// Retire a live entry.
    Remove {
        /// Live entry id.
        id: EntryId,
        /// Disappearance over the step.
        #[serde(default)]
        conceal: Conceal,
    },
    /// Drive a live entry with a motion for the whole step.
    Continuous {
        /// Live entry id.
        id: EntryId,
        /// Motion applied as a function of elapsed step time.
        motion: Motion,
    },
    /// Retire every live entry; applied before the other operations of its step.
    Clear {
        /// Disappearance over the step.
        #[serde(default)]
        conceal: Conceal,
    },
}

impl Op {
    pub fn id(&self) -> Option<&EntryId> {
        match self {
            Self::Create { id, .. }
            | Self::Transform { id, .. }
            | Self::Remove { id, .. }
            | Self::Continuous { id, .. } => Some(id),
            Self::Clear { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Transform { .. } => "transform",
            Self::Remove { .. } => "remove",
            Self::Continuous { .. } => "continuous",
            Self::Clear { .. } => "clear",
        }
    }
}

fn default_run_time() -> f64 {
    DEFAULT_RUN_TIME
}

/// Run time used when a step does not set one, in seconds.
pub const DEFAULT_RUN_TIME: f64 = 1.0;

/// One timeline unit: simultaneous operations, their duration and a wait afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Operations, conceptually simultaneous.
    pub ops: Vec<Op>,
    /// Seconds the operations take.
    #[serde(default = "default_run_time")]
    pub run_time: f64,
    /// Seconds to hold the result before the next step.
    #[serde(default)]
    pub wait: f64,
    /// Rate function applied to transform, reveal and conceal progress.
    #[serde(default)]
    pub ease: Ease,
    /// Fraction of one operation's duration between successive operation starts.
    #[serde(default)]
    pub lag_ratio: f64,
}

impl Step {
    pub fn new(ops: Vec<Op>) -> Self {
        Self {
            ops,
            run_time: DEFAULT_RUN_TIME,
            wait: 0.0,
            ease: Ease::default(),
            lag_ratio: 0.0,
        }
    }

    pub fn create(id: impl Into<EntryId>, primitive: Primitive) -> Self {
        Self::new(vec![Op::Create {
            id: id.into(),
            primitive,
            reveal: Reveal::default(),
        }])
    }

    pub fn transform(id: impl Into<EntryId>, target: Primitive) -> Self {
        Self::new(vec![Op::Transform {
            id: id.into(),
            target,
        }])
    }

    /// Instant removal, like dropping an entry without animation.
    pub fn remove(id: impl Into<EntryId>) -> Self {
        Self::new(vec![Op::Remove {
            id: id.into(),
            conceal: Conceal::Instant,
        }])
    }

    /// A step with no operations that only holds the scene for `secs`.
    pub fn pause(secs: f64) -> Self {
        Self {
            run_time: 0.0,
            wait: secs,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_run_time(mut self, secs: f64) -> Self {
        self.run_time = secs;
        self
    }

    pub fn with_wait(mut self, secs: f64) -> Self {
        self.wait = secs;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_lag_ratio(mut self, lag_ratio: f64) -> Self {
        self.lag_ratio = lag_ratio;
        self
    }

    /// Seconds this step occupies on the timeline.
    pub fn span(&self) -> f64 {
        self.run_time + self.wait
    }

    /// Window of operation `index` as `(start, end)` fractions of `run_time`.
    ///
    /// Without lag every operation spans the whole step. With lag ratio `λ` and `n`
    /// operations, each lasts `1 / (1 + (n - 1) λ)` and starts `λ` of that after the previous.
    pub fn op_window(&self, index: usize) -> (f64, f64) {
        let n = self.ops.len();
        if n <= 1 || self.lag_ratio == 0.0 {
            return (0.0, 1.0);
        }
        let d = 1.0 / (1.0 + (n as f64 - 1.0) * self.lag_ratio);
        let start = index as f64 * self.lag_ratio * d;
        (start, (start + d).min(1.0))
    }

    /// Check timing values, geometry and per-step id uniqueness.
    ///
    /// Whether ids are live is only known during playback and is not checked here.
    pub fn validate(&self) -> AlephResult<()> {
        for (field, value) in [("run_time", self.run_time), ("wait", self.wait)] {
            if !finite_non_negative(value) {
                return Err(AlephError::authoring(
                    LifecycleFault::InvalidTiming { field },
                    None,
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.lag_ratio) {
            return Err(AlephError::authoring(
                LifecycleFault::InvalidTiming { field: "lag_ratio" },
                None,
            ));
        }

        let mut seen = BTreeSet::new();
        for op in &self.ops {
            if let Some(id) = op.id()
                && !seen.insert(id.as_str())
            {
                return Err(AlephError::authoring(
                    LifecycleFault::RepeatedInStep,
                    Some(id.as_str()),
                ));
            }
            match op {
                Op::Create { primitive, .. } => primitive.validate()?,
                Op::Transform { target, .. } => target.validate()?,
                Op::Continuous { motion, .. } => motion.validate()?,
                Op::Remove { .. } | Op::Clear { .. } => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/step.rs"]
mod tests;
