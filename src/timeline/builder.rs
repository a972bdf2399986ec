use crate::{
    animation::ease::Ease,
    foundation::error::AlephResult,
    scene::graph::EntryId,
    scene::primitive::Primitive,
    timeline::director::Timeline,
    timeline::step::{Conceal, Motion, Op, Reveal, Step},
};

/// Collects the operations and timing of one step.
///
/// ```
/// use aleph::{Point, Primitive, StepBuilder};
///
/// let step = StepBuilder::new()
///     .create("dot", Primitive::dot(Point::ZERO))
///     .run_time(0.5)
///     .wait(1.0)
///     .build();
/// assert_eq!(step.span(), 1.5);
/// ```
#[derive(Clone, Debug)]
pub struct StepBuilder {
    step: Step,
}

impl Default for StepBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StepBuilder {
    pub fn new() -> Self {
        Self {
            step: Step::new(Vec::new()),
        }
    }

    fn op(mut self, op: Op) -> Self {
        self.step.ops.push(op);
        self
    }

    pub fn create_with(self, id: impl Into<EntryId>, primitive: Primitive, reveal: Reveal) -> Self {
        self.op(Op::Create {
            id: id.into(),
            primitive,
            reveal,
        })
    }

    /// Trace the stroke, then fill.
    pub fn create(self, id: impl Into<EntryId>, primitive: Primitive) -> Self {
        self.create_with(id, primitive, Reveal::Draw)
    }

    pub fn write(self, id: impl Into<EntryId>, primitive: Primitive) -> Self {
        self.create_with(id, primitive, Reveal::Write)
    }

    pub fn fade_in(self, id: impl Into<EntryId>, primitive: Primitive) -> Self {
        self.create_with(id, primitive, Reveal::Fade)
    }

    pub fn grow(self, id: impl Into<EntryId>, primitive: Primitive) -> Self {
        self.create_with(id, primitive, Reveal::GrowFromCenter)
    }

    /// Appear at the first instant of the step.
    pub fn add(self, id: impl Into<EntryId>, primitive: Primitive) -> Self {
        self.create_with(id, primitive, Reveal::Instant)
    }

    pub fn transform(self, id: impl Into<EntryId>, target: Primitive) -> Self {
        self.op(Op::Transform {
            id: id.into(),
            target,
        })
    }

    pub fn remove_with(self, id: impl Into<EntryId>, conceal: Conceal) -> Self {
        self.op(Op::Remove {
            id: id.into(),
            conceal,
        })
    }

    pub fn fade_out(self, id: impl Into<EntryId>) -> Self {
        self.remove_with(id, Conceal::Fade)
    }

    pub fn shrink(self, id: impl Into<EntryId>) -> Self {
        self.remove_with(id, Conceal::Shrink)
    }

    pub fn remove(self, id: impl Into<EntryId>) -> Self {
        self.remove_with(id, Conceal::Instant)
    }

    pub fn continuous(self, id: impl Into<EntryId>, motion: Motion) -> Self {
        self.op(Op::Continuous {
            id: id.into(),
            motion,
        })
    }

    pub fn clear(self, conceal: Conceal) -> Self {
        self.op(Op::Clear { conceal })
    }

    pub fn run_time(mut self, secs: f64) -> Self {
        self.step.run_time = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.step.ease = ease;
        self
    }

    pub fn lag_ratio(mut self, lag_ratio: f64) -> Self {
        self.step.lag_ratio = lag_ratio;
        self
    }

    pub fn wait(mut self, secs: f64) -> Self {
        self.step.wait = secs;
        self
    }

    pub fn build(self) -> Step {
        self.step
    }
}

/// Records a scene the way an animation script is written: a sequence of `play` and `wait`
/// calls.
///
/// Nothing is checked until [`SceneBuilder::build`], which appends every recorded step to a
/// fresh [`Timeline`] and reports the first invalid one.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    steps: Vec<Step>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one animated step.
    pub fn play(&mut self, f: impl FnOnce(StepBuilder) -> StepBuilder) -> &mut Self {
        self.steps.push(f(StepBuilder::new()).build());
        self
    }

    /// Record an already built step.
    pub fn step(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Instantly add an entry, taking no time.
    pub fn add(&mut self, id: impl Into<EntryId>, primitive: Primitive) -> &mut Self {
        self.play(|s| s.add(id, primitive).run_time(0.0))
    }

    /// Instantly remove every live entry, taking no time.
    pub fn clear(&mut self) -> &mut Self {
        self.play(|s| s.clear(Conceal::Instant).run_time(0.0))
    }

    /// Hold the scene: extends the wait of the previous step, or records a pause if there is none.
    pub fn wait(&mut self, secs: f64) -> &mut Self {
        match self.steps.last_mut() {
            Some(last) => last.wait += secs,
            None => self.steps.push(Step::pause(secs)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate the recorded steps into a timeline and empty the builder.
    ///
    /// On error the recorded steps are left in place.
    pub fn build(&mut self) -> AlephResult<Timeline> {
        let mut timeline = Timeline::new();
        for step in &self.steps {
            timeline.append(step.clone())?;
        }
        self.steps.clear();
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
