use crate::{
    foundation::error::{AlephError, AlephResult},
    playback::player::{self, PlaybackReport},
    playback::sink::{NullSink, PlaybackSink},
    scene::graph::SceneGraph,
    timeline::step::Step,
};

/// Lifecycle of a [`Timeline`]: appended to while `Building`, played exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineState {
    #[default]
    Building,
    Playing,
    Done,
}

/// Ordered, append-only list of steps describing one scene.
///
/// Only the steps are serialized. A deserialized timeline starts out `Building`, and every step
/// goes through the same checks as [`Timeline::append`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TimelineRepr")]
pub struct Timeline {
    steps: Vec<Step>,
    #[serde(skip)]
    state: TimelineState,
}

#[derive(serde::Deserialize)]
struct TimelineRepr {
    steps: Vec<Step>,
}

impl TryFrom<TimelineRepr> for Timeline {
    type Error = AlephError;

    fn try_from(repr: TimelineRepr) -> Result<Self, Self::Error> {
        let mut timeline = Timeline::new();
        for step in repr.steps {
            timeline.append(step)?;
        }
        Ok(timeline)
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step and return its index.
    ///
    /// Timing and geometry are checked here; whether ids are live is checked during playback.
    pub fn append(&mut self, step: Step) -> AlephResult<usize> {
        if self.state != TimelineState::Building {
            return Err(AlephError::timeline(format!(
                "cannot append to a timeline in state {:?}",
                self.state
            )));
        }
        let index = self.steps.len();
        step.validate().map_err(|e| e.at_step(index))?;
        self.steps.push(step);
        Ok(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Total logical duration: the sum of every step's run time and wait.
    pub fn duration_secs(&self) -> f64 {
        self.steps.iter().map(Step::span).sum()
    }

    /// Logical start time of step `index`, or `None` when out of range.
    pub fn step_start_secs(&self, index: usize) -> Option<f64> {
        (index < self.steps.len()).then(|| self.steps[..index].iter().map(Step::span).sum())
    }

    /// Play every step against `graph`, discarding the command stream.
    pub fn play(&mut self, graph: &mut SceneGraph) -> AlephResult<PlaybackReport> {
        self.play_into(graph, &mut NullSink)
    }

    /// Play every step against `graph` in append order, reporting each change to `sink`.
    ///
    /// The first lifecycle violation aborts playback with an authoring error that names the
    /// step. Steps already applied stay applied and the timeline ends `Done` either way.
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub fn play_into(
        &mut self,
        graph: &mut SceneGraph,
        sink: &mut dyn PlaybackSink,
    ) -> AlephResult<PlaybackReport> {
        if self.state != TimelineState::Building {
            return Err(AlephError::timeline(format!(
                "cannot play a timeline in state {:?}",
                self.state
            )));
        }
        self.state = TimelineState::Playing;
        let out = player::run(&self.steps, graph, sink);
        self.state = TimelineState::Done;
        if let Err(e) = &out {
            tracing::debug!(error = %e, "playback aborted");
        }
        out
    }

    pub fn to_json(&self) -> AlephResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> AlephResult<Self> {
        serde_json::from_str::<TimelineRepr>(s)?.try_into()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/director.rs"]
mod tests;
