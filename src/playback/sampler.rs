use std::collections::BTreeMap;

use crate::{
    animation::lerp::Lerp,
    foundation::core::{Fps, FrameIndex},
    foundation::error::{AlephError, AlephResult},
    playback::player::apply_step,
    playback::sink::NullSink,
    scene::graph::{EntryId, SceneGraph},
    scene::primitive::Primitive,
    timeline::director::Timeline,
    timeline::step::{Conceal, Op, Reveal, Step},
};

/// What is happening to a sampled entry at the sampled time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Phase {
    Static,
    Revealing { reveal: Reveal },
    Concealing { conceal: Conceal },
    Transforming,
    Moving,
}

/// One entry of a sampled frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampledEntry {
    pub id: EntryId,
    /// Interpolated state at the sampled time.
    pub primitive: Primitive,
    /// Reveal or conceal progress in `[0, 1]`; `1` for fully present entries.
    pub visibility: f64,
    pub phase: Phase,
}

/// Scene state at one frame time.
///
/// While a cleared entry conceals and a new entry with the same id reveals, both appear.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    pub frame: FrameIndex,
    pub time_secs: f64,
    /// Step whose span contains `time_secs`, if any.
    pub step: Option<usize>,
    pub entries: Vec<SampledEntry>,
}

/// Incremental replay: `graph` holds the state before step `next`, which starts at `start`.
struct Replay<'a> {
    steps: &'a [Step],
    graph: SceneGraph,
    next: usize,
    start: f64,
    after: Option<SceneGraph>,
}

impl<'a> Replay<'a> {
    fn new(steps: &'a [Step]) -> Self {
        Self {
            steps,
            graph: SceneGraph::new(),
            next: 0,
            start: 0.0,
            after: None,
        }
    }

    /// Apply every step that ends at or before `t`. Times must not go backwards.
    fn advance_to(&mut self, t: f64) -> AlephResult<()> {
        let steps = self.steps;
        while let Some(step) = steps.get(self.next) {
            if t < self.start + step.span() {
                break;
            }
            match self.after.take() {
                Some(after) => self.graph = after,
                None => apply_step(self.next, step, self.start, &mut self.graph, &mut NullSink)?,
            }
            self.start += step.span();
            self.next += 1;
        }
        Ok(())
    }

    /// State after the in-progress step, computed once per step.
    fn after_current(&mut self) -> AlephResult<&SceneGraph> {
        let steps = self.steps;
        if self.after.is_none()
            && let Some(step) = steps.get(self.next)
        {
            let mut g = self.graph.clone();
            apply_step(self.next, step, self.start, &mut g, &mut NullSink)?;
            self.after = Some(g);
        }
        Ok(self.after.as_ref().unwrap_or(&self.graph))
    }

    fn sample(&mut self, frame: FrameIndex, t: f64) -> AlephResult<FrameState> {
        self.advance_to(t)?;
        let steps = self.steps;
        let Some(step) = steps.get(self.next) else {
            return Ok(FrameState {
                frame,
                time_secs: t,
                step: None,
                entries: settled(&self.graph),
            });
        };
        let index = self.next;
        let local = t - self.start;
        let after = self.after_current()?;
        if step.run_time <= 0.0 || local >= step.run_time {
            return Ok(FrameState {
                frame,
                time_secs: t,
                step: Some(index),
                entries: settled(after),
            });
        }

        let p = local / step.run_time;
        let progress = |op_index: usize| {
            let (s, e) = step.op_window(op_index);
            let raw = if e > s { (p - s) / (e - s) } else { 1.0 };
            step.ease.apply(raw.clamp(0.0, 1.0))
        };

        let clear = step.ops.iter().enumerate().find_map(|(i, op)| match op {
            Op::Clear { conceal } => Some((i, *conceal)),
            _ => None,
        });
        let by_id: BTreeMap<&str, (usize, &Op)> = step
            .ops
            .iter()
            .enumerate()
            .filter_map(|(i, op)| op.id().map(|id| (id.as_str(), (i, op))))
            .collect();

        let mut entries = Vec::new();
        for entry in self.graph.entries() {
            let id = entry.id.clone();
            let base = &entry.primitive;
            let concealing = match clear {
                Some(c) => Some(c),
                None => match by_id.get(id.as_str()) {
                    Some((i, Op::Remove { conceal, .. })) => Some((*i, *conceal)),
                    _ => None,
                },
            };
            if let Some((i, conceal)) = concealing {
                if let Some(s) = concealed(id, base, conceal, progress(i)) {
                    entries.push(s);
                }
                continue;
            }
            let sampled = match by_id.get(id.as_str()) {
                Some((i, Op::Transform { target, .. })) => SampledEntry {
                    id,
                    primitive: <Primitive as Lerp>::lerp(base, target, progress(*i)),
                    visibility: 1.0,
                    phase: Phase::Transforming,
                },
                Some((_, Op::Continuous { motion, .. })) => SampledEntry {
                    id,
                    primitive: motion.apply(base, local),
                    visibility: 1.0,
                    phase: Phase::Moving,
                },
                _ => present(id, base.clone()),
            };
            entries.push(sampled);
        }

        for (i, op) in step.ops.iter().enumerate() {
            if let Op::Create {
                id,
                primitive,
                reveal,
            } = op
            {
                entries.push(revealed(id.clone(), primitive, *reveal, progress(i)));
            }
        }

        Ok(FrameState {
            frame,
            time_secs: t,
            step: Some(index),
            entries,
        })
    }
}

fn present(id: EntryId, primitive: Primitive) -> SampledEntry {
    SampledEntry {
        id,
        primitive,
        visibility: 1.0,
        phase: Phase::Static,
    }
}

fn settled(graph: &SceneGraph) -> Vec<SampledEntry> {
    graph
        .entries()
        .iter()
        .map(|e| present(e.id.clone(), e.primitive.clone()))
        .collect()
}

fn revealed(id: EntryId, primitive: &Primitive, reveal: Reveal, q: f64) -> SampledEntry {
    let (primitive, visibility) = match reveal {
        Reveal::Instant => (primitive.clone(), 1.0),
        Reveal::GrowFromCenter => (primitive.scaled(q), q),
        Reveal::Fade | Reveal::Draw | Reveal::Write => (primitive.clone(), q),
    };
    SampledEntry {
        id,
        primitive,
        visibility,
        phase: Phase::Revealing { reveal },
    }
}

fn concealed(id: EntryId, primitive: &Primitive, conceal: Conceal, q: f64) -> Option<SampledEntry> {
    let visibility = 1.0 - q;
    let primitive = match conceal {
        Conceal::Instant => return None,
        Conceal::Shrink => primitive.scaled(visibility),
        Conceal::Fade => primitive.clone(),
    };
    Some(SampledEntry {
        id,
        primitive,
        visibility,
        phase: Phase::Concealing { conceal },
    })
}

fn check_time(t: f64) -> AlephResult<()> {
    if !(t.is_finite() && t >= 0.0) {
        return Err(AlephError::timeline(format!(
            "sample time must be finite and >= 0, got {t}"
        )));
    }
    Ok(())
}

/// Scene state of `timeline` at `t` seconds, replayed from the start.
///
/// Times at or past the end give the final state.
#[tracing::instrument(skip(timeline), fields(steps = timeline.len()))]
pub fn sample_at(timeline: &Timeline, t: f64) -> AlephResult<FrameState> {
    check_time(t)?;
    Replay::new(timeline.steps()).sample(FrameIndex(0), t)
}

/// Iterator over every frame of a timeline at a fixed frame rate.
///
/// Frame `k` is sampled at `k / fps` for `k < ceil(duration * fps)`. Steps are replayed
/// incrementally, so a full pass costs one playback plus one clone per animated step. The
/// iterator stops after the first error.
pub struct FrameSampler<'a> {
    replay: Replay<'a>,
    fps: Fps,
    next: u64,
    count: u64,
    failed: bool,
}

impl<'a> FrameSampler<'a> {
    pub fn new(timeline: &'a Timeline, fps: Fps) -> Self {
        let count = fps.secs_to_frames_ceil(timeline.duration_secs());
        tracing::debug!(frames = count, fps = fps.as_f64(), "frame sampler");
        Self {
            replay: Replay::new(timeline.steps()),
            fps,
            next: 0,
            count,
            failed: false,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.count
    }
}

impl Iterator for FrameSampler<'_> {
    type Item = AlephResult<FrameState>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.count {
            return None;
        }
        let frame = FrameIndex(self.next);
        self.next += 1;
        let t = self.fps.frames_to_secs(frame.0);
        let out = self.replay.sample(frame, t);
        self.failed = out.is_err();
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let left = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (0, Some(left))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/sampler.rs"]
mod tests;
