use crate::{
    foundation::error::AlephResult,
    playback::sink::{PlaybackCommand, PlaybackInfo, PlaybackSink},
    scene::graph::{SceneGraph, Snapshot},
    timeline::step::{Op, Step},
};

/// Outcome of a successful playback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackReport {
    /// Number of steps applied, equal to the timeline length.
    pub steps_applied: usize,
    /// Logical clock at the end of playback.
    pub duration_secs: f64,
    /// Live entries after the last step.
    pub final_snapshot: Snapshot,
}

/// Apply `steps` to `graph` in order, streaming commands to `sink`.
pub(crate) fn run(
    steps: &[Step],
    graph: &mut SceneGraph,
    sink: &mut dyn PlaybackSink,
) -> AlephResult<PlaybackReport> {
    let info = PlaybackInfo {
        steps: steps.len(),
        duration_secs: steps.iter().map(Step::span).sum(),
    };
    sink.begin(&info)?;

    let mut clock = 0.0;
    for (index, step) in steps.iter().enumerate() {
        if let Err(e) = apply_step(index, step, clock, graph, sink) {
            if let Err(end) = sink.end() {
                tracing::warn!(step = index, error = %end, "sink failed to end after step error");
            }
            return Err(e);
        }
        clock += step.span();
    }

    sink.command(&PlaybackCommand::End {
        duration_secs: clock,
    })?;
    sink.end()?;

    Ok(PlaybackReport {
        steps_applied: steps.len(),
        duration_secs: clock,
        final_snapshot: graph.snapshot(),
    })
}

/// Apply one step: every `Clear` first, then the remaining operations in order.
///
/// Lifecycle faults are tagged with `index`. A failing operation leaves earlier operations of
/// the same step applied.
pub(crate) fn apply_step(
    index: usize,
    step: &Step,
    start_secs: f64,
    graph: &mut SceneGraph,
    sink: &mut dyn PlaybackSink,
) -> AlephResult<()> {
    apply_ops(index, step, start_secs, graph, sink).map_err(|e| e.at_step(index))
}

fn apply_ops(
    index: usize,
    step: &Step,
    start_secs: f64,
    graph: &mut SceneGraph,
    sink: &mut dyn PlaybackSink,
) -> AlephResult<()> {
    step.validate()?;
    tracing::debug!(
        step = index,
        ops = step.ops.len(),
        run_time = step.run_time,
        wait = step.wait,
        "apply step"
    );
    sink.command(&PlaybackCommand::BeginStep {
        index,
        start_secs,
        run_time: step.run_time,
    })?;

    for op in &step.ops {
        if let Op::Clear { conceal } = op {
            let ids = graph.clear().into_iter().map(|e| e.id).collect();
            sink.command(&PlaybackCommand::Clear {
                ids,
                conceal: *conceal,
            })?;
        }
    }

    for op in &step.ops {
        let cmd = match op {
            Op::Clear { .. } => continue,
            Op::Create {
                id,
                primitive,
                reveal,
            } => {
                graph.create(id, primitive.clone())?;
                PlaybackCommand::Create {
                    id: id.clone(),
                    primitive: primitive.clone(),
                    reveal: *reveal,
                }
            }
            Op::Transform { id, target } => {
                let from = graph.transform(id.as_str(), target.clone())?;
                PlaybackCommand::Transform {
                    id: id.clone(),
                    from,
                    to: target.clone(),
                }
            }
            Op::Remove { id, conceal } => {
                graph.remove(id.as_str())?;
                PlaybackCommand::Remove {
                    id: id.clone(),
                    conceal: *conceal,
                }
            }
            Op::Continuous { id, motion } => {
                let end = motion.apply(graph.require(id.as_str(), "continuous")?, step.run_time);
                graph.transform(id.as_str(), end.clone())?;
                PlaybackCommand::Continuous {
                    id: id.clone(),
                    motion: *motion,
                    end,
                }
            }
        };
        sink.command(&cmd)?;
    }

    if step.wait > 0.0 {
        sink.command(&PlaybackCommand::Wait { secs: step.wait })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
