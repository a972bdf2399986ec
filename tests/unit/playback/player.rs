use super::*;
use crate::{
    foundation::core::Point,
    foundation::error::LifecycleFault,
    playback::sink::CommandLog,
    scene::primitive::Primitive,
    timeline::step::{Conceal, Motion, Reveal},
};

fn dot(x: f64) -> Primitive {
    Primitive::dot(Point::new(x, 0.0))
}

fn create(id: &str, x: f64) -> Op {
    Op::Create {
        id: id.into(),
        primitive: dot(x),
        reveal: Reveal::Instant,
    }
}

#[test]
fn clear_applies_before_other_ops() {
    let mut g = SceneGraph::new();
    g.create("a", dot(0.0)).unwrap();
    g.create("b", dot(1.0)).unwrap();

    let step = Step::new(vec![
        create("a", 5.0),
        Op::Clear {
            conceal: Conceal::Fade,
        },
    ]);
    let mut log = CommandLog::new();
    apply_step(0, &step, 0.0, &mut g, &mut log).unwrap();

    assert_eq!(g.snapshot().ids(), vec!["a"]);
    assert_eq!(g.get("a"), Some(&dot(5.0)));
    match &log.commands()[1] {
        PlaybackCommand::Clear { ids, .. } => {
            let ids: Vec<_> = ids.iter().map(|i| i.as_str()).collect();
            assert_eq!(ids, vec!["a", "b"]);
        }
        other => panic!("expected clear, got {other:?}"),
    }
}

#[test]
fn transform_command_carries_both_states() {
    let mut g = SceneGraph::new();
    g.create("a", dot(0.0)).unwrap();
    let step = Step::transform("a", dot(2.0));
    let mut log = CommandLog::new();
    apply_step(0, &step, 0.0, &mut g, &mut log).unwrap();
    assert_eq!(
        log.commands()[1],
        PlaybackCommand::Transform {
            id: "a".into(),
            from: dot(0.0),
            to: dot(2.0),
        }
    );
}

#[test]
fn continuous_lands_on_motion_end_state() {
    let mut g = SceneGraph::new();
    g.create("p", dot(0.0)).unwrap();
    let step = Step::new(vec![Op::Continuous {
        id: "p".into(),
        motion: Motion::Drift {
            velocity: crate::foundation::core::Vec2::new(1.5, 0.0),
        },
    }])
    .with_run_time(2.0);
    apply_step(0, &step, 0.0, &mut g, &mut CommandLog::new()).unwrap();
    assert_eq!(g.get("p").unwrap().anchor(), Point::new(3.0, 0.0));
}

#[test]
fn continuous_on_dead_id_is_an_authoring_error() {
    let step = Step::new(vec![Op::Continuous {
        id: "p".into(),
        motion: Motion::Spin {
            about: Point::ZERO,
            angular_velocity: 1.0,
        },
    }]);
    let err = apply_step(4, &step, 0.0, &mut SceneGraph::new(), &mut CommandLog::new())
        .unwrap_err();
    let a = err.as_authoring().unwrap();
    assert_eq!(a.step, Some(4));
    assert_eq!(a.fault, LifecycleFault::NotLive { op: "continuous" });
}

#[test]
fn run_emits_waits_and_end_on_logical_clock() {
    let steps = vec![
        Step::new(vec![create("a", 0.0)]).with_wait(0.5),
        Step::remove("a").with_run_time(0.25),
    ];
    let mut log = CommandLog::new();
    let report = run(&steps, &mut SceneGraph::new(), &mut log).unwrap();
    assert_eq!(report.duration_secs, 1.75);

    let cmds = log.commands();
    assert!(cmds.contains(&PlaybackCommand::Wait { secs: 0.5 }));
    assert!(matches!(
        cmds[3],
        PlaybackCommand::BeginStep {
            index: 1,
            start_secs,
            ..
        } if start_secs == 1.5
    ));
    assert_eq!(
        cmds.last(),
        Some(&PlaybackCommand::End {
            duration_secs: 1.75
        })
    );
}

#[test]
fn failed_run_sends_no_end_command() {
    let steps = vec![Step::remove("ghost")];
    let mut log = CommandLog::new();
    assert!(run(&steps, &mut SceneGraph::new(), &mut log).is_err());
    assert!(
        !log
            .commands()
            .iter()
            .any(|c| matches!(c, PlaybackCommand::End { .. }))
    );
}

struct FailingEnd {
    ended: bool,
}

impl PlaybackSink for FailingEnd {
    fn begin(&mut self, _info: &PlaybackInfo) -> AlephResult<()> {
        Ok(())
    }

    fn command(&mut self, _cmd: &PlaybackCommand) -> AlephResult<()> {
        Ok(())
    }

    fn end(&mut self) -> AlephResult<()> {
        self.ended = true;
        Err(crate::foundation::error::AlephError::timeline("sink closed"))
    }
}

#[test]
fn step_error_survives_failing_sink_end() {
    let steps = vec![Step::new(vec![create("a", 0.0)]), Step::remove("ghost")];
    let mut sink = FailingEnd { ended: false };
    let err = run(&steps, &mut SceneGraph::new(), &mut sink).unwrap_err();
    assert!(sink.ended);
    let a = err.as_authoring().unwrap();
    assert_eq!(a.step, Some(1));
    assert_eq!(a.id.as_deref(), Some("ghost"));
}
