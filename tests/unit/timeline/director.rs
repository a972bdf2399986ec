use super::*;
use crate::{
    foundation::core::Point, foundation::error::LifecycleFault, playback::sink::CommandLog,
    scene::primitive::Primitive,
};

fn circle(x: f64) -> Primitive {
    Primitive::circle(Point::new(x, 0.0), 1.0)
}

#[test]
fn append_returns_indices_and_tracks_duration() {
    let mut t = Timeline::new();
    assert_eq!(t.append(Step::create("A", circle(0.0))).unwrap(), 0);
    assert_eq!(
        t.append(Step::transform("A", circle(1.0)).with_wait(0.5)).unwrap(),
        1
    );
    assert_eq!(t.append(Step::pause(2.0)).unwrap(), 2);
    assert_eq!(t.duration_secs(), 4.5);
    assert_eq!(t.step_start_secs(0), Some(0.0));
    assert_eq!(t.step_start_secs(2), Some(2.5));
    assert_eq!(t.step_start_secs(3), None);
}

#[test]
fn append_does_not_check_liveness() {
    let mut t = Timeline::new();
    assert!(t.append(Step::remove("ghost")).is_ok());
}

#[test]
fn append_rejects_bad_timing_with_step_index() {
    let mut t = Timeline::new();
    t.append(Step::pause(1.0)).unwrap();
    let err = t.append(Step::pause(-1.0)).unwrap_err();
    let a = err.as_authoring().unwrap();
    assert_eq!(a.step, Some(1));
    assert_eq!(a.fault, LifecycleFault::InvalidTiming { field: "wait" });
    assert_eq!(t.len(), 1);
}

#[test]
fn end_to_end_create_transform_remove_then_reuse() {
    let mut t = Timeline::new();
    t.append(Step::create("A", circle(0.0))).unwrap();
    t.append(Step::transform("A", circle(1.0))).unwrap();
    t.append(Step::remove("A")).unwrap();

    let mut g = SceneGraph::new();
    let report = t.play(&mut g).unwrap();
    assert_eq!(report.steps_applied, 3);
    assert_eq!(report.duration_secs, 3.0);
    assert!(report.final_snapshot.is_empty());
    assert!(g.snapshot().is_empty());
    assert_eq!(t.state(), TimelineState::Done);

    assert!(g.create("A", circle(2.0)).is_ok());
}

#[test]
fn failed_playback_names_step_and_id_and_ends_done() {
    let mut t = Timeline::new();
    t.append(Step::create("A", circle(0.0))).unwrap();
    t.append(Step::create("B", circle(1.0))).unwrap();
    t.append(Step::create("A", circle(2.0))).unwrap();
    t.append(Step::remove("B")).unwrap();

    let mut g = SceneGraph::new();
    let err = t.play(&mut g).unwrap_err();
    let a = err.as_authoring().unwrap();
    assert_eq!(a.step, Some(2));
    assert_eq!(a.id.as_deref(), Some("A"));
    assert_eq!(a.fault, LifecycleFault::AlreadyLive);
    assert!(err.to_string().contains("step 2"));

    assert_eq!(t.state(), TimelineState::Done);
    assert_eq!(g.snapshot().ids(), vec!["A", "B"]);
}

#[test]
fn play_and_append_only_while_building() {
    let mut t = Timeline::new();
    t.append(Step::pause(1.0)).unwrap();
    t.play(&mut SceneGraph::new()).unwrap();
    assert!(matches!(
        t.append(Step::pause(1.0)),
        Err(AlephError::Timeline(_))
    ));
    assert!(matches!(
        t.play(&mut SceneGraph::new()),
        Err(AlephError::Timeline(_))
    ));
}

#[test]
fn play_into_streams_steps_in_append_order() {
    let mut t = Timeline::new();
    t.append(Step::create("A", circle(0.0)).with_wait(0.25))
        .unwrap();
    t.append(Step::transform("A", circle(3.0))).unwrap();

    let mut log = CommandLog::new();
    t.play_into(&mut SceneGraph::new(), &mut log).unwrap();
    assert_eq!(log.step_order(), vec![0, 1]);
    assert_eq!(log.info().unwrap().steps, 2);
}

#[test]
fn json_round_trip_resets_state() {
    let mut t = Timeline::new();
    t.append(Step::create("A", circle(0.0)).with_wait(1.0))
        .unwrap();
    t.play(&mut SceneGraph::new()).unwrap();

    let back = Timeline::from_json(&t.to_json().unwrap()).unwrap();
    assert_eq!(back.steps(), t.steps());
    assert_eq!(back.state(), TimelineState::Building);
}

#[test]
fn from_json_validates_steps() {
    let json = r#"{ "steps": [ { "ops": [], "run_time": -2.0 } ] }"#;
    let err = Timeline::from_json(json).unwrap_err();
    assert_eq!(err.as_authoring().unwrap().step, Some(0));
    assert!(matches!(
        Timeline::from_json("{ not json"),
        Err(AlephError::Serde(_))
    ));
}
