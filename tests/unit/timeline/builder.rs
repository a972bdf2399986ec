use super::*;
use crate::{foundation::core::Point, scene::graph::SceneGraph};

fn dot(x: f64) -> Primitive {
    Primitive::dot(Point::new(x, 0.0))
}

#[test]
fn step_builder_collects_ops_in_order() {
    let step = StepBuilder::new()
        .create("a", dot(0.0))
        .fade_in("b", dot(1.0))
        .transform("c", dot(2.0))
        .fade_out("d")
        .run_time(0.8)
        .ease(Ease::Linear)
        .lag_ratio(0.2)
        .wait(0.5)
        .build();

    let names: Vec<_> = step.ops.iter().map(Op::name).collect();
    assert_eq!(names, vec!["create", "create", "transform", "remove"]);
    assert_eq!(step.run_time, 0.8);
    assert_eq!(step.wait, 0.5);
    assert_eq!(step.ease, Ease::Linear);
    assert_eq!(step.lag_ratio, 0.2);
    assert!(matches!(
        &step.ops[1],
        Op::Create {
            reveal: Reveal::Fade,
            ..
        }
    ));
}

#[test]
fn wait_extends_previous_step_or_records_pause() {
    let mut b = SceneBuilder::new();
    b.wait(1.0);
    b.play(|s| s.create("a", dot(0.0))).wait(0.5).wait(0.25);
    let t = b.build().unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.steps()[0].span(), 1.0);
    assert_eq!(t.steps()[1].wait, 0.75);
    assert_eq!(t.duration_secs(), 2.75);
}

#[test]
fn add_and_clear_take_no_time() {
    let mut b = SceneBuilder::new();
    b.add("a", dot(0.0)).add("b", dot(1.0)).clear();
    let mut t = b.build().unwrap();
    assert_eq!(t.duration_secs(), 0.0);

    let mut g = SceneGraph::new();
    t.play(&mut g).unwrap();
    assert!(g.is_empty());
}

#[test]
fn build_reports_first_invalid_step() {
    let mut b = SceneBuilder::new();
    b.add("a", dot(0.0))
        .play(|s| s.transform("a", dot(1.0)).remove("a"));
    let err = b.build().unwrap_err();
    assert_eq!(err.as_authoring().unwrap().step, Some(1));
}

#[test]
fn failed_build_keeps_recorded_steps() {
    let mut b = SceneBuilder::new();
    b.add("a", dot(0.0))
        .play(|s| s.transform("a", dot(1.0)).run_time(-1.0));
    assert!(b.build().is_err());
    assert_eq!(b.len(), 2);

    b.wait(0.5);
    assert!(b.build().is_err());
    assert_eq!(b.len(), 2);
}

#[test]
fn build_drains_the_builder() {
    let mut b = SceneBuilder::new();
    b.add("a", dot(0.0));
    assert_eq!(b.len(), 1);
    b.build().unwrap();
    assert!(b.is_empty());
}
