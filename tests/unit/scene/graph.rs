use super::*;
use crate::foundation::core::Point;

fn dot(x: f64) -> Primitive {
    Primitive::dot(Point::new(x, 0.0))
}

fn fault(err: AlephError) -> LifecycleFault {
    err.as_authoring().expect("authoring error").fault.clone()
}

#[test]
fn create_rejects_live_id() {
    let mut g = SceneGraph::new();
    g.create("A", dot(0.0)).unwrap();
    let err = g.create("A", dot(1.0)).unwrap_err();
    assert_eq!(fault(err), LifecycleFault::AlreadyLive);
    assert_eq!(g.get("A"), Some(&dot(0.0)));
}

#[test]
fn transform_and_remove_require_live_id() {
    let mut g = SceneGraph::new();
    assert_eq!(
        fault(g.transform("A", dot(0.0)).unwrap_err()),
        LifecycleFault::NotLive { op: "transform" }
    );
    assert_eq!(
        fault(g.remove("A").unwrap_err()),
        LifecycleFault::NotLive { op: "remove" }
    );
}

#[test]
fn transform_keeps_position_and_returns_previous() {
    let mut g = SceneGraph::new();
    g.create("A", dot(0.0)).unwrap();
    g.create("B", dot(1.0)).unwrap();
    let prev = g.transform("A", dot(5.0)).unwrap();
    assert_eq!(prev, dot(0.0));
    assert_eq!(g.snapshot().ids(), vec!["A", "B"]);
    assert_eq!(g.get("A"), Some(&dot(5.0)));
}

#[test]
fn removed_id_can_be_reused_and_moves_to_end() {
    let mut g = SceneGraph::new();
    g.create("A", dot(0.0)).unwrap();
    g.create("B", dot(1.0)).unwrap();
    assert_eq!(g.remove("A").unwrap(), dot(0.0));
    assert!(!g.contains("A"));
    g.create("A", dot(2.0)).unwrap();
    assert_eq!(g.snapshot().ids(), vec!["B", "A"]);
}

#[test]
fn clear_empties_graph_in_order() {
    let mut g = SceneGraph::new();
    g.create("A", dot(0.0)).unwrap();
    g.create("B", dot(1.0)).unwrap();
    let removed = g.clear();
    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].id.as_str(), "A");
    assert!(g.is_empty());
    assert!(g.snapshot().is_empty());
}

#[test]
fn snapshot_is_a_detached_copy() {
    let mut g = SceneGraph::new();
    g.create("A", dot(0.0)).unwrap();
    let snap = g.snapshot();
    g.remove("A").unwrap();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap.get("A"), Some(&dot(0.0)));
}
