//! # Aleph guide
//!
//! A walkthrough of how a scene goes from construction code to sampled frames.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Primitive`](crate::Primitive): an immutable drawing object (dot, line, arrow, circle,
//!   rectangle, polygon, text, group). Repositioning returns a new value.
//! - [`Step`](crate::Step): simultaneous operations ([`Op`](crate::Op)) plus a run time and a
//!   wait afterwards.
//! - [`Timeline`](crate::Timeline): the ordered, append-only list of steps for one scene.
//! - [`SceneGraph`](crate::SceneGraph): the live `id -> primitive` entries at one point of
//!   playback.
//!
//! A scene is built in two phases:
//!
//! 1. Build: record steps with [`SceneBuilder`](crate::SceneBuilder). Nothing is drawn and no
//!    entry is checked for liveness. The result is a plain value that can be inspected,
//!    serialized and fingerprinted.
//! 2. Play: [`Timeline::play_into`](crate::Timeline::play_into) applies the steps in order to a
//!    scene graph and reports each change to a [`PlaybackSink`](crate::PlaybackSink).
//!
//! ---
//!
//! ## Entry lifecycle
//!
//! Every id moves through `create -> (transform | continuous)* -> remove`. Creating a live id,
//! or touching an id that is not live, is an authoring error carrying the step index and id.
//! After removal an id can be created again and is appended at the end of the snapshot order.
//!
//! Inside a step an id may appear only once. `Clear` operations run before everything else in
//! their step, so a step can clear the scene and create fresh entries at once.
//!
//! ```
//! use aleph::{Point, Primitive, SceneBuilder, SceneGraph};
//!
//! let mut scene = SceneBuilder::new();
//! scene
//!     .play(|s| s.create("a", Primitive::circle(Point::ORIGIN, 1.0)))
//!     .play(|s| s.transform("a", Primitive::circle(Point::new(1.0, 0.0), 1.0)))
//!     .play(|s| s.fade_out("a"))
//!     .wait(0.5);
//! let mut timeline = scene.build()?;
//!
//! let mut graph = SceneGraph::new();
//! let report = timeline.play(&mut graph)?;
//! assert!(report.final_snapshot.is_empty());
//! assert_eq!(report.duration_secs, 3.5);
//! # Ok::<(), aleph::AlephError>(())
//! ```
//!
//! ---
//!
//! ## Time
//!
//! Time is logical. Each step occupies `run_time + wait` seconds. Playback never sleeps; it
//! only advances a clock that is reported in [`PlaybackCommand`](crate::PlaybackCommand)s.
//!
//! [`FrameSampler`](crate::FrameSampler) turns a timeline into per-frame scene states: frame `k`
//! is sampled at `k / fps`. Inside a step:
//!
//! - transforms interpolate from the previous state with the step's [`Ease`](crate::Ease);
//!   shapes of different kinds swap at the midpoint,
//! - reveals and conceals report their progress as `visibility`,
//! - continuous motions ([`Motion`](crate::Motion)) are evaluated at the elapsed seconds,
//! - with a non-zero `lag_ratio`, operations start one after another.
//!
//! ---
//!
//! ## Layout
//!
//! Layout helpers are pure functions that fail with [`AlephError::Layout`](crate::AlephError)
//! on degenerate input: [`Axis`](crate::Axis) maps numbers onto a line without clamping,
//! [`arrange`](crate::arrange) places items in rows, columns or grids, and
//! [`Primitive::next_to`](crate::Primitive::next_to) and friends position one object relative
//! to another. Randomness always comes from an explicitly seeded [`Rng64`](crate::Rng64).
