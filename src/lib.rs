//! Aleph is a deterministic scene-graph timeline builder for mathematical explainer animations.
//!
//! Scenes are recorded as a pure [`Timeline`] value, then played back against a [`SceneGraph`]
//! or sampled frame by frame. See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod layout;
mod playback;
mod scene;
mod scenes;
mod timeline;

/// End-to-end walkthrough of the crate.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use config::{FrameConfig, SceneConfig};
pub use foundation::core::{Affine, Color, Fps, FrameIndex, Point, Rect, Size, Vec2};
pub use foundation::error::{AlephError, AlephResult, AuthoringError, LifecycleFault};
pub use layout::arrange::{Align, Arrangement, arrange, arrange_aligned, arrange_centered};
pub use layout::axis::{Axis, map_value};
pub use layout::place::{
    Corner, DEFAULT_EDGE_BUFF, DEFAULT_NEXT_TO_BUFF, Direction, next_to, ratio, to_corner, to_edge,
};
pub use layout::random::Rng64;
pub use playback::player::PlaybackReport;
pub use playback::sampler::{FrameSampler, FrameState, Phase, SampledEntry, sample_at};
pub use playback::sink::{CommandLog, NullSink, PlaybackCommand, PlaybackInfo, PlaybackSink};
pub use scene::graph::{EntryId, SceneEntry, SceneGraph, Snapshot};
pub use scene::primitive::{Primitive, Shape, Style};
pub use scenes::{SceneInfo, catalog, find_scene};
pub use timeline::builder::{SceneBuilder, StepBuilder};
pub use timeline::director::{Timeline, TimelineState};
pub use timeline::fingerprint::{TimelineFingerprint, fingerprint};
pub use timeline::step::{Conceal, DEFAULT_RUN_TIME, Motion, Op, Reveal, Step};
