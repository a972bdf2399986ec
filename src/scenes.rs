//! Catalog of built-in demo scenes.
//!
//! Each scene is a plain function from [`SceneConfig`] to [`Timeline`]. They exercise the
//! builder, layout helpers and continuous motions end to end, and give the CLI something to
//! select by name.

mod diagonal;
mod galileo;
mod philoponus;
mod zeno;

use crate::{config::SceneConfig, foundation::error::AlephResult, timeline::director::Timeline};

/// A named scene in the catalog.
#[derive(Clone, Copy, Debug)]
pub struct SceneInfo {
    /// Selector used on the command line.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    builder: fn(&SceneConfig) -> AlephResult<Timeline>,
}

impl SceneInfo {
    /// Validate `cfg` and build the scene's timeline.
    #[tracing::instrument(skip(self, cfg), fields(scene = self.name))]
    pub fn build(&self, cfg: &SceneConfig) -> AlephResult<Timeline> {
        cfg.validate()?;
        let timeline = (self.builder)(cfg)?;
        tracing::debug!(
            steps = timeline.len(),
            duration_secs = timeline.duration_secs(),
            "scene built"
        );
        Ok(timeline)
    }
}

static CATALOG: [SceneInfo; 4] = [
    SceneInfo {
        name: "zeno",
        title: "The Dichotomy",
        builder: zeno::build,
    },
    SceneInfo {
        name: "diagonal",
        title: "Cantor's Diagonal Argument",
        builder: diagonal::build,
    },
    SceneInfo {
        name: "philoponus",
        title: "Philoponus' Orbit Argument",
        builder: philoponus::build,
    },
    SceneInfo {
        name: "galileo",
        title: "Galileo's Squares",
        builder: galileo::build,
    },
];

/// Every built-in scene, in listing order.
pub fn catalog() -> &'static [SceneInfo] {
    &CATALOG
}

pub fn find_scene(name: &str) -> Option<&'static SceneInfo> {
    CATALOG.iter().find(|s| s.name == name)
}
