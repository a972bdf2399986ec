use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Color, Fps, Point, Rect, Size},
    foundation::error::{AlephError, AlephResult},
};

/// Visible scene area in scene units, centered on the origin (y-up).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        // 16:9 at a height of eight units.
        Self {
            width: 8.0 * 16.0 / 9.0,
            height: 8.0,
        }
    }
}

/// Settings shared by every scene build and by frame sampling.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub frame: FrameConfig,
    pub fps: Fps,
    /// Seed for every pseudo-random choice a scene makes.
    pub seed: u64,
    pub background: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            frame: FrameConfig::default(),
            fps: Fps::default(),
            seed: 0,
            background: Color::BLACK,
        }
    }
}

impl SceneConfig {
    /// Frame rectangle centered on the origin.
    pub fn frame_rect(&self) -> Rect {
        Rect::from_center_size(
            Point::ORIGIN,
            Size::new(self.frame.width, self.frame.height),
        )
    }

    pub fn validate(&self) -> AlephResult<()> {
        let FrameConfig { width, height } = self.frame;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(AlephError::config(format!(
                "frame size must be finite and > 0, got {width}x{height}"
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }

    pub fn from_json(s: &str) -> AlephResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> AlephResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json(&s)
    }
}
