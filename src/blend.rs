// Compositing modes used when a stamp is drawn over the trail buffer.
// All math is per channel in [0,1]; `cs` is the stamp color, `alpha` its coverage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// 1-(1-src)(1-dst): brightens, never exceeds full intensity.
    #[default]
    Screen,
    /// Plain alpha over.
    SourceOver,
    /// Keeps the brighter of the two.
    Lighten,
    /// Darkens; white stamps leave the backdrop unchanged.
    Multiply,
    /// Additive with saturation.
    Lighter,
}

impl BlendMode {
    /// Blend one channel. `cb` = backdrop, `cs` = source color, `alpha` = source coverage.
    #[inline]
    pub fn channel(self, cb: f32, cs: f32, alpha: f32) -> f32 {
        let mixed = match self {
            BlendMode::Lighter => return (cb + alpha * cs).min(1.0),
            BlendMode::Screen => cb + cs - cb * cs,
            BlendMode::SourceOver => cs,
            BlendMode::Lighten => cb.max(cs),
            BlendMode::Multiply => cb * cs,
        };
        alpha * mixed + (1.0 - alpha) * cb
    }
}
