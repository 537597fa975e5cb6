// Easing curves that shape how a stamp fades over its lifetime.
// The engine feeds them `1 - age_ratio`, so 1.0 = fresh point, 0.0 = about to vanish.

use serde::{Deserialize, Serialize};

/// A monotonic curve mapping [0,1] -> [0,1].
pub trait Easing {
    fn apply(&self, x: f32) -> f32;
}

/// Named curves plus an escape hatch for host-provided functions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// `sqrt(1 - (x-1)^2)`: bright for most of the life, drops off at the end.
    #[default]
    QuarterCircleOut,
    QuadOut,
    CubicOut,
    SmoothStep,
    /// Not representable in a config file.
    #[serde(skip)]
    Custom(fn(f32) -> f32),
}

impl Easing for Ease {
    #[inline]
    fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Ease::Linear => x,
            Ease::QuarterCircleOut => (1.0 - (x - 1.0) * (x - 1.0)).max(0.0).sqrt(),
            Ease::QuadOut => 1.0 - (1.0 - x) * (1.0 - x),
            Ease::CubicOut => 1.0 - (1.0 - x).powi(3),
            Ease::SmoothStep => x * x * (3.0 - 2.0 * x),
            Ease::Custom(f) => f(x),
        }
    }
}

impl<F> Easing for F
where
    F: Fn(f32) -> f32,
{
    fn apply(&self, x: f32) -> f32 {
        self(x)
    }
}
