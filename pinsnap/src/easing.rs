/// Easing curves shared by snap corrections and adapter-driven smooth scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Cubic ease-out (aka "power2.out").
    #[default]
    EaseOutCubic,
    /// Exponential ease-out: `min(1, 1.001 - 2^(-10t))`.
    ExpoOut,
}

impl Easing {
    /// Samples the curve at `t`, which is clamped to `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::ExpoOut => (1.001 - exp2_neg(10.0 * t)).min(1.0),
        }
    }
}

/// `2^(-x)` for `x >= 0`.
#[cfg(feature = "std")]
fn exp2_neg(x: f32) -> f32 {
    2f32.powf(-x)
}

/// `2^(-x)` for `x >= 0`, split into an exact power of two and a cubic fit of the fraction
/// (relative error below 1e-4).
#[cfg(not(feature = "std"))]
fn exp2_neg(x: f32) -> f32 {
    let whole = x as u32;
    let frac = x - whole as f32;
    let pow_frac = 1.0 + frac * (0.695_7 + frac * (0.226_2 + frac * 0.078_1));
    let mut v = 1.0 / pow_frac;
    for _ in 0..whole.min(149) {
        v *= 0.5;
    }
    v
}
