use crate::Easing;

/// Default tolerance band around each target, in normalized units.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Normalized travel at which a settle correction uses its full `max_ms` duration.
pub const FULL_SETTLE_DISTANCE: f64 = 0.1;

/// Bounds for the duration of a settle correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleDuration {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl SettleDuration {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Picks a duration for a correction travelling `distance` normalized units.
    ///
    /// Interpolates linearly from `min_ms` to `max_ms`, saturating at
    /// [`FULL_SETTLE_DISTANCE`]. Swapped bounds are reordered.
    pub fn for_distance(&self, distance: f64) -> u64 {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        let t = distance / FULL_SETTLE_DISTANCE;
        if t.is_nan() || t <= 0.0 {
            return lo;
        }
        let t = t.min(1.0);
        lo + ((hi - lo) as f64 * t) as u64
    }
}

impl Default for SettleDuration {
    fn default() -> Self {
        Self::new(200, 500)
    }
}

/// Configuration for a [`crate::SnapRule`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapOptions {
    /// Margin around each target's `[start, end]` band within which snapping applies.
    pub tolerance: f64,
    /// Duration bounds for the settle correction.
    pub settle: SettleDuration,
    /// Easing curve of the settle correction.
    pub easing: Easing,
    /// Delay between the settle being detected and the correction starting.
    pub delay_ms: u64,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            settle: SettleDuration::default(),
            easing: Easing::EaseOutCubic,
            delay_ms: 0,
        }
    }
}

impl SnapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance band. Negative or non-finite values fall back to zero.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn with_settle(mut self, settle: SettleDuration) -> Self {
        self.settle = settle;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}
