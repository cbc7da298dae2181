use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use pinsnap::{Easing, SnapOptions};

/// Configuration for [`crate::SnapCoordinator`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoordinatorOptions {
    /// Options of every rule the coordinator installs.
    pub snap: SnapOptions,
    /// Delay between a route mounting and the first recompute, so every section on the route has
    /// registered its pins. Tunable; there is no stronger contract than "long enough".
    pub settle_delay_ms: u64,
    /// Debounce for resize and refresh requests.
    pub refresh_delay_ms: u64,
    /// Routes whose sections register pinned regions. Other routes never install a rule.
    pub snap_routes: Vec<String>,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            snap: SnapOptions::default(),
            settle_delay_ms: 900,
            refresh_delay_ms: 150,
            snap_routes: vec![String::from("/")],
        }
    }
}

impl CoordinatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snap(mut self, snap: SnapOptions) -> Self {
        self.snap = snap;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_refresh_delay_ms(mut self, delay_ms: u64) -> Self {
        self.refresh_delay_ms = delay_ms;
        self
    }

    pub fn with_snap_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.snap_routes = routes.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` when rules may be installed while `route` is mounted.
    pub fn snaps_on(&self, route: &str) -> bool {
        self.snap_routes.iter().any(|r| r == route)
    }
}

/// Configuration for [`crate::SmoothScroller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollerOptions {
    /// Duration of the smoothing tween started by each input event.
    pub duration_ms: u64,
    pub easing: Easing,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    /// Quiet time after the last input before scrolling counts as settled.
    pub settle_delay_ms: u64,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1400,
            easing: Easing::ExpoOut,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            settle_delay_ms: 150,
        }
    }
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_wheel_multiplier(mut self, multiplier: f64) -> Self {
        self.wheel_multiplier = multiplier;
        self
    }

    pub fn with_touch_multiplier(mut self, multiplier: f64) -> Self {
        self.touch_multiplier = multiplier;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }
}
