use pinsnap::SnapRule;

use crate::{ScrollerOptions, Tween};

/// What is currently moving the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    #[default]
    Idle,
    /// Smoothing toward an input (wheel/touch/programmatic) target.
    Input,
    /// Settling onto a snap target.
    Snap,
}

/// A framework-neutral smooth-scroll driver.
///
/// Raw input deltas move a target offset; a tween moves the rendered offset toward it. Once input
/// has been quiet for `settle_delay_ms` and the tween has finished, the driver evaluates the snap
/// rule it is handed exactly once and, if the resting position moves, tweens onto the snapped
/// position.
///
/// Adapters drive it by calling:
/// - `on_wheel` / `on_touch` when input events occur
/// - `tick(now_ms, rule)` each frame, with the rule that is active *now*
///
/// and write the offset returned by `tick` to the real scroll container.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    options: ScrollerOptions,
    offset: u64,
    target: u64,
    max_scroll: u64,
    tween: Option<Tween>,
    motion: Motion,
    last_input_ms: Option<u64>,
    settled: bool,
}

impl SmoothScroller {
    pub fn new(options: ScrollerOptions, max_scroll: u64) -> Self {
        Self {
            options,
            offset: 0,
            target: 0,
            max_scroll,
            tween: None,
            motion: Motion::Idle,
            last_input_ms: None,
            settled: true,
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    /// The rendered scroll offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Where the current motion ends.
    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn max_scroll(&self) -> u64 {
        self.max_scroll
    }

    /// The rendered offset as a fraction of `max_scroll`.
    pub fn progress(&self) -> f64 {
        if self.max_scroll == 0 {
            return 0.0;
        }
        self.offset as f64 / self.max_scroll as f64
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// `true` until the current settle has been evaluated and any correction has finished.
    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some() || !self.settled
    }

    pub fn set_max_scroll(&mut self, max_scroll: u64) {
        self.max_scroll = max_scroll;
        self.offset = self.offset.min(max_scroll);
        self.target = self.target.min(max_scroll);
        if let Some(tween) = &mut self.tween {
            tween.to = tween.to.min(max_scroll);
        }
    }

    pub fn on_wheel(&mut self, delta: i64, now_ms: u64) {
        self.apply_input(delta, self.options.wheel_multiplier, now_ms);
    }

    pub fn on_touch(&mut self, delta: i64, now_ms: u64) {
        self.apply_input(delta, self.options.touch_multiplier, now_ms);
    }

    fn apply_input(&mut self, delta: i64, multiplier: f64, now_ms: u64) {
        // Input interrupts a snap correction from where it currently is.
        let base = if self.motion == Motion::Snap {
            self.position_at(now_ms)
        } else {
            self.target
        };
        let to = (base as f64 + delta as f64 * multiplier).clamp(0.0, self.max_scroll as f64);
        self.mark_input(now_ms);
        self.start_tween(
            (to + 0.5) as u64,
            now_ms,
            self.options.duration_ms,
            self.options.easing,
            Motion::Input,
        );
    }

    /// Scrolls to `offset` (clamped).
    ///
    /// `immediate` jumps without smoothing and without a settle snap, e.g. to reset the position
    /// on navigation. Otherwise this behaves like user input.
    pub fn scroll_to(&mut self, offset: u64, immediate: bool, now_ms: u64) {
        let to = offset.min(self.max_scroll);
        if immediate {
            self.tween = None;
            self.offset = to;
            self.target = to;
            self.motion = Motion::Idle;
            self.last_input_ms = None;
            self.settled = true;
            return;
        }
        self.mark_input(now_ms);
        self.start_tween(
            to,
            now_ms,
            self.options.duration_ms,
            self.options.easing,
            Motion::Input,
        );
    }

    /// Stops at the current rendered offset.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.target = self.offset;
        self.motion = Motion::Idle;
    }

    fn mark_input(&mut self, now_ms: u64) {
        self.last_input_ms = Some(now_ms);
        self.settled = false;
    }

    /// Where the running tween is at `now_ms`, or the rendered offset when idle.
    fn position_at(&self, now_ms: u64) -> u64 {
        self.tween
            .map_or(self.offset, |tween| tween.sample(now_ms).min(self.max_scroll))
    }

    fn start_tween(
        &mut self,
        to: u64,
        start_ms: u64,
        duration_ms: u64,
        easing: pinsnap::Easing,
        motion: Motion,
    ) {
        self.target = to;
        match &mut self.tween {
            // A running tween continues from its live position instead of the last rendered one.
            Some(tween) => {
                tween.retarget(start_ms, to, duration_ms);
                tween.easing = easing;
            }
            None => self.tween = Some(Tween::new(self.offset, to, start_ms, duration_ms, easing)),
        }
        self.motion = motion;
    }

    /// Advances the driver.
    ///
    /// `rule` must be the rule that is active at `now_ms`; it is only consulted when a settle is
    /// evaluated. Returns the new offset when it changed.
    pub fn tick(&mut self, now_ms: u64, rule: Option<&SnapRule>) -> Option<u64> {
        let before = self.offset;
        if let Some(tween) = self.tween {
            self.offset = tween.sample(now_ms).min(self.max_scroll);
            if tween.is_done(now_ms) {
                self.tween = None;
                self.motion = Motion::Idle;
            }
        }
        if self.tween.is_none() {
            self.settle(now_ms, rule);
        }
        (self.offset != before).then_some(self.offset)
    }

    fn settle(&mut self, now_ms: u64, rule: Option<&SnapRule>) {
        if self.settled {
            return;
        }
        let Some(last) = self.last_input_ms else {
            return;
        };
        if now_ms.saturating_sub(last) < self.options.settle_delay_ms {
            return;
        }
        self.settled = true;

        let Some(rule) = rule else {
            return;
        };
        if self.max_scroll == 0 {
            return;
        }
        let max = self.max_scroll as f64;
        let value = self.offset as f64 / max;
        let snapped = rule.snap_to(value);
        let to = (snapped.clamp(0.0, 1.0) * max + 0.5) as u64;
        if to == self.offset {
            return;
        }

        let duration_ms = rule.settle_duration_ms(value, snapped);
        strace!(
            from = self.offset,
            to,
            duration_ms,
            "SmoothScroller::settle: snapping"
        );
        self.start_tween(
            to,
            now_ms.saturating_add(rule.delay_ms()),
            duration_ms,
            rule.easing(),
            Motion::Snap,
        );
    }
}
