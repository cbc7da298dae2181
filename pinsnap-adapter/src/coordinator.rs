use alloc::string::String;
use alloc::vec::Vec;

use pinsnap::{CoordinatorState, PendingRecompute, RegionKey, SnapRule, SnapSnapshot, Trigger};

use crate::{AnimationRegistry, CoordinatorOptions, DebounceTimer};

/// What a call to [`SnapCoordinator::recompute`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recompute {
    /// A new rule with `targets` targets is active.
    Installed { trigger: Trigger, targets: usize },
    /// No pinned regions or no scroll extent; the previous state was left untouched.
    Aborted,
    /// The current route does not carry pinned sections.
    Skipped,
}

/// Owns the single active [`SnapRule`] and decides when to rebuild it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_route_enter` / `on_route_exit` from the router
/// - `on_resize` / `request_refresh` when layout changes
/// - `tick(now_ms, registry)` each frame/timer tick, which runs a due debounced recompute
///
/// The scroll driver reads the rule through [`SnapCoordinator::snap_rule`] on every settle and
/// never keeps it across ticks.
#[derive(Clone, Debug)]
pub struct SnapCoordinator {
    options: CoordinatorOptions,
    route: Option<String>,
    rule: Option<SnapRule>,
    timer: DebounceTimer<Trigger>,
}

impl Default for SnapCoordinator {
    fn default() -> Self {
        Self::new(CoordinatorOptions::default())
    }
}

impl SnapCoordinator {
    pub fn new(options: CoordinatorOptions) -> Self {
        Self {
            options,
            route: None,
            rule: None,
            timer: DebounceTimer::new(),
        }
    }

    pub fn options(&self) -> &CoordinatorOptions {
        &self.options
    }

    /// Replaces the options. Takes effect on the next install; the active rule is kept.
    pub fn set_options(&mut self, options: CoordinatorOptions) {
        self.options = options;
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn state(&self) -> CoordinatorState {
        if self.rule.is_some() {
            CoordinatorState::Active
        } else {
            CoordinatorState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.rule.is_some()
    }

    /// The rule currently in force, if any.
    pub fn snap_rule(&self) -> Option<&SnapRule> {
        self.rule.as_ref()
    }

    /// Applies the active rule to `value`; identity while idle.
    pub fn snap_to(&self, value: f64) -> f64 {
        self.rule.as_ref().map_or(value, |rule| rule.snap_to(value))
    }

    pub fn pending(&self) -> Option<PendingRecompute> {
        self.timer.pending().map(|s| PendingRecompute {
            trigger: s.payload,
            due_ms: s.due_ms,
        })
    }

    pub fn snapshot(&self) -> SnapSnapshot {
        SnapSnapshot {
            state: self.state(),
            targets: self
                .rule
                .as_ref()
                .map_or_else(Vec::new, |rule| rule.targets().to_vec()),
            pending: self.pending(),
        }
    }

    fn route_snaps(&self) -> bool {
        self.route
            .as_deref()
            .is_some_and(|route| self.options.snaps_on(route))
    }

    /// Called when a route has mounted.
    ///
    /// Retires the active rule immediately and, on routes with pinned sections, schedules a
    /// `RouteEnter` recompute after `settle_delay_ms`. A recompute that is still pending from an
    /// earlier navigation is discarded.
    pub fn on_route_enter(&mut self, route: &str, now_ms: u64) {
        self.teardown();
        self.route = Some(String::from(route));
        if self.route_snaps() {
            self.timer
                .schedule(Trigger::RouteEnter, now_ms, self.options.settle_delay_ms);
            sdebug!(route, now_ms, "SnapCoordinator::on_route_enter: recompute scheduled");
        } else {
            self.timer.cancel();
            sdebug!(route, "SnapCoordinator::on_route_enter: route does not snap");
        }
    }

    /// Called when the current route starts unmounting. Retires the rule and drops any pending
    /// recompute.
    pub fn on_route_exit(&mut self) {
        self.teardown();
        self.timer.cancel();
        self.route = None;
    }

    /// Schedules a debounced `ManualRefresh`, e.g. after the viewport was resized.
    ///
    /// A pending `RouteEnter` keeps its trigger and is never brought forward: the later of the
    /// two deadlines wins.
    pub fn on_resize(&mut self, now_ms: u64) {
        if !self.route_snaps() {
            return;
        }
        let due_ms = now_ms.saturating_add(self.options.refresh_delay_ms);
        let route_enter_due = self
            .timer
            .pending()
            .filter(|s| s.payload == Trigger::RouteEnter)
            .map(|s| s.due_ms);
        match route_enter_due {
            Some(prev) => self.timer.schedule_at(Trigger::RouteEnter, due_ms.max(prev)),
            None => self.timer.schedule_at(Trigger::ManualRefresh, due_ms),
        };
    }

    /// Recomputes immediately with `Trigger::ManualRefresh`.
    pub fn request_refresh<K, R>(&mut self, registry: &R) -> Result<Recompute, R::Error>
    where
        K: RegionKey,
        R: AnimationRegistry<K>,
    {
        self.recompute(Trigger::ManualRefresh, registry)
    }

    /// Runs the pending recompute if it is due.
    pub fn tick<K, R>(&mut self, now_ms: u64, registry: &R) -> Result<Option<Recompute>, R::Error>
    where
        K: RegionKey,
        R: AnimationRegistry<K>,
    {
        match self.timer.poll(now_ms) {
            Some(trigger) => self.recompute(trigger, registry).map(Some),
            None => Ok(None),
        }
    }

    /// Rebuilds the snap rule from the registry's current pinned regions.
    ///
    /// With no pinned regions or no scroll extent this is a no-op: an active rule stays active.
    /// Otherwise the new rule replaces the active one in a single step, so there is never more
    /// than one rule and never a gap between them.
    pub fn recompute<K, R>(&mut self, trigger: Trigger, registry: &R) -> Result<Recompute, R::Error>
    where
        K: RegionKey,
        R: AnimationRegistry<K>,
    {
        if !self.route_snaps() {
            sdebug!(?trigger, route = ?self.route, "SnapCoordinator::recompute: skipped");
            return Ok(Recompute::Skipped);
        }

        let regions = registry.pinned_regions()?;
        let max_scroll = registry.max_scroll_extent()?;
        let Some(rule) = SnapRule::from_regions(&regions, max_scroll, self.options.snap) else {
            sdebug!(?trigger, max_scroll, "SnapCoordinator::recompute: aborted");
            return Ok(Recompute::Aborted);
        };

        let targets = rule.targets().len();
        if self.rule.replace(rule).is_some() {
            sdebug!(?trigger, targets, "SnapCoordinator::recompute: rule replaced");
        } else {
            sdebug!(?trigger, targets, "SnapCoordinator::recompute: rule installed");
        }
        Ok(Recompute::Installed { trigger, targets })
    }

    /// Uninstalls the active rule. Safe to call when idle.
    ///
    /// Returns `true` when a rule was removed.
    pub fn teardown(&mut self) -> bool {
        let removed = self.rule.take().is_some();
        if removed {
            sdebug!("SnapCoordinator::teardown");
        }
        removed
    }
}
