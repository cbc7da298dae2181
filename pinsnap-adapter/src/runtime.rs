use pinsnap::{RegionId, RegionKey};

use crate::{
    CoordinatorOptions, Recompute, Registry, ScrollerOptions, SmoothScroller, SnapCoordinator,
};

/// What happened during one [`ScrollRuntime::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Set when a debounced recompute ran this frame.
    pub recompute: Option<Recompute>,
    /// Set when the rendered scroll offset moved this frame.
    pub offset: Option<u64>,
}

/// Wires one scroll driver, one snap coordinator and the animation registry together.
///
/// Construct it once at application start and hand it to whatever owns routing. The scroll
/// driver lives as long as the runtime: navigation resets it but never replaces it, and
/// [`ScrollRuntime::shutdown`] is the only way to dispose of it.
#[derive(Debug)]
pub struct ScrollRuntime<K = RegionId> {
    registry: Registry<K>,
    scroller: SmoothScroller,
    coordinator: SnapCoordinator,
}

impl<K: RegionKey + Clone> ScrollRuntime<K> {
    pub fn new(
        registry: Registry<K>,
        scroller: ScrollerOptions,
        coordinator: CoordinatorOptions,
    ) -> Self {
        let max_scroll = registry.max_scroll();
        Self {
            scroller: SmoothScroller::new(scroller, max_scroll),
            coordinator: SnapCoordinator::new(coordinator),
            registry,
        }
    }

    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    pub fn scroller(&self) -> &SmoothScroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut SmoothScroller {
        &mut self.scroller
    }

    pub fn coordinator(&self) -> &SnapCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut SnapCoordinator {
        &mut self.coordinator
    }

    /// Switches to `route`.
    ///
    /// The previous route's rule is retired before anything else happens, the scroll position is
    /// reset to the top, and then the new route's debounced recompute is scheduled. Sections of
    /// the previous route should have dropped their animation contexts before this call;
    /// sections of the new route register theirs before the settle delay elapses.
    pub fn navigate(&mut self, route: &str, now_ms: u64) {
        self.coordinator.on_route_exit();
        self.scroller.scroll_to(0, true, now_ms);
        self.registry.update(0);
        self.coordinator.on_route_enter(route, now_ms);
    }

    /// Records a new document extent (layout change or viewport resize).
    pub fn resize(&mut self, max_scroll: u64, now_ms: u64) {
        self.registry.set_max_scroll(max_scroll);
        self.scroller.set_max_scroll(max_scroll);
        self.registry.update(self.scroller.offset());
        self.coordinator.on_resize(now_ms);
    }

    pub fn on_wheel(&mut self, delta: i64, now_ms: u64) {
        self.scroller.on_wheel(delta, now_ms);
    }

    pub fn on_touch(&mut self, delta: i64, now_ms: u64) {
        self.scroller.on_touch(delta, now_ms);
    }

    /// Advances one frame: due recompute, then scroll driver, then scroll-linked animations.
    pub fn frame(&mut self, now_ms: u64) -> FrameReport {
        let recompute = match self.coordinator.tick(now_ms, &self.registry) {
            Ok(recompute) => recompute,
            Err(never) => match never {},
        };
        let offset = self.scroller.tick(now_ms, self.coordinator.snap_rule());
        if let Some(offset) = offset {
            self.registry.update(offset);
        }
        FrameReport { recompute, offset }
    }

    /// Retires the active rule and disposes of the scroll driver.
    ///
    /// Returns the registry handle so the host can inspect or reuse it.
    pub fn shutdown(mut self) -> Registry<K> {
        self.coordinator.on_route_exit();
        self.registry
    }
}
