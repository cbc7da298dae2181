use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::convert::Infallible;
use core::fmt;

use pinsnap::{PinnedRegion, RegionId};

/// The source of pinned regions a coordinator reads when it recomputes.
///
/// Implementations are read-only from the coordinator's point of view. Query failures are
/// returned to the caller of [`crate::SnapCoordinator::recompute`] unchanged.
pub trait AnimationRegistry<K> {
    type Error;

    /// All pinned regions currently registered, in any order.
    fn pinned_regions(&self) -> Result<Vec<PinnedRegion<K>>, Self::Error>;

    /// The document's maximum scroll offset. Zero means unknown (or nothing to scroll).
    fn max_scroll_extent(&self) -> Result<u64, Self::Error>;
}

/// Identifies the [`AnimationContext`] that registered an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextId(u64);

struct Scrub {
    context: ContextId,
    start: u64,
    end: u64,
    last: Option<f32>,
    on_progress: Box<dyn FnMut(f32)>,
}

impl Scrub {
    fn progress_at(&self, offset: u64) -> f32 {
        if self.end <= self.start {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        let t = offset.saturating_sub(self.start) as f64 / (self.end - self.start) as f64;
        t.clamp(0.0, 1.0) as f32
    }
}

struct Inner<K> {
    next_context: u64,
    max_scroll: u64,
    pins: Vec<(ContextId, PinnedRegion<K>)>,
    scrubs: Vec<Scrub>,
    // Nesting depth of `update` calls; callbacks may call `update` again.
    updating: usize,
    // Contexts released while some `update` holds scrubs outside `scrubs`.
    released: Vec<ContextId>,
}

/// An in-memory, single-threaded animation registry.
///
/// Cloning is cheap and yields another handle to the same registry: sections keep their
/// [`AnimationContext`] while the coordinator reads through its own handle.
pub struct Registry<K = RegionId> {
    inner: Rc<RefCell<Inner<K>>>,
}

impl<K> Clone for Registry<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Registry")
            .field("max_scroll", &inner.max_scroll)
            .field("pins", &inner.pins.len())
            .field("scrubs", &inner.scrubs.len())
            .finish_non_exhaustive()
    }
}

impl<K> Registry<K> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_context: 0,
                max_scroll: 0,
                pins: Vec::new(),
                scrubs: Vec::new(),
                updating: 0,
                released: Vec::new(),
            })),
        }
    }

    /// Opens a scope for a mounting section. Everything registered through the returned
    /// context is removed when it is dropped.
    pub fn context(&self) -> AnimationContext<K> {
        let mut inner = self.inner.borrow_mut();
        let id = ContextId(inner.next_context);
        inner.next_context += 1;
        AnimationContext {
            id,
            registry: self.clone(),
        }
    }

    pub fn max_scroll(&self) -> u64 {
        self.inner.borrow().max_scroll
    }

    /// Records the document's maximum scroll offset (e.g. after layout or resize).
    pub fn set_max_scroll(&self, max_scroll: u64) {
        self.inner.borrow_mut().max_scroll = max_scroll;
    }

    pub fn pin_count(&self) -> usize {
        self.inner.borrow().pins.len()
    }

    pub fn scrub_count(&self) -> usize {
        self.inner.borrow().scrubs.len()
    }

    /// Re-evaluates every scroll-linked animation at `offset`.
    ///
    /// Callbacks only run when their progress changed since the last update. Animations registered
    /// from inside a callback are first evaluated on the next update; contexts dropped from inside
    /// a callback, including nested `update` calls, are fully released when this returns.
    pub fn update(&self, offset: u64) {
        let mut scrubs = {
            let mut inner = self.inner.borrow_mut();
            inner.updating += 1;
            core::mem::take(&mut inner.scrubs)
        };
        for scrub in &mut scrubs {
            if self.inner.borrow().released.contains(&scrub.context) {
                continue;
            }
            let progress = scrub.progress_at(offset);
            if scrub.last != Some(progress) {
                scrub.last = Some(progress);
                (scrub.on_progress)(progress);
            }
        }
        let mut inner = self.inner.borrow_mut();
        inner.updating -= 1;
        if !inner.released.is_empty() {
            let released = &inner.released;
            scrubs.retain(|s| !released.contains(&s.context));
        }
        if inner.updating == 0 {
            inner.released.clear();
        }
        scrubs.append(&mut inner.scrubs);
        inner.scrubs = scrubs;
    }

    fn release(&self, context: ContextId) {
        let mut inner = self.inner.borrow_mut();
        inner.pins.retain(|(owner, _)| *owner != context);
        inner.scrubs.retain(|s| s.context != context);
        if inner.updating > 0 {
            inner.released.push(context);
        }
        sdebug!(
            context = context.0,
            remaining_pins = inner.pins.len(),
            remaining_scrubs = inner.scrubs.len(),
            "Registry::release"
        );
    }
}

impl<K: Clone> AnimationRegistry<K> for Registry<K> {
    type Error = Infallible;

    fn pinned_regions(&self) -> Result<Vec<PinnedRegion<K>>, Infallible> {
        Ok(self
            .inner
            .borrow()
            .pins
            .iter()
            .map(|(_, region)| region.clone())
            .collect())
    }

    fn max_scroll_extent(&self) -> Result<u64, Infallible> {
        Ok(self.max_scroll())
    }
}

/// A section's scope in the registry.
///
/// Pins and scroll-linked animations registered through a context belong to it and are removed
/// together when the context is dropped or [`reverted`](AnimationContext::revert), on every exit
/// path.
pub struct AnimationContext<K = RegionId> {
    id: ContextId,
    registry: Registry<K>,
}

impl<K> fmt::Debug for AnimationContext<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationContext")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<K> AnimationContext<K> {
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Registers a pinned region owned by this context.
    pub fn pin(&self, region: PinnedRegion<K>) {
        self.registry
            .inner
            .borrow_mut()
            .pins
            .push((self.id, region));
    }

    /// Registers a scroll-linked animation over `[start, end]`.
    ///
    /// `on_progress` receives the animation's progress in `[0, 1]` whenever the scroll position
    /// moves it.
    pub fn scrub(&self, start: u64, end: u64, on_progress: impl FnMut(f32) + 'static) {
        self.registry.inner.borrow_mut().scrubs.push(Scrub {
            context: self.id,
            start,
            end: end.max(start),
            last: None,
            on_progress: Box::new(on_progress),
        });
    }

    /// Removes everything this context registered.
    pub fn revert(self) {
        drop(self);
    }
}

impl<K> Drop for AnimationContext<K> {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}
