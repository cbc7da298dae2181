/// A one-shot timer that holds at most one pending payload.
///
/// Scheduling replaces (cancels) whatever was pending. The timer does not own a clock: adapters
/// call [`DebounceTimer::poll`] from their frame loop or timer callback with the current time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebounceTimer<T> {
    pending: Option<Scheduled<T>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheduled<T> {
    pub payload: T,
    pub due_ms: u64,
}

impl<T> Default for DebounceTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DebounceTimer<T> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `payload` to fire `delay_ms` after `now_ms`.
    ///
    /// Returns the payload that was cancelled, if any.
    pub fn schedule(&mut self, payload: T, now_ms: u64, delay_ms: u64) -> Option<T> {
        let due_ms = now_ms.saturating_add(delay_ms);
        self.schedule_at(payload, due_ms)
    }

    /// Schedules `payload` to fire at `due_ms`, replacing any pending payload.
    pub fn schedule_at(&mut self, payload: T, due_ms: u64) -> Option<T> {
        strace!(due_ms, "DebounceTimer::schedule_at");
        self.pending
            .replace(Scheduled { payload, due_ms })
            .map(|prev| prev.payload)
    }

    /// Discards the pending payload, if any.
    pub fn cancel(&mut self) -> Option<T> {
        let cancelled = self.pending.take().map(|s| s.payload);
        if cancelled.is_some() {
            strace!("DebounceTimer::cancel");
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&Scheduled<T>> {
        self.pending.as_ref()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|s| s.due_ms)
    }

    /// Time left until the pending payload fires (`Some(0)` when overdue).
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.due_ms().map(|due| due.saturating_sub(now_ms))
    }

    /// Fires the pending payload if it is due. A payload fires at most once.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(s) if now_ms >= s.due_ms => {
                strace!(now_ms, due_ms = s.due_ms, "DebounceTimer::poll: fired");
                self.pending.take().map(|s| s.payload)
            }
            _ => None,
        }
    }
}
