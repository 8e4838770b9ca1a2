//! The once-per-day draw gate.
//!
//! Tracks the calendar day of the last successful draw in durable storage
//! and permits a new draw only on a different day. Storage faults fail
//! open: an unreadable record reads as "never drawn" and a failed write is
//! dropped. The worst outcome of a fault is one extra draw, never a user
//! locked out.

use crate::store::DrawStore;

/// Gate allowing at most one successful draw per calendar day.
///
/// Two states, evaluated lazily on each query: not drawn today (a draw is
/// permitted) and drawn today (blocked until the recorded day no longer
/// matches). No timer drives the transition.
#[derive(Debug)]
pub struct DrawGate<S: DrawStore> {
    store: S,
}

impl<S: DrawStore> DrawGate<S> {
    /// A gate backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The recorded last-draw date, if any. Unreadable storage reads as
    /// "never drawn".
    pub fn last_draw_date(&self) -> Option<String> {
        self.store.load().unwrap_or_default()
    }

    /// Whether a draw is permitted on `today`: true iff no draw was ever
    /// recorded or the recorded day differs from `today`.
    pub fn can_draw(&self, today: &str) -> bool {
        match self.last_draw_date() {
            Some(last) => last != today,
            None => true,
        }
    }

    /// Record a successful draw on `today`, overwriting any prior record.
    /// A write failure is dropped silently; the gate simply stays open.
    pub fn record_draw(&mut self, today: &str) {
        let _ = self.store.save(today);
    }
}
