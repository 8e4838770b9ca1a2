//! The daily draw: generator and gate combined.
//!
//! This is the surface a presentation layer consumes. It owns the single
//! canonical generator/gate pair; the gate is re-checked inside [`draw`]
//! so a caller that skipped its own availability check still cannot draw
//! twice on one day.
//!
//! [`draw`]: DailyFortune::draw

use rand::rngs::StdRng;

use crate::gate::DrawGate;
use crate::generator::{FortuneGenerator, Reading};
use crate::store::DrawStore;

/// One gate-checked fortune draw per calendar day.
#[derive(Debug)]
pub struct DailyFortune<S: DrawStore> {
    generator: FortuneGenerator,
    gate: DrawGate<S>,
}

impl<S: DrawStore> DailyFortune<S> {
    /// Combine a generator with a gate over the given store.
    pub fn new(generator: FortuneGenerator, store: S) -> Self {
        Self {
            generator,
            gate: DrawGate::new(store),
        }
    }

    /// Whether a draw is available on `today`.
    pub fn can_draw(&self, today: &str) -> bool {
        self.gate.can_draw(today)
    }

    /// The recorded last-draw date, if any.
    pub fn last_draw_date(&self) -> Option<String> {
        self.gate.last_draw_date()
    }

    /// Draw today's reading.
    ///
    /// Returns `None` without side effects when a draw was already
    /// recorded for `today`; otherwise generates the reading, records the
    /// draw, and returns it.
    pub fn draw(&mut self, today: &str, rng: &mut StdRng) -> Option<Reading> {
        if !self.gate.can_draw(today) {
            return None;
        }
        let reading = self.generator.generate(rng);
        self.gate.record_draw(today);
        Some(reading)
    }
}
