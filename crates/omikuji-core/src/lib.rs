//! Core engine for the daily omikuji.
//!
//! Draws a four-category fortune (overall, work, love, money) with
//! score-matched advice texts and a random encouragement line, and gates
//! draws to at most one per local calendar day via a durable store.
//! Presentation is left entirely to the caller: this crate produces scores,
//! strings, and a yes/no answer to "can I draw today?".

pub mod advice;
pub mod catalog;
pub mod category;
pub mod daily;
pub mod day;
pub mod error;
pub mod fortune;
pub mod gate;
pub mod generator;
pub mod score;
pub mod store;

pub use advice::Advice;
pub use catalog::AdviceCatalog;
pub use category::Category;
pub use daily::DailyFortune;
pub use error::{CatalogError, StoreError};
pub use fortune::Fortune;
pub use gate::DrawGate;
pub use generator::{FortuneGenerator, Reading};
pub use score::Score;
pub use store::{DrawStore, FileStore, MemoryStore};
