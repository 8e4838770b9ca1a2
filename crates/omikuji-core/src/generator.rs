//! Fortune generation: scores, matching advice, and an encouragement.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::advice::Advice;
use crate::catalog::AdviceCatalog;
use crate::category::Category;
use crate::fortune::Fortune;

/// One draw's fortune and advice, produced together in a single
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The drawn scores.
    pub fortune: Fortune,
    /// The advice matching those scores.
    pub advice: Advice,
}

/// Draws fortunes and selects the matching advice from a catalog.
///
/// Pure: no side effects, no error conditions, and fully deterministic for
/// a given RNG state.
#[derive(Debug, Clone, Default)]
pub struct FortuneGenerator {
    catalog: AdviceCatalog,
}

impl FortuneGenerator {
    /// Generator over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator over a custom catalog.
    pub fn with_catalog(catalog: AdviceCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this generator selects from.
    pub fn catalog(&self) -> &AdviceCatalog {
        &self.catalog
    }

    /// Draw a fresh reading: four uniform scores, their catalog texts, and
    /// one random encouragement line.
    pub fn generate(&self, rng: &mut StdRng) -> Reading {
        let fortune = Fortune::draw(rng);
        let advice = Advice {
            overall: self.text(Category::Overall, &fortune),
            work: self.text(Category::Work, &fortune),
            love: self.text(Category::Love, &fortune),
            money: self.text(Category::Money, &fortune),
            encouragement: self.catalog.random_encouragement(rng).to_string(),
        };
        Reading { fortune, advice }
    }

    fn text(&self, category: Category, fortune: &Fortune) -> String {
        self.catalog
            .advice(category, fortune.get(category))
            .to_string()
    }
}
