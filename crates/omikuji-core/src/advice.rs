//! Advice bundles paired with a drawn fortune.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The advice texts attached to one fortune, plus one encouragement line.
///
/// Each category text is the catalog entry for that category's drawn
/// score; the encouragement is drawn independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Advice for the overall outlook.
    pub overall: String,
    /// Advice for work.
    pub work: String,
    /// Advice for love.
    pub love: String,
    /// Advice for money.
    pub money: String,
    /// An encouragement line, independent of the scores.
    pub encouragement: String,
}

impl Advice {
    /// The advice text for a category.
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Overall => &self.overall,
            Category::Work => &self.work,
            Category::Love => &self.love,
            Category::Money => &self.money,
        }
    }
}
