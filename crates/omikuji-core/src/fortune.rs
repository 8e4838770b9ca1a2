//! The four-category fortune drawn once per day.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::score::Score;

/// One day's fortune: a score for each category.
///
/// Immutable once drawn; a new draw produces a new `Fortune`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    /// General outlook score.
    pub overall: Score,
    /// Work score.
    pub work: Score,
    /// Love score.
    pub love: Score,
    /// Money score.
    pub money: Score,
}

impl Fortune {
    /// Draw a fresh fortune, sampling each category independently.
    pub fn draw(rng: &mut StdRng) -> Self {
        Self {
            overall: Score::sample(rng),
            work: Score::sample(rng),
            love: Score::sample(rng),
            money: Score::sample(rng),
        }
    }

    /// The score for a category.
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Overall => self.overall,
            Category::Work => self.work,
            Category::Love => self.love,
            Category::Money => self.money,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn draw_produces_valid_scores() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let fortune = Fortune::draw(&mut rng);
            for category in Category::ALL {
                assert!((3..=5).contains(&fortune.get(category).stars()));
            }
        }
    }

    #[test]
    fn draw_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(Fortune::draw(&mut rng1), Fortune::draw(&mut rng2));
    }

    #[test]
    fn get_matches_fields() {
        let mut rng = StdRng::seed_from_u64(3);
        let fortune = Fortune::draw(&mut rng);
        assert_eq!(fortune.get(Category::Overall), fortune.overall);
        assert_eq!(fortune.get(Category::Work), fortune.work);
        assert_eq!(fortune.get(Category::Love), fortune.love);
        assert_eq!(fortune.get(Category::Money), fortune.money);
    }

    #[test]
    fn serde_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        let fortune = Fortune::draw(&mut rng);
        let json = serde_json::to_string(&fortune).unwrap();
        let back: Fortune = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fortune);
    }
}
