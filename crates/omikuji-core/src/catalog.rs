//! Advice and encouragement catalogs.
//!
//! Each category carries exactly one advice text per possible score (3
//! stars selects the first entry, 5 stars the third). Encouragement lines
//! are a separate list, drawn independently of any score.

use rand::Rng;
use rand::rngs::StdRng;

use crate::category::Category;
use crate::error::CatalogError;
use crate::score::Score;

/// Advice texts for the `overall` category, indexed by score.
pub const OVERALL_ADVICE: [&str; 3] = [
    "今日はあなたの魅力が輝く日です。自信を持って前進しましょう。",
    "素敵な出会いがあるかもしれません。心を開いて過ごしましょう。",
    "幸運に恵まれた一日です。感謝の気持ちを忘れずに。",
];

/// Advice texts for the `work` category, indexed by score.
pub const WORK_ADVICE: [&str; 3] = [
    "新しいアイデアが生まれそうです。直感を大切にしてください。",
    "チームワークが成功をもたらします。協調性を発揮しましょう。",
    "キャリアアップのチャンスです。自信を持って挑戦してください。",
];

/// Advice texts for the `love` category, indexed by score.
pub const LOVE_ADVICE: [&str; 3] = [
    "心のつながりを大切にすることで、関係がより深まるでしょう。",
    "相手の気持ちを理解することで、愛が育まれます。",
    "ロマンスが花開く時期です。愛する人との時間を大切にしましょう。",
];

/// Advice texts for the `money` category, indexed by score.
pub const MONEY_ADVICE: [&str; 3] = [
    "直感を信じて行動することで、良い結果が得られるでしょう。",
    "予期せぬ幸運がありそうです。感謝の気持ちを忘れずに。",
    "金運が上昇中です。新しい挑戦が実を結ぶかもしれません。",
];

/// Built-in encouragement lines (5 entries), independent of scores.
pub const ENCOURAGEMENTS: [&str; 5] = [
    "あなたならできます。自分を信じて。",
    "一歩ずつ前進すれば、必ず目標に到達できます。",
    "今日という日を大切に。明日はさらに素晴らしい日になるでしょう。",
    "困難は成長のチャンス。乗り越える度に強くなれます。",
    "あなたの努力は必ず報われます。諦めないでください。",
];

/// Required number of advice entries per category (one per possible score).
pub const ENTRIES_PER_CATEGORY: usize = Score::ALL.len();

/// The advice catalog: one text per category and score, plus encouragement
/// lines.
///
/// Defaults to the built-in texts. Custom catalogs are validated so the
/// score-indexed lookup can never go out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceCatalog {
    overall: Vec<String>,
    work: Vec<String>,
    love: Vec<String>,
    money: Vec<String>,
    encouragements: Vec<String>,
}

impl Default for AdviceCatalog {
    fn default() -> Self {
        Self {
            overall: OVERALL_ADVICE.iter().map(|s| (*s).to_string()).collect(),
            work: WORK_ADVICE.iter().map(|s| (*s).to_string()).collect(),
            love: LOVE_ADVICE.iter().map(|s| (*s).to_string()).collect(),
            money: MONEY_ADVICE.iter().map(|s| (*s).to_string()).collect(),
            encouragements: ENCOURAGEMENTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl AdviceCatalog {
    /// Build a custom catalog.
    ///
    /// Every category list must have exactly [`ENTRIES_PER_CATEGORY`]
    /// entries, and at least one encouragement line must be provided.
    pub fn new(
        overall: Vec<String>,
        work: Vec<String>,
        love: Vec<String>,
        money: Vec<String>,
        encouragements: Vec<String>,
    ) -> Result<Self, CatalogError> {
        for (category, entries) in [
            (Category::Overall, &overall),
            (Category::Work, &work),
            (Category::Love, &love),
            (Category::Money, &money),
        ] {
            if entries.len() != ENTRIES_PER_CATEGORY {
                return Err(CatalogError::WrongAdviceCount {
                    category,
                    expected: ENTRIES_PER_CATEGORY,
                    found: entries.len(),
                });
            }
        }
        if encouragements.is_empty() {
            return Err(CatalogError::NoEncouragements);
        }
        Ok(Self {
            overall,
            work,
            love,
            money,
            encouragements,
        })
    }

    /// The advice text for a category at the given score.
    pub fn advice(&self, category: Category, score: Score) -> &str {
        &self.entries(category)[score.index()]
    }

    /// The encouragement lines.
    pub fn encouragements(&self) -> &[String] {
        &self.encouragements
    }

    /// Pick a random encouragement line.
    pub fn random_encouragement<'a>(&'a self, rng: &mut StdRng) -> &'a str {
        &self.encouragements[rng.random_range(0..self.encouragements.len())]
    }

    fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Overall => &self.overall,
            Category::Work => &self.work,
            Category::Love => &self.love,
            Category::Money => &self.money,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn builtin_lists_have_one_entry_per_score() {
        assert_eq!(OVERALL_ADVICE.len(), ENTRIES_PER_CATEGORY);
        assert_eq!(WORK_ADVICE.len(), ENTRIES_PER_CATEGORY);
        assert_eq!(LOVE_ADVICE.len(), ENTRIES_PER_CATEGORY);
        assert_eq!(MONEY_ADVICE.len(), ENTRIES_PER_CATEGORY);
        assert_eq!(ENCOURAGEMENTS.len(), 5);
    }

    #[test]
    fn default_uses_builtin_texts() {
        let catalog = AdviceCatalog::default();
        assert_eq!(
            catalog.advice(Category::Work, Score::Three),
            WORK_ADVICE[0]
        );
        assert_eq!(catalog.advice(Category::Work, Score::Five), WORK_ADVICE[2]);
        assert_eq!(catalog.encouragements().len(), 5);
    }

    #[test]
    fn advice_indexed_by_score() {
        let catalog = AdviceCatalog::default();
        for category in Category::ALL {
            for score in Score::ALL {
                let text = catalog.advice(category, score);
                assert_eq!(text, catalog.entries(category)[score.index()]);
            }
        }
    }

    #[test]
    fn custom_catalog_accepted() {
        let catalog = AdviceCatalog::new(
            strings(&["a", "b", "c"]),
            strings(&["d", "e", "f"]),
            strings(&["g", "h", "i"]),
            strings(&["j", "k", "l"]),
            strings(&["go!"]),
        )
        .unwrap();
        assert_eq!(catalog.advice(Category::Overall, Score::Three), "a");
        assert_eq!(catalog.advice(Category::Money, Score::Five), "l");
    }

    #[test]
    fn wrong_entry_count_rejected() {
        let err = AdviceCatalog::new(
            strings(&["a", "b"]),
            strings(&["d", "e", "f"]),
            strings(&["g", "h", "i"]),
            strings(&["j", "k", "l"]),
            strings(&["go!"]),
        )
        .unwrap_err();
        match err {
            CatalogError::WrongAdviceCount {
                category,
                expected,
                found,
            } => {
                assert_eq!(category, Category::Overall);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_encouragements_rejected() {
        let err = AdviceCatalog::new(
            strings(&["a", "b", "c"]),
            strings(&["d", "e", "f"]),
            strings(&["g", "h", "i"]),
            strings(&["j", "k", "l"]),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NoEncouragements));
    }

    #[test]
    fn random_encouragement_from_list() {
        let catalog = AdviceCatalog::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let line = catalog.random_encouragement(&mut rng);
            assert!(ENCOURAGEMENTS.contains(&line));
        }
    }
}
