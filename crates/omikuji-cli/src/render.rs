//! Terminal rendering of a reading.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use omikuji_core::{Category, Reading};

/// Star rating out of five, drawn stars highlighted.
pub fn stars(count: u32) -> String {
    let filled = "★".repeat(count as usize);
    let empty = "☆".repeat(5usize.saturating_sub(count as usize));
    format!("{}{}", filled.yellow(), empty.dimmed())
}

/// Render a reading as a category table plus the encouragement line.
pub fn reading(reading: &Reading) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Stars", "Advice"]);

    for category in Category::ALL {
        let score = reading.fortune.get(category);
        table.add_row(vec![
            category.to_string(),
            format!("{} {}", stars(score.stars()), score),
            reading.advice.get(category).to_string(),
        ]);
    }

    format!("{table}\n\n  {}", reading.advice.encouragement.bold())
}
