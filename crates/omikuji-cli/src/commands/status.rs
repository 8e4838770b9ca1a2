use std::path::Path;

use omikuji_core::{DailyFortune, FileStore, FortuneGenerator, day};

use crate::{cache, render};

pub fn run(state_dir: Option<&Path>) -> Result<(), String> {
    let dir = super::state_dir(state_dir);
    let today = day::today();

    let store = FileStore::new(super::state_file(&dir));
    let daily = DailyFortune::new(FortuneGenerator::new(), store);

    if daily.can_draw(&today) {
        println!("  A draw is available today ({today}).");
        println!("  Run 'omikuji draw' to draw your fortune.");
        return Ok(());
    }

    println!("  Already drawn today ({today}).");
    if let Some(reading) = cache::load_for(&dir, &today) {
        println!();
        println!("{}", render::reading(&reading));
    }

    Ok(())
}
