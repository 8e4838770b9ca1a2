use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use omikuji_core::{DailyFortune, FileStore, FortuneGenerator, day};

use crate::{cache, render};

pub fn run(state_dir: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let dir = super::state_dir(state_dir);
    let today = day::today();

    let store = FileStore::new(super::state_file(&dir));
    let mut daily = DailyFortune::new(FortuneGenerator::new(), store);

    if !daily.can_draw(&today) {
        if let Some(reading) = cache::load_for(&dir, &today) {
            println!("{}", render::reading(&reading));
            println!();
        }
        println!("  Already drawn today ({today}). Come back tomorrow.");
        return Ok(());
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let Some(reading) = daily.draw(&today, &mut rng) else {
        return Err("draw was gated after the availability check".into());
    };
    cache::save(&dir, &today, &reading);

    println!("  {} your fortune for {today}\n", "Drawn".bold());
    println!("{}", render::reading(&reading));

    Ok(())
}
