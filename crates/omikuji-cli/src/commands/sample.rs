use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use omikuji_core::FortuneGenerator;

use crate::render;

pub fn run(seed: u64) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let reading = FortuneGenerator::new().generate(&mut rng);

    println!("  {} reading (seed {seed}, not recorded)\n", "Sample".bold());
    println!("{}", render::reading(&reading));

    Ok(())
}
