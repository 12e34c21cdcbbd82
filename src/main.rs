#![warn(clippy::all)]

use torus_life::{Config, World};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> torus_life::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let world = World::random(
        Config::DEMO_SIDE,
        Config::DEFAULT_FILL_RATE,
        Some(Config::DEFAULT_SEED),
    )?;
    info!(xbase = world.xbase(), population = world.population(), "initial world");
    println!("{}", world);

    let mut last = world.clone();
    for (generation, next) in world.generations().take(Config::DEMO_GENERATIONS).enumerate() {
        info!(generation = generation + 1, population = next.population());
        last = next;
    }

    println!("{}", last);
    Ok(())
}
