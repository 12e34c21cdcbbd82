pub struct Config;

impl Config {
    pub const ALIVE_SYMBOL: &'static str = " x ";
    pub const DEAD_SYMBOL: &'static str = " o ";

    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_FILL_RATE: f64 = 0.3;

    pub const DEMO_SIDE: usize = 16;
    pub const DEMO_GENERATIONS: usize = 32;
}
