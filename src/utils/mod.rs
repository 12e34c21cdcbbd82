mod config;
mod random;

pub use config::Config;
pub use random::random_states;
