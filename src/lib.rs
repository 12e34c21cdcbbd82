#![warn(clippy::all)]

mod engine;
mod error;
mod format;
pub mod topology;
mod utils;
mod world;

pub use engine::{advance, live_neighbors, next_generation, next_state};
pub use error::{Error, Result};
pub use format::format_world;
pub use topology::{neighbors, MIN_DISTINCT_SIDE};
pub use utils::Config;
pub use world::{CellState, World};
