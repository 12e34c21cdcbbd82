use crate::topology::neighbors;
use crate::{CellState, Error, Result, World};
use tracing::debug;

/// Conway's B3/S23 rule for a single cell.
#[inline]
pub fn next_state(state: CellState, live_neighbors: usize) -> CellState {
    match (state, live_neighbors) {
        (_, 3) | (CellState::Alive, 2) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Number of alive cells among the eight neighbor slots of `index`.
///
/// On sides below [`MIN_DISTINCT_SIDE`](crate::MIN_DISTINCT_SIDE) a cell may occupy
/// several slots (or be its own neighbor) and is counted once per slot.
///
/// Fails with [`Error::UnknownCell`] if `index` is not a cell of `world`.
pub fn live_neighbors(world: &World, index: usize) -> Result<usize> {
    let len = world.len();
    if index >= len {
        return Err(Error::UnknownCell { index, len });
    }
    Ok(count_alive(world.cells(), index, world.xbase()))
}

fn count_alive(cells: &[CellState], index: usize, xbase: usize) -> usize {
    neighbors(index, xbase)
        .iter()
        .filter(|&&i| cells[i].is_alive())
        .count()
}

/// Computes one generation. Every cell reads the input world only, so updates
/// are simultaneous.
pub fn next_generation(world: &World) -> World {
    let xbase = world.xbase();
    let cells = world.cells();
    let next = cells
        .iter()
        .enumerate()
        .map(|(index, &state)| next_state(state, count_alive(cells, index, xbase)))
        .collect();
    let next = World::from_square(next);
    debug!(
        xbase,
        before = world.population(),
        after = next.population(),
        "computed generation"
    );
    next
}

/// Applies [`next_generation`] `generations` times.
pub fn advance(world: &World, generations: usize) -> World {
    (0..generations).fold(world.clone(), |w, _| next_generation(&w))
}

impl World {
    pub fn next_generation(&self) -> World {
        next_generation(self)
    }

    /// Infinite iterator over the following generations, starting with the next one.
    pub fn generations(&self) -> impl Iterator<Item = World> {
        std::iter::successors(Some(next_generation(self)), |w| Some(next_generation(w)))
    }
}
