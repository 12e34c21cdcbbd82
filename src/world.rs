use crate::utils::{random_states, Config};
use crate::{Error, Result};
use tracing::trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Three-character symbol used by the text dump.
    pub fn symbol(self) -> &'static str {
        match self {
            CellState::Alive => Config::ALIVE_SYMBOL,
            CellState::Dead => Config::DEAD_SYMBOL,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Square toroidal field stored row-major: cell `(row, col)` lives at
/// `row * xbase + col`.
///
/// The cell count is always a positive perfect square; the side length is
/// derived from it and never stored separately.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct World {
    cells: Vec<CellState>,
}

impl World {
    /// Create a blank field with dimensions `xbase x xbase`.
    pub fn new(xbase: usize) -> Result<Self> {
        let len = cell_count(xbase)?;
        trace!(xbase, "creating blank world");
        Ok(Self {
            cells: vec![CellState::Dead; len],
        })
    }

    /// Create a field from a row-major vector of cells.
    ///
    /// Fails unless the number of cells is a positive perfect square.
    pub fn from_cells(cells: Vec<CellState>) -> Result<Self> {
        let len = cells.len();
        let xbase = isqrt(len);
        if len == 0 || xbase * xbase != len {
            return Err(Error::MalformedWorld { len });
        }
        Ok(Self { cells })
    }

    /// Wraps cells whose count is already known to be a perfect square.
    pub(crate) fn from_square(cells: Vec<CellState>) -> Self {
        debug_assert_eq!(isqrt(cells.len()).pow(2), cells.len());
        Self { cells }
    }

    /// Create a blank field and bring the given cells to life.
    pub fn from_alive(xbase: usize, alive: impl IntoIterator<Item = usize>) -> Result<Self> {
        alive
            .into_iter()
            .try_fold(Self::new(xbase)?, |world, index| world.set_alive(index))
    }

    /// Create a field with random cells.
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(xbase: usize, fill_rate: f64, seed: Option<u64>) -> Result<Self> {
        let len = cell_count(xbase)?;
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        trace!(xbase, fill_rate, ?seed, "creating random world");
        let cells = random_states(len, fill_rate, seed)
            .into_iter()
            .map(CellState::from)
            .collect();
        Ok(Self { cells })
    }

    /// Side length of the field.
    pub fn xbase(&self) -> usize {
        isqrt(self.cells.len())
    }

    /// Total number of cells, `xbase * xbase`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a world has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns the world with cell `index` alive.
    pub fn set_alive(self, index: usize) -> Result<Self> {
        self.with_state(index, CellState::Alive)
    }

    /// Returns the world with cell `index` dead.
    pub fn set_dead(self, index: usize) -> Result<Self> {
        self.with_state(index, CellState::Dead)
    }

    fn with_state(mut self, index: usize, state: CellState) -> Result<Self> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::UnknownCell { index, len })?;
        *cell = state;
        Ok(self)
    }

    /// Total number of alive cells in the field.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
    }
}

/// `xbase * xbase`, rejecting zero and overflowing sides.
fn cell_count(xbase: usize) -> Result<usize> {
    if xbase == 0 {
        return Err(Error::InvalidSide);
    }
    xbase.checked_mul(xbase).ok_or(Error::SideTooLarge(xbase))
}

/// Truncated integer square root.
fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
