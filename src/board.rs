use itertools::Itertools;
use std::fmt::{self, Display};
use crate::error::Error;

/// State of a single cell.
///
/// The domain is closed. Anything the outside world cannot resolve to one of
/// these two values must be normalized to `Dead` before it reaches a `Board`
/// (see [`crate::render::CellStyle`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
  Dead,
  Alive,
}

impl Cell {
  pub fn is_alive(self) -> bool {
    self == Cell::Alive
  }
}

/// A fixed-size grid of cells with toroidal indexing.
///
/// Coordinates wrap on both axes with a floor-style modulo, so `get` is total
/// over all of `i64` and `-1` addresses the last column/row. Dimensions are
/// fixed at construction. A board is never mutated afterwards; `with_cell`
/// and the engine always return new boards.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
  width: usize,
  height: usize,
  cells: Vec<Cell>,
}

impl Board {
  /// Creates a board with every cell set by `init(x, y)`.
  pub fn new(
    width: usize,
    height: usize,
    init: impl FnMut(usize, usize) -> Cell,
  ) -> Result<Board, Error> {
    if width == 0 || height == 0 {
      return Err(Error::InvalidDimension { width, height });
    }

    Ok(Self::from_fn(width, height, init))
  }

  /// All-dead board.
  pub fn empty(width: usize, height: usize) -> Result<Board, Error> {
    Self::new(width, height, |_, _| Cell::Dead)
  }

  /// Dimensions must already be validated.
  pub(crate) fn from_fn(
    width: usize,
    height: usize,
    mut init: impl FnMut(usize, usize) -> Cell,
  ) -> Board {
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
      for x in 0..width {
        cells.push(init(x, y));
      }
    }

    Board { width, height, cells }
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  /// Cell state at toroidally wrapped `(x, y)`. Total over all integers.
  pub fn get(&self, x: i64, y: i64) -> Cell {
    self.cells[self.index(x, y)]
  }

  /// A copy of this board with the wrapped `(x, y)` cell set to `state`.
  /// The receiver is untouched.
  pub fn with_cell(&self, x: i64, y: i64, state: Cell) -> Board {
    let i = self.index(x, y);
    let mut board = self.clone();
    board.cells[i] = state;
    board
  }

  /// Number of live cells.
  pub fn population(&self) -> usize {
    self.cells.iter().filter(|cell| cell.is_alive()).count()
  }

  fn index(&self, x: i64, y: i64) -> usize {
    let x = x.rem_euclid(self.width as i64) as usize;
    let y = y.rem_euclid(self.height as i64) as usize;
    y * self.width + x
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let grid = (0..self.height)
      .map(|y| {
        (0..self.width)
          .map(|x| if self.get(x as i64, y as i64).is_alive() { '#' } else { '.' })
          .collect::<String>()
      })
      .join("\n");
    write!(f, "{}", grid)
  }
}
