use log::debug;
use rand::Rng;
use crate::board::{Board, Cell};
use crate::error::Error;

/// Probability a cell starts alive under the default random fill.
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// The character marking a live cell in plain-text templates.
pub const ALIVE_CHAR: char = 'X';

/// Gosper's glider gun. Emits a glider every 30 generations.
pub const GOSPER_GLIDER_GUN: &str = "                           X
                         X X
               XX      XX            XX
             X    X    XX            XX
 XX         X      X   XX
 XX         X    X XX    X X
            X      X       X
             X    X
               XX";

/// A rectangular cell template, decoupled from any board.
///
/// The width is the widest row of the source text; shorter rows count as
/// padded with dead cells on the right.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
  width: usize,
  height: usize,
  cells: Vec<Cell>,
}

impl Pattern {
  /// Parses a plain-text template. `alive` marks a live cell, any other
  /// character is dead.
  pub fn parse(template: &str, alive: char) -> Pattern {
    let rows: Vec<&str> = template.lines().collect();
    let height = rows.len();
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

    let mut cells = vec![Cell::Dead; width * height];
    for (y, row) in rows.iter().enumerate() {
      for (x, c) in row.chars().enumerate() {
        if c == alive {
          cells[y * width + x] = Cell::Alive;
        }
      }
    }

    Pattern { width, height, cells }
  }

  pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Pattern {
    debug_assert_eq!(cells.len(), width * height);
    Pattern { width, height, cells }
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  /// Coordinates of live cells, row-major.
  pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.cells
      .iter()
      .enumerate()
      .filter(|(_, cell)| cell.is_alive())
      .map(move |(i, _)| (i % self.width, i / self.width))
  }
}

/// Fresh board where each cell is independently alive with probability `p`.
///
/// The caller supplies the random source; seed it for reproducible boards.
pub fn seed_random<R: Rng + ?Sized>(
  width: usize,
  height: usize,
  p: f64,
  rng: &mut R,
) -> Result<Board, Error> {
  let board = Board::new(width, height, |_, _| {
    if rng.gen::<f64>() < p { Cell::Alive } else { Cell::Dead }
  })?;
  debug!(
    "seeded {}x{} random board, p = {}, population {}",
    width, height, p, board.population()
  );
  Ok(board)
}

/// Fresh board with `pattern` placed at `origin`, every other cell dead.
///
/// The origin may be any integer pair; placement wraps toroidally. A pattern
/// wider or taller than the board is rejected outright, nothing is placed.
pub fn seed_pattern(
  width: usize,
  height: usize,
  pattern: &Pattern,
  origin: (i64, i64),
) -> Result<Board, Error> {
  let mut board = Board::empty(width, height)?;
  if pattern.width() > width || pattern.height() > height {
    return Err(Error::PatternTooLarge {
      pattern_width: pattern.width(),
      pattern_height: pattern.height(),
      board_width: width,
      board_height: height,
    });
  }

  let (origin_x, origin_y) = origin;
  for (x, y) in pattern.live_cells() {
    board = board.with_cell(origin_x + x as i64, origin_y + y as i64, Cell::Alive);
  }
  debug!(
    "seeded {}x{} board with a {}x{} pattern at ({}, {})",
    width, height, pattern.width(), pattern.height(), origin_x, origin_y
  );
  Ok(board)
}
