use image::{ImageBuffer, Luma};
use std::path::Path;
use crate::board::{Board, Cell};
use crate::error::Error;

/// Mapping between the two cell states and the tokens an external renderer
/// understands, e.g. spreadsheet background colors.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CellStyle {
  alive: String,
  dead: String,
}

impl CellStyle {
  pub fn new(alive: impl Into<String>, dead: impl Into<String>) -> CellStyle {
    CellStyle {
      alive: alive.into(),
      dead: dead.into(),
    }
  }

  /// Token for a cell state.
  pub fn token(&self, cell: Cell) -> &str {
    match cell {
      Cell::Alive => &self.alive,
      Cell::Dead => &self.dead,
    }
  }

  /// Normalizes an external token to a cell state.
  ///
  /// Only the alive token maps to `Alive`. An absent, unknown or foreign
  /// token is `Dead`, so no third state can leak into the core.
  pub fn normalize(&self, token: Option<&str>) -> Cell {
    match token {
      Some(token) if token == self.alive => Cell::Alive,
      _ => Cell::Dead,
    }
  }
}

impl Default for CellStyle {
  fn default() -> CellStyle {
    CellStyle::new("green", "white")
  }
}

/// Reads a board back from a token source, normalizing per `style`.
pub fn read_board(
  width: usize,
  height: usize,
  style: &CellStyle,
  mut source: impl FnMut(usize, usize) -> Option<String>,
) -> Result<Board, Error> {
  Board::new(width, height, |x, y| style.normalize(source(x, y).as_deref()))
}

/// Pushes every cell of a board to a token sink, row by row.
pub fn write_board(
  board: &Board,
  style: &CellStyle,
  mut sink: impl FnMut(usize, usize, &str),
) {
  for y in 0..board.height() {
    for x in 0..board.width() {
      sink(x, y, style.token(board.get(x as i64, y as i64)));
    }
  }
}

/// Saves a board as a grayscale image, one pixel per cell, live cells white.
pub fn save_image(board: &Board, path: impl AsRef<Path>) -> image::ImageResult<()> {
  let mut buffer = ImageBuffer::new(board.width() as u32, board.height() as u32);
  for y in 0..board.height() {
    for x in 0..board.width() {
      if board.get(x as i64, y as i64).is_alive() {
        buffer.put_pixel(x as u32, y as u32, Luma([255u8]));
      }
    }
  }

  buffer.save(path)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;
  use super::*;

  #[test]
  fn normalize_maps_everything_unknown_to_dead() {
    let style = CellStyle::default();
    assert_eq!(style.normalize(Some("green")), Cell::Alive);
    assert_eq!(style.normalize(Some("white")), Cell::Dead);
    assert_eq!(style.normalize(Some("#ffffff")), Cell::Dead);
    assert_eq!(style.normalize(Some("fuchsia")), Cell::Dead);
    assert_eq!(style.normalize(None), Cell::Dead);
  }

  #[test]
  fn tokens_round_trip_through_normalize() {
    let style = CellStyle::new("on", "off");
    for &cell in &[Cell::Alive, Cell::Dead] {
      assert_eq!(style.normalize(Some(style.token(cell))), cell);
    }
  }

  #[test]
  fn write_then_read_board() {
    let style = CellStyle::default();
    let board = Board::empty(4, 3).unwrap()
      .with_cell(1, 0, Cell::Alive)
      .with_cell(3, 2, Cell::Alive);

    let mut sheet = HashMap::new();
    write_board(&board, &style, |x, y, token| {
      sheet.insert((x, y), token.to_owned());
    });
    assert_eq!(sheet.len(), 12);

    let copy = read_board(4, 3, &style, |x, y| sheet.get(&(x, y)).cloned()).unwrap();
    assert_eq!(copy, board);
  }

  #[test]
  fn read_board_tolerates_missing_cells() {
    let style = CellStyle::default();
    let board = read_board(3, 3, &style, |x, y| {
      if x == y { Some("green".to_owned()) } else { None }
    }).unwrap();
    assert_eq!(board.population(), 3);
  }
}
