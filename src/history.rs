use indexmap::IndexSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use crate::board::Board;

/// A repeat in the generation sequence.
///
/// `start` is the generation where the repeated board first appeared,
/// `period` the cycle length: 1 for a still life, 2 for a blinker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cycle {
  pub start: usize,
  pub period: usize,
}

/// Records the boards of a run and reports the first repeat.
///
/// Boards are deduplicated in an `IndexSet`, so the set index of a board is
/// the generation it first appeared at. Once a repeat has been reported the
/// history is exhausted; later `record` calls give no meaningful cycles.
#[derive(Default)]
pub struct History {
  seen: IndexSet<Board, BuildHasherDefault<FxHasher>>,
  generation: usize,
}

impl History {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of generations recorded.
  pub fn len(&self) -> usize {
    self.generation
  }

  pub fn is_empty(&self) -> bool {
    self.generation == 0
  }

  /// Records the next generation. Returns the cycle on the first repeated
  /// board, `None` while all boards are distinct.
  pub fn record(&mut self, board: &Board) -> Option<Cycle> {
    let generation = self.generation;
    self.generation += 1;

    let (index, new) = self.seen.insert_full(board.clone());
    if new {
      None
    } else {
      Some(Cycle { start: index, period: generation - index })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::board::Cell;
  use crate::engine::step;

  #[test]
  fn still_life_has_period_1() {
    let block = Board::empty(5, 5).unwrap()
      .with_cell(1, 1, Cell::Alive)
      .with_cell(2, 1, Cell::Alive)
      .with_cell(1, 2, Cell::Alive)
      .with_cell(2, 2, Cell::Alive);

    let mut history = History::new();
    assert_eq!(history.record(&block), None);
    assert_eq!(
      history.record(&step(&block)),
      Some(Cycle { start: 0, period: 1 })
    );
  }

  #[test]
  fn blinker_has_period_2() {
    let mut board = Board::empty(5, 5).unwrap()
      .with_cell(1, 2, Cell::Alive)
      .with_cell(2, 2, Cell::Alive)
      .with_cell(3, 2, Cell::Alive);

    let mut history = History::new();
    let mut cycle = None;
    while cycle.is_none() {
      cycle = history.record(&board);
      board = step(&board);
    }

    assert_eq!(cycle, Some(Cycle { start: 0, period: 2 }));
    assert_eq!(history.len(), 3);
  }

  #[test]
  fn r_pentomino_settles_into_a_cycle() {
    // on a small torus the debris stabilizes quickly
    let mut board = Board::empty(16, 16).unwrap()
      .with_cell(8, 7, Cell::Alive)
      .with_cell(9, 7, Cell::Alive)
      .with_cell(7, 8, Cell::Alive)
      .with_cell(8, 8, Cell::Alive)
      .with_cell(8, 9, Cell::Alive);

    let mut history = History::new();
    let mut cycle = None;
    for _ in 0..2000 {
      cycle = history.record(&board);
      if cycle.is_some() {
        break;
      }
      board = step(&board);
    }

    assert_eq!(cycle, Some(Cycle { start: 67, period: 2 }));
    assert_eq!(history.len(), 70);
  }
}
