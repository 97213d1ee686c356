use std::fmt::{self, Display};
use crate::board::Cell;

/// A Life rule as bit masks over live-neighbor counts. Bit `n` of `birth`
/// set means a dead cell with `n` live neighbors comes alive; bit `n` of
/// `survival` means a live cell with `n` live neighbors stays alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

/// B3/S23. The engine is fixed to this rule.
pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  pub(crate) fn next_state(self, state: Cell, live_neighbors: u8) -> Cell {
    debug_assert!(live_neighbors <= 8);
    let mask = match state {
      Cell::Alive => self.survival,
      Cell::Dead => self.birth,
    };
    if mask >> live_neighbors & 1 != 0 {
      Cell::Alive
    } else {
      Cell::Dead
    }
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn b3_s23_transitions() {
    for n in 0..=8 {
      let from_alive = GAME_OF_LIFE.next_state(Cell::Alive, n);
      let from_dead = GAME_OF_LIFE.next_state(Cell::Dead, n);
      assert_eq!(from_alive, if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead });
      assert_eq!(from_dead, if n == 3 { Cell::Alive } else { Cell::Dead });
    }
  }

  #[test]
  fn display() {
    assert_eq!(GAME_OF_LIFE.to_string(), "B3/S23");
  }
}
