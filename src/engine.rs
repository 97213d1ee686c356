use log::debug;
use crate::board::Board;
use crate::rule::GAME_OF_LIFE;

/// The 8-connected neighborhood, in fixed enumeration order.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
  (-1, -1), (0, -1), (1, -1),
  (-1, 0), (1, 0),
  (-1, 1), (0, 1), (1, 1),
];

/// Number of live cells among the 8 toroidal neighbors of `(x, y)`.
///
/// Edge and corner cells use the same formula as interior cells, wraparound
/// makes every neighborhood complete.
pub fn count_live_neighbors(board: &Board, x: i64, y: i64) -> u8 {
  NEIGHBOR_OFFSETS
    .iter()
    .filter(|&&(dx, dy)| board.get(x + dx, y + dy).is_alive())
    .count() as u8
}

/// Advances `board` one generation of B3/S23.
///
/// Every next state is derived from the same input snapshot; the input board
/// is left untouched, so neighbor counts never observe half-updated state.
pub fn step(board: &Board) -> Board {
  let next = Board::from_fn(board.width(), board.height(), |x, y| {
    let (x, y) = (x as i64, y as i64);
    let n = count_live_neighbors(board, x, y);
    GAME_OF_LIFE.next_state(board.get(x, y), n)
  });
  debug!(
    "advanced one generation, population {} -> {}",
    board.population(),
    next.population()
  );
  next
}

/// Advances `board` by `num_gen` generations.
pub fn simulate(mut board: Board, num_gen: usize) -> Board {
  for _ in 0..num_gen {
    board = step(&board);
  }
  board
}
