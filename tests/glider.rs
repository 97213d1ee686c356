use pretty_assertions::assert_eq;
use toruslife::*;

fn glider_at(width: usize, height: usize, origin: (i64, i64)) -> Board {
  let glider = Pattern::parse(".X.\n..X\nXXX", ALIVE_CHAR);
  seed_pattern(width, height, &glider, origin).unwrap()
}

#[test]
fn glider_moves_one_cell_diagonally_every_4_generations() {
  let board = glider_at(8, 8, (1, 1));
  assert_eq!(&board.to_string(), r"
........
..#.....
...#....
.###....
........
........
........
........".trim_start_matches('\n'));

  let board = simulate(board, 4);
  assert_eq!(&board.to_string(), r"
........
........
...#....
....#...
..###...
........
........
........".trim_start_matches('\n'));
}

#[test]
fn glider_crosses_the_torus_and_returns_to_its_start() {
  let board = glider_at(8, 8, (1, 1));
  // 4 generations per diagonal cell, 8 cells to wrap both axes
  let wrapped = simulate(board.clone(), 32);
  assert_eq!(wrapped, board);

  // half way through it sits on the opposite side, mid-wrap
  let half = simulate(board.clone(), 16);
  assert_ne!(half, board);
  assert_eq!(half.population(), 5);
}

#[test]
fn shifted_starts_stay_shifted() {
  // translation invariance on the torus, even across the seam
  let board = simulate(glider_at(8, 8, (6, 6)), 8);
  let reference = simulate(glider_at(8, 8, (1, 1)), 8);

  let mut matches = 0;
  for y in 0..8 {
    for x in 0..8 {
      if board.get(x + 5, y + 5) == reference.get(x, y) {
        matches += 1;
      }
    }
  }
  assert_eq!(matches, 64);
}
