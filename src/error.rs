use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("board dimensions must be positive, got {width}x{height}")]
  InvalidDimension {
    width: usize,
    height: usize,
  },
  #[error("{pattern_width}x{pattern_height} pattern does not fit a {board_width}x{board_height} board")]
  PatternTooLarge {
    pattern_width: usize,
    pattern_height: usize,
    board_width: usize,
    board_height: usize,
  },
  #[error("invalid RLE: {0}")]
  InvalidRle(String),
}
