//! Conway's Game of Life (B3/S23) on a fixed-size toroidal grid.
//!
//! Boards are values: the engine reads one frozen generation and returns the
//! next, never mutating in place. Seeders build generation zero from random
//! noise, plain-text templates or RLE patterns.

pub mod board;
pub mod engine;
pub mod error;
pub mod history;
pub mod pattern;
pub mod render;
pub mod rle;
pub mod rule;

pub use board::{Board, Cell};
pub use engine::{count_live_neighbors, simulate, step, NEIGHBOR_OFFSETS};
pub use error::Error;
pub use history::{Cycle, History};
pub use pattern::{
  seed_pattern, seed_random, Pattern,
  ALIVE_CHAR, DEFAULT_FILL_PROBABILITY, GOSPER_GLIDER_GUN,
};
pub use render::CellStyle;
