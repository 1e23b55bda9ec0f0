//! Core types: coordinates, the board, configuration, RNG and errors.

pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod rng;

pub use board::Board;
pub use config::BoardConfig;
pub use coord::Coord;
pub use error::{LightsOutError, Result};
pub use rng::{GameRng, GameRngState, DEFAULT_SEED};
