//! # lights-out
//!
//! A Lights Out puzzle engine.
//!
//! ## Rules
//!
//! The board is a grid of lights. Activating a cell flips it and its four
//! orthogonal neighbors (no wraparound). The puzzle is solved when every
//! light is out.
//!
//! ## Design Principles
//!
//! 1. **Boards are values**: a toggle returns a new `Board` and leaves the
//!    old one intact. Rows are persistent `im` vectors, so snapshots share
//!    untouched rows.
//!
//! 2. **Injected randomness**: generation takes a seedable `GameRng`
//!    instead of a global source, so boards are reproducible.
//!
//! 3. **Presentation-free**: rendering and input wiring belong to the
//!    caller, which reads `Board` and `SessionStatus` back out.
//!
//! ## Modules
//!
//! - `core`: coordinates, board, configuration, RNG, errors
//! - `engine`: `generate`, `toggle`, `has_won`
//! - `game`: `Session` with explicit Playing/Won status
//!
//! ```
//! use lights_out::{engine, Board};
//!
//! let board = Board::dark(3, 3).unwrap();
//! assert!(engine::has_won(&board));
//!
//! let board = engine::toggle(&board, 1, 1);
//! assert!(!engine::has_won(&board));
//!
//! let board = engine::toggle(&board, 1, 1);
//! assert!(engine::has_won(&board));
//! ```

pub mod core;
pub mod engine;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Coord,
    GameRng, GameRngState, DEFAULT_SEED,
    LightsOutError, Result,
};

pub use crate::engine::{generate, has_won, toggle, try_toggle, BoardGenerator};

pub use crate::game::{Session, SessionStatus};
