//! The three puzzle operations.
//!
//! - `generate`: build a random starting board
//! - `toggle`: apply the plus-shaped flip at one cell
//! - `has_won`: check whether every light is out
//!
//! All three are pure apart from the RNG passed to `generate`. None of
//! them knows about game state; `Session` layers the Playing/Won rules on
//! top.

pub mod generator;
pub mod toggle;
pub mod win;

pub use generator::{generate, BoardGenerator};
pub use toggle::{toggle, try_toggle};
pub use win::has_won;
