//! Game sessions.
//!
//! A `Session` wraps the engine operations in the Playing/Won state
//! machine:
//! - starts `Won` if the generated board is already dark
//! - each accepted move re-checks the board
//! - `Won` is terminal and further moves are rejected

mod session;

pub use session::{Session, SessionStatus};
