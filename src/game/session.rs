//! A single game: the current board plus its Playing/Won status.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardConfig, Coord, GameRng, LightsOutError, Result};
use crate::engine::{self, BoardGenerator};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// At least one light is on; moves are accepted.
    Playing,
    /// Every light is out. Terminal.
    Won,
}

impl SessionStatus {
    /// Status implied by a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        if engine::has_won(board) {
            SessionStatus::Won
        } else {
            SessionStatus::Playing
        }
    }

    /// True once the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Won)
    }
}

/// One Lights Out game.
///
/// Owns the current board, its own RNG, and the explicit status. A board
/// that is dark at generation time starts the session in `Won`.
///
/// ```
/// use lights_out::{BoardConfig, Coord, Session, SessionStatus};
///
/// let session = Session::new(&BoardConfig::new(3, 3).with_chance_lit(0.0)).unwrap();
/// assert_eq!(session.status(), SessionStatus::Won);
///
/// let mut session = Session::with_board(session.board().toggled(Coord::new(1, 1)));
/// assert_eq!(session.status(), SessionStatus::Playing);
/// assert_eq!(session.activate_key("1-1").unwrap(), SessionStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    generator: BoardGenerator,
    rng: GameRng,
    board: Board,
    status: SessionStatus,
    moves: u32,
}

impl Session {
    /// Start a session with a freshly generated board.
    ///
    /// Fails on an invalid config without building anything.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        let generator = BoardGenerator::new(config.clone())?;
        let mut rng = GameRng::new(config.seed);
        let board = generator.generate(&mut rng)?;
        Ok(Self::start(generator, rng, board))
    }

    /// Start a session from an explicit board.
    ///
    /// `restart` will generate boards of the same size with the default
    /// chance and seed.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        let config = BoardConfig::new(board.nrows(), board.ncols());
        // Dimensions come from a valid board and the default chance is in range.
        let generator = BoardGenerator { config };
        Self::start(generator, GameRng::default(), board)
    }

    fn start(generator: BoardGenerator, rng: GameRng, board: Board) -> Self {
        let status = SessionStatus::of(&board);
        debug!(
            "session started on {}x{} board, {} lit, status {:?}",
            board.nrows(),
            board.ncols(),
            board.lit_count(),
            status
        );
        Self {
            generator,
            rng,
            board,
            status,
            moves: 0,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Shorthand for `status() == Won`.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of accepted moves since the board was generated.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The configuration used by `restart`.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        self.generator.config()
    }

    /// Toggle the cell at `coord` and re-evaluate the status.
    ///
    /// Rejected moves leave the session untouched:
    /// - `GameOver` once the session is `Won`
    /// - `OutOfBounds` for a coordinate off the board
    pub fn activate(&mut self, coord: Coord) -> Result<SessionStatus> {
        if self.status.is_terminal() {
            warn!("ignoring move at {}: game already won", coord);
            return Err(LightsOutError::GameOver);
        }

        let next = engine::try_toggle(&self.board, coord).inspect_err(|err| {
            warn!("rejected move: {}", err);
        })?;

        self.board = next;
        self.moves += 1;
        self.status = SessionStatus::of(&self.board);

        if self.status.is_terminal() {
            info!("board cleared after {} moves", self.moves);
        }
        Ok(self.status)
    }

    /// Parse a `"row-col"` cell key and activate it.
    pub fn activate_key(&mut self, key: &str) -> Result<SessionStatus> {
        let coord: Coord = key.parse()?;
        self.activate(coord)
    }

    /// Replace the board with a freshly generated one.
    ///
    /// Draws from the session's RNG, so successive restarts differ.
    pub fn restart(&mut self) -> Result<SessionStatus> {
        self.board = self.generator.generate(&mut self.rng)?;
        self.moves = 0;
        self.status = SessionStatus::of(&self.board);
        debug!("session restarted, {} lit", self.board.lit_count());
        Ok(self.status)
    }
}
