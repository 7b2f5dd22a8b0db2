//! The SOS game engine.
//!
//! `GameEngine` owns the board, the rule variant, the turn, the scores and
//! the move history, and is the only thing that writes to its board.
//!
//! ## Move flow
//!
//! 1. Write the letter (rejections change nothing).
//! 2. Record the move against the player to move.
//! 3. Detect the sequences the move completed and score them.
//! 4. Simple mode: any sequence wins and the engine resets itself.
//! 5. Otherwise pass the turn; a full board ends the game by score.
//!
//! A General game that has ended is left as is so a front end can show
//! the final board; call `reset` or `new_game` to play again.

use im::Vector;
use tracing::{debug, info, instrument};

use super::record::{GameStatus, MoveOutcome, MoveRecord};
use super::snapshot::GameSnapshot;
use crate::board::{Board, Cell, Coord, Letter};
use crate::core::{GameConfig, GameMode, GameRng, GameRngState, Player, PlayerMap, SosError};
use crate::rules::{self, GameResult};

/// Rule engine for one game of SOS.
///
/// ## Example
///
/// ```
/// use sos_engine::board::Letter;
/// use sos_engine::core::GameMode;
/// use sos_engine::game::GameEngine;
///
/// let mut engine = GameEngine::new(3, GameMode::General, 42).unwrap();
/// let first = engine.current_turn();
///
/// let outcome = engine.place_letter(0, 0, Letter::S).unwrap();
/// assert_eq!(outcome.mover(), first);
/// assert_eq!(engine.current_turn(), first.opponent());
///
/// // Occupied cells are rejected without touching the turn.
/// assert!(engine.place_letter(0, 0, Letter::O).is_err());
/// assert_eq!(engine.current_turn(), first.opponent());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    mode: GameMode,
    current_turn: Player,
    scores: PlayerMap<u32>,
    history: Vector<MoveRecord>,
    status: GameStatus,
    rng: GameRng,
}

impl GameEngine {
    /// Start a game with a fixed seed for the starting-player draw.
    ///
    /// Fails with `InvalidSize` outside 3..=10.
    pub fn new(size: usize, mode: GameMode, seed: u64) -> Result<Self, SosError> {
        Self::with_rng(size, mode, GameRng::new(seed))
    }

    /// Start a game from a configuration, drawing a seed if none is set.
    pub fn from_config(config: &GameConfig) -> Result<Self, SosError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config.size, config.mode, rng)
    }

    /// Start a game with an explicit random source.
    pub fn with_rng(size: usize, mode: GameMode, mut rng: GameRng) -> Result<Self, SosError> {
        let board = Board::new(size)?;
        let current_turn = rng.choose_player();
        info!(size, %mode, seed = rng.seed(), starter = %current_turn, "new game");

        Ok(Self {
            board,
            mode,
            current_turn,
            scores: PlayerMap::with_value(0),
            history: Vector::new(),
            status: GameStatus::InProgress,
            rng,
        })
    }

    /// Replace this game with a new one built from `config`.
    ///
    /// Without a seed in `config` the current random stream carries on.
    /// On error the current game is kept.
    pub fn new_game(&mut self, config: &GameConfig) -> Result<(), SosError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => self.rng.clone(),
        };
        *self = Self::with_rng(config.size, config.mode, rng)?;
        Ok(())
    }

    /// Start over, optionally with a new size and/or mode.
    ///
    /// Clears board, scores and history and draws a new starting player.
    /// An invalid size fails with `InvalidSize` and changes nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self, size: Option<usize>, mode: Option<GameMode>) -> Result<(), SosError> {
        self.board.reset(size)?;
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self.restart();
        Ok(())
    }

    /// Zero the scores and history and draw a new starter. The caller
    /// clears the board.
    fn restart(&mut self) {
        self.scores = PlayerMap::with_value(0);
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.current_turn = self.rng.choose_player();
        info!(size = self.board.size(), mode = %self.mode, starter = %self.current_turn, "game reset");
    }

    /// Place `letter` at (`row`, `col`) for the player to move.
    ///
    /// Fails with `OutOfBounds`, `CellOccupied` or `GameOver`; a failed
    /// call leaves the engine untouched.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_turn))]
    pub fn place_letter(&mut self, row: isize, col: isize, letter: Letter) -> Result<MoveOutcome, SosError> {
        if self.status.is_over() {
            return Err(SosError::GameOver);
        }

        let coord = Coord::new(row, col);
        if let Err(err) = self.board.set_cell(coord, letter) {
            debug!(%err, "move rejected");
            return Err(err);
        }

        let mover = self.current_turn;
        let placed = MoveRecord::new(coord, letter, mover);
        self.history.push_back(placed);

        let formed = rules::detect(&self.board, coord, self.mode);
        if !formed.is_empty() {
            self.scores[mover] += formed.len() as u32;
            debug!(count = formed.len(), score = self.scores[mover], "SOS formed");
        }

        if self.mode.ends_on_first_sos() && !formed.is_empty() {
            let result = GameResult::Winner(mover);
            let scores = self.scores;
            info!(winner = %mover, "simple game won");
            self.board.clear();
            self.restart();
            return Ok(MoveOutcome {
                placed,
                result: Some(result),
                formed,
                current_turn: self.current_turn,
                scores,
                reset: true,
            });
        }

        self.current_turn = mover.opponent();

        let result = if self.board.is_full() {
            let result = rules::winner_by_score(&self.scores);
            info!(%result, a = self.scores[Player::A], b = self.scores[Player::B], "board full");
            self.status = GameStatus::Finished(result);
            Some(result)
        } else {
            None
        };

        Ok(MoveOutcome {
            placed,
            result,
            formed,
            current_turn: self.current_turn,
            scores: self.scores,
            reset: false,
        })
    }

    /// `place_letter` for untrusted input: 'S'/'O' in either case.
    pub fn place_char(&mut self, row: isize, col: isize, letter: char) -> Result<MoveOutcome, SosError> {
        let letter = Letter::try_from(letter)?;
        self.place_letter(row, col, letter)
    }

    // === Queries ===

    /// Read a cell. Fails with `OutOfBounds` off the grid.
    pub fn cell(&self, row: isize, col: isize) -> Result<Cell, SosError> {
        self.board.cell(Coord::new(row, col))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Moves of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Compare the current scores: higher wins, equal draws.
    #[must_use]
    pub fn winner_by_score(&self) -> GameResult {
        rules::winner_by_score(&self.scores)
    }

    /// RNG position, for reproducing later starting-player draws.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read-only copy of the public game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            mode: self.mode,
            current_turn: self.current_turn,
            scores: self.scores,
            status: self.status,
            cells: self.board.cells().to_vec(),
            history: self.history.clone(),
        }
    }
}
