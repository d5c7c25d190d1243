//! The rules engine: move legality, captures, suicide and ko enforcement.
//!
//! [`BoardEngine`] owns the grid, the turn, the per-color caught-stone
//! counters, and the short board history needed for ko detection. All
//! mutation goes through [`BoardEngine::play`], which runs the full
//! legality protocol on a scratch copy of the board and swaps it in only
//! once every check has passed. A rejected move therefore leaves the
//! engine exactly as it found it.
//!
//! The ko rule implemented here is positional over a two-ply window: a
//! move is illegal if the resulting board equals the board as it stood two
//! accepted moves earlier. Full-history superko is a known, deliberate
//! omission.
//!
//! The engine is single-threaded per instance; callers must serialize
//! `play` calls against one board. Separate engines share nothing.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use crate::board::{Board, Point, Stone};

/// Why a move attempt was turned down.
///
/// These are ordinary rejections of illegal play, never faults; every one
/// leaves the engine state untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Target position is outside the board.
    OutOfRange,
    /// Target intersection already holds a stone.
    Occupied,
    /// The placed group would end with zero liberties and captures nothing.
    Suicide,
    /// The move would recreate the board from two plies earlier.
    Ko,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "illegal move: point is out of range"),
            MoveError::Occupied => write!(f, "illegal move: point is already occupied"),
            MoveError::Suicide => write!(f, "illegal move: suicide is not allowed"),
            MoveError::Ko => write!(f, "illegal move: would repeat the position (ko)"),
        }
    }
}

impl Error for MoveError {}

/// Board construction was asked for a zero-sized grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidSize(pub usize);

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board size: {}", self.0)
    }
}

impl Error for InvalidSize {}

/// Cumulative stones removed by capture, keyed by the color that was taken
/// off the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CaughtStones {
    pub black: u32,
    pub white: u32,
}

impl CaughtStones {
    /// The count for one color. `Empty` has no counter and reads zero.
    pub fn of(&self, color: Stone) -> u32 {
        match color {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => 0,
        }
    }
}

/// What an accepted move did to the board.
///
/// The session layer fans this out to connected clients together with the
/// board snapshot from [`BoardEngine::board`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the stone was placed.
    pub point: Point,
    /// Color that moved.
    pub color: Stone,
    /// Every position cleared by capture, in removal order.
    pub captured: Vec<Point>,
    /// Stones removed by this move, per captured color.
    pub removed: CaughtStones,
    /// Running caught-stone totals after this move.
    pub caught: CaughtStones,
}

/// The Go rules engine for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    turn: Stone,
    /// Pre-move snapshots of the two most recent accepted moves, oldest
    /// first. Only consulted for the positional ko check.
    history: VecDeque<Board>,
    caught: CaughtStones,
    /// Accepted moves in order. Rejections never land here.
    moves: Vec<(Point, Stone)>,
}

impl BoardEngine {
    /// Create an engine with an empty `size x size` board and `first_turn`
    /// to move.
    ///
    /// Fails with [`InvalidSize`] for a zero size. The 5..=19 range of the
    /// game domain is the session layer's rule, not enforced here.
    pub fn new(size: usize, first_turn: Stone) -> Result<Self, InvalidSize> {
        if size == 0 {
            return Err(InvalidSize(size));
        }
        debug_assert!(first_turn.is_stone(), "turn must be black or white");
        Ok(Self {
            board: Board::empty(size),
            turn: first_turn,
            history: VecDeque::with_capacity(2),
            caught: CaughtStones::default(),
            moves: Vec::new(),
        })
    }

    /// Discard the game in progress and start over on a fresh board.
    ///
    /// Clears the grid, history, caught counters, and move log. The session
    /// layer calls this when a game restarts, e.g. when the second player
    /// joins and moves made solo are thrown away.
    pub fn reset(&mut self, size: usize, first_turn: Stone) -> Result<(), InvalidSize> {
        *self = Self::new(size, first_turn)?;
        Ok(())
    }

    /// The current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose move is legal right now.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Cumulative capture counters.
    pub fn caught(&self) -> CaughtStones {
        self.caught
    }

    /// The most recently accepted move, if any.
    pub fn last_move(&self) -> Option<(Point, Stone)> {
        self.moves.last().copied()
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Hand the move to the other color without placing a stone.
    ///
    /// This is the hook the session layer uses to implement a pass; the
    /// board and the ko history window are left alone.
    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Attempt to place a stone of the current turn's color at `p`.
    ///
    /// The legality protocol, in order: bounds, occupancy, tentative
    /// placement, opponent capture resolution, suicide check, positional ko
    /// check, commit. Captures resolve before the suicide check because
    /// taking the opponent's last liberty can rescue a group that would
    /// otherwise look self-killed.
    ///
    /// On success the turn flips and the capture delta is returned. On any
    /// rejection the board, turn, counters, history, and move log are
    /// unchanged.
    pub fn play(&mut self, p: Point) -> Result<MoveOutcome, MoveError> {
        if !self.board.contains(p) {
            return Err(MoveError::OutOfRange);
        }
        if self.board.get(p) != Some(Stone::Empty) {
            return Err(MoveError::Occupied);
        }

        let color = self.turn;

        // All speculative mutation happens on a scratch board; the real one
        // is replaced only at commit.
        let mut next = self.board.clone();
        next.set(p, color);

        // Capture pass: every opponent group left without a liberty comes
        // off. Scanning the whole board in row-major order keeps removal
        // deterministic; only groups touching `p` can actually die.
        let mut captured: Vec<Point> = Vec::new();
        for group in next.groups(color.opponent()) {
            if group.liberty_count() == 0 {
                for &s in group.stones() {
                    next.set(s, Stone::Empty);
                }
                captured.extend_from_slice(group.stones());
            }
        }

        // Suicide check runs after captures so a capturing move is never
        // mistaken for self-kill.
        if next.group_at(p).liberty_count() == 0 {
            return Err(MoveError::Suicide);
        }

        // Positional ko: the newest history entry is the board as it stood
        // two plies before the position we are about to create. With fewer
        // than two accepted moves behind us there is nothing to repeat.
        if self.history.back() == Some(&next) {
            return Err(MoveError::Ko);
        }

        // Commit.
        let k = captured.len() as u32;
        let mut removed = CaughtStones::default();
        match color.opponent() {
            Stone::Black => removed.black = k,
            Stone::White => removed.white = k,
            Stone::Empty => {}
        }
        self.caught.black += removed.black;
        self.caught.white += removed.white;

        if self.history.len() == 2 {
            self.history.pop_front();
        }
        let prev = std::mem::replace(&mut self.board, next);
        self.history.push_back(prev);

        self.turn = color.opponent();
        self.moves.push((p, color));

        Ok(MoveOutcome {
            point: p,
            color,
            captured,
            removed,
            caught: self.caught,
        })
    }
}
