//! Board grid and stone representation.
//!
//! The board is a square grid of intersections stored row-major in a flat
//! `Vec<Stone>`. Coordinates are 0-indexed `(x, y)` pairs with `x` as the
//! column and `y` as the row. Out-of-bounds lookups return `None` rather
//! than panicking, so neighbor probes can run right off the edge of the
//! board without special-casing.

use std::fmt;

/// Contents of a single intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// The opposing color. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Whether this is an actual stone (not an empty intersection).
    pub fn is_stone(self) -> bool {
        self != Stone::Empty
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stone::Black => "black",
            Stone::White => "white",
            Stone::Empty => "empty",
        };
        write!(f, "{s}")
    }
}

/// A board coordinate: `(x, y)`, 0-indexed, x = column, y = row.
///
/// Signed so that neighbor arithmetic at the left and top edges produces
/// ordinary off-board coordinates instead of underflowing.
pub type Point = (i32, i32);

/// A square grid of intersections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `size x size` board. The caller has already
    /// validated the size; see [`crate::engine::BoardEngine::new`].
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `p` lies on the board.
    pub fn contains(&self, (x, y): Point) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    pub(crate) fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.size + x as usize
    }

    /// The stone at `p`, or `None` if `p` is off the board.
    ///
    /// `Some(Stone::Empty)` and `None` are distinct on purpose: an empty
    /// in-bounds neighbor is a liberty, an off-board neighbor is nothing.
    pub fn get(&self, p: Point) -> Option<Stone> {
        if self.contains(p) {
            Some(self.cells[self.idx(p)])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, p: Point, stone: Stone) {
        let i = self.idx(p);
        self.cells[i] = stone;
    }

    /// The in-bounds orthogonal neighbors of `p` (top, left, bottom, right).
    ///
    /// Off-board neighbors are simply absent, so edge and corner stones see
    /// exactly their real adjacent intersections.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + '_ {
        [(x, y - 1), (x - 1, y), (x, y + 1), (x + 1, y)]
            .into_iter()
            .filter(|&p| self.contains(p))
    }

    /// All on-board points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let ch = match self.get((x, y)) {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    _ => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
