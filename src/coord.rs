//! Go coordinate notation ("D4" style) for any board size.
//!
//! Columns run A..T left to right, skipping I by convention; rows count
//! from 1 at the bottom edge. These helpers convert between that notation
//! and the engine's 0-indexed `(x, y)` points, where y = 0 is the top row.

use crate::board::Point;

/// Parse a coordinate like `"D4"` into a point on a `size`-sided board.
///
/// Returns `None` for malformed input, the forbidden `I` column, or a
/// coordinate outside the board.
pub fn parse_coord(s: &str, size: usize) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return None;
    }

    let mut col = (col_char as u8 - b'A') as usize;
    if col_char > 'I' {
        col -= 1;
    }

    let row: usize = chars.as_str().parse().ok()?;
    if col >= size || row == 0 || row > size {
        return None;
    }

    Some((col as i32, (size - row) as i32))
}

/// Render a point as a coordinate string, e.g. `(3, 5)` on 9x9 -> `"D4"`.
///
/// Returns `None` for points off the board.
pub fn str_coord((x, y): Point, size: usize) -> Option<String> {
    if x < 0 || y < 0 || x as usize >= size || y as usize >= size {
        return None;
    }

    let mut col = b'A' + x as u8;
    if col >= b'I' {
        col += 1;
    }
    Some(format!("{}{}", col as char, size - y as usize))
}
