//! Stone group detection and liberty counting.
//!
//! A group is the maximal set of same-colored stones connected through
//! 4-directional adjacency. Groups are derived values, recomputed on demand
//! from a board snapshot; nothing here is persistent state.
//!
//! Both walks are iterative flood fills over explicit visited sets. Groups
//! routinely form rings on the grid, so the fill must track what it has
//! already taken rather than lean on the call stack.

use crate::board::{Board, Point, Stone};

/// A connected group of same-colored stones, with its distinct liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneGroup {
    color: Stone,
    stones: Vec<Point>,
    liberties: Vec<Point>,
}

impl StoneGroup {
    fn empty() -> Self {
        Self {
            color: Stone::Empty,
            stones: Vec::new(),
            liberties: Vec::new(),
        }
    }

    pub fn color(&self) -> Stone {
        self.color
    }

    /// Member positions, in the order the flood fill reached them.
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Distinct empty intersections adjacent to the group. An empty point
    /// touching several members counts once.
    pub fn liberties(&self) -> &[Point] {
        &self.liberties
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }
}

impl Board {
    /// The group containing the stone at `seed`.
    ///
    /// Returns an empty group if `seed` is off the board or holds no stone.
    pub fn group_at(&self, seed: Point) -> StoneGroup {
        let color = match self.get(seed) {
            Some(s) if s.is_stone() => s,
            _ => return StoneGroup::empty(),
        };

        let mut stones = Vec::new();
        let mut liberties = Vec::new();
        let mut visited = vec![false; self.size() * self.size()];
        let mut liberty_seen = vec![false; self.size() * self.size()];
        let mut stack = vec![seed];

        while let Some(p) = stack.pop() {
            let i = self.idx(p);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            stones.push(p);

            for n in self.neighbors(p) {
                let ni = self.idx(n);
                match self.get(n) {
                    Some(Stone::Empty) => {
                        if !liberty_seen[ni] {
                            liberty_seen[ni] = true;
                            liberties.push(n);
                        }
                    }
                    Some(c) if c == color && !visited[ni] => stack.push(n),
                    _ => {}
                }
            }
        }

        StoneGroup {
            color,
            stones,
            liberties,
        }
    }

    /// Every group of the given color, scanning seeds in row-major order.
    ///
    /// The result is a disjoint partition of all `color` stones: each stone
    /// appears in exactly one group. Empty boards yield an empty vec.
    pub fn groups(&self, color: Stone) -> Vec<StoneGroup> {
        let mut found = Vec::new();
        if !color.is_stone() {
            return found;
        }
        let mut claimed = vec![false; self.size() * self.size()];

        for p in self.points() {
            if claimed[self.idx(p)] || self.get(p) != Some(color) {
                continue;
            }
            let group = self.group_at(p);
            for &s in group.stones() {
                claimed[self.idx(s)] = true;
            }
            found.push(group);
        }
        found
    }
}
