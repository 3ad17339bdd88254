use crate::{direction::Direction, error::GameError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIZE: usize = 4;

pub type Rows = [[u32; SIZE]; SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a merged tile landed and the value it was doubled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    pub position: Position,
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub changed: bool,
    pub score_delta: u64,
    pub merges: Vec<Merge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnOutcome {
    Placed { position: Position, value: u32 },
    BoardFull,
}

impl SpawnOutcome {
    pub fn placed(&self) -> bool {
        matches!(self, SpawnOutcome::Placed { .. })
    }
}

/// A single line after sliding, ordered from the leading edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSlide {
    pub cells: [u32; SIZE],
    pub gained: u64,
    pub merged: [bool; SIZE],
}

/// Compacts and merges one line toward index 0.
///
/// Each tile takes part in at most one merge, and a freshly merged tile is
/// never compared again, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Two
/// `1 << 31` tiles cannot double in a `u32` and are left side by side.
pub fn slide_line(line: [u32; SIZE]) -> LineSlide {
    let mut slid = LineSlide::default();
    let mut tiles = line.into_iter().filter(|&value| value != 0).peekable();

    let mut slot = 0;
    while let Some(value) = tiles.next() {
        match value.checked_mul(2) {
            Some(doubled) if tiles.next_if_eq(&value).is_some() => {
                slid.cells[slot] = doubled;
                slid.gained += doubled as u64;
                slid.merged[slot] = true;
            }
            // a pair of the largest representable tile stays unmerged
            _ => slid.cells[slot] = value,
        }
        slot += 1;
    }

    slid
}

/// 4x4 grid stored row-major, `0` marks an empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Board(Rows);

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from row-major values, rejecting anything that is not
    /// empty or a power of two of at least 2.
    pub fn from_rows(rows: Rows) -> Result<Self, GameError> {
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GameError::InvalidTile {
                        position: Position::new(row, col),
                        value,
                    });
                }
            }
        }
        Ok(Self(rows))
    }

    pub fn rows(&self) -> &Rows {
        &self.0
    }

    /// Tile value at `pos`, `None` when the cell is empty or off the board.
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.0
            .get(pos.row)?
            .get(pos.col)
            .copied()
            .filter(|&value| value != 0)
    }

    pub(crate) fn value(&self, pos: Position) -> u32 {
        self.0[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        self.0[pos.row][pos.col] = value;
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, &value)| (Position::new(row, col), value))
        })
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells()
            .filter(|&(_, value)| value == 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, value)| value != 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells().map(|(_, value)| value).max().unwrap_or(0)
    }

    /// The positions of line `index` listed from the edge tiles move toward
    /// back to the opposite edge.
    pub fn line_positions(direction: Direction, index: usize) -> [Position; SIZE] {
        std::array::from_fn(|offset| {
            let along = match direction {
                Direction::Left | Direction::Up => offset,
                Direction::Right | Direction::Down => SIZE - 1 - offset,
            };
            if direction.is_horizontal() {
                Position::new(index, along)
            } else {
                Position::new(along, index)
            }
        })
    }

    /// Slides every line in `direction`, merging equal neighbours once.
    pub fn slide(&mut self, direction: Direction) -> MoveResult {
        let mut result = MoveResult::default();

        for index in 0..SIZE {
            let positions = Self::line_positions(direction, index);
            let before = positions.map(|pos| self.value(pos));
            let slid = slide_line(before);

            if slid.cells != before {
                result.changed = true;
            }
            result.score_delta += slid.gained;

            for (slot, pos) in positions.into_iter().enumerate() {
                self.set(pos, slid.cells[slot]);
                if slid.merged[slot] {
                    result.merges.push(Merge {
                        position: pos,
                        value: slid.cells[slot],
                    });
                }
            }
        }

        result
    }

    /// Look ahead without touching `self`.
    pub fn slid(&self, direction: Direction) -> (Board, MoveResult) {
        let mut next = *self;
        let result = next.slide(direction);
        (next, result)
    }

    pub fn can_slide(&self, direction: Direction) -> bool {
        self.slid(direction).1.changed
    }

    /// Places a 2, or a 4 with probability `four_probability`, on a uniformly
    /// chosen empty cell.
    pub fn spawn_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        four_probability: f64,
    ) -> SpawnOutcome {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return SpawnOutcome::BoardFull;
        }

        let position = empty[rng.random_range(0..empty.len())];
        let value = if rng.random::<f64>() < four_probability {
            4
        } else {
            2
        };
        self.set(position, value);

        SpawnOutcome::Placed { position, value }
    }

    pub fn has_adjacent_pair(&self) -> bool {
        self.cells().any(|(pos, value)| {
            value != 0
                && ((pos.col + 1 < SIZE && self.0[pos.row][pos.col + 1] == value)
                    || (pos.row + 1 < SIZE && self.0[pos.row + 1][pos.col] == value))
        })
    }

    /// No empty cell and no equal neighbours.
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }
}

impl TryFrom<Rows> for Board {
    type Error = GameError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for values in self.0.iter() {
            for value in values {
                if *value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
