use std::slice::Iter;

/// The eight compass directions around a die, in the order neighbours
/// are linked during board construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::West,
            Direction::East,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
        ];
        DIRS.iter()
    }

    /// Row/column deltas for this direction.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::SouthWest => (1, -1),
            Self::South => (1, 0),
            Self::SouthEast => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Returns the neighbouring position in the given direction, or `None`
    /// when it would fall off a `rows` x `cols` grid.
    pub fn step(&self, dir: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= rows as isize || col >= cols as isize {
            None
        } else {
            Some(Position {
                row: row as usize,
                col: col as usize,
            })
        }
    }

    /// Converts the row/col to a row-major 1d index.
    pub fn as_index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}
