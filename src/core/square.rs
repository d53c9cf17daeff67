use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::core::coord::Coord;
use crate::error::{ChessError, ChessResult};

/// Largest supported side length (files or ranks).
pub const MAX_SIDE: u8 = 16;

/// Board geometry: number of files (columns) and ranks (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardDims {
    pub files: u8,
    pub ranks: u8,
}

impl BoardDims {
    pub const STANDARD: BoardDims = BoardDims { files: 8, ranks: 8 };

    pub const fn new(files: u8, ranks: u8) -> Self {
        Self { files, ranks }
    }

    /// Both sides must be in `1..=MAX_SIDE`.
    pub fn validate(self) -> ChessResult<()> {
        let side_ok = |n: u8| (1..=MAX_SIDE).contains(&n);
        if side_ok(self.files) && side_ok(self.ranks) {
            Ok(())
        } else {
            Err(ChessError::UnsupportedDims {
                files: self.files,
                ranks: self.ranks,
            })
        }
    }

    #[inline]
    pub fn area(self) -> usize {
        self.files as usize * self.ranks as usize
    }

    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.files as i32 && c.y < self.ranks as i32
    }

    /// Dense index of a square, rank-major.
    #[inline]
    pub fn index_of(self, sq: Square) -> usize {
        sq.rank as usize * self.files as usize + sq.file as usize
    }

    /// Every square of the board, rank 0 first.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.ranks).flat_map(move |rank| (0..self.files).map(move |file| Square { file, rank }))
    }
}

impl Default for BoardDims {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A square on the board.
///
/// A `Square` can only be obtained through a bounds-checked constructor, so any stored
/// square lies on the board it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8, dims: BoardDims) -> Option<Square> {
        (file < dims.files && rank < dims.ranks).then_some(Square { file, rank })
    }

    pub fn from_coord(c: Coord, dims: BoardDims) -> Option<Square> {
        if dims.contains(c) {
            Some(Square {
                file: c.x as u8,
                rank: c.y as u8,
            })
        } else {
            None
        }
    }

    /// Parse a square name like `e4`.
    pub fn parse(name: &str, dims: BoardDims) -> ChessResult<Square> {
        let invalid = || ChessError::InvalidSquare {
            name: name.to_string(),
        };
        let mut chars = name.trim().chars();
        let file_ch = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        if !file_ch.is_ascii_lowercase() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let rank: u8 = digits.parse().map_err(|_| invalid())?;
        if rank == 0 {
            return Err(invalid());
        }
        let file = file_ch as u8 - b'a';
        Square::new(file, rank - 1, dims).ok_or_else(invalid)
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.file as i32, self.rank as i32)
    }

    /// The square `delta` away, if it is on the board.
    #[inline]
    pub fn offset(self, delta: Coord, dims: BoardDims) -> Option<Square> {
        Square::from_coord(self.coord() + delta, dims)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank as u32 + 1)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
