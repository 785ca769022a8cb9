use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A board square addressed by its linear index.
///
/// Index 0 is the top-left corner as the board is laid out at setup (a8),
/// indices grow along the rank first (a8, b8, ..., h8, a7, ...) and index 63
/// is h1. `file = index % 8`, `row = index / 8`, and the rank digit shown to
/// the user is `8 - row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// Error returned when an algebraic coordinate such as `"e4"` cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square coordinate: {0:?}")]
pub struct ParseSquareError(pub String);

impl Square {
    /// Creates a square from its linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..64`.
    pub fn new(index: u8) -> Self {
        assert!(index < 64, "square index {} out of bounds (0-63)", index);
        Self(index)
    }

    /// Creates a square from its linear index, returning `None` when out of range.
    pub fn try_new(index: i32) -> Option<Self> {
        if (0..64).contains(&index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Creates a square from a file (0 = a) and a row (0 = rank 8).
    pub fn from_file_row(file: u8, row: u8) -> Option<Self> {
        if file < 8 && row < 8 {
            Some(Self(row * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from an algebraic coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is malformed. Use [`str::parse`] for fallible parsing.
    pub fn at(coordinate: &str) -> Self {
        coordinate
            .parse()
            .unwrap_or_else(|err| panic!("{}", err))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Row counted from the top of the board (0 holds rank 8).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 8
    }

    /// Rank digit as printed on the board (1..=8).
    #[inline]
    pub fn rank(self) -> u8 {
        8 - self.row()
    }

    /// Steps `file_delta` files right and `rank_delta` ranks up.
    ///
    /// Returns `None` when the step leaves the board, so no move can wrap
    /// around from the h-file to the a-file.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let row = self.row() as i8 - rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&row) {
            Some(Self((row * 8 + file) as u8))
        } else {
            None
        }
    }

    /// True for light squares (a8 and h1 are light).
    pub fn is_light(self) -> bool {
        (self.file() + self.row()) % 2 == 0
    }

    /// Absolute file distance between two squares.
    pub fn file_distance(self, other: Square) -> u8 {
        self.file().abs_diff(other.file())
    }

    /// Absolute row distance between two squares.
    pub fn row_distance(self, other: Square) -> u8 {
        self.row().abs_diff(other.row())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSquareError(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseSquareError(s.to_string()));
        }
        let row = 7 - (rank - b'1');
        Ok(Self(row * 8 + (file - b'a')))
    }
}
