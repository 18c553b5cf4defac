use arrayvec::ArrayVec;

use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE, MAX_DESTINATIONS, PIECE_CODES, PIECE_KANJI};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Gold = 0,
    Silver = 1,
    Pawn = 2,
    Knight = 3,
    Lance = 4,
    Rook = 5,
    Bishop = 6,
}

impl PieceKind {
    pub const ALL: [Self; 7] = [
        Self::Gold,
        Self::Silver,
        Self::Pawn,
        Self::Knight,
        Self::Lance,
        Self::Rook,
        Self::Bishop,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Lance => "lance",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }

    pub const fn kanji(self) -> char {
        PIECE_KANJI[self as usize]
    }

    pub fn from_kanji(kanji: char) -> Option<Self> {
        PIECE_KANJI
            .iter()
            .position(|&k| k == kanji)
            .map(|idx| Self::ALL[idx])
    }

    /// One-letter lower-case code, as used in stage configs.
    pub const fn code(self) -> char {
        PIECE_CODES[self as usize]
    }

    pub fn from_code(code: char) -> Option<Self> {
        PIECE_CODES
            .iter()
            .position(|&c| c == code)
            .map(|idx| Self::ALL[idx])
    }

    /// Lance, rook and bishop move along rays; everything else takes a
    /// single step or jump.
    pub const fn slides(self) -> bool {
        matches!(self, Self::Lance | Self::Rook | Self::Bishop)
    }
}

/// A board cell, 0-indexed. Row 0 is the far ("forward") edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Parses `"row,col"`, rejecting cells off the standard board.
    pub fn parse(input: &str) -> Option<Self> {
        let (row, col) = input.split_once(',')?;
        let row = row.trim().parse::<u8>().ok()?;
        let col = col.trim().parse::<u8>().ok()?;
        Self::new(row, col)
    }

    /// The cell shifted by `(dr, dc)`, or `None` if either coordinate would
    /// leave the non-negative range. Upper bounds are the caller's concern.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    pub const fn as_pair(self) -> [u8; 2] {
        [self.row, self.col]
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub rows: u8,
    pub cols: u8,
}

impl Bounds {
    pub const BOARD: Self = Self {
        rows: BOARD_SIZE,
        cols: BOARD_SIZE,
    };

    pub const fn new(rows: u8, cols: u8) -> Option<Self> {
        if rows >= 1 && rows <= MAX_BOARD_SIZE && cols >= 1 && cols <= MAX_BOARD_SIZE {
            Some(Self { rows, cols })
        } else {
            None
        }
    }

    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::BOARD
    }
}

pub type Destinations = ArrayVec<Cell, MAX_DESTINATIONS>;
