use crate::types::Cell;

pub const BOARD_SIZE: u8 = 5;
pub const MAX_BOARD_SIZE: u8 = 9;

/// Upper bound on one piece's destinations: a rook or bishop on the largest
/// supported board.
pub const MAX_DESTINATIONS: usize = 2 * (MAX_BOARD_SIZE as usize - 1);

/// Indexed by `PieceKind as usize`.
pub const PIECE_CODES: [char; 7] = ['g', 's', 'p', 'n', 'l', 'r', 'b'];

pub const PIECE_KANJI: [char; 7] = ['金', '銀', '歩', '桂', '香', '飛', '角'];

/// Every cell of the standard board, row-major from the forward edge.
pub const CELLS: [Cell; 25] = [
    Cell::new_unchecked(0, 0),
    Cell::new_unchecked(0, 1),
    Cell::new_unchecked(0, 2),
    Cell::new_unchecked(0, 3),
    Cell::new_unchecked(0, 4),
    Cell::new_unchecked(1, 0),
    Cell::new_unchecked(1, 1),
    Cell::new_unchecked(1, 2),
    Cell::new_unchecked(1, 3),
    Cell::new_unchecked(1, 4),
    Cell::new_unchecked(2, 0),
    Cell::new_unchecked(2, 1),
    Cell::new_unchecked(2, 2),
    Cell::new_unchecked(2, 3),
    Cell::new_unchecked(2, 4),
    Cell::new_unchecked(3, 0),
    Cell::new_unchecked(3, 1),
    Cell::new_unchecked(3, 2),
    Cell::new_unchecked(3, 3),
    Cell::new_unchecked(3, 4),
    Cell::new_unchecked(4, 0),
    Cell::new_unchecked(4, 1),
    Cell::new_unchecked(4, 2),
    Cell::new_unchecked(4, 3),
    Cell::new_unchecked(4, 4),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn code_tables_are_indexed_by_kind() {
        assert_eq!(PIECE_CODES[PieceKind::Knight as usize], 'n');
        assert_eq!(PIECE_KANJI[PieceKind::Rook as usize], '飛');
        assert_eq!(PIECE_CODES.len(), PieceKind::ALL.len());
    }

    #[test]
    fn cells_cover_board_once() {
        for (idx, cell) in CELLS.iter().enumerate() {
            assert_eq!(usize::from(cell.row) * usize::from(BOARD_SIZE) + usize::from(cell.col), idx);
        }
    }
}
