use alloc::vec::Vec;

use crate::*;

/// Glyph shown on a clue cell that has not been revealed.
pub const PLACEHOLDER: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    pub column: usize,
    pub title: &'a str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyCell<'a> {
    pub key: CellKey,
    pub state: RevealState,
    pub text: &'a str,
}

impl BodyCell<'_> {
    pub const fn is_answered(&self) -> bool {
        self.state.is_answered()
    }

    /// Whether a click on this cell would change anything.
    pub const fn is_clickable(&self) -> bool {
        !self.state.is_answered()
    }
}

/// One header cell per category, in board order.
pub fn header(board: &Board) -> impl Iterator<Item = HeaderCell<'_>> {
    board
        .categories()
        .iter()
        .enumerate()
        .map(|(column, category)| HeaderCell {
            column,
            title: &category.title,
        })
}

/// Clue cells row by row: `board.rows()` rows of `board.columns()` cells.
pub fn body(board: &Board) -> Vec<Vec<BodyCell<'_>>> {
    (0..board.rows())
        .map(|row| {
            (0..board.columns())
                .map(|column| body_cell(board, CellKey::new(row, column)))
                .collect()
        })
        .collect()
}

fn body_cell(board: &Board, key: CellKey) -> BodyCell<'_> {
    let clue = &board[key];
    BodyCell {
        key,
        state: clue.reveal_state(),
        text: clue.shown_text().unwrap_or(PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    fn board() -> Board {
        Board::new(
            ["Math", "Poets"]
                .into_iter()
                .enumerate()
                .map(|(i, title)| Category {
                    id: i as u64 + 1,
                    title: title.into(),
                    clues: (0..3)
                        .map(|row| Clue::new(format!("{title} q{row}"), format!("{title} a{row}")))
                        .collect(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn header_follows_board_order() {
        let board = board();

        let titles: Vec<_> = header(&board).map(|cell| (cell.column, cell.title)).collect();

        assert_eq!(titles, vec![(0, "Math"), (1, "Poets")]);
    }

    #[test]
    fn body_is_rows_by_columns_of_placeholders() {
        let board = board();

        let rows = body(&board);

        assert_eq!(rows.len(), 3);
        for (row, cells) in rows.iter().enumerate() {
            assert_eq!(cells.len(), 2);
            for (column, cell) in cells.iter().enumerate() {
                assert_eq!(cell.key, CellKey::new(row, column));
                assert_eq!(cell.text, PLACEHOLDER);
                assert!(cell.is_clickable());
            }
        }
    }

    #[test]
    fn cell_key_maps_back_to_clue() {
        let mut board = board();
        let key = CellKey::new(2, 1);

        board.reveal(key).unwrap();
        let rows = body(&board);
        let cell = rows[key.row][key.column];

        assert_eq!(cell.text, "Poets q2");
        assert_eq!(cell.state, RevealState::Question);

        board.reveal(key).unwrap();
        let rows = body(&board);
        let cell = rows[key.row][key.column];

        assert_eq!(cell.text, "Poets a2");
        assert!(cell.is_answered());
        assert!(!cell.is_clickable());
    }
}
