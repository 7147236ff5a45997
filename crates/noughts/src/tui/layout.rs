//! Screen geometry: where the board sits and which cell a pointer is over.

use noughts_rules::GRID_SIZE;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use tracing::instrument;

/// Rows reserved for the header.
const HEADER_HEIGHT: u16 = 3;
/// Rows reserved for the footer.
const FOOTER_HEIGHT: u16 = 3;
/// Cap on cell height so large terminals do not get huge cells.
const MAX_CELL_HEIGHT: u16 = 7;
/// Terminal cells are roughly twice as tall as wide.
const CELL_ASPECT: u16 = 2;

/// Placement of every region on screen for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and current player.
    pub header: Rect,
    /// Area the board is centred in.
    pub body: Rect,
    /// Messages and key help.
    pub footer: Rect,
    /// `None` when the terminal is too small to draw the board.
    pub board: Option<BoardLayout>,
}

impl ScreenLayout {
    /// Splits the terminal area into header, body and footer.
    #[instrument(level = "trace")]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            footer: chunks[2],
            board: BoardLayout::fit(chunks[1]),
        }
    }

    /// Maps a pointer position to a board cell; `None` off the board.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        self.board.and_then(|board| board.cell_at(x, y))
    }
}

/// Square-looking 3x3 board with one-character grid lines between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Whole board including grid lines.
    pub area: Rect,
    cells: [[Rect; GRID_SIZE]; GRID_SIZE],
}

impl BoardLayout {
    /// Fits the largest board that fits in `area`, centred.
    pub fn fit(area: Rect) -> Option<Self> {
        let lines = GRID_SIZE as u16 - 1;
        let cells = GRID_SIZE as u16;
        let by_height = area.height.saturating_sub(lines) / cells;
        let by_width = area.width.saturating_sub(lines) / cells / CELL_ASPECT;
        let cell_height = by_height.min(by_width).min(MAX_CELL_HEIGHT);
        if cell_height == 0 {
            return None;
        }
        let cell_width = cell_height * CELL_ASPECT;

        let board = center_rect(
            area,
            cell_width * cells + lines,
            cell_height * cells + lines,
        );

        let mut rects = [[Rect::default(); GRID_SIZE]; GRID_SIZE];
        for (row, rects_row) in rects.iter_mut().enumerate() {
            for (col, rect) in rects_row.iter_mut().enumerate() {
                *rect = Rect::new(
                    board.x + col as u16 * (cell_width + 1),
                    board.y + row as u16 * (cell_height + 1),
                    cell_width,
                    cell_height,
                );
            }
        }

        Some(Self {
            area: board,
            cells: rects,
        })
    }

    /// Rectangle of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rect> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Finds the cell containing `(x, y)`. Grid lines belong to no cell.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let point = Position::new(x, y);
        if !self.area.contains(point) {
            return None;
        }
        self.cells.iter().enumerate().find_map(|(row, rects)| {
            rects
                .iter()
                .position(|rect| rect.contains(point))
                .map(|col| (row, col))
        })
    }
}

/// Centres a `width` x `height` rectangle in `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terminal() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        let board = layout.board.expect("board fits");
        assert_eq!(board.area, Rect::new(14, 3, 32, 17));
        assert_eq!(board.cell(1, 1), Some(Rect::new(25, 9, 10, 5)));
    }

    #[test]
    fn test_pointer_to_cell() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        assert_eq!(layout.cell_at(14, 3), Some((0, 0)));
        assert_eq!(layout.cell_at(30, 11), Some((1, 1)));
        assert_eq!(layout.cell_at(45, 19), Some((2, 2)));
    }

    #[test]
    fn test_pointer_off_board() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.cell_at(59, 23), None);
        // Vertical grid line between the first two columns.
        assert_eq!(layout.cell_at(24, 4), None);
    }

    #[test]
    fn test_every_cell_reachable() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        let board = layout.board.unwrap();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let rect = board.cell(row, col).unwrap();
                assert_eq!(board.cell_at(rect.x, rect.y), Some((row, col)));
                assert_eq!(
                    board.cell_at(rect.right() - 1, rect.bottom() - 1),
                    Some((row, col))
                );
            }
        }
    }

    #[test]
    fn test_cells_capped() {
        let board = BoardLayout::fit(Rect::new(0, 0, 200, 100)).unwrap();
        assert_eq!(board.cell(0, 0).unwrap().height, MAX_CELL_HEIGHT);
    }

    #[test]
    fn test_tiny_terminal_has_no_board() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 10, 8));
        assert_eq!(layout.board, None);
        assert_eq!(layout.cell_at(5, 4), None);
    }
}
