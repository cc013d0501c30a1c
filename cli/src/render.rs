use std::fmt::Write;
use sweep_core::{Board, BoardState, CellView};

pub fn cell_char(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '*',
        CellView::Detonated => 'X',
    }
}

/// Grid with row numbers down the left and column numbers (mod 10) across the top.
pub fn render_board(board: &Board) -> String {
    let (rows, cols) = board.size();
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..cols {
        out.push(char::from(b'0' + col % 10));
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>3} ");
        for col in 0..cols {
            let view = board.view_at((row, col)).unwrap_or(CellView::Hidden);
            out.push(cell_char(view));
        }
        out.push('\n');
    }
    out
}

pub fn status_line(board: &Board, elapsed_secs: u64) -> String {
    let banner = match board.state() {
        BoardState::Won => " - You win!",
        BoardState::Lost => " - Game over",
        BoardState::Ready | BoardState::Active => "",
    };
    format!(
        "mines left: {} | time: {}s{}",
        board.mines_left(),
        elapsed_secs,
        banner
    )
}
