use serde::{Deserialize, Serialize};

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    Detonated,
}

impl CellView {
    /// Whether the cell is still visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// State of one grid position.
///
/// Mutators are crate-private, only the board may move a cell between states so its running
/// counters stay in sync.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    neighbor_mine_count: u8,
    is_revealed: bool,
    is_flagged: bool,
    is_detonated: bool,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn neighbor_mine_count(&self) -> u8 {
        self.neighbor_mine_count
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_detonated(&self) -> bool {
        self.is_detonated
    }

    /// Safe cell with no adjacent mines, the only kind the cascade passes through.
    pub const fn is_zero(&self) -> bool {
        !self.is_mine && self.neighbor_mine_count == 0
    }

    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_mine) {
            (false, _) if self.is_flagged => CellView::Flagged,
            (false, _) => CellView::Hidden,
            (true, true) if self.is_detonated => CellView::Detonated,
            (true, true) => CellView::Mine,
            (true, false) => CellView::Revealed(self.neighbor_mine_count),
        }
    }

    pub(crate) fn plant_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn increment_neighbor_mine_count(&mut self) {
        debug_assert!(self.neighbor_mine_count < 8);
        self.neighbor_mine_count += 1;
    }

    /// Returns whether the cell was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.is_revealed, true)
    }

    /// Returns the new flag state.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.is_flagged = !self.is_flagged;
        self.is_flagged
    }

    pub(crate) fn clear_flag(&mut self) -> bool {
        core::mem::take(&mut self.is_flagged)
    }

    pub(crate) fn detonate(&mut self) {
        debug_assert!(self.is_mine);
        self.is_detonated = true;
    }
}
