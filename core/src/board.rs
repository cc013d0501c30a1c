use alloc::vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Ready,
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Ready
    }
}

/// The grid of cells together with the running counters of one game.
///
/// Every counter is adjusted on the mutation that changes it and never recomputed from the
/// grid. Once the game is won or lost every mutator becomes a no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    num_mines: CellCount,
    num_revealed: CellCount,
    num_flags: CellCount,
    mines_correctly_flagged: CellCount,
    deployed: bool,
    started: bool,
    won: bool,
    lost: bool,
    detonated: Option<Coord2>,
}

impl Board {
    /// Empty board without any mines.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    /// Empty board with the standard dimensions.
    pub fn standard() -> Self {
        Self::empty(STANDARD_SIZE)
    }

    fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            num_mines: 0,
            num_revealed: 0,
            num_flags: 0,
            mines_correctly_flagged: 0,
            deployed: false,
            started: false,
            won: false,
            lost: false,
            detonated: None,
        }
    }

    /// Empty board sized by `config`, with `config.mines` mines deployed from `rng`.
    pub fn with_config(config: GameConfig, rng: impl MineRng) -> Result<Self> {
        let mut board = Self::new(config.size)?;
        board.deploy_mines(config.mines, rng)?;
        Ok(board)
    }

    /// Board with mines at exactly the given positions, duplicates are planted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;
        if let Some(&coords) = mine_coords.iter().find(|&&coords| !in_bounds(coords, size)) {
            return Err(GameError::InvalidCoords(coords));
        }
        for &coords in mine_coords {
            board.plant_mine(coords);
        }
        let capacity = board.total_cells() - 1;
        if board.num_mines > capacity {
            return Err(GameError::TooManyMines {
                requested: board.num_mines,
                capacity,
            });
        }
        board.deployed = true;
        Ok(board)
    }

    /// Places `count` mines at uniformly random free positions.
    ///
    /// Positions are drawn until a cell without a mine comes up, so any number of repeated
    /// draws is tolerated. Can only be called once, before the board is played.
    pub fn deploy_mines(&mut self, count: CellCount, mut rng: impl MineRng) -> Result<()> {
        if self.deployed {
            log::warn!("Rejected second mine deployment of {} mines", count);
            return Err(GameError::AlreadyDeployed);
        }
        if self.started {
            log::warn!("Rejected mine deployment on a board already in play");
            return Err(GameError::AlreadyStarted);
        }
        let capacity = self.total_cells() - 1;
        if count > capacity {
            log::warn!("Rejected deployment of {} mines, only {} fit", count, capacity);
            return Err(GameError::TooManyMines {
                requested: count,
                capacity,
            });
        }

        let (rows, cols) = self.size();
        let mut rejected = 0usize;
        while self.num_mines < count {
            // both draws are below the dimensions, which are `Coord`s
            let row = rng.uniform(rows.into()) as Coord;
            let col = rng.uniform(cols.into()) as Coord;
            if !self.plant_mine((row, col)) {
                rejected += 1;
            }
        }
        self.deployed = true;
        log::debug!(
            "Deployed {} mines on {:?} board, {} draws rejected",
            count,
            self.size(),
            rejected
        );
        Ok(())
    }

    /// Turns a safe cell into a mine and updates the counts around it.
    fn plant_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            return false;
        }
        cell.plant_mine();
        for pos in self.cells.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()].increment_neighbor_mine_count();
        }
        self.num_mines += 1;
        true
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_finished() || !in_bounds(coords, self.size()) {
            return RevealOutcome::NoChange;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_flagged() || !cell.reveal() {
            return RevealOutcome::NoChange;
        }
        self.num_revealed += 1;
        self.mark_started();

        let cell = self.cells[coords.to_nd_index()];
        log::debug!(
            "Reveal cell at {:?}, mine: {}, count: {}",
            coords,
            cell.is_mine(),
            cell.neighbor_mine_count()
        );

        if cell.is_mine() {
            self.detonate(coords);
            return RevealOutcome::HitMine;
        }
        if cell.is_zero() {
            self.flood_reveal(coords);
        }

        if self.check_won(coords) {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Reveals the region connected to a zero cell through other zero cells, plus its border.
    ///
    /// The revealed flags act as the visited set. Flags inside the region are cleared.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut pending = vec![origin];
        log::trace!("Starting flood reveal from {:?}", origin);

        while let Some(coords) = pending.pop() {
            for pos in self.cells.iter_neighbors(coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if !cell.reveal() {
                    continue;
                }
                debug_assert!(!cell.is_mine(), "zero cell next to a mine at {:?}", pos);
                if cell.clear_flag() {
                    self.num_flags -= 1;
                }
                self.num_revealed += 1;
                log::trace!(
                    "Flood revealed cell at {:?}, count: {}",
                    pos,
                    cell.neighbor_mine_count()
                );

                if cell.is_zero() {
                    pending.push(pos);
                }
            }
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_finished() || !in_bounds(coords, self.size()) {
            return MarkOutcome::NoChange;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed() {
            return MarkOutcome::NoChange;
        }
        let is_mine = cell.is_mine();
        if cell.toggle_flag() {
            self.num_flags += 1;
            if is_mine {
                self.mines_correctly_flagged += 1;
            }
        } else {
            self.num_flags -= 1;
            if is_mine {
                self.mines_correctly_flagged -= 1;
            }
        }
        self.mark_started();

        if self.check_won(coords) {
            MarkOutcome::Won
        } else {
            MarkOutcome::Changed
        }
    }

    /// Evaluates both win triggers after an accepted action on `acted`.
    fn check_won(&mut self, acted: Coord2) -> bool {
        let cleared = self.cells_remaining() == self.num_mines
            && !self.cells[acted.to_nd_index()].is_mine();
        let won = cleared || self.all_mines_flagged();
        if won {
            self.won = true;
            log::debug!(
                "Game won, {} revealed, {} flags",
                self.num_revealed,
                self.num_flags
            );
        }
        won
    }

    fn all_mines_flagged(&self) -> bool {
        if self.num_mines == 0 || self.num_flags != self.num_mines {
            return false;
        }
        let all_flagged = self
            .cells
            .iter()
            .filter(|cell| cell.is_mine())
            .all(|cell| cell.is_flagged());
        debug_assert_eq!(
            all_flagged,
            self.mines_correctly_flagged == self.num_mines
        );
        all_flagged
    }

    fn detonate(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].detonate();
        self.detonated = Some(coords);
        self.lost = true;
        // shown for display only, the revealed counter stays untouched
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine()) {
            cell.reveal();
        }
        log::debug!("Game lost, mine detonated at {:?}", coords);
    }

    fn mark_started(&mut self) {
        if !self.started {
            self.started = true;
            log::debug!("Game started");
        }
    }

    pub fn state(&self) -> BoardState {
        match (self.won, self.lost, self.started) {
            (_, true, _) => BoardState::Lost,
            (true, _, _) => BoardState::Won,
            (_, _, true) => BoardState::Active,
            _ => BoardState::Ready,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.won || self.lost
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    pub fn is_deployed(&self) -> bool {
        self.deployed
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn num_mines(&self) -> CellCount {
        self.num_mines
    }

    pub fn num_revealed(&self) -> CellCount {
        self.num_revealed
    }

    pub fn num_flags(&self) -> CellCount {
        self.num_flags
    }

    pub fn mines_correctly_flagged(&self) -> CellCount {
        self.mines_correctly_flagged
    }

    /// Cells not yet revealed by the player.
    pub fn cells_remaining(&self) -> CellCount {
        self.total_cells() - self.num_revealed
    }

    /// Mines minus flags, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.num_mines as isize) - (self.num_flags as isize)
    }

    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cell_at(coords).map(Cell::view)
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
