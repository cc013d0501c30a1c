use sweep_core::*;

/// Hits the first cell for a long streak, then walks every index in turn.
struct StubbornRng {
    draws: usize,
    streak: usize,
}

impl MineRng for StubbornRng {
    fn uniform(&mut self, bound: usize) -> usize {
        self.draws += 1;
        if self.draws <= self.streak {
            0
        } else {
            (self.draws / 2) % bound
        }
    }
}

fn mine_coords(board: &Board) -> Vec<Coord2> {
    board
        .iter_cells()
        .filter(|(_, cell)| cell.is_mine())
        .map(|(coords, _)| coords)
        .collect()
}

fn standard_board(mines: CellCount, seed: u64) -> Board {
    let mut board = Board::standard();
    board.deploy_mines(mines, SeededRng::new(seed)).unwrap();
    board
}

#[test]
fn deploy_count_holds_for_every_n_under_adversarial_draws() {
    let size = (3, 4);
    for count in 0..12 {
        let mut board = Board::new(size).unwrap();
        let rng = StubbornRng {
            draws: 0,
            streak: 50,
        };
        board.deploy_mines(count, rng).unwrap();

        assert_eq!(board.num_mines(), count);
        assert_eq!(mine_coords(&board).len(), count as usize);
        for (coords, cell) in board.iter_cells() {
            let expected = NeighborIter::new(coords, size)
                .filter(|&pos| board[pos].is_mine())
                .count();
            assert_eq!(cell.neighbor_mine_count() as usize, expected);
        }
    }
}

#[test]
fn flood_from_corner_never_reveals_lone_mine() {
    let mut board = Board::from_mine_coords((5, 5), &[(2, 2)]).unwrap();
    assert_eq!(board[(0, 0)].neighbor_mine_count(), 0);

    let outcome = board.reveal((0, 0));

    assert!(!board[(2, 2)].is_revealed());
    assert_eq!(board.num_revealed(), 24);
    assert_eq!(outcome, RevealOutcome::Won);
}

#[test]
fn detonation_on_standard_board_shows_all_five_mines() {
    let mut board = standard_board(5, 11);
    let mines = mine_coords(&board);
    assert_eq!(mines.len(), 5);

    assert_eq!(board.reveal(mines[2]), RevealOutcome::HitMine);

    assert!(board.lost());
    assert!(mines.iter().all(|&pos| board[pos].is_revealed()));
    let detonated: Vec<_> = board
        .iter_cells()
        .filter(|(_, cell)| cell.is_detonated())
        .map(|(coords, _)| coords)
        .collect();
    assert_eq!(detonated, [mines[2]]);
    assert_eq!(board.detonated(), Some(mines[2]));
}

#[test]
fn flagging_exactly_the_mines_wins() {
    let mut board = standard_board(40, 5);
    let mines = mine_coords(&board);

    let (last, rest) = mines.split_last().unwrap();
    for &pos in rest {
        assert_eq!(board.toggle_flag(pos), MarkOutcome::Changed);
    }
    assert!(!board.won());

    assert_eq!(board.toggle_flag(*last), MarkOutcome::Won);
    assert!(board.won());
    assert_eq!(board.num_flags(), board.num_mines());
}

#[test]
fn revealing_every_safe_cell_wins_without_flags() {
    let mut board = standard_board(90, 8);
    let safe: Vec<_> = board
        .iter_cells()
        .filter(|(_, cell)| !cell.is_mine())
        .map(|(coords, _)| coords)
        .collect();

    let mut last = RevealOutcome::NoChange;
    for pos in safe {
        if !board[pos].is_revealed() {
            assert!(!board.won());
            last = board.reveal(pos);
        }
    }

    assert_eq!(last, RevealOutcome::Won);
    assert!(board.won());
    assert_eq!(board.num_flags(), 0);
    assert_eq!(board.cells_remaining(), board.num_mines());
}

#[test]
fn finished_games_are_frozen() {
    let mut lost = standard_board(30, 2);
    let mine = mine_coords(&lost)[0];
    lost.reveal(mine);

    let mut won = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
    won.toggle_flag((1, 1));
    assert!(won.won());

    for board in [&mut lost, &mut won] {
        let before = board.clone();
        let (rows, cols) = board.size();
        for row in 0..rows {
            for col in 0..cols {
                assert_eq!(board.reveal((row, col)), RevealOutcome::NoChange);
                assert_eq!(board.toggle_flag((row, col)), MarkOutcome::NoChange);
            }
        }
        assert_eq!(*board, before);
    }
}

#[test]
fn session_measures_a_whole_game() {
    let board = Board::with_config(GameConfig::new((4, 4), 2), SeededRng::new(9)).unwrap();
    let mines = mine_coords(&board);
    let mut session = Session::new(board, Stopwatch::new());
    assert!(!session.timer().is_running());

    for pos in mines {
        session.toggle_flag(pos);
    }

    assert!(session.board().won());
    assert!(!session.timer().is_running());
}
