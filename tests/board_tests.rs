use broadside::{AttackOutcome, Board, GameError, Orientation, ShipClass, DEFAULT_FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn default_board() -> Board {
    Board::new(10, &DEFAULT_FLEET).unwrap()
}

fn occupied_cells(board: &Board) -> usize {
    let mut count = 0;
    for r in 0..board.size() {
        for c in 0..board.size() {
            if board.is_occupied(r, c).unwrap() {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(
        Board::new(0, &DEFAULT_FLEET).unwrap_err(),
        GameError::InvalidSize { size: 0 }
    );
}

#[test]
fn test_horizontal_placement_extends_by_column() {
    let mut board = default_board();
    // ship 4 is the Carrier, length 5
    board.place(4, 2, 3, Orientation::Horizontal).unwrap();
    let ship = board.ship(4).unwrap();
    assert_eq!(
        ship.coordinates(),
        &[(2, 3), (2, 4), (2, 5), (2, 6), (2, 7)]
    );
    assert_eq!(ship.orientation(), Some(Orientation::Horizontal));
    for c in 3..8 {
        assert!(board.is_occupied(2, c).unwrap());
    }
}

#[test]
fn test_vertical_placement_extends_by_row() {
    let mut board = default_board();
    // ship 0 is the Destroyer, length 2
    board.place(0, 1, 1, Orientation::Vertical).unwrap();
    assert_eq!(board.ship(0).unwrap().coordinates(), &[(1, 1), (2, 1)]);
    assert!(board.is_occupied(1, 1).unwrap());
    assert!(board.is_occupied(2, 1).unwrap());
}

#[test]
fn test_placement_out_of_bounds_rejected() {
    let mut board = default_board();
    let err = board.place(4, 0, 6, Orientation::Horizontal).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { row: 0, col: 10 });
    assert!(!board.ship(4).unwrap().is_placed());
    assert_eq!(occupied_cells(&board), 0);
}

#[test]
fn test_placement_overlap_rejected() {
    let mut board = default_board();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    let err = board.place(1, 0, 1, Orientation::Vertical).unwrap_err();
    assert_eq!(err, GameError::AlreadyOccupied { row: 0, col: 1 });
    assert!(!board.ship(1).unwrap().is_placed());
    // destroyer untouched
    assert_eq!(board.ship(0).unwrap().coordinates(), &[(0, 0), (0, 1)]);
}

#[test]
fn test_replacing_a_ship_may_cross_its_own_cells() {
    let mut board = default_board();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    // new anchor overlaps the old (0, 1) cell, which is fine
    board.place(0, 0, 1, Orientation::Horizontal).unwrap();
    assert_eq!(board.ship(0).unwrap().coordinates(), &[(0, 1), (0, 2)]);
    assert!(!board.is_occupied(0, 0).unwrap());
}

#[test]
fn test_placement_on_struck_cell_rejected() {
    let mut board = default_board();
    assert_eq!(
        board.receive_attack(5, 5).unwrap(),
        AttackOutcome::Miss
    );
    let err = board.place(4, 5, 2, Orientation::Horizontal).unwrap_err();
    assert_eq!(err, GameError::AlreadyAttacked { row: 5, col: 5 });
    assert!(!board.ship(4).unwrap().is_placed());
}

#[test]
fn test_failed_placement_leaves_board_unchanged() {
    let mut board = default_board();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    let before = board.clone();
    assert!(board.place(0, 9, 9, Orientation::Horizontal).is_err());
    assert_eq!(board, before);
    assert_eq!(board.ship(0).unwrap().coordinates(), &[(0, 0), (0, 1)]);
}

#[test]
fn test_unknown_ship_rejected() {
    let mut board = default_board();
    assert_eq!(
        board.place(9, 0, 0, Orientation::Horizontal).unwrap_err(),
        GameError::ShipNotFound
    );
}

#[test]
fn test_attack_hit_miss_sink() {
    let mut board = default_board();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(board.receive_attack(5, 5).unwrap(), AttackOutcome::Miss);
    assert_eq!(board.receive_attack(0, 0).unwrap(), AttackOutcome::Hit);
    assert_eq!(
        board.receive_attack(0, 1).unwrap(),
        AttackOutcome::Sunk("Destroyer")
    );
    let ship = board.ship(0).unwrap();
    assert_eq!(ship.hits(), 2);
    assert!(ship.is_sunk());
}

#[test]
fn test_attack_is_never_idempotent() {
    let mut board = default_board();
    board.receive_attack(3, 3).unwrap();
    assert_eq!(
        board.receive_attack(3, 3).unwrap_err(),
        GameError::AlreadyAttacked { row: 3, col: 3 }
    );
}

#[test]
fn test_attack_out_of_bounds() {
    let mut board = default_board();
    assert_eq!(
        board.receive_attack(10, 0).unwrap_err(),
        GameError::OutOfBounds { row: 10, col: 0 }
    );
}

#[test]
fn test_all_placed_and_all_sunk() {
    let mut board = default_board();
    assert!(!board.all_placed());
    assert_eq!(board.all_sunk().unwrap_err(), GameError::NoShips);

    for (ship_id, row) in (0..5).zip([0, 2, 4, 6, 8]) {
        board.place(ship_id, row, 0, Orientation::Horizontal).unwrap();
    }
    assert!(board.all_placed());
    assert!(!board.all_sunk().unwrap());

    // sink the destroyer only
    board.receive_attack(0, 0).unwrap();
    board.receive_attack(0, 1).unwrap();
    assert!(!board.all_sunk().unwrap());

    // sink the rest
    for (row, len) in [(2usize, 3usize), (4, 3), (6, 4), (8, 5)] {
        for c in 0..len {
            assert!(board.receive_attack(row, c).unwrap().is_hit());
        }
    }
    assert!(board.all_sunk().unwrap());
}

#[test]
fn test_remove_ship() {
    let mut board = default_board();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.receive_attack(0, 0).unwrap();

    board.remove(0).unwrap();
    let ship = board.ship(0).unwrap();
    assert!(!ship.is_placed());
    assert_eq!(ship.hits(), 0);
    assert!(!board.is_occupied(0, 0).unwrap());
    // struck marks are monotonic until a full board reset
    assert!(board.is_struck(0, 0).unwrap());

    assert_eq!(board.remove(0).unwrap_err(), GameError::ShipNotFound);
    assert_eq!(board.remove(9).unwrap_err(), GameError::ShipNotFound);
}

#[test]
fn test_place_random_places_whole_fleet() {
    let mut board = default_board();
    let mut rng = SmallRng::seed_from_u64(42);
    for ship_id in 0..DEFAULT_FLEET.len() {
        board.place_random(&mut rng, ship_id).unwrap();
    }
    assert!(board.all_placed());
    let expected: usize = DEFAULT_FLEET.iter().map(|class| class.length()).sum();
    assert_eq!(occupied_cells(&board), expected, "no overlap");
}

#[test]
fn test_place_random_exhausted_pool() {
    let fleet = [ShipClass::new("Barge", 3)];
    let mut board = Board::new(2, &fleet).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        board.place_random(&mut rng, 0).unwrap_err(),
        GameError::NoValidPlacement
    );
    assert!(!board.ship(0).unwrap().is_placed());
    assert_eq!(occupied_cells(&board), 0);
}

#[test]
fn test_reset_clears_everything() {
    let mut board = default_board();
    let pristine = board.clone();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.receive_attack(0, 0).unwrap();
    board.receive_attack(9, 9).unwrap();

    board.reset();
    assert_eq!(board, pristine);
    assert!(!board.is_struck(0, 0).unwrap());
    assert!(!board.all_placed());
}

#[test]
fn test_display_rendering() {
    let fleet = [ShipClass::new("Skiff", 2)];
    let mut board = Board::new(3, &fleet).unwrap();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.receive_attack(0, 0).unwrap();
    board.receive_attack(2, 2).unwrap();
    let rendered = board.to_string();
    assert_eq!(rendered, "H S · \n· · · \n· · M ");
}
