use sea_battle::{
    ui, Board, BoardError, Cell, Coord, Orientation, Ship, ShotOutcome, Visibility,
};

fn board6() -> Board {
    Board::new(6, Visibility::Revealed)
}

#[test]
fn test_single_cell_ship_sinks_and_defeats() {
    let mut board = board6();
    board
        .place_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(
        board.resolve_shot(Coord::new(2, 2)).unwrap(),
        ShotOutcome::Sunk
    );
    assert_eq!(board.destroyed_count(), 1);
    assert!(board.is_defeated());

    // same cell again is rejected
    assert_eq!(
        board.resolve_shot(Coord::new(2, 2)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
}

#[test]
fn test_hit_without_sink() {
    let mut board = board6();
    // horizontal from (0,0): occupies (0,0), (1,0), (2,0)
    board
        .place_ship(Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(
        board.resolve_shot(Coord::new(1, 0)).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(board.ships()[0].remaining_hits(), 2);
    assert!(!board.is_defeated());
}

#[test]
fn test_shot_out_of_bounds() {
    let mut board = board6();
    for target in [Coord::new(6, 0), Coord::new(0, 6), Coord::new(6, 6)] {
        assert_eq!(
            board.resolve_shot(target).unwrap_err(),
            BoardError::ShotOutOfBounds
        );
    }
    let mut small = Board::new(4, Visibility::Revealed);
    assert_eq!(
        small.resolve_shot(Coord::new(4, 0)).unwrap_err(),
        BoardError::ShotOutOfBounds
    );
}

#[test]
fn test_miss_marks_cell_and_passes() {
    let mut board = board6();
    assert_eq!(
        board.resolve_shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(board.cell(Coord::new(0, 0)), Cell::Miss);
    // a board without ships is never defeated
    assert!(!board.is_defeated());
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut board = board6();
    board
        .place_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();

    // every cell touching (2,2), including diagonals, is blocked
    for (r, c) in [
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 2),
        (2, 3),
        (3, 1),
        (3, 2),
        (3, 3),
    ] {
        assert_eq!(
            board
                .place_ship(Ship::new(Coord::new(r, c), 1, Orientation::Vertical))
                .unwrap_err(),
            BoardError::ShipBlocked
        );
    }

    // two cells away is fine
    board
        .place_ship(Ship::new(Coord::new(4, 4), 1, Orientation::Vertical))
        .unwrap();
}

#[test]
fn test_placement_out_of_bounds_leaves_board_clean() {
    let mut board = board6();
    // horizontal from (4,0) would occupy rows 4, 5, 6
    assert_eq!(
        board
            .place_ship(Ship::new(Coord::new(4, 0), 3, Orientation::Horizontal))
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(board.cell(Coord::new(4, 0)), Cell::Empty);
    assert!(!board.is_excluded(Coord::new(4, 0)));
    assert!(board.ships().is_empty());

    // the cells the failed placement touched are still usable
    board
        .place_ship(Ship::new(Coord::new(4, 0), 1, Orientation::Horizontal))
        .unwrap();
}

#[test]
fn test_placement_seals_contour_without_painting() {
    let mut board = board6();
    board
        .place_ship(Ship::new(Coord::new(0, 0), 2, Orientation::Vertical))
        .unwrap();

    // neighbours are excluded but visually untouched
    assert!(board.is_excluded(Coord::new(1, 1)));
    assert!(board.is_excluded(Coord::new(0, 2)));
    assert_eq!(board.cell(Coord::new(1, 1)), Cell::Empty);
    assert_eq!(board.cell(Coord::new(0, 0)), Cell::Ship);
}

#[test]
fn test_reset_targeting_reopens_contour() {
    let mut board = board6();
    board
        .place_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    assert!(board.is_excluded(Coord::new(1, 1)));

    board.reset_targeting();
    assert!(!board.is_excluded(Coord::new(1, 1)));
    assert_eq!(
        board.resolve_shot(Coord::new(1, 1)).unwrap(),
        ShotOutcome::Miss
    );
}

#[test]
fn test_sink_paints_kill_buffer() {
    let mut board = board6();
    board
        .place_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(
        board.resolve_shot(Coord::new(2, 2)).unwrap(),
        ShotOutcome::Sunk
    );
    assert_eq!(board.cell(Coord::new(2, 2)), Cell::Hit);
    for (r, c) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)] {
        assert_eq!(board.cell(Coord::new(r, c)), Cell::Buffer);
        assert_eq!(
            board.resolve_shot(Coord::new(r, c)).unwrap_err(),
            BoardError::AlreadyTargeted
        );
    }
}

#[test]
fn test_sinking_last_ship_defeats() {
    let mut board = board6();
    board
        .place_ship(Ship::new(Coord::new(0, 0), 2, Orientation::Vertical))
        .unwrap();
    board
        .place_ship(Ship::new(Coord::new(4, 4), 1, Orientation::Vertical))
        .unwrap();
    board.reset_targeting();

    assert_eq!(
        board.resolve_shot(Coord::new(4, 4)).unwrap(),
        ShotOutcome::Sunk
    );
    assert!(!board.is_defeated());
    assert_eq!(
        board.resolve_shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(
        board.resolve_shot(Coord::new(0, 1)).unwrap(),
        ShotOutcome::Sunk
    );
    assert!(board.is_defeated());
    assert_eq!(board.destroyed_count(), board.ships().len());
}

#[test]
fn test_render_revealed_and_concealed() {
    let mut board = Board::new(3, Visibility::Revealed);
    board
        .place_ship(Ship::new(Coord::new(1, 1), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(
        ui::render_board(&board),
        "  | 1 | 2 | 3 |\n\
         1 | 0 | 0 | 0 |\n\
         2 | 0 | ■ | 0 |\n\
         3 | 0 | 0 | 0 |"
    );

    let mut hidden = Board::new(3, Visibility::Concealed);
    hidden
        .place_ship(Ship::new(Coord::new(1, 1), 1, Orientation::Horizontal))
        .unwrap();
    hidden.reset_targeting();
    assert_eq!(
        ui::render_board(&hidden),
        "  | 1 | 2 | 3 |\n\
         1 | 0 | 0 | 0 |\n\
         2 | 0 | 0 | 0 |\n\
         3 | 0 | 0 | 0 |"
    );
}

#[test]
fn test_render_after_sink() {
    let mut board = Board::new(3, Visibility::Revealed);
    board
        .place_ship(Ship::new(Coord::new(1, 1), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();
    board.resolve_shot(Coord::new(1, 1)).unwrap();

    assert_eq!(
        ui::render_board(&board),
        "  | 1 | 2 | 3 |\n\
         1 | . | . | . |\n\
         2 | . | X | . |\n\
         3 | . | . | . |"
    );
}
