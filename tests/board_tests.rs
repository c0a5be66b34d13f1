use tictactoe::{Board, Move, MoveError, Player};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(!board.is_full());
    assert_eq!(board.move_count(), 0);
    for i in 0..9 {
        assert!(!board.is_occupied(i));
        assert!(board.cell(i).is_none());
    }
}

#[test]
fn test_place_and_query() {
    let mut board = Board::new();
    board.place(Move::new(Player::Human, 4)).unwrap();

    assert!(board.is_occupied(4));
    let mv = board.cell(4).unwrap();
    assert_eq!(mv.player(), Player::Human);
    assert_eq!(mv.cell(), 4);
    assert_eq!(mv.indicator(), 'X');
    assert_eq!(board.move_count(), 1);
}

#[test]
fn test_place_never_overwrites() {
    let mut board = Board::new();
    board.place(Move::new(Player::Human, 0)).unwrap();

    let err = board.place(Move::new(Player::Computer, 0)).unwrap_err();
    assert_eq!(err, MoveError::Occupied { index: 0 });
    // the original move is untouched
    assert_eq!(board.cell(0).unwrap().player(), Player::Human);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    let err = board.place(Move::new(Player::Human, 9)).unwrap_err();
    assert_eq!(err, MoveError::OutOfBounds { index: 9 });
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for i in 0..8 {
        let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
        board.place(Move::new(player, i)).unwrap();
        assert!(!board.is_full());
    }
    board.place(Move::new(Player::Human, 8)).unwrap();
    assert!(board.is_full());
}

#[test]
fn test_reset_roundtrip() {
    let mut board = Board::new();
    board.place(Move::new(Player::Human, 0)).unwrap();
    board.place(Move::new(Player::Computer, 4)).unwrap();
    board.place(Move::new(Player::Human, 8)).unwrap();

    board.reset();
    assert!(!board.is_full());
    for i in 0..9 {
        assert!(!board.is_occupied(i));
    }
}

#[test]
fn test_positions_masks() {
    let mut board = Board::new();
    board.place(Move::new(Player::Human, 0)).unwrap();
    board.place(Move::new(Player::Computer, 4)).unwrap();
    board.place(Move::new(Player::Human, 8)).unwrap();

    let human = board.positions(Player::Human);
    assert_eq!(human.count(), 2);
    assert!(human.contains(0).unwrap());
    assert!(human.contains(8).unwrap());
    assert!(!human.contains(4).unwrap());

    let computer = board.positions(Player::Computer);
    assert_eq!(computer.sole(), Some(4));

    assert_eq!(board.occupied().count(), 3);
}

#[test]
fn test_marks() {
    assert_eq!(Player::Human.mark(), 'X');
    assert_eq!(Player::Computer.mark(), 'O');
    assert_eq!(Player::Human.opponent(), Player::Computer);
    assert_eq!(Player::Computer.opponent(), Player::Human);
}
