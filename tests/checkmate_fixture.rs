use chess_core::board::{Board, GridKind, PieceId};
use chess_core::chess::piece::{Color, MoveRule, Piece, PieceKind};
use chess_core::core::square::{BoardDims, Square};
use chess_core::rules::{candidate_moves, is_checkmate};

const DIMS: BoardDims = BoardDims::STANDARD;

fn sq(name: &str) -> Square {
    Square::parse(name, DIMS).unwrap()
}

/// White king in the corner, checked along the a-file, with the black king covering
/// b1 and b2.
fn cornered_king() -> (Board, PieceId) {
    let mut board = Board::empty(DIMS).unwrap();
    let king = board.place(PieceKind::King, Color::White, sq("a1"));
    board.place(PieceKind::Rook, Color::Black, sq("a8"));
    board.place(PieceKind::King, Color::Black, sq("c2"));
    (board, king)
}

fn piece_states(board: &Board) -> Vec<(Square, Piece)> {
    board
        .grid(GridKind::Main)
        .occupied()
        .map(|(s, id)| (s, *board.piece(id)))
        .collect()
}

#[test]
fn cornered_king_is_mated() {
    let (mut board, king) = cornered_king();
    assert!(is_checkmate(&mut board, king));
}

#[test]
fn moving_the_guard_away_opens_an_escape() {
    let (mut board, king) = cornered_king();
    board.remove(sq("c2"));
    board.place(PieceKind::King, Color::Black, sq("h8"));
    assert!(!is_checkmate(&mut board, king));
}

#[test]
fn not_in_check_is_never_mate() {
    let (mut board, king) = cornered_king();
    board.remove(sq("a8"));
    board.place(PieceKind::Rook, Color::Black, sq("b8"));
    assert!(!is_checkmate(&mut board, king));
}

#[test]
fn another_piece_capturing_the_checker_averts_mate() {
    let (mut board, king) = cornered_king();
    board.place(PieceKind::Rook, Color::White, sq("h8"));
    assert!(!is_checkmate(&mut board, king));
}

#[test]
fn another_piece_blocking_the_check_averts_mate() {
    let (mut board, king) = cornered_king();
    // A knight on h1 reaches neither the a-file nor a8.
    board.place(PieceKind::Knight, Color::White, sq("h1"));
    assert!(is_checkmate(&mut board, king));

    board.place(PieceKind::Rook, Color::White, sq("h5"));
    assert!(!is_checkmate(&mut board, king));
}

fn has_moved(board: &Board, id: PieceId) -> bool {
    match board.piece(id).rule {
        MoveRule::Pawn { has_moved, .. } => has_moved,
        _ => panic!("not a pawn"),
    }
}

#[test]
fn mate_search_puts_pieces_back_on_their_squares() {
    let (mut board, king) = cornered_king();
    let pawn = board.place(PieceKind::Pawn, Color::White, sq("g2"));
    board.place(PieceKind::Knight, Color::White, sq("f1"));
    let squares = |b: &Board| -> Vec<(Square, Square)> {
        piece_states(b).into_iter().map(|(s, p)| (s, p.square)).collect()
    };
    let before = squares(&board);
    let snap = board.snapshot();

    assert!(is_checkmate(&mut board, king));

    assert_eq!(squares(&board), before);
    assert_eq!(board.snapshot(), snap);
    // Moving the pawn back counts as its first move.
    assert!(has_moved(&board, pawn));
}

#[test]
fn pawn_tried_before_an_escape_loses_double_push() {
    let mut board = Board::empty(DIMS).unwrap();
    let pawn = board.place(PieceKind::Pawn, Color::White, sq("a2"));
    let king = board.place(PieceKind::King, Color::White, sq("h3"));
    board.place(PieceKind::Rook, Color::Black, sq("h8"));
    assert!(!has_moved(&board, pawn));

    // a2 comes before h3 in rank-major order, and the king can step aside.
    assert!(!is_checkmate(&mut board, king));

    assert_eq!(board.piece(pawn).square, sq("a2"));
    assert!(has_moved(&board, pawn));
    let moves = candidate_moves(&board.view(GridKind::Main), board.piece(pawn));
    assert_eq!(moves, vec![sq("a3")]);
}

#[test]
fn pieces_of_a_side_not_in_check_are_not_touched() {
    let mut board = Board::standard(DIMS).unwrap();
    let king = board.king_of(Color::White).unwrap();
    let before = piece_states(&board);
    assert!(!is_checkmate(&mut board, king));
    assert_eq!(piece_states(&board), before);
}

#[test]
fn escape_found_midway_still_restores_pieces() {
    let mut board = Board::standard(DIMS).unwrap();
    let (queen, _) = board.occupant(GridKind::Main, sq("d8")).unwrap();
    board.move_piece(GridKind::Main, queen, sq("e2"));
    let before = piece_states(&board);
    let king = board.king_of(Color::White).unwrap();

    assert!(!is_checkmate(&mut board, king));
    assert_eq!(piece_states(&board), before);
}

#[test]
fn missing_king_is_an_error_not_a_panic() {
    let mut board = Board::empty(DIMS).unwrap();
    board.place(PieceKind::Rook, Color::Black, sq("a8"));
    assert!(board.king_of(Color::White).is_err());
}
