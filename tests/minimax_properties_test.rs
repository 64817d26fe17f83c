//! Property tests for the state functions and minimax search, checked
//! over every board reachable from the empty board.

use std::collections::HashSet;
use strictly_minimax::{
    Action, Board, Square, TicTacToePlayer as Player, current_player, initial_state,
    is_terminal, legal_actions, minimax, result, utility, winner,
};

/// Every board reachable by legal play, with the number of moves made.
fn reachable_boards() -> Vec<(Board, usize)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut frontier = vec![(initial_state(), 0)];

    while let Some((board, moves)) = frontier.pop() {
        if !seen.insert(board) {
            continue;
        }
        out.push((board, moves));
        if is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            frontier.push((result(&board, action).unwrap(), moves + 1));
        }
    }
    out
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of distinct positions reachable in legal play.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_turn_alternation() {
    for (board, moves) in reachable_boards() {
        let expected = if moves % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(current_player(&board), expected, "{}", board);

        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "{}", board);
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for (board, _) in reachable_boards() {
        let full = board.iter().all(|s| s != Square::Empty);
        assert_eq!(is_terminal(&board), winner(&board).is_some() || full, "{}", board);
    }
}

#[test]
fn test_queries_are_pure() {
    for (board, _) in reachable_boards() {
        let copy = board;
        assert_eq!(legal_actions(&board), legal_actions(&board));
        assert_eq!(winner(&board), winner(&board));
        assert_eq!(is_terminal(&board), is_terminal(&board));
        assert_eq!(utility(&board), utility(&board));
        for action in legal_actions(&board) {
            let _ = result(&board, action).unwrap();
            assert_eq!(board, copy);
        }
    }
}

#[test]
fn test_result_fills_exactly_one_cell() {
    for (board, _) in reachable_boards().into_iter().filter(|(b, _)| !is_terminal(b)) {
        let mover = current_player(&board);
        for action in legal_actions(&board) {
            let next = result(&board, action).unwrap();
            assert_eq!(next.get(action.row, action.col), Some(Square::Occupied(mover)));
            assert_eq!(next.empty_count() + 1, board.empty_count());
        }
    }
}

#[test]
fn test_minimax_terminal_closure() {
    let boards = reachable_boards();
    let mut searched = 0;
    for (board, _) in &boards {
        match minimax(board) {
            None => assert!(is_terminal(board), "{}", board),
            Some(action) => {
                assert!(!is_terminal(board), "{}", board);
                assert!(legal_actions(board).contains(&action), "{}", board);
                searched += 1;
            }
        }
    }
    assert_eq!(boards.len(), 5478);
    // 958 of the reachable boards are terminal.
    assert_eq!(searched, 5478 - 958);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut board = initial_state();
    while let Some(action) = minimax(&board) {
        board = result(&board, action).unwrap();
    }
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_engine_never_loses_as_o() {
    // X tries every first and second move; O answers with minimax each time
    // and X finishes with minimax too.
    for first in legal_actions(&initial_state()) {
        let after_x = result(&initial_state(), first).unwrap();
        let reply = minimax(&after_x).unwrap();
        let after_o = result(&after_x, reply).unwrap();

        for second in legal_actions(&after_o) {
            let mut board = result(&after_o, second).unwrap();
            while let Some(action) = minimax(&board) {
                board = result(&board, action).unwrap();
            }
            assert_ne!(
                winner(&board),
                Some(Player::X),
                "X beat the engine: {}",
                board
            );
        }
    }
}

#[test]
fn test_first_move_is_first_cell() {
    // All openings draw; row-major tie-break keeps the first.
    assert_eq!(minimax(&initial_state()), Some(Action::new(0, 0)));
}
