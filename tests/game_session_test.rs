//! Tests for the game driver and orchestration through the public API.

use std::io::Cursor;
use strictly_minimax::{
    Action, Game, GameError, GameEvent, GameStatus, HumanPlayer, InvalidAction, MinimaxPlayer,
    Orchestrator, TicTacToePlayer as Mark,
};

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Some(Mark::X));

    // X: 1, 5, 9 diagonal; O: 2, 3.
    for cell in [1, 2, 5, 3] {
        let status = game.make_move(Action::from_cell(cell).unwrap()).unwrap();
        assert_eq!(status, GameStatus::InProgress);
    }
    let status = game.make_move(Action::from_cell(9).unwrap()).unwrap();
    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.to_move(), None);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = Game::new();
    let err = game.make_move(Action::new(3, 1)).unwrap_err();
    assert_eq!(err, GameError::InvalidAction(InvalidAction::OutOfBounds(Action::new(3, 1))));
    assert!(game.history().is_empty());
}

#[test]
fn test_human_as_o_against_engine() {
    // Engine opens at cell 1. The human's list covers every other cell, so
    // occupied entries are skipped and a legal one is always left.
    let input = Cursor::new("5\n3\n7\n4\n6\n8\n9\n2\n");
    let human = HumanPlayer::new("Human", input, Vec::new());

    let mut orchestrator =
        Orchestrator::new(Box::new(MinimaxPlayer::new("Engine")), Box::new(human));
    let mut moves = 0;
    let status = orchestrator
        .run(|event| {
            if let GameEvent::MoveMade { .. } = event {
                moves += 1;
            }
        })
        .unwrap();

    // Whatever the human's later replies, the engine never loses.
    assert_ne!(status, GameStatus::Won(Mark::O));
    assert_eq!(moves, orchestrator.game().history().len());
}
