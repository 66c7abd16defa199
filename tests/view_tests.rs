use broadside::{Board, BoardView, CellView, GameController, GameSnapshot, Orientation, Phase, FLEET};

#[test]
fn test_hidden_board_shows_only_shots() {
    let mut board = Board::new();
    board.place_ship(FLEET[4], 0, 0, Orientation::Horizontal).unwrap();
    board.place_ship(FLEET[2], 0, 5, Orientation::Vertical).unwrap();
    board.receive_attack(0, 0).unwrap();
    board.receive_attack(0, 5).unwrap();
    board.receive_attack(9, 9).unwrap();

    let hidden = BoardView::new(&board, false);
    assert_eq!(hidden.at(0, 0), Some(CellView::Hit));
    assert_eq!(hidden.at(1, 0), Some(CellView::Water));
    assert_eq!(hidden.at(9, 9), Some(CellView::Miss));
    assert!(hidden.ships.is_empty());

    board.receive_attack(1, 0).unwrap();
    let hidden = BoardView::new(&board, false);
    assert_eq!(hidden.at(0, 0), Some(CellView::Sunk));
    assert_eq!(hidden.at(1, 0), Some(CellView::Sunk));
    assert_eq!(hidden.ships.len(), 1);
    assert_eq!(hidden.ships[0].name, "Destroyer");
    assert!(!hidden.all_sunk);

    let own = BoardView::new(&board, true);
    assert_eq!(own.at(0, 6), Some(CellView::Ship));
    assert_eq!(own.at(0, 5), Some(CellView::Hit));
    assert_eq!(own.ships.len(), 2);
    assert_eq!(own.at(10, 0), None);
}

#[test]
fn test_snapshot_in_setup() {
    let mut game = GameController::new();
    game.place_ship(0, 2, 2, Orientation::Vertical).unwrap();
    let snap = GameSnapshot::new(&game);
    assert_eq!(snap.phase, Phase::Setup);
    assert_eq!(snap.own.at(2, 6), Some(CellView::Ship));
    assert!(snap.target.rows.iter().flatten().all(|c| *c == CellView::Water));
    assert_eq!(snap.turns_taken, 0);
}

#[test]
fn test_snapshot_serializes() {
    let snap = GameSnapshot::new(&GameController::new());
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["phase"], "Setup");
    assert_eq!(json["turn"], "Human");
    assert_eq!(json["own"]["rows"].as_array().unwrap().len(), 10);
}
