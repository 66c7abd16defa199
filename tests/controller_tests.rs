use broadside::{
    ai, AttackResult, BoardError, GameController, GameError, Orientation, Phase, Side, BOARD_SIZE,
    FLEET, FLEET_CELLS, NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Each fleet slot on its own row, starting at the left edge.
fn deploy_rows(game: &mut GameController) {
    for slot in 0..NUM_SHIPS {
        game.place_ship(slot, 0, slot * 2, Orientation::Horizontal)
            .unwrap();
    }
}

fn started(seed: u64) -> (GameController, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = GameController::new();
    deploy_rows(&mut game);
    game.start(&mut rng).unwrap();
    (game, rng)
}

/// Open water on the computer board.
fn computer_water(game: &GameController) -> (usize, usize) {
    let taken = game.computer().board().ship_map() | game.computer().board().attacked_mask();
    (!taken).iter().next().unwrap()
}

#[test]
fn test_setup_requires_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = GameController::new();
    assert_eq!(game.phase(), Phase::Setup);
    game.place_ship(0, 0, 0, Orientation::Horizontal).unwrap();
    assert!(game.placed(0));
    assert!(!game.fleet_complete());
    assert_eq!(game.start(&mut rng), Err(GameError::FleetIncomplete));
    assert_eq!(game.phase(), Phase::Setup);
}

#[test]
fn test_each_slot_placed_once() {
    let mut game = GameController::new();
    game.place_ship(4, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(
        game.place_ship(4, 5, 5, Orientation::Horizontal),
        Err(GameError::Board(BoardError::ShipAlreadyPlaced))
    );
    assert_eq!(
        game.place_ship(NUM_SHIPS, 5, 5, Orientation::Horizontal),
        Err(GameError::Board(BoardError::InvalidIndex))
    );
    assert_eq!(
        game.place_ship(0, 0, 0, Orientation::Vertical),
        Err(GameError::Board(BoardError::Overlaps))
    );
    assert!(!game.placed(0));
}

#[test]
fn test_start_deploys_computer_fleet() {
    let (game, _) = started(3);
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.turn(), Side::Human);
    let board = game.computer().board();
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert_eq!(board.ship_map().count_ones(), FLEET_CELLS);
    for (ship, def) in board.ships().iter().zip(FLEET.iter()) {
        assert_eq!(ship.name(), def.name());
    }
}

#[test]
fn test_no_setup_after_start() {
    let (mut game, mut rng) = started(4);
    assert_eq!(
        game.place_ship(0, 0, 9, Orientation::Horizontal),
        Err(GameError::NotInSetup)
    );
    assert_eq!(game.randomize_fleet(&mut rng), Err(GameError::NotInSetup));
    assert_eq!(game.start(&mut rng), Err(GameError::NotInSetup));
}

#[test]
fn test_attack_before_start_is_ignored() {
    let mut game = GameController::new();
    deploy_rows(&mut game);
    assert_eq!(game.attack(0, 0), None);
    assert_eq!(game.turns_taken(), 0);
}

#[test]
fn test_attack_outside_match_is_ignored() {
    let mut game = GameController::new();
    assert_eq!(game.attack(0, 0), None);
    assert_eq!(game.phase(), Phase::Setup);

    let (mut game, mut rng) = started(13);
    let (x, y) = computer_water(&game);
    game.attack(x, y).unwrap();
    assert_eq!(game.turn(), Side::Computer);
    assert_eq!(game.attack(x, y), None);
    let generation = game.generation();
    game.computer_turn(&mut rng, generation).unwrap();
    assert_eq!(game.attack(x, y), Some(AttackResult::Duplicate));
    assert_eq!(game.player(Side::Computer).side(), Side::Computer);
}

#[test]
fn test_turns_alternate() {
    let (mut game, mut rng) = started(5);
    let (x, y) = computer_water(&game);
    assert_eq!(game.attack(x, y), Some(AttackResult::Miss));
    assert_eq!(game.turn(), Side::Computer);

    // human may not fire again until the computer has moved
    let (x2, y2) = computer_water(&game);
    assert_eq!(game.attack(x2, y2), None);

    let generation = game.generation();
    let ((cx, cy), result) = game.computer_turn(&mut rng, generation).unwrap();
    assert!(result.is_resolved());
    assert!(game.human().board().cell(cx, cy).unwrap().is_attacked());
    assert_eq!(game.turn(), Side::Human);
    assert_eq!(game.turns_taken(), 2);

    // and the computer may not move twice
    assert_eq!(game.computer_turn(&mut rng, generation), None);
}

#[test]
fn test_duplicate_keeps_turn() {
    let (mut game, mut rng) = started(6);
    let (x, y) = computer_water(&game);
    game.attack(x, y).unwrap();
    let generation = game.generation();
    game.computer_turn(&mut rng, generation).unwrap();

    assert_eq!(game.attack(x, y), Some(AttackResult::Duplicate));
    assert_eq!(game.turn(), Side::Human);
    assert_eq!(game.turns_taken(), 2);
}

#[test]
fn test_out_of_bounds_attack_is_ignored() {
    let (mut game, _) = started(7);
    assert_eq!(game.attack(BOARD_SIZE, 0), None);
    assert_eq!(game.turn(), Side::Human);
}

#[test]
fn test_stale_generation_is_rejected() {
    let (mut game, mut rng) = started(8);
    let (x, y) = computer_water(&game);
    game.attack(x, y).unwrap();
    let stale = game.generation();

    game.reset();
    assert_eq!(game.phase(), Phase::Setup);
    assert_ne!(game.generation(), stale);
    assert_eq!(game.computer_turn(&mut rng, stale), None);
    assert!(game.human().board().ships().is_empty());
    assert!(game.human().board().attacked_mask().is_empty());
}

#[test]
fn test_reset_from_any_phase() {
    let mut game = GameController::new();
    game.place_ship(1, 3, 3, Orientation::Vertical).unwrap();
    game.reset();
    assert!(!game.placed(1));
    assert!(game.human().board().ships().is_empty());
    assert_eq!(game.generation(), 1);

    let (mut game, _) = started(9);
    game.reset();
    assert_eq!(game.phase(), Phase::Setup);
    assert!(game.computer().board().ships().is_empty());
    assert_eq!(game.turns_taken(), 0);
}

#[test]
fn test_randomize_fleet_replaces_board() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut game = GameController::new();
    game.place_ship(0, 0, 0, Orientation::Horizontal).unwrap();
    game.randomize_fleet(&mut rng).unwrap();
    assert!(game.fleet_complete());
    assert_eq!(game.human().board().ships().len(), NUM_SHIPS);
    assert_eq!(game.human().board().ship_map().count_ones(), FLEET_CELLS);
    game.start(&mut rng).unwrap();
}

#[test]
fn test_human_sinks_fleet_and_wins() {
    let (mut game, mut rng) = started(11);
    let targets: Vec<_> = game
        .computer()
        .board()
        .ships()
        .iter()
        .flat_map(|s| s.cells().collect::<Vec<_>>())
        .collect();
    let last = targets.len() - 1;
    for (i, (x, y)) in targets.into_iter().enumerate() {
        let result = game.attack(x, y).unwrap();
        assert_ne!(result, AttackResult::Miss);
        if i == last {
            break;
        }
        let generation = game.generation();
        game.computer_turn(&mut rng, generation).unwrap();
    }
    assert_eq!(game.phase(), Phase::Finished { winner: Side::Human });
    assert_eq!(game.winner(), Some(Side::Human));
    assert!(!game.is_active());

    let (x, y) = computer_water(&game);
    assert_eq!(game.attack(x, y), None);
    let generation = game.generation();
    assert_eq!(game.computer_turn(&mut rng, generation), None);
}

#[test]
fn test_full_random_game_finishes() {
    let (mut game, mut rng) = started(12);
    let mut rounds = 0;
    while game.is_active() {
        rounds += 1;
        assert!(rounds <= BOARD_SIZE * BOARD_SIZE, "game took too many turns");
        let (x, y) = ai::select_target(&mut rng, game.computer().board()).unwrap();
        assert!(game.attack(x, y).unwrap().is_resolved());
        let generation = game.generation();
        game.computer_turn(&mut rng, generation);
    }
    let winner = game.winner().unwrap();
    assert!(game.player(winner.opponent()).board().all_sunk());
    assert!(!game.player(winner).board().all_sunk());
    assert_eq!(game.attack(0, 0), None);
}
