//! Session state machine tests.

use kalah::core::{BoardPos, ConfigError, GameConfig, IllegalMove, KalahError, Player};
use kalah::rules::GameResult;
use kalah::session::{Phase, Session};

fn new_game(pits: usize, seeds: u32) -> Session {
    Session::new(GameConfig::new(pits, seeds)).unwrap()
}

/// Play until the game ends. The human always takes its lowest non-empty pit.
fn play_out(mut game: Session) -> Session {
    while !game.is_game_over() {
        game = match game.next() {
            Player::Computer => game.machine_move().unwrap(),
            Player::Human => {
                let pit = (1..=game.pits_per_player())
                    .find(|&p| game.board().seeds(Player::Human, p) > 0)
                    .unwrap();
                game.play(pit).unwrap()
            }
        };
    }
    game
}

// =============================================================================
// Turn tracking
// =============================================================================

#[test]
fn test_extra_turn_keeps_next_player() {
    let game = new_game(6, 4).play(3).unwrap();

    assert_eq!(game.next(), Player::Human);
    assert_eq!(game.phase(), Phase::AwaitingMove(Player::Human));
    assert_eq!(game.source_pit_of_last_move(), Some(3));
    assert_eq!(game.target_pit_of_last_move(), Some(BoardPos::Store(Player::Human)));
}

#[test]
fn test_machine_move_after_human() {
    let game = new_game(6, 4).play(1).unwrap();
    assert_eq!(game.next(), Player::Computer);

    let after = game.machine_move().unwrap();
    let source = after.source_pit_of_last_move().unwrap();
    assert!((7..=12).contains(&source));
    assert_eq!(after.history().len(), 2);
    assert_eq!(after.history()[1].player, Player::Computer);
}

#[test]
fn test_computer_can_open() {
    let config = GameConfig::new(6, 4).with_opening_player(Player::Computer);
    let game = Session::new(config).unwrap();

    assert_eq!(game.next(), Player::Computer);
    assert_eq!(
        game.play(1).unwrap_err(),
        KalahError::IllegalMove(IllegalMove::NotOwned { pit: 1, owner: Player::Human })
    );
    // The computer's own pits can be played through the same API.
    let after = game.play(9).unwrap();
    assert_eq!(after.source_pit_of_last_move(), Some(9));
    assert_eq!(after.next(), Player::Computer);
}

#[test]
fn test_illegal_move_leaves_session_unchanged() {
    let game = new_game(6, 4).play(3).unwrap();
    let board = game.board().clone();

    assert_eq!(
        game.play(3).unwrap_err(),
        KalahError::IllegalMove(IllegalMove::EmptyPit(3))
    );
    assert_eq!(
        game.play(8).unwrap_err(),
        KalahError::IllegalMove(IllegalMove::NotOwned { pit: 8, owner: Player::Computer })
    );
    assert_eq!(
        game.play(0).unwrap_err(),
        KalahError::IllegalMove(IllegalMove::OutOfRange { pit: 0, max: 12 })
    );

    assert_eq!(game.board(), &board);
    assert_eq!(game.next(), Player::Human);
    assert_eq!(game.history().len(), 1);
}

// =============================================================================
// Game over
// =============================================================================

#[test]
fn test_single_pit_game_is_over_after_one_move() {
    for seeds in [1, 4, 7] {
        let game = new_game(1, seeds).play(1).unwrap();

        assert!(game.is_game_over());
        let result = game.winner().unwrap();
        let human = game.seeds_of_player(Player::Human);
        let computer = game.seeds_of_player(Player::Computer);
        assert_eq!(human + computer, 2 * seeds);
        assert_eq!(result, GameResult::from_stores(game.board()));

        assert_eq!(
            game.play(1).unwrap_err(),
            KalahError::IllegalMove(IllegalMove::GameOver)
        );
        assert_eq!(
            game.machine_move().unwrap_err(),
            KalahError::IllegalMove(IllegalMove::GameOver)
        );
    }
}

#[test]
fn test_full_game_conserves_seeds_and_reports_winner() {
    let game = play_out(new_game(6, 4));

    let human = game.seeds_of_player(Player::Human);
    let computer = game.seeds_of_player(Player::Computer);
    assert_eq!(human + computer, 48);

    let expected = match human.cmp(&computer) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::Human),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Computer),
        std::cmp::Ordering::Equal => GameResult::Tie,
    };
    assert_eq!(game.winner(), Some(expected));
    assert_eq!(game.phase(), Phase::GameOver(expected));
}

#[test]
fn test_computer_beats_lowest_pit_player() {
    let mut game = new_game(6, 4);
    game.set_level(4).unwrap();
    let game = play_out(game);

    assert_eq!(game.winner(), Some(GameResult::Winner(Player::Computer)));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_accessors() {
    let config = GameConfig::new(5, 3)
        .with_opening_player(Player::Computer)
        .with_level(2);
    let game = Session::new(config.clone()).unwrap();

    assert_eq!(game.pits_per_player(), 5);
    assert_eq!(game.seeds_per_pit(), 3);
    assert_eq!(game.opening_player(), Player::Computer);
    assert_eq!(game.level(), 2);
    assert_eq!(game.config(), &config);
}

#[test]
fn test_oversized_board_is_rejected() {
    assert_eq!(
        Session::new(GameConfig::new(6, 400_000_000)).unwrap_err(),
        ConfigError::TooManySeeds { pits: 6, seeds: 400_000_000 }
    );

    let game = new_game(6, 4);
    assert!(game.renewed(6, 400_000_000).is_err());

    // The largest board that still fits plays normally.
    let game = new_game(6, 357_913_941).play(1).unwrap();
    assert_eq!(game.board().total_seeds(), 4_294_967_292);
}

#[test]
fn test_level_change_keeps_board() {
    let mut game = new_game(6, 4).play(2).unwrap();
    let board = game.board().clone();

    game.set_level(7).unwrap();
    assert_eq!(game.board(), &board);
    assert_eq!(game.set_level(0), Err(ConfigError::Level(0)));
    assert_eq!(game.level(), 7);
}

#[test]
fn test_display_shows_computer_row_first() {
    let game = new_game(3, 2).play(1).unwrap();
    assert_eq!(game.to_string(), "0 2 2 2\n  0 3 3 0");
}
