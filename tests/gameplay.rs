use std::io::Cursor;

use connect_four::ai::{LookaheadStrategy, ManualStrategy, Player, RandomStrategy, TieBreak};
use connect_four::config::{AppConfig, PlayerConfig};
use connect_four::driver::Match;
use connect_four::game::{Board, Checker, GameOutcome, GameState};

fn lookahead(checker: Checker, tiebreak: TieBreak, depth: usize, seed: u64) -> Player {
    Player::new(
        checker,
        Box::new(LookaheadStrategy::with_seed(tiebreak, depth, seed)),
    )
}

fn random(checker: Checker, seed: u64) -> Player {
    Player::new(checker, Box::new(RandomStrategy::with_seed(seed)))
}

#[test]
fn scripted_human_beats_right_leaning_computer() {
    let input = Cursor::new(b"0\nfoo\n0\n9\n0\n0\n".to_vec());
    let human = Player::new(Checker::X, Box::new(ManualStrategy::new(input, Vec::new())));
    let computer = lookahead(Checker::O, TieBreak::Last, 0, 0);
    let mut game = Match::new(human, computer, 6, 7).unwrap();

    let mut columns = Vec::new();
    let outcome = game
        .play_to_end(|report, _| columns.push((report.checker, report.column)))
        .unwrap();

    assert_eq!(outcome, GameOutcome::Winner(Checker::X));
    assert_eq!(game.player(Checker::X).num_moves(), 4);
    assert_eq!(
        columns,
        vec![
            (Checker::X, 0),
            (Checker::O, 6),
            (Checker::X, 0),
            (Checker::O, 6),
            (Checker::X, 0),
            (Checker::O, 6),
            (Checker::X, 0),
        ]
    );
}

#[test]
fn configured_human_sides_share_stdin() {
    let mut config = AppConfig::default();
    config.o = PlayerConfig::lookahead(TieBreak::First, 1);
    config.seed = Some(3);

    let game = Match::from_config(&config).unwrap();
    assert!(game.player(Checker::X).is_interactive());
    assert_eq!(game.player(Checker::X).strategy_name(), "Human");
    assert!(!game.player(Checker::O).is_interactive());

    // Building a second table with two humans must not wait on the first.
    let both = Match::from_config(&AppConfig::default()).unwrap();
    assert!(Checker::ALL.iter().all(|&c| both.player(c).is_interactive()));
    assert_eq!(both.state().moves_played(), 0);
}

#[test]
fn zero_width_board_is_a_config_error() {
    let result = Match::new(random(Checker::X, 1), random(Checker::O, 2), 6, 0);
    assert!(result.is_err());
}

#[test]
fn human_running_out_of_input_ends_match_with_error() {
    let input = Cursor::new(b"3\n".to_vec());
    let human = Player::new(Checker::X, Box::new(ManualStrategy::new(input, Vec::new())));
    let mut game = Match::new(human, random(Checker::O, 1), 6, 7).unwrap();
    assert!(game.play_to_end(|_, _| {}).is_err());
    assert_eq!(game.state().moves_played(), 2);
}

#[test]
fn lookahead_beats_random() {
    let games_per_side = 20;
    let mut wins = 0;

    for seed in 0..games_per_side {
        for checker in Checker::ALL {
            let ai = lookahead(checker, TieBreak::Random, 2, seed);
            let opponent = random(checker.other(), seed + 1000);
            let mut game = Match::new(ai, opponent, 6, 7).unwrap();
            if game.play_to_end(|_, _| {}).unwrap() == GameOutcome::Winner(checker) {
                wins += 1;
            }
        }
    }

    let total = games_per_side * 2;
    assert!(
        wins * 10 >= total * 7,
        "lookahead should beat random at least 70% of the time, got {wins}/{total}"
    );
}

#[test]
fn lookahead_self_play_always_terminates() {
    for (tiebreak, depth) in [(TieBreak::First, 0), (TieBreak::Last, 1), (TieBreak::Random, 2)] {
        let x = lookahead(Checker::X, tiebreak, depth, 1);
        let o = lookahead(Checker::O, tiebreak, depth, 2);
        let mut game = Match::new(x, o, 5, 6).unwrap();
        let mut boards = Vec::new();
        let outcome = game.play_to_end(|_, board| boards.push(board.clone())).unwrap();

        assert!(boards.len() <= 30);
        let last = boards.last().unwrap();
        match outcome {
            GameOutcome::Winner(c) => assert!(last.is_winning_for(c)),
            GameOutcome::Draw => assert!(last.is_full()),
        }
    }
}

#[test]
fn full_board_draw_via_game_state() {
    // Alternating columns in row pairs never lines up four.
    let mut board = Board::standard();
    for col in 0..board.width() {
        for row in 0..board.height() {
            let checker = if (row / 2 + col) % 2 == 0 {
                Checker::X
            } else {
                Checker::O
            };
            board.drop(checker, col).unwrap();
        }
    }
    let state = GameState::from_board(board, Checker::X);
    assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    assert!(state.legal_columns().is_empty());
}
