//! End-to-end tests for the turn loop.

use std::collections::VecDeque;
use tictactoe_terminal::{
    Board, Choice, EventSink, Game, GameEvent, GameStatus, HumanPlayer, LineTokens, Mark,
    MoveError, MoveSource, Player, Position, RandomBot, RngSource, Square,
};

/// Move source replaying a fixed list of choices.
struct Scripted {
    choices: VecDeque<Choice>,
}

impl Scripted {
    fn player(mark: Mark, indices: &[i64]) -> Player {
        let choices = indices.iter().copied().map(Choice::Index).collect();
        Player::new(mark, Scripted { choices })
    }
}

#[async_trait::async_trait]
impl MoveSource for Scripted {
    async fn choose(
        &mut self,
        _mark: Mark,
        _board: &Board,
        _events: &mut dyn EventSink,
    ) -> anyhow::Result<Choice> {
        self.choices
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Script exhausted"))
    }

    fn is_bot(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn rejections(events: &[GameEvent]) -> Vec<MoveError> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::Rejected { reason, .. } => Some(reason.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_top_row_win() {
    let mut x = Scripted::player(Mark::X, &[0, 1, 2]);
    let mut o = Scripted::player(Mark::O, &[3, 4]);
    let mut events: Vec<GameEvent> = Vec::new();

    let mut game = Game::new();
    let status = game.start_game(&mut x, &mut o, &mut events).await.unwrap();

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(game.board().check_wins(), Some(Mark::X));
    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(*game.turns(), 5);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            status: GameStatus::Won(Mark::X),
            board: *game.board(),
        })
    );
}

#[tokio::test]
async fn test_full_board_is_a_draw() {
    // X O X / O X X / O X O
    let mut x = Scripted::player(Mark::X, &[0, 2, 4, 5, 7]);
    let mut o = Scripted::player(Mark::O, &[1, 3, 6, 8]);
    let mut events: Vec<GameEvent> = Vec::new();

    let mut game = Game::new();
    let status = game.start_game(&mut x, &mut o, &mut events).await.unwrap();

    assert_eq!(status, GameStatus::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.board().check_wins(), None);
    assert_eq!(*game.turns(), 9);
}

#[tokio::test]
async fn test_win_on_last_square_is_not_a_draw() {
    // X O O / O X X / X O X: X completes the main diagonal on the ninth move.
    let mut x = Scripted::player(Mark::X, &[0, 5, 6, 4, 8]);
    let mut o = Scripted::player(Mark::O, &[1, 2, 3, 7]);
    let mut events: Vec<GameEvent> = Vec::new();

    let mut game = Game::new();
    let status = game.start_game(&mut x, &mut o, &mut events).await.unwrap();

    assert!(game.board().is_full());
    assert_eq!(status, GameStatus::Won(Mark::X));
}

#[tokio::test]
async fn test_occupied_square_is_rejected() {
    let mut x = Scripted::player(Mark::X, &[4]);
    let mut o = Scripted::player(Mark::O, &[4, 0]);
    let mut events: Vec<GameEvent> = Vec::new();
    let mut game = Game::new();

    game.play_turn(&mut x, &mut events).await.unwrap();
    let before = *game.board();
    assert_eq!(before.occupied_count(), 1);

    game.play_turn(&mut o, &mut events).await.unwrap();

    assert_eq!(
        rejections(&events),
        vec![MoveError::Occupied {
            position: Position::Center
        }]
    );
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Mark::O));
    assert_eq!(game.board().occupied_count(), 2);
}

#[tokio::test]
async fn test_out_of_range_is_rejected_without_mutation() {
    let mut x = Scripted::player(Mark::X, &[9, -1, 8]);
    let mut board = Board::new();
    let mut events: Vec<GameEvent> = Vec::new();

    let position = x.play(&mut board, &mut events).await.unwrap();

    assert_eq!(position, Position::BottomRight);
    assert_eq!(
        rejections(&events),
        vec![
            MoveError::OutOfRange { requested: 9 },
            MoveError::OutOfRange { requested: -1 },
        ]
    );
    assert_eq!(board.occupied_count(), 1);

    // Each attempt shows the board as it was before the move.
    let prompts: Vec<Board> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::TurnStarted { board, .. } => Some(*board),
            _ => None,
        })
        .collect();
    assert_eq!(prompts, vec![Board::new(); 3]);
}

#[tokio::test]
async fn test_human_input_end_to_end() {
    let input = LineTokens::shared(&b"5\nfive 10\n1\n"[..]);
    let mut human = Player::new(Mark::X, HumanPlayer::new("Human", input.clone()));
    let mut board = Board::new();
    let mut events: Vec<GameEvent> = Vec::new();

    assert_eq!(human.play(&mut board, &mut events).await.unwrap(), Position::Center);
    assert_eq!(human.play(&mut board, &mut events).await.unwrap(), Position::TopLeft);
    assert_eq!(
        rejections(&events),
        vec![
            MoveError::Unreadable {
                input: "five".to_string()
            },
            MoveError::OutOfRange { requested: 9 },
        ]
    );

    // Input exhausted: the error surfaces instead of looping forever.
    assert!(human.play(&mut board, &mut events).await.is_err());
    assert_eq!(board.occupied_count(), 2);
}

#[tokio::test]
async fn test_garbled_input_line_is_asked_again() {
    let input = LineTokens::shared(&b"\xff\xfe\n5\n"[..]);
    let mut human = Player::new(Mark::X, HumanPlayer::new("Human", input));
    let mut board = Board::new();
    let mut events: Vec<GameEvent> = Vec::new();

    assert_eq!(human.play(&mut board, &mut events).await.unwrap(), Position::Center);
    let rejected = rejections(&events);
    assert_eq!(rejected.len(), 1);
    assert!(matches!(rejected[0], MoveError::Unreadable { .. }));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_player_reports_its_source() {
    let input = LineTokens::shared(&b""[..]);
    let human = Player::new(Mark::X, HumanPlayer::new("Human X", input));
    let bot = Player::new(Mark::O, RandomBot::new("Bot O", RngSource::seeded(5)));

    assert!(!human.is_bot());
    assert_eq!(human.name(), "Human X");
    assert!(bot.is_bot());
    assert_eq!(bot.name(), "Bot O");
    assert_eq!(*bot.mark(), Mark::O);
}

#[tokio::test]
async fn test_each_turn_adds_exactly_one_mark() {
    let mut x = Player::new(Mark::X, RandomBot::new("Bot X", RngSource::seeded(11)));
    let mut o = Player::new(Mark::O, RandomBot::new("Bot O", RngSource::seeded(12)));
    let mut events: Vec<GameEvent> = Vec::new();
    let mut game = Game::new();

    let mut players = [&mut x, &mut o];
    let mut current = 0;
    while !game.status().is_over() {
        let before = game.board().occupied_count();
        game.play_turn(&mut *players[current], &mut events).await.unwrap();
        assert_eq!(game.board().occupied_count(), before + 1);
        current = 1 - current;
    }

    assert!(game.play_turn(&mut x, &mut events).await.is_err());
}

#[tokio::test]
async fn test_bot_matches_terminate_within_nine_turns() {
    for seed in 0..200 {
        let mut x = Player::new(Mark::X, RandomBot::new("Bot X", RngSource::seeded(seed)));
        let mut o = Player::new(Mark::O, RandomBot::new("Bot O", RngSource::seeded(seed + 1000)));
        let mut events: Vec<GameEvent> = Vec::new();
        let mut game = Game::new();

        let status = game.start_game(&mut x, &mut o, &mut events).await.unwrap();

        assert!(status.is_over());
        assert!(*game.turns() <= 9);
        assert_eq!(game.board().occupied_count(), *game.turns());
        assert!(rejections(&events).is_empty());
        if status == GameStatus::Draw {
            assert_eq!(*game.turns(), 9);
        }

        let played = events
            .iter()
            .filter(|event| matches!(event, GameEvent::MovePlayed { .. }))
            .count();
        assert_eq!(played, *game.turns());
    }
}
