//! Whole runs driven through the public API, the way the window loop drives
//! the game.

use std::time::Duration;

use flappy_game::{command::Command, config::GameConfig, ticker::Ticker, GameState};

/// Taps jump whenever the bird sinks past this height, which keeps it inside
/// the default gap indefinitely.
const JUMP_LINE: i32 = 330;

fn game() -> GameState {
    GameState::new(GameConfig::default(), 1234)
}

#[test]
fn idle_bird_falls_three_times_then_game_over() {
    let mut game = game();
    let mut life_lost_at = Vec::new();
    let mut game_over_at = None;

    for tick in 1..=200 {
        let outcome = game.advance();
        if outcome.life_lost {
            life_lost_at.push(tick);
        }
        if outcome.game_over {
            game_over_at = Some(tick);
            break;
        }
    }

    assert_eq!(life_lost_at, [24, 48, 72]);
    assert_eq!(game_over_at, Some(72));
    assert!(game.is_game_over());
    assert_eq!(game.run.lives, 0);
    assert_eq!(game.run.score, 0);
}

#[test]
fn every_tick_starts_with_the_bird_inside_the_playfield() {
    let config = GameConfig {
        lives: 1000,
        ..GameConfig::default()
    };
    let ground_top = config.ground_top();
    let mut game = GameState::new(config, 7);
    let mut lives_lost = 0;

    for _ in 0..5000 {
        let bird = game.bird.bounding_box();
        assert!(bird.top() > 0 && bird.bottom() < ground_top);
        if game.advance().life_lost {
            lives_lost += 1;
        }
    }

    assert!(lives_lost > 0);
    assert!(!game.is_game_over());
}

#[test]
fn velocity_and_position_follow_gravity_every_tick() {
    let mut game = game();
    for _ in 0..20 {
        let (y, velocity) = (game.bird.position.y, game.bird.velocity);
        let outcome = game.advance();
        assert!(!outcome.life_lost);
        assert_eq!(game.bird.velocity, velocity + 1);
        assert_eq!(game.bird.position.y, y + velocity + 1);
    }
}

#[test]
fn steady_flying_scores_every_recycle() {
    let mut game = game();
    let mut last_score = 0;
    let mut scored_at = Vec::new();

    for tick in 1..=2000 {
        if game.bird.position.y >= JUMP_LINE {
            assert!(game.handle(Command::Jump));
        }
        let outcome = game.advance();
        assert!(!outcome.life_lost, "crashed on tick {tick}");
        assert!(game.run.score >= last_score);
        if outcome.points > 0 {
            scored_at.push(tick);
        }
        last_score = game.run.score;
    }

    assert_eq!(&scored_at[..3], &[284, 384, 568]);
    assert_eq!(game.run.score, 13);
    assert_eq!(game.run.lives, 3);
    assert!(game.run.night);
}

#[test]
fn restart_after_game_over_begins_a_fresh_run() {
    let mut game = game();
    game.run.score = 5;
    game.run.lives = 1;
    game.bird.position.y = 0;
    assert!(game.advance().game_over);

    assert!(!game.handle(Command::Jump));
    assert!(game.handle(Command::Restart));
    assert!(!game.handle(Command::Restart));

    let snapshot = game.snapshot();
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.lives, 3);
    assert_eq!(snapshot.bird.bounding_box.top(), 200);

    game.advance();
    assert_eq!(game.bird.velocity, 1);
}

#[test]
fn ticker_drives_the_game_at_a_fixed_rate() {
    let config = GameConfig::default();
    let mut ticker = Ticker::new(config.tick_interval);
    let mut game = GameState::new(config, 5);

    // Twelve frames of 25ms is 300ms of wall time, exactly ten ticks.
    let mut ticks = 0;
    for _ in 0..12 {
        for _ in 0..ticker.advance(Duration::from_millis(25)) {
            game.advance();
            ticks += 1;
        }
    }

    assert_eq!(ticks, 10);
    assert_eq!(game.obstacles[0].x, 800 - 3 * 10);
}
