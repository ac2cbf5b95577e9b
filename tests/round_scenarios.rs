//! End-to-end round scenarios.
//!
//! These tests drive `RoundEngine` through whole rounds:
//! - Base scoring, combo activation and lucky words
//! - Clock expiry, early exit and deck exhaustion
//! - Terminal idempotence and the pre-round countdown

use std::time::Duration;

use word_rush::core::{RoundConfig, RoundRules};
use word_rush::deck::{LuckyMultiplier, WordDeck};
use word_rush::round::{Effect, EndReason, RoundEngine, SoundCue};
use word_rush::scoring::{finalize, FinalScore};

const STEP: Duration = Duration::from_millis(500);

fn plain_rules() -> RoundRules {
    RoundRules::default()
        .with_lucky_target(0)
        .with_countdown_steps(0)
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Five words, no lucky hits: 100, 200, then the combo adds 50.
#[test]
fn test_combo_activates_on_third_guess() {
    let config = RoundConfig::new(words(&["a", "b", "c", "d", "e"]), 180).unwrap();
    let mut engine = RoundEngine::new(1).with_rules(plain_rules());
    engine.start(&config);

    let mut now = Duration::ZERO;
    engine.mark_correct(now);
    now += STEP;
    engine.mark_correct(now);
    assert_eq!(engine.snapshot().unwrap().score, 200);
    assert!(!engine.snapshot().unwrap().combo_active);

    now += STEP;
    let effects = engine.mark_correct(now);
    let snap = engine.snapshot().unwrap();
    assert_eq!(snap.score, 350);
    assert!(snap.combo_active);
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::ShowMessage(m) if m.to_string() == "COMBO 3x ACTIVE!")));
}

#[test]
fn test_lucky_triple_awards_300() {
    let deck = WordDeck::with_lucky(words(&["x", "y", "z"]), [(1, LuckyMultiplier::Triple)]);
    let mut engine = RoundEngine::new(1).with_rules(plain_rules());
    engine.start_with_deck(deck, 120);

    engine.mark_skip(Duration::ZERO);
    assert_eq!(engine.snapshot().unwrap().lucky, Some(LuckyMultiplier::Triple));

    engine.mark_correct(STEP);
    assert_eq!(engine.snapshot().unwrap().score, 300);
}

#[test]
fn test_lucky_word_inside_combo() {
    let deck = WordDeck::with_lucky(
        words(&["a", "b", "c", "d"]),
        [(2, LuckyMultiplier::Double)],
    );
    let mut engine = RoundEngine::new(1).with_rules(plain_rules());
    engine.start_with_deck(deck, 120);

    let mut now = Duration::ZERO;
    for _ in 0..3 {
        engine.mark_correct(now);
        now += STEP;
    }
    // 100 + 100 + (200 + 50)
    assert_eq!(engine.snapshot().unwrap().score, 450);
}

#[test]
fn test_finalize_examples() {
    assert_eq!(
        finalize(500, 0),
        FinalScore {
            base_score: 500,
            time_bonus: 0,
            final_score: 500
        }
    );
    assert_eq!(
        finalize(500, 20),
        FinalScore {
            base_score: 500,
            time_bonus: 200,
            final_score: 700
        }
    );
}

#[test]
fn test_expiry_and_early_exit_both_forfeit_time_bonus() {
    let config = RoundConfig::new(words(&["a", "b", "c", "d"]), 60).unwrap();

    let mut expired = RoundEngine::new(9).with_rules(plain_rules());
    expired.start(&config);
    expired.mark_correct(Duration::ZERO);
    for s in 1..=60 {
        expired.tick(Duration::from_secs(s));
    }
    let outcome = expired.outcome().unwrap();
    assert_eq!(outcome.reason, EndReason::TimeExpired);
    assert_eq!(finalize(outcome.raw_score, outcome.remaining_seconds).time_bonus, 0);

    let mut quit = RoundEngine::new(9).with_rules(plain_rules());
    quit.start(&config);
    quit.mark_correct(Duration::ZERO);
    quit.end_early(Duration::from_secs(1));
    let outcome = quit.outcome().unwrap();
    assert_eq!(outcome.reason, EndReason::EarlyExit);
    assert_eq!(finalize(outcome.raw_score, outcome.remaining_seconds).time_bonus, 0);
}

#[test]
fn test_exhausted_deck_earns_time_bonus() {
    let config = RoundConfig::new(words(&["a", "b", "c"]), 90).unwrap();
    let mut engine = RoundEngine::new(4).with_rules(plain_rules());
    engine.start(&config);

    for s in 1..=10 {
        engine.tick(Duration::from_secs(s));
    }
    let mut now = Duration::from_secs(10);
    for _ in 0..3 {
        engine.mark_skip(now);
        now += STEP;
    }

    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.reason, EndReason::DeckExhausted);
    assert_eq!(outcome.remaining_seconds, 80);
    assert_eq!(finalize(outcome.raw_score, outcome.remaining_seconds).final_score, 800);
}

#[test]
fn test_actions_after_end_change_nothing() {
    let config = RoundConfig::new(words(&["a", "b", "c", "d", "e"]), 180).unwrap();
    let mut engine = RoundEngine::new(2).with_rules(plain_rules());
    engine.start(&config);
    engine.mark_correct(Duration::ZERO);
    engine.end_early(Duration::from_secs(1));

    let before = engine.snapshot().unwrap();
    assert!(engine.mark_correct(Duration::from_secs(5)).is_empty());
    assert!(engine.mark_skip(Duration::from_secs(6)).is_empty());
    assert!(engine.tick(Duration::from_secs(7)).is_empty());
    assert!(engine.end_early(Duration::from_secs(8)).is_empty());

    let after = engine.snapshot().unwrap();
    assert_eq!(after.score, before.score);
    assert_eq!(after.index, before.index);
    assert_eq!(after.remaining_seconds, before.remaining_seconds);
}

#[test]
fn test_countdown_precedes_play() {
    let config = RoundConfig::new(words(&["a", "b", "c"]), 60).unwrap();
    let mut engine = RoundEngine::new(3).with_rules(RoundRules::default().with_lucky_target(0));

    let start = engine.start(&config);
    assert_eq!(start[0], Effect::PlaySound(SoundCue::CountdownGo));

    // Input during the countdown is ignored.
    assert!(engine.mark_correct(Duration::ZERO).is_empty());

    let mut live = false;
    for s in 1..=4 {
        live = engine
            .tick(Duration::from_secs(s))
            .contains(&Effect::RoundLive);
    }
    assert!(live);
    assert_eq!(engine.snapshot().unwrap().remaining_seconds, 60);

    engine.mark_correct(Duration::from_secs(4));
    assert_eq!(engine.snapshot().unwrap().score, 100);
}

#[test]
fn test_end_cue_follows_remaining_time() {
    let config = RoundConfig::new(words(&["a", "b", "c"]), 60).unwrap();

    // Early exit with nothing scored: no time left, times-up.
    let mut quit = RoundEngine::new(5).with_rules(plain_rules());
    quit.start(&config);
    let end = quit.end_early(Duration::ZERO);
    assert!(end.contains(&Effect::PlaySound(SoundCue::TimesUp)));

    // Deck runs out with time on the clock: game-over.
    let mut cleared = RoundEngine::new(5).with_rules(plain_rules());
    cleared.start(&config);
    let mut now = Duration::ZERO;
    let mut end = Vec::new();
    for _ in 0..3 {
        end = cleared.mark_skip(now);
        now += STEP;
    }
    assert!(end.contains(&Effect::PlaySound(SoundCue::GameOver)));
    assert!(!end.contains(&Effect::PlaySound(SoundCue::TimesUp)));
}
