//! Game integration tests.

use hilo::{
    Card, Game, GameOptions, GameState, Guess, Rank, RandomCards, RoundOutcome, ScriptedCards,
    Status, Suit, draw_different_card,
};
use proptest::prelude::*;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn scripted_game(options: GameOptions, draws: &[Card]) -> Game {
    Game::with_source(options, ScriptedCards::new(draws.to_vec()))
}

#[test]
fn new_game_is_idle() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.status(), Status::Idle);
    assert_eq!(game.current_card(), None);
    assert_eq!(game.score(), 0);
    assert!(game.history().is_empty());
    assert!(game.last_round().is_none());
}

#[test]
fn start_shows_first_card() {
    let game = scripted_game(GameOptions::default(), &[card(Rank::Seven, Suit::Hearts)]);
    let first = game.start();

    assert_eq!(first, card(Rank::Seven, Suit::Hearts));
    assert_eq!(game.status(), Status::Guessing);
    assert_eq!(game.current_card(), Some(first));
}

#[test]
fn higher_from_ten_skips_tie_and_wins_on_king() {
    let game = scripted_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Spades),   // first card
            card(Rank::Ten, Suit::Hearts),   // rejected: same rank
            card(Rank::King, Suit::Clubs),   // next card
        ],
    );
    game.start();

    let round = game.guess(Guess::Higher).unwrap();
    assert_eq!(round.index, 1);
    assert_eq!(round.starting_card, card(Rank::Ten, Suit::Spades));
    assert_eq!(round.next_card, card(Rank::King, Suit::Clubs));
    assert!(round.success);

    assert_eq!(game.score(), 1);
    assert_eq!(game.status(), Status::Guessing);
    assert_eq!(game.current_card(), Some(card(Rank::King, Suit::Clubs)));
    assert_eq!(game.last_round().unwrap().outcome, RoundOutcome::Correct);
}

#[test]
fn lower_from_two_fails_on_five() {
    let game = scripted_game(
        GameOptions::default(),
        &[card(Rank::Two, Suit::Diamonds), card(Rank::Five, Suit::Spades)],
    );
    game.start();

    let round = game.guess(Guess::Lower).unwrap();
    assert!(!round.success);

    assert_eq!(game.status(), Status::Finished);
    assert_eq!(game.score(), 0);
    assert_eq!(game.current_card(), Some(card(Rank::Two, Suit::Diamonds)));
    let last = game.last_round().unwrap();
    assert_eq!(last.outcome, RoundOutcome::Failed);
    assert_eq!(last.outcome.as_str(), "failed");
    assert_eq!(last.round, round);
}

#[test]
fn guess_is_ignored_before_start_and_after_finish() {
    let game = scripted_game(
        GameOptions::default(),
        &[card(Rank::Ace, Suit::Hearts), card(Rank::Three, Suit::Clubs)],
    );
    assert_eq!(game.guess(Guess::Higher), None);
    assert_eq!(game.state(), GameState::idle());

    game.start();
    game.guess(Guess::Higher).unwrap();
    assert_eq!(game.status(), Status::Finished);

    let finished = game.state();
    assert_eq!(game.guess(Guess::Lower), None);
    assert_eq!(game.guess(Guess::Higher), None);
    assert_eq!(game.state(), finished);
}

#[test]
fn restart_resets_score_and_history() {
    let game = scripted_game(
        GameOptions::default(),
        &[
            card(Rank::Four, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),   // higher: correct
            card(Rank::Jack, Suit::Spades),  // higher: correct
            card(Rank::Two, Suit::Hearts),   // higher: wrong
            card(Rank::Queen, Suit::Diamonds), // new first card
        ],
    );
    game.start();
    game.guess(Guess::Higher).unwrap();
    game.guess(Guess::Higher).unwrap();
    game.guess(Guess::Higher).unwrap();
    assert_eq!(game.status(), Status::Finished);
    assert_eq!(game.score(), 2);
    assert_eq!(game.history().len(), 3);

    let first = game.start();
    assert_eq!(first, card(Rank::Queen, Suit::Diamonds));
    assert_eq!(game.status(), Status::Guessing);
    assert_eq!(game.score(), 0);
    assert!(game.history().is_empty());
    assert!(game.last_round().is_none());
}

#[test]
fn round_indices_count_up_from_one() {
    let game = scripted_game(
        GameOptions::default(),
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
        ],
    );
    game.start();
    for _ in 0..3 {
        game.guess(Guess::Higher).unwrap();
    }

    let indices: Vec<usize> = game.history().iter().map(|round| round.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn ties_count_as_correct_when_draws_may_repeat_rank() {
    let options = GameOptions::default().with_distinct_draws(false);
    for guess in [Guess::Higher, Guess::Lower] {
        let game = scripted_game(
            options,
            &[card(Rank::Eight, Suit::Spades), card(Rank::Eight, Suit::Hearts)],
        );
        game.start();

        let round = game.guess(guess).unwrap();
        assert!(round.success, "tie should favor a {} guess", guess.as_str());
        assert_eq!(game.current_card(), Some(card(Rank::Eight, Suit::Hearts)));
        assert_eq!(game.score(), 1);
    }
}

#[test]
fn pure_transitions_match_controller() {
    let mut source = ScriptedCards::new(vec![
        card(Rank::Six, Suit::Clubs),
        card(Rank::Queen, Suit::Hearts),
    ]);
    let options = GameOptions::default();

    let state = GameState::start(&mut source);
    assert_eq!(state.current_card(), Some(card(Rank::Six, Suit::Clubs)));

    let state = state.guess(Guess::Higher, &mut source, &options);
    assert_eq!(state.score(), 1);
    assert_eq!(state.history().len(), 1);
    assert_eq!(source.drawn(), 2);
}

#[test]
fn idle_state_guess_draws_nothing() {
    let mut source = ScriptedCards::new(vec![card(Rank::Six, Suit::Clubs)]);
    let state = GameState::idle().guess(Guess::Lower, &mut source, &GameOptions::default());

    assert_eq!(state, GameState::idle());
    assert_eq!(source.drawn(), 0);
}

#[test]
fn different_card_never_repeats_rank() {
    let mut source = RandomCards::seeded(7);
    for rank in Rank::ALL {
        let current = card(rank, Suit::Spades);
        for _ in 0..1_000 {
            let next = draw_different_card(&current, &mut source);
            assert_ne!(next.rank.value(), current.rank.value());
        }
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    assert_eq!(a.start(), b.start());
    assert_eq!(a.guess(Guess::Lower), b.guess(Guess::Lower));
}

proptest! {
    #[test]
    fn score_tracks_successful_history(seed in any::<u64>(), guesses in prop::collection::vec(any::<bool>(), 1..40)) {
        let game = Game::new(GameOptions::default(), seed);
        game.start();

        for higher in guesses {
            let guess = if higher { Guess::Higher } else { Guess::Lower };
            let before = game.state();
            match game.guess(guess) {
                Some(round) if round.success => {
                    prop_assert_eq!(game.status(), Status::Guessing);
                    prop_assert_eq!(game.current_card(), Some(round.next_card));
                }
                Some(round) => {
                    prop_assert_eq!(game.status(), Status::Finished);
                    prop_assert_eq!(game.current_card(), before.current_card());
                    prop_assert_eq!(round.starting_card, before.current_card().unwrap());
                }
                None => {
                    prop_assert_eq!(before.status(), Status::Finished);
                    prop_assert_eq!(game.state(), before);
                }
            }

            let state = game.state();
            let successes = state.history().iter().filter(|round| round.success).count();
            prop_assert_eq!(state.score(), successes);
            if state.status() == Status::Guessing {
                prop_assert_eq!(state.history().len(), state.score());
                prop_assert!(state.history().iter().all(|round| round.success));
            } else {
                prop_assert_eq!(state.history().len(), state.score() + 1);
            }
        }
    }

    #[test]
    fn start_always_resets(seed in any::<u64>(), guesses in 0usize..10) {
        let game = Game::new(GameOptions::default(), seed);
        game.start();
        for _ in 0..guesses {
            game.guess(Guess::Higher);
        }

        game.start();
        prop_assert_eq!(game.status(), Status::Guessing);
        prop_assert_eq!(game.score(), 0);
        prop_assert!(game.history().is_empty());
        prop_assert!(game.last_round().is_none());
    }
}
