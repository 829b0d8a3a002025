//! View projection tests.

use hilo::session::AVATAR_CDN;
use hilo::view::{START_PROMPT, TITLE};
use hilo::{
    Card, Connection, GameOptions, GameState, Guess, Profile, Rank, ScriptedCards, SessionError,
    Suit, View,
};

fn played(draws: Vec<Card>, guesses: &[Guess]) -> GameState {
    let mut source = ScriptedCards::new(draws);
    let options = GameOptions::default();
    let mut state = GameState::start(&mut source);
    for &guess in guesses {
        state = state.guess(guess, &mut source, &options);
    }
    state
}

#[test]
fn idle_view_shows_prompt_only() {
    let view = View::render(&GameState::idle(), &Connection::pending(), TITLE);

    assert_eq!(view.header.title, "Higher or Lower");
    assert_eq!(view.header.badge.status, "pending");
    assert_eq!(view.status, "idle");
    assert_eq!(view.prompt, Some(START_PROMPT));
    assert!(view.card.is_none());
    assert!(!view.controls_enabled);
    assert!(view.message.is_none());
    assert!(view.scoreboard.is_empty());
}

#[test]
fn guessing_view_shows_card_and_enables_controls() {
    let state = played(
        vec![
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Spades),
        ],
        &[Guess::Higher],
    );
    let view = View::render(&state, &Connection::standalone(), TITLE);

    assert!(view.prompt.is_none());
    let card = view.card.unwrap();
    assert_eq!((card.rank, card.symbol, card.color), ("J", "♠", "black"));
    assert!(view.controls_enabled);
    assert_eq!(view.score, 1);
    assert_eq!(view.message.as_deref(), Some("Correct! J♠ is higher than 3♥."));

    let row = &view.scoreboard[0];
    assert_eq!(row.round, 1);
    assert_eq!(row.from.rank, "3");
    assert_eq!(row.from.color, "red");
    assert_eq!(row.arrow, "↑");
    assert_eq!(row.to.rank, "J");
    assert_eq!(row.guess, "higher");
    assert!(row.correct);
}

#[test]
fn finished_view_disables_controls_and_keeps_card() {
    let state = played(
        vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Five, Suit::Diamonds),
        ],
        &[Guess::Lower],
    );
    let view = View::render(&state, &Connection::pending(), TITLE);

    assert_eq!(view.status, "finished");
    assert!(!view.controls_enabled);
    assert_eq!(view.card.unwrap().rank, "2");
    assert_eq!(
        view.message.as_deref(),
        Some("Wrong! 5♦ is higher than 2♣. Final score: 0.")
    );
    assert_eq!(view.scoreboard[0].arrow, "↓");
    assert!(!view.scoreboard[0].correct);
}

#[test]
fn badge_shows_profile_when_connected() {
    let profile = Profile {
        id: "1".to_owned(),
        username: "player".to_owned(),
        global_name: None,
        avatar: Some("a1b2c3".to_owned()),
    };
    let view = View::render(&GameState::idle(), &Connection::connected(profile), TITLE);

    assert_eq!(view.header.badge.status, "connected");
    assert_eq!(view.header.badge.text, "player");
    assert_eq!(
        view.header.badge.avatar,
        Some(format!("{AVATAR_CDN}/avatars/1/a1b2c3.png"))
    );
}

#[test]
fn badge_has_no_avatar_without_hash() {
    let profile = Profile {
        id: "1".to_owned(),
        username: "player".to_owned(),
        global_name: Some("Player One".to_owned()),
        avatar: None,
    };
    let view = View::render(&GameState::idle(), &Connection::connected(profile), TITLE);

    assert_eq!(view.header.badge.text, "Player One");
    assert!(view.header.badge.avatar.is_none());
}

#[test]
fn badge_shows_error_message() {
    let connection = Connection::failed(&SessionError::MissingConfig("client id"));
    let view = View::render(&GameState::idle(), &connection, "Hi-Lo");

    assert_eq!(view.header.title, "Hi-Lo");
    assert_eq!(view.header.badge.status, "error");
    assert_eq!(view.header.badge.text, "missing configuration: client id");
    assert!(view.header.badge.avatar.is_none());
}
