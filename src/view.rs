//! Render-ready projection of the game and the connection.
//!
//! [`View`] holds exactly what the activity screen shows. It borrows nothing,
//! so it can be serialized and handed to a UI layer as is.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use serde::Serialize;

use crate::card::Card;
use crate::game::{GameState, Status};
use crate::round::{LastRound, Round, RoundOutcome};
use crate::session::{Connection, ConnectionStatus};

/// Default screen title.
pub const TITLE: &str = "Higher or Lower";

/// Prompt shown before the first game.
pub const START_PROMPT: &str = "Press start to draw your first card.";

/// A card face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFace {
    /// Rank label.
    pub rank: &'static str,
    /// Suit symbol.
    pub symbol: &'static str,
    /// Color class, `"red"` or `"black"`.
    pub color: &'static str,
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank.label(),
            symbol: card.suit.symbol(),
            color: card.suit.color().class(),
        }
    }
}

/// Header badge: the connection state or the signed-in player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Connection status word.
    pub status: &'static str,
    /// Text to display.
    pub text: String,
    /// Avatar image URL, when signed in with an avatar.
    pub avatar: Option<String>,
}

/// Screen header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Title.
    pub title: String,
    /// Status or profile badge.
    pub badge: Badge,
}

/// One scoreboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    /// Round number.
    pub round: usize,
    /// Card shown when guessing.
    pub from: CardFace,
    /// Arrow for the guessed direction.
    pub arrow: &'static str,
    /// Card that was drawn.
    pub to: CardFace,
    /// Guessed direction.
    pub guess: &'static str,
    /// Whether the guess was correct.
    pub correct: bool,
}

impl From<&Round> for ScoreRow {
    fn from(round: &Round) -> Self {
        Self {
            round: round.index,
            from: round.starting_card.into(),
            arrow: round.guess.arrow(),
            to: round.next_card.into(),
            guess: round.guess.as_str(),
            correct: round.success,
        }
    }
}

/// Everything the activity screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Header with title and badge.
    pub header: Header,
    /// Game status word.
    pub status: &'static str,
    /// Start prompt, only while idle.
    pub prompt: Option<&'static str>,
    /// Card on display, once a game has started.
    pub card: Option<CardFace>,
    /// Whether the higher/lower controls are enabled.
    pub controls_enabled: bool,
    /// Message about the last round.
    pub message: Option<String>,
    /// Current score.
    pub score: usize,
    /// Every round of the current game, oldest first.
    pub scoreboard: Vec<ScoreRow>,
}

impl View {
    /// Builds the view for a game state and connection.
    #[must_use]
    pub fn render(state: &GameState, connection: &Connection, title: &str) -> Self {
        let status = state.status();
        let card = match status {
            Status::Idle => None,
            Status::Guessing | Status::Finished => state.current_card().map(CardFace::from),
        };

        Self {
            header: Header {
                title: title.to_owned(),
                badge: badge(connection),
            },
            status: status.as_str(),
            prompt: (status == Status::Idle).then_some(START_PROMPT),
            card,
            controls_enabled: state.accepts_guess(),
            message: state.last_round().map(|last| round_message(&last, state.score())),
            score: state.score(),
            scoreboard: state.history().iter().map(ScoreRow::from).collect(),
        }
    }
}

fn badge(connection: &Connection) -> Badge {
    match (&connection.status, &connection.profile) {
        (ConnectionStatus::Connected, Some(profile)) => Badge {
            status: connection.status.as_str(),
            text: profile.display_name().to_owned(),
            avatar: profile.avatar_url(),
        },
        _ => Badge {
            status: connection.status.as_str(),
            text: connection.message.clone(),
            avatar: None,
        },
    }
}

/// Describes the last round for the message line.
#[must_use]
pub fn round_message(last: &LastRound, score: usize) -> String {
    let round = &last.round;
    match last.outcome {
        RoundOutcome::Correct => format!(
            "Correct! {} is {} {}.",
            round.next_card,
            relation(round),
            round.starting_card
        ),
        RoundOutcome::Failed => format!(
            "Wrong! {} is {} {}. Final score: {score}.",
            round.next_card,
            relation(round),
            round.starting_card
        ),
    }
}

fn relation(round: &Round) -> &'static str {
    match round.next_card.rank.value().cmp(&round.starting_card.rank.value()) {
        Ordering::Greater => "higher than",
        Ordering::Less => "lower than",
        Ordering::Equal => "the same rank as",
    }
}
