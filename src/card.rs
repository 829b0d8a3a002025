//! Card types.

use core::cmp::Ordering;
use core::fmt;

/// Card rank, ordered by value from [`Rank::Two`] (2) to [`Rank::Ace`] (14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
    /// Ace (14).
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value used for comparisons (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Returns the rank for a numeric value, if it is in 2..=14.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value < 2 || value > 14 {
            return None;
        }
        Some(Self::ALL[(value - 2) as usize])
    }

    /// Returns the display label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// Presentation color of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitColor {
    /// Spades and clubs.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl SuitColor {
    /// Returns the CSS-style class name (`"black"` or `"red"`).
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
        }
    }

    /// Returns the suit name in lowercase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
        }
    }

    /// Returns the presentation color.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Self::Spades | Self::Clubs => SuitColor::Black,
            Self::Hearts | Self::Diamonds => SuitColor::Red,
        }
    }
}

/// A playing card.
///
/// Equality is structural, but the game only ever compares cards by rank;
/// use [`Card::rank_cmp`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Compares two cards by rank value only.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.rank.value().cmp(&other.rank.value())
    }

    /// Returns whether both cards share the same rank value.
    #[must_use]
    pub const fn same_rank(&self, other: &Self) -> bool {
        self.rank.value() == other.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Number of distinct cards a draw can produce.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_span_two_to_fourteen() {
        let values: alloc::vec::Vec<u8> = Rank::ALL.iter().map(|rank| rank.value()).collect();
        assert_eq!(values.first(), Some(&2));
        assert_eq!(values.last(), Some(&14));
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn from_value_round_trips_and_rejects_out_of_range() {
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(14), Some(Rank::Ace));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn cards_compare_by_rank_only() {
        let a = Card::new(Rank::Queen, Suit::Spades);
        let b = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(a.rank_cmp(&b), Ordering::Equal);
        assert!(a.same_rank(&b));
        assert_ne!(a, b);
        assert_eq!(
            Card::new(Rank::Ace, Suit::Clubs).rank_cmp(&Card::new(Rank::King, Suit::Clubs)),
            Ordering::Greater
        );
    }

    #[test]
    fn suit_colors_and_display() {
        assert_eq!(Suit::Hearts.color(), SuitColor::Red);
        assert_eq!(Suit::Clubs.color().class(), "black");
        assert_eq!(
            alloc::format!("{}", Card::new(Rank::Ten, Suit::Diamonds)),
            "10♦"
        );
        assert_eq!(DECK_SIZE, 52);
    }
}
