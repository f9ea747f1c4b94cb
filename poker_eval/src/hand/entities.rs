use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{self},
    str::FromStr,
};

use super::{HandError, constants::NUM_RANKS, functional};

/// Card ranks, declared weakest to strongest so the derived ordering
/// is the poker ordering rather than the ordering of the rank symbols.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; NUM_RANKS] = [
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

    /// Position of the rank in the strength table (two=0 ... ace=12).
    #[must_use]
    pub fn strength(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let rank = match symbol {
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'A' => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Suits have no strength. They only matter for flushes.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Suit {
    Heart,
    Spade,
    Club,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Self::Heart, Self::Spade, Self::Club, Self::Diamond];

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let suit = match symbol {
            'H' => Self::Heart,
            'S' => Self::Spade,
            'C' => Self::Club,
            'D' => Self::Diamond,
            _ => return None,
        };
        Some(suit)
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Heart => 'H',
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Diamond => 'D',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A card is a rank and a suit.
///
/// Equality and ordering only look at the rank, so sorting a hand never
/// depends on suits. Use `Card::same_as` to check whether two cards are
/// literally the same card.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub fn same_as(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        functional::parse_card(s)
    }
}

/// Hand categories from weakest to strongest. The discriminants are the
/// integer tags used when a category crosses a boundary as a number.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    HighCard = 1,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl From<Category> for u8 {
    fn from(category: Category) -> u8 {
        category as u8
    }
}

impl TryFrom<u8> for Category {
    type Error = HandError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        let category = match tag {
            1 => Self::HighCard,
            2 => Self::OnePair,
            3 => Self::TwoPair,
            4 => Self::ThreeOfAKind,
            5 => Self::Straight,
            6 => Self::Flush,
            7 => Self::FullHouse,
            8 => Self::FourOfAKind,
            9 => Self::StraightFlush,
            10 => Self::RoyalFlush,
            tag => return Err(HandError::UnknownCategory { tag }),
        };
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "HIGH_CARD",
            Self::OnePair => "ONE_PAIR",
            Self::TwoPair => "TWO_PAIR",
            Self::ThreeOfAKind => "THREE_OF_A_KIND",
            Self::Straight => "STRAIGHT",
            Self::Flush => "FLUSH",
            Self::FullHouse => "FULL_HOUSE",
            Self::FourOfAKind => "FOUR_OF_A_KIND",
            Self::StraightFlush => "STRAIGHT_FLUSH",
            Self::RoyalFlush => "ROYAL_FLUSH",
        };
        write!(f, "{repr}")
    }
}

/// Outcome of a showdown from the first hand's point of view.
///
/// `Ambiguous` isn't a tie in the poker sense. It means no tie-break
/// rule separates the two hands any further, so neither hand is
/// strictly stronger.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Showdown {
    Win,
    Loss,
    Ambiguous,
}

impl Showdown {
    /// The same outcome from the other hand's point of view.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Ambiguous => Self::Ambiguous,
        }
    }
}

impl From<Ordering> for Showdown {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Loss,
            Ordering::Equal => Self::Ambiguous,
        }
    }
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Win => "wins",
            Self::Loss => "loses",
            Self::Ambiguous => "ties",
        };
        write!(f, "{repr}")
    }
}
