use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

pub mod constants;
pub mod entities;
pub mod functional;

use constants::HAND_SIZE;
use entities::{Card, Category, Rank, Showdown, Suit};

#[derive(Debug, Eq, Error, PartialEq)]
pub enum HandError {
    #[error("{rank}{suit} appears more than once")]
    DuplicateCard { rank: Rank, suit: Suit },
    #[error("card {token:?} must be a rank followed by a suit")]
    InvalidCard { token: String },
    #[error("{symbol:?} isn't a rank")]
    InvalidRank { symbol: char },
    #[error("{symbol:?} isn't a suit")]
    InvalidSuit { symbol: char },
    #[error("no category determined")]
    NoCategory,
    #[error("unknown category tag {tag}")]
    UnknownCategory { tag: u8 },
    #[error("need exactly {} cards, got {}", HAND_SIZE, .count)]
    WrongCardCount { count: usize },
}

/// Five cards and the category they make.
///
/// The category is computed once when the hand is built and never
/// changes afterwards. Hands can only be built through classification,
/// which is why this type serializes but doesn't deserialize.
#[derive(Clone, Debug, Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: Category,
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        functional::classify(cards)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn showdown(&self, other: &Hand) -> Showdown {
        functional::showdown(self, other)
    }

    #[must_use]
    pub fn is_stronger_than(&self, other: &Hand) -> bool {
        functional::is_strictly_stronger(self, other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self
            .cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{repr}")
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(functional::parse_card)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::{Hand, HandError, entities::Category};

    #[test]
    fn hand_keeps_card_order_and_category() {
        let hand: Hand = "KH 2S KD 9C 2H".parse().unwrap();
        assert_eq!(hand.to_string(), "KH 2S KD 9C 2H");
        assert_eq!(hand.category(), Category::TwoPair);
    }

    #[test]
    fn hand_from_str_propagates_card_errors() {
        assert_eq!(
            "KH 2S KD 9C 1H".parse::<Hand>().unwrap_err(),
            HandError::InvalidRank { symbol: '1' }
        );
        assert_eq!(
            "KH 2S KD 9C".parse::<Hand>().unwrap_err(),
            HandError::WrongCardCount { count: 4 }
        );
    }

    #[test]
    fn hand_serializes_cards_and_category() {
        let hand: Hand = "TH JH QH KH AH".parse().unwrap();
        let json = serde_json::to_value(&hand).unwrap();
        assert_eq!(json["category"], "ROYAL_FLUSH");
        assert_eq!(json["cards"][0]["rank"], "Ten");
        assert_eq!(json["cards"][4]["suit"], "Heart");
    }
}
