use std::collections::BTreeMap;

use super::{
    Hand, HandError,
    constants::HAND_SIZE,
    entities::{Card, Category, Rank, Showdown, Suit},
};

// Ranks a flush must hold, as a set, to be a royal flush.
const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Parse a two-character card token (rank then suit), e.g. `"TD"`.
///
/// # Examples
///
/// ```
/// use poker_eval::{entities::{Rank, Suit}, functional::parse_card};
///
/// let card = parse_card("TD").unwrap();
/// assert_eq!(card.rank, Rank::Ten);
/// assert_eq!(card.suit, Suit::Diamond);
/// assert!(parse_card("10D").is_err());
/// ```
pub fn parse_card(token: &str) -> Result<Card, HandError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(rank), Some(suit), None) => {
            let rank = Rank::from_symbol(rank).ok_or(HandError::InvalidRank { symbol: rank })?;
            let suit = Suit::from_symbol(suit).ok_or(HandError::InvalidSuit { symbol: suit })?;
            Ok(Card::new(rank, suit))
        }
        _ => Err(HandError::InvalidCard {
            token: token.to_string(),
        }),
    }
}

/// Partition cards by rank. Iteration follows rank order (two first),
/// so picking "the pair" or "the higher pair" out of the groups is
/// deterministic.
pub fn group_by_rank(cards: &[Card]) -> BTreeMap<Rank, Vec<Card>> {
    let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in cards {
        groups.entry(card.rank).or_default().push(*card);
    }
    groups
}

#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[0].suit == pair[1].suit)
}

/// Whether the sorted ranks step up by exactly one each time.
///
/// Aces only count high, so A-2-3-4-5 isn't consecutive. Repeated ranks
/// step by zero and are never consecutive.
#[must_use]
pub fn is_consecutive(cards: &[Card]) -> bool {
    let mut ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
    ranks.sort();
    ranks
        .windows(2)
        .all(|pair| pair[0].strength() + 1 == pair[1].strength())
}

/// Ranks whose group has exactly `count` cards, weakest first.
fn ranks_with_count(groups: &BTreeMap<Rank, Vec<Card>>, count: usize) -> Vec<Rank> {
    groups
        .iter()
        .filter(|(_, cards)| cards.len() == count)
        .map(|(rank, _)| *rank)
        .collect()
}

/// Facts derived from a hand that the category checks are written in
/// terms of.
struct HandFacts {
    flush: bool,
    consecutive: bool,
    groups: BTreeMap<Rank, Vec<Card>>,
}

impl HandFacts {
    fn new(cards: &[Card]) -> Self {
        Self {
            flush: is_flush(cards),
            consecutive: is_consecutive(cards),
            groups: group_by_rank(cards),
        }
    }

    fn num_groups_of(&self, count: usize) -> usize {
        self.groups.values().filter(|cards| cards.len() == count).count()
    }

    fn has_group_of(&self, count: usize) -> bool {
        self.num_groups_of(count) > 0
    }

    fn is_royal_flush(&self) -> bool {
        self.flush && ROYAL_RANKS.iter().all(|rank| self.groups.contains_key(rank))
    }

    fn is_straight_flush(&self) -> bool {
        self.flush && self.consecutive
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.has_group_of(4)
    }

    fn is_full_house(&self) -> bool {
        self.has_group_of(3) && self.has_group_of(2)
    }

    fn is_flush(&self) -> bool {
        self.flush
    }

    fn is_straight(&self) -> bool {
        self.consecutive
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.has_group_of(3)
    }

    fn is_two_pair(&self) -> bool {
        self.num_groups_of(2) == 2
    }

    fn is_one_pair(&self) -> bool {
        self.has_group_of(2)
    }

    fn is_high_card(&self) -> bool {
        self.groups.values().all(|cards| cards.len() == 1)
    }
}

type CategoryCheck = (Category, fn(&HandFacts) -> bool);

// Checked in order; the first satisfied check decides the category.
const CATEGORY_CHECKS: [CategoryCheck; 10] = [
    (Category::RoyalFlush, HandFacts::is_royal_flush),
    (Category::StraightFlush, HandFacts::is_straight_flush),
    (Category::FourOfAKind, HandFacts::is_four_of_a_kind),
    (Category::FullHouse, HandFacts::is_full_house),
    (Category::Flush, HandFacts::is_flush),
    (Category::Straight, HandFacts::is_straight),
    (Category::ThreeOfAKind, HandFacts::is_three_of_a_kind),
    (Category::TwoPair, HandFacts::is_two_pair),
    (Category::OnePair, HandFacts::is_one_pair),
    (Category::HighCard, HandFacts::is_high_card),
];

/// Determine the category of five cards.
///
/// This doesn't validate the cards; use `classify` for that. Five
/// distinct cards always match exactly one category, so `NoCategory`
/// only comes back for inputs `classify` would've rejected.
pub fn categorize(cards: &[Card]) -> Result<Category, HandError> {
    let facts = HandFacts::new(cards);
    CATEGORY_CHECKS
        .iter()
        .find(|(_, check)| check(&facts))
        .map(|(category, _)| *category)
        .ok_or(HandError::NoCategory)
}

/// Validate five cards and build a hand with its category attached.
///
/// # Examples
///
/// ```
/// use poker_eval::{entities::Category, functional::{classify, parse_card}};
///
/// let cards = ["AH", "2S", "3C", "4D", "5H"].map(|token| parse_card(token).unwrap());
/// let hand = classify(&cards).unwrap();
/// assert_eq!(hand.category(), Category::HighCard);
/// ```
pub fn classify(cards: &[Card]) -> Result<Hand, HandError> {
    let cards: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| HandError::WrongCardCount { count: cards.len() })?;
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].iter().any(|other| card.same_as(other)) {
            return Err(HandError::DuplicateCard {
                rank: card.rank,
                suit: card.suit,
            });
        }
    }
    let category = categorize(&cards)?;
    Ok(Hand { cards, category })
}

/// The ranks that break ties between two hands of the same category,
/// most significant first.
///
/// Royal flushes have nothing to compare. Four of a kind only compares
/// the quad rank; the fifth card isn't a kicker.
pub fn tiebreak_ranks(hand: &Hand) -> Vec<Rank> {
    let groups = group_by_rank(&hand.cards);
    let mut kickers = ranks_with_count(&groups, 1);
    kickers.reverse();
    match hand.category {
        Category::RoyalFlush => Vec::new(),
        Category::StraightFlush | Category::Straight => {
            groups.keys().next_back().copied().into_iter().collect()
        }
        Category::FourOfAKind => ranks_with_count(&groups, 4),
        Category::FullHouse => {
            let mut ranks = ranks_with_count(&groups, 3);
            ranks.extend(ranks_with_count(&groups, 2));
            ranks
        }
        Category::Flush | Category::HighCard => kickers,
        Category::ThreeOfAKind => {
            let mut ranks = ranks_with_count(&groups, 3);
            ranks.extend(kickers);
            ranks
        }
        Category::TwoPair | Category::OnePair => {
            let mut ranks = ranks_with_count(&groups, 2);
            ranks.reverse();
            ranks.extend(kickers);
            ranks
        }
    }
}

/// Compare two hands. A higher category always wins; within a category
/// the tie-break ranks are compared pairwise and the first difference
/// decides. If nothing differs the outcome is `Showdown::Ambiguous`.
///
/// # Examples
///
/// ```
/// use poker_eval::{Hand, entities::Showdown, functional::showdown};
///
/// let quads: Hand = "2H 2S 2C 2D 3H".parse().unwrap();
/// let boat: Hand = "AH AS AC KH KD".parse().unwrap();
/// assert_eq!(showdown(&quads, &boat), Showdown::Win);
/// assert_eq!(showdown(&boat, &quads), Showdown::Loss);
/// ```
#[must_use]
pub fn showdown(hand: &Hand, other: &Hand) -> Showdown {
    hand.category
        .cmp(&other.category)
        .then_with(|| tiebreak_ranks(hand).cmp(&tiebreak_ranks(other)))
        .into()
}

/// Whether `hand` beats `other` outright. An ambiguous showdown isn't
/// a win.
///
/// # Examples
///
/// ```
/// use poker_eval::{Hand, functional::is_strictly_stronger};
///
/// let hand: Hand = "7H 7S 7C 7D 2H".parse().unwrap();
/// let other: Hand = "7H 7S 7C 7D KH".parse().unwrap();
/// assert!(!is_strictly_stronger(&hand, &other));
/// assert!(!is_strictly_stronger(&other, &hand));
/// ```
#[must_use]
pub fn is_strictly_stronger(hand: &Hand, other: &Hand) -> bool {
    showdown(hand, other) == Showdown::Win
}
