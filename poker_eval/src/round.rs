//! Rounds are single lines of ten cards: player 1's hand followed by
//! player 2's. A `Judge` reads rounds from any buffered reader, decides
//! each showdown, and keeps a running tally.

use log::{debug, info, warn};
use serde::Serialize;
use std::{
    fmt,
    io::{self, BufRead, Lines},
    iter::Enumerate,
    str::FromStr,
};
use thiserror::Error;

use crate::hand::{
    Hand, HandError,
    constants::{HAND_SIZE, ROUND_SIZE},
    entities::{Card, Rank, Showdown, Suit},
    functional,
};

#[derive(Debug, Eq, Error, PartialEq)]
pub enum RoundError {
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("{rank}{suit} is dealt to both players")]
    SharedCard { rank: Rank, suit: Suit },
    #[error("need {} cards per round, got {}", ROUND_SIZE, .count)]
    WrongTokenCount { count: usize },
}

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("line {line}: no rule separates the two hands")]
    Ambiguous { line: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RoundError,
    },
}

#[derive(Clone, Debug, Serialize)]
pub struct Round {
    pub player1: Hand,
    pub player2: Hand,
}

impl Round {
    pub fn new(cards: &[Card]) -> Result<Self, RoundError> {
        if cards.len() != ROUND_SIZE {
            return Err(RoundError::WrongTokenCount { count: cards.len() });
        }
        let (cards1, cards2) = cards.split_at(HAND_SIZE);
        let player1 = Hand::new(cards1)?;
        let player2 = Hand::new(cards2)?;
        if let Some(card) = cards1
            .iter()
            .find(|card| cards2.iter().any(|other| card.same_as(other)))
        {
            return Err(RoundError::SharedCard {
                rank: card.rank,
                suit: card.suit,
            });
        }
        Ok(Self { player1, player2 })
    }

    #[must_use]
    pub fn showdown(&self) -> Showdown {
        self.player1.showdown(&self.player2)
    }
}

impl FromStr for Round {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(functional::parse_card)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }
}

#[derive(Debug, Serialize)]
pub struct RoundReport {
    /// One-based line number of the round in its input.
    pub line: usize,
    pub player1: Hand,
    pub player2: Hand,
    /// Outcome from player 1's point of view.
    pub outcome: Showdown,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: P1[{}]({}) P2[{}]({}), Player 1 {}",
            self.line,
            self.player1,
            self.player1.category(),
            self.player2,
            self.player2.category(),
            self.outcome
        )
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Tally {
    pub rounds: usize,
    pub player1_wins: usize,
    pub player2_wins: usize,
    /// Rounds no rule could decide. These don't count as wins for
    /// either player.
    pub ambiguous: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Showdown) {
        self.rounds += 1;
        match outcome {
            Showdown::Win => self.player1_wins += 1,
            Showdown::Loss => self.player2_wins += 1,
            Showdown::Ambiguous => self.ambiguous += 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct JudgeSettings {
    /// Fail on an ambiguous round instead of scoring it as a round
    /// player 1 didn't win.
    pub strict: bool,
}

/// Iterator over the judged rounds of a reader.
///
/// Blank lines are skipped. Each item is the report for one round or
/// the error that stopped it; the tally only includes rounds that were
/// reported.
pub struct Judge<R> {
    lines: Enumerate<Lines<R>>,
    settings: JudgeSettings,
    tally: Tally,
}

impl<R: BufRead> Judge<R> {
    pub fn new(reader: R, settings: JudgeSettings) -> Self {
        Self {
            lines: reader.lines().enumerate(),
            settings,
            tally: Tally::default(),
        }
    }

    #[must_use]
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Stop judging and hand back the tally of every reported round.
    pub fn finish(self) -> Tally {
        let tally = self.tally;
        info!(
            "judged {} rounds: player 1 won {}, player 2 won {}, {} ambiguous",
            tally.rounds, tally.player1_wins, tally.player2_wins, tally.ambiguous
        );
        tally
    }

    fn judge_line(&mut self, line: usize, repr: &str) -> Result<RoundReport, JudgeError> {
        let round: Round = repr
            .parse()
            .map_err(|source| JudgeError::Malformed { line, source })?;
        let outcome = round.showdown();
        if outcome == Showdown::Ambiguous {
            if self.settings.strict {
                return Err(JudgeError::Ambiguous { line });
            }
            warn!(
                "line {line}: can't separate {} from {}",
                round.player1, round.player2
            );
        }
        self.tally.record(outcome);
        let report = RoundReport {
            line,
            player1: round.player1,
            player2: round.player2,
            outcome,
        };
        debug!("{report}");
        Ok(report)
    }
}

impl<R: BufRead> Iterator for Judge<R> {
    type Item = Result<RoundReport, JudgeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, line) = self.lines.next()?;
            let repr = match line {
                Ok(repr) => repr,
                Err(error) => return Some(Err(error.into())),
            };
            if repr.trim().is_empty() {
                continue;
            }
            return Some(self.judge_line(idx + 1, &repr));
        }
    }
}

/// Judge every round of a reader, stopping at the first error.
/// `on_round` sees each report as soon as its round is decided.
///
/// # Examples
///
/// ```
/// use poker_eval::round::{judge, JudgeSettings};
///
/// let rounds = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n5D 8C 9S JS AC 2C 5C 7D 8S QH\n";
/// let mut lines = Vec::new();
/// let tally = judge(rounds.as_bytes(), JudgeSettings::default(), |report| {
///     lines.push(report.line)
/// })
/// .unwrap();
/// assert_eq!(tally.rounds, 2);
/// assert_eq!(tally.player1_wins, 1);
/// assert_eq!(lines, vec![1, 2]);
/// ```
pub fn judge<R, F>(
    reader: R,
    settings: JudgeSettings,
    mut on_round: F,
) -> Result<Tally, JudgeError>
where
    R: BufRead,
    F: FnMut(&RoundReport),
{
    let mut judge = Judge::new(reader, settings);
    for report in judge.by_ref() {
        on_round(&report?);
    }
    Ok(judge.finish())
}
