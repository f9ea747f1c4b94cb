pub mod hand;
pub use hand::{
    Hand, HandError,
    constants::{self, HAND_SIZE, ROUND_SIZE},
    entities::{self, Card, Category, Rank, Showdown, Suit},
    functional,
};

pub mod round;
pub use round::{Judge, JudgeError, JudgeSettings, Round, RoundError, RoundReport, Tally, judge};
