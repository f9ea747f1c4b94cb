pub const HAND_SIZE: usize = 5;
// One round is both players' hands on a single line.
pub const ROUND_SIZE: usize = 2 * HAND_SIZE;
pub const NUM_RANKS: usize = 13;
pub const DEFAULT_INPUT: &str = "poker.txt";
