//! Word deck: shuffled word order plus lucky-word multipliers.
//!
//! Built once when a round starts and never mutated afterwards. Backed by
//! `im` collections so round-state snapshots share it for free.

pub mod word_deck;

pub use word_deck::{LuckyMultiplier, WordDeck};
