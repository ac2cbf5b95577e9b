//! Deck construction and lookup.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Score multiplier attached to a lucky word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckyMultiplier {
    Double,
    Triple,
}

impl LuckyMultiplier {
    const ALL: [LuckyMultiplier; 2] = [LuckyMultiplier::Double, LuckyMultiplier::Triple];

    /// Numeric factor applied to the base award.
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            LuckyMultiplier::Double => 2,
            LuckyMultiplier::Triple => 3,
        }
    }

    fn pick<R: RandomSource>(rng: &mut R) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }
}

impl std::fmt::Display for LuckyMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.factor())
    }
}

/// The word order for one round and its lucky indices.
///
/// ## Lucky placement
///
/// `build` targets `min(target, n)` lucky words in two phases:
/// 1. Visit indices in random order, accepting an index only if neither
///    neighbour is already lucky.
/// 2. If adjacency blocked the target, fill the remaining slots from any
///    unassigned indices.
///
/// Phase 2 only runs for small decks: with `n >= 3 * target - 2` phase 1
/// always reaches the target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDeck {
    words: Vector<String>,
    lucky: OrdMap<usize, LuckyMultiplier>,
}

impl WordDeck {
    /// Shuffle `words` and assign lucky multipliers.
    pub fn build<R: RandomSource>(words: &[String], lucky_target: usize, rng: &mut R) -> Self {
        let mut shuffled = words.to_vec();
        rng.shuffle(&mut shuffled);

        let count = shuffled.len();
        let target = lucky_target.min(count);
        let mut lucky = OrdMap::new();

        let mut candidates: Vec<usize> = (0..count).collect();
        rng.shuffle(&mut candidates);
        for &index in &candidates {
            if lucky.len() >= target {
                break;
            }
            let touches_lucky = (index > 0 && lucky.contains_key(&(index - 1)))
                || lucky.contains_key(&(index + 1));
            if !touches_lucky {
                lucky.insert(index, LuckyMultiplier::pick(rng));
            }
        }

        if lucky.len() < target {
            let mut remaining: Vec<usize> = (0..count).filter(|i| !lucky.contains_key(i)).collect();
            rng.shuffle(&mut remaining);
            for index in remaining.into_iter().take(target - lucky.len()) {
                lucky.insert(index, LuckyMultiplier::pick(rng));
            }
        }

        Self {
            words: shuffled.into_iter().collect(),
            lucky,
        }
    }

    /// Build a deck with a fixed order and fixed lucky words.
    ///
    /// Lucky indices outside the word list are ignored.
    pub fn with_lucky(
        words: Vec<String>,
        lucky: impl IntoIterator<Item = (usize, LuckyMultiplier)>,
    ) -> Self {
        let count = words.len();
        Self {
            words: words.into_iter().collect(),
            lucky: lucky.into_iter().filter(|(i, _)| *i < count).collect(),
        }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the deck holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Words in play order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Multiplier for `index`, if that word is lucky.
    #[must_use]
    pub fn multiplier(&self, index: usize) -> Option<LuckyMultiplier> {
        self.lucky.get(&index).copied()
    }

    /// Lucky indices in ascending order.
    pub fn lucky_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.lucky.keys().copied()
    }

    /// Number of lucky words.
    #[must_use]
    pub fn lucky_count(&self) -> usize {
        self.lucky.len()
    }
}
