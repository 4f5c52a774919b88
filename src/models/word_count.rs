use crate::types::{Frequency, Word};
use serde::{Deserialize, Serialize};

/// A unique word paired with its number of occurrences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: Word,
    pub count: Frequency,
}

impl WordCount {
    pub fn new(word: impl Into<Word>, count: Frequency) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl<W: Into<Word>> From<(W, Frequency)> for WordCount {
    fn from((word, count): (W, Frequency)) -> Self {
        WordCount::new(word, count)
    }
}
