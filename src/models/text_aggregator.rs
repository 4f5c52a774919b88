use crate::models::{Tokenizer, WordCount};
use crate::utils::count_word_frequencies;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Word counts for a single text document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextAggregation {
    /// One entry per unique word, in order of first occurrence.
    pub word_counts: Vec<WordCount>,
    /// Whitespace-delimited chunk count. Descriptive only; may overcount
    /// relative to `word_counts`.
    pub total_word_count: usize,
    pub unique_word_count: usize,
}

/// Turns raw text into per-word occurrence counts.
pub struct TextAggregator {
    word_tokenizer: Tokenizer,
    verbatim_tokenizer: Tokenizer,
}

impl TextAggregator {
    pub fn new() -> Self {
        Self {
            word_tokenizer: Tokenizer::text_doc_parser(),
            verbatim_tokenizer: Tokenizer::verbatim_doc_parser(),
        }
    }

    pub fn aggregate(&self, text: &str) -> TextAggregation {
        info!("Tokenizing...");
        let words = self.word_tokenizer.tokenize(text);

        info!("Counting word frequencies...");
        let word_counts = count_word_frequencies(&words);

        let total_word_count = self.verbatim_tokenizer.tokenize(text).len();
        let unique_word_count = word_counts.len();

        debug!(
            "Matched {} tokens, {} unique, {} whitespace-delimited words",
            words.len(),
            unique_word_count,
            total_word_count
        );

        TextAggregation {
            word_counts,
            total_word_count,
            unique_word_count,
        }
    }
}

impl Default for TextAggregator {
    fn default() -> Self {
        Self::new()
    }
}
