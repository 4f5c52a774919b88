use crate::constants::WORD_JOINERS;
use crate::types::Word;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub struct Tokenizer {
    as_verbatim: bool,
}

impl Tokenizer {
    /// Configuration for word-frequency parsing of arbitrary text documents.
    ///
    /// Text is composed (NFC) and lower-cased, then split into maximal runs of
    /// alphabetic characters. Combining marks stay attached to the letter they
    /// follow. An apostrophe or hyphen is kept only when it joins two
    /// alphabetic runs, so "mother-in-law" and "don't" are single tokens.
    /// Digits, punctuation and whitespace only delimit tokens.
    pub fn text_doc_parser() -> Self {
        Self { as_verbatim: false }
    }

    /// Configuration for minimal processing; splits on whitespace only.
    ///
    /// Used for the approximate total word count of a document.
    pub fn verbatim_doc_parser() -> Self {
        Self { as_verbatim: true }
    }

    /// Tokenizer function to split the text into individual tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Word> {
        if self.as_verbatim {
            return text
                .split_whitespace()
                .map(|word| word.to_string())
                .collect();
        }

        let chars: Vec<char> = text.nfc().collect::<String>().to_lowercase().chars().collect();

        let mut tokens = Vec::new();
        let mut current = String::new();

        for (index, &c) in chars.iter().enumerate() {
            if c.is_alphabetic() || (is_combining_mark(c) && !current.is_empty()) {
                current.push(c);
                continue;
            }

            // A joiner only survives between two letters
            let joins_letters = WORD_JOINERS.contains(&c)
                && !current.is_empty()
                && chars.get(index + 1).map_or(false, |next| next.is_alphabetic());

            if joins_letters {
                current.push(c);
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}
