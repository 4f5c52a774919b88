/// Number of top words extracted for bar-chart style summaries.
pub const DEFAULT_TOP_N_WORDS: usize = 20;

/// Characters which may join two alphabetic runs into a single token
/// (e.g. "don't", "mother-in-law").
pub const WORD_JOINERS: &[char] = &['\'', '\u{2019}', '-'];

/// Header fragments identifying the word column of a table.
pub const WORD_COLUMN_HINTS: &[&str] = &["word", "term"];

/// Header fragments identifying the count column of a table.
pub const COUNT_COLUMN_HINTS: &[&str] = &["freq", "count"];

/// Number of data rows sampled when inferring column types.
pub const COLUMN_TYPE_SAMPLE_ROWS: usize = 5;

pub const RANKED_POINTS_CSV_HEADER: &[&str] = &[
    "Rank",
    "Word",
    "ActualFrequency",
    "LogRank",
    "LogFrequency",
    "IdealFrequency",
    "FittedFrequency",
    "PercentDivergenceFromIdeal",
];
