use crate::constants::DEFAULT_TOP_N_WORDS;
use crate::models::ZipfAnalyzerConfig;

pub const DEFAULT_ZIPF_ANALYZER_CONFIG: &ZipfAnalyzerConfig = &ZipfAnalyzerConfig {
    top_n_words: DEFAULT_TOP_N_WORDS,
};
