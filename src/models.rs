pub mod error;
pub use error::Error;

pub mod word_count;
pub use word_count::WordCount;

pub mod fit_metrics;
pub use fit_metrics::FitMetrics;

pub mod ranked_point;
pub use ranked_point::RankedPoint;

pub mod source_info;
pub use source_info::{make_analysis_id, SourceInfo};

pub mod analysis_result;
pub use analysis_result::AnalysisResult;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod text_aggregator;
pub use text_aggregator::{TextAggregation, TextAggregator};

pub mod zipf_analyzer;
pub use zipf_analyzer::{ZipfAnalyzer, ZipfAnalyzerConfig};

pub mod text_extractor;
pub use text_extractor::{PlainTextExtractor, TextExtractor};

pub mod table_reader;
pub use table_reader::{CsvTableReader, TableReader};

pub mod document_ingestor;
pub use document_ingestor::{DocumentIngestor, IngestedDocument};
