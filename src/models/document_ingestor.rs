use crate::models::{
    CsvTableReader, Error, PlainTextExtractor, SourceInfo, TableReader, TextAggregator,
    TextExtractor, WordCount,
};
use log::{info, warn};
use std::path::Path;

/// Word counts and metadata read from one source, ready for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedDocument {
    pub word_counts: Vec<WordCount>,
    pub source_info: SourceInfo,
}

/// Chooses a reader for a source based on its file extension and turns the
/// source into word counts.
///
/// Text extractors and table readers are injected; the default ingestor knows
/// plain text, CSV and TSV.
pub struct DocumentIngestor {
    text_extractors: Vec<Box<dyn TextExtractor>>,
    table_readers: Vec<Box<dyn TableReader>>,
    text_aggregator: TextAggregator,
}

enum Reader<'a> {
    Text(&'a dyn TextExtractor),
    Table(&'a dyn TableReader),
}

impl DocumentIngestor {
    /// An ingestor without any readers.
    pub fn new() -> Self {
        Self {
            text_extractors: Vec::new(),
            table_readers: Vec::new(),
            text_aggregator: TextAggregator::new(),
        }
    }

    pub fn with_text_extractor(mut self, text_extractor: Box<dyn TextExtractor>) -> Self {
        self.text_extractors.push(text_extractor);
        self
    }

    pub fn with_table_reader(mut self, table_reader: Box<dyn TableReader>) -> Self {
        self.table_readers.push(table_reader);
        self
    }

    pub fn ingest(
        &self,
        name: &str,
        media_type: &str,
        bytes: &[u8],
    ) -> Result<IngestedDocument, Error> {
        let extension = Path::new(name)
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_lowercase())
            .unwrap_or_default();

        let source_info = SourceInfo::new(name, media_type, bytes.len() as u64);

        match self.negotiate_reader(name, &extension)? {
            Reader::Text(text_extractor) => {
                let text = text_extractor.extract_text(bytes)?;
                Ok(self.ingest_text_with_source_info(&text, source_info))
            }
            Reader::Table(table_reader) => {
                let word_counts = table_reader.read_table(bytes)?;

                // Saturates at usize::MAX
                let total_word_count = word_counts.iter().fold(0usize, |total, word_count| {
                    let count = usize::try_from(word_count.count.max(0)).unwrap_or(usize::MAX);
                    total.saturating_add(count)
                });
                let source_info = source_info.with_word_counts(total_word_count, word_counts.len());

                Ok(IngestedDocument {
                    word_counts,
                    source_info,
                })
            }
        }
    }

    /// Ingests text which has already been extracted, e.g. from standard input.
    pub fn ingest_text(&self, name: &str, media_type: &str, text: &str) -> IngestedDocument {
        let source_info = SourceInfo::new(name, media_type, text.len() as u64);
        self.ingest_text_with_source_info(text, source_info)
    }

    fn ingest_text_with_source_info(&self, text: &str, source_info: SourceInfo) -> IngestedDocument {
        let aggregation = self.text_aggregator.aggregate(text);

        let source_info = source_info
            .with_word_counts(aggregation.total_word_count, aggregation.unique_word_count);

        IngestedDocument {
            word_counts: aggregation.word_counts,
            source_info,
        }
    }

    fn negotiate_reader(&self, name: &str, extension: &str) -> Result<Reader<'_>, Error> {
        if let Some(text_extractor) = self
            .text_extractors
            .iter()
            .find(|e| e.supported_extensions().contains(&extension))
        {
            info!("Reading {} as a text document", name);
            return Ok(Reader::Text(text_extractor.as_ref()));
        }

        if let Some(table_reader) = self
            .table_readers
            .iter()
            .find(|r| r.supported_extensions().contains(&extension))
        {
            info!("Reading {} as a table", name);
            return Ok(Reader::Table(table_reader.as_ref()));
        }

        if let Some(text_extractor) = self
            .text_extractors
            .iter()
            .find(|e| e.fallback_extensions().contains(&extension))
        {
            warn!(
                "No native reader for .{} files; attempting {} with a fallback extractor, results may be incomplete",
                extension, name
            );
            return Ok(Reader::Text(text_extractor.as_ref()));
        }

        Err(Error::UnsupportedSource(format!(
            "No reader available for '{}'",
            name
        )))
    }
}

impl Default for DocumentIngestor {
    fn default() -> Self {
        Self::new()
            .with_text_extractor(Box::new(PlainTextExtractor))
            .with_table_reader(Box::new(CsvTableReader::csv()))
            .with_table_reader(Box::new(CsvTableReader::tsv()))
    }
}
