use zipf_analyzer::{
    analyze_word_counts, DocumentIngestor, Error, PlainTextExtractor, TextExtractor, WordCount,
};

/// Stands in for a word processor parser which can also attempt legacy files.
struct UppercaseDocExtractor;

impl TextExtractor for UppercaseDocExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn fallback_extensions(&self) -> &[&str] {
        &["doc"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, Error> {
        Ok(String::from_utf8_lossy(bytes).to_uppercase())
    }
}

#[cfg(test)]
mod document_ingestor_tests {
    use super::*;

    #[test]
    fn test_ingest_plain_text() {
        let ingestor = DocumentIngestor::default();
        let text = "The cat sat on the mat. The CAT ran!";

        let document = ingestor.ingest("notes.TXT", "text/plain", text.as_bytes()).unwrap();

        assert_eq!(document.word_counts[0], WordCount::new("the", 3));
        assert_eq!(document.source_info.name, "notes.TXT");
        assert_eq!(document.source_info.media_type, "text/plain");
        assert_eq!(document.source_info.size_bytes, text.len() as u64);
        assert_eq!(document.source_info.word_count, Some(9));
        assert_eq!(document.source_info.unique_word_count, Some(6));
    }

    #[test]
    fn test_ingest_table() {
        let ingestor = DocumentIngestor::default();
        let csv = "word,frequency\nthe,100\nof,50\nand,33\n";

        let document = ingestor.ingest("counts.csv", "text/csv", csv.as_bytes()).unwrap();

        assert_eq!(document.word_counts.len(), 3);
        assert_eq!(document.source_info.word_count, Some(183));
        assert_eq!(document.source_info.unique_word_count, Some(3));

        let result = analyze_word_counts(
            "counts.csv",
            document.source_info,
            document.word_counts,
        )
        .unwrap();
        assert_eq!(result.ranked_points().len(), 3);
    }

    #[test]
    fn test_table_total_saturates_on_huge_counts() {
        let ingestor = DocumentIngestor::default();
        let csv = "word,count\n\
                   the,9223372036854775807\n\
                   of,9223372036854775807\n\
                   and,9223372036854775807\n";

        let document = ingestor.ingest("big.csv", "text/csv", csv.as_bytes()).unwrap();

        assert_eq!(document.word_counts.len(), 3);
        assert_eq!(document.word_counts[0], WordCount::new("the", i64::MAX));
        assert_eq!(document.source_info.word_count, Some(usize::MAX));
        assert_eq!(document.source_info.unique_word_count, Some(3));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_failure() {
        let ingestor = DocumentIngestor::default();

        let result = ingestor.ingest("broken.txt", "text/plain", &[0x66, 0x6f, 0xff, 0xfe]);

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let ingestor = DocumentIngestor::default();

        let result = ingestor.ingest("slides.pptx", "", b"irrelevant");

        match result {
            Err(Error::UnsupportedSource(msg)) => assert!(msg.contains("slides.pptx")),
            other => panic!("Expected an unsupported source failure, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let ingestor = DocumentIngestor::default();

        assert!(matches!(
            ingestor.ingest("README", "", b"text"),
            Err(Error::UnsupportedSource(_))
        ));
    }

    #[test]
    fn test_injected_extractor_native_and_fallback() {
        let ingestor = DocumentIngestor::new()
            .with_text_extractor(Box::new(PlainTextExtractor))
            .with_text_extractor(Box::new(UppercaseDocExtractor));

        let native = ingestor.ingest("report.docx", "", b"alpha beta alpha").unwrap();
        assert_eq!(native.word_counts[0], WordCount::new("alpha", 2));

        let fallback = ingestor.ingest("legacy.doc", "", b"gamma gamma delta").unwrap();
        assert_eq!(
            fallback.word_counts,
            vec![WordCount::new("gamma", 2), WordCount::new("delta", 1)]
        );
    }

    #[test]
    fn test_empty_ingestor_supports_nothing() {
        let ingestor = DocumentIngestor::new();

        assert!(matches!(
            ingestor.ingest("notes.txt", "text/plain", b"hello"),
            Err(Error::UnsupportedSource(_))
        ));
    }

    #[test]
    fn test_ingest_text() {
        let ingestor = DocumentIngestor::default();

        let document = ingestor.ingest_text("stdin", "text/plain", "one two two");

        assert_eq!(
            document.word_counts,
            vec![WordCount::new("one", 1), WordCount::new("two", 2)]
        );
        assert_eq!(document.source_info.size_bytes, 11);
        assert_eq!(document.source_info.word_count, Some(3));
    }
}
