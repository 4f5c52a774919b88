use crate::models::Error;

/// Extracts plain text from the raw bytes of a document container.
///
/// Container formats (word processor files, PDFs, ...) are handled by
/// implementations of this trait supplied by the caller.
pub trait TextExtractor {
    /// Lower-case file extensions (without the dot) this extractor reads natively.
    fn supported_extensions(&self) -> &[&str];

    /// Extensions this extractor will attempt as a best effort when nothing
    /// supports them natively. Results may be degraded.
    fn fallback_extensions(&self) -> &[&str] {
        &[]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, Error>;
}

/// Reads UTF-8 encoded plain text.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, Error> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::ParserError(format!("Document is not valid UTF-8 text: {}", e)))
    }
}
