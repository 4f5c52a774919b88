use crate::constants::{COLUMN_TYPE_SAMPLE_ROWS, COUNT_COLUMN_HINTS, WORD_COLUMN_HINTS};
use crate::models::{Error, WordCount};
use crate::types::Frequency;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

/// Reads pre-aggregated `(word, count)` pairs from tabular data.
///
/// Implementations locate the word and count columns themselves and only hand
/// over rows with a non-empty word and a positive count.
pub trait TableReader {
    /// Lower-case file extensions (without the dot) this reader handles.
    fn supported_extensions(&self) -> &[&str];

    fn read_table(&self, bytes: &[u8]) -> Result<Vec<WordCount>, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CellType {
    Empty,
    Text,
    Number,
}

/// Delimited-text table reader with header and data-type based column inference.
pub struct CsvTableReader {
    delimiter: u8,
    extensions: &'static [&'static str],
}

impl CsvTableReader {
    pub fn csv() -> Self {
        Self {
            delimiter: b',',
            extensions: &["csv"],
        }
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            extensions: &["tsv", "tab"],
        }
    }

    /// Finds the `(word, count)` column indices, trying header names before
    /// sampling cell types of the first data rows.
    fn infer_columns(&self, rows: &[StringRecord]) -> Result<(usize, usize), Error> {
        let header = &rows[0];

        let find_by_header = |hints: &[&str]| {
            header.iter().position(|name| {
                let name = name.to_lowercase();
                hints.iter().any(|hint| name.contains(hint))
            })
        };

        let mut word_column = find_by_header(WORD_COLUMN_HINTS);
        let mut count_column = find_by_header(COUNT_COLUMN_HINTS);

        if word_column.is_none() || count_column.is_none() {
            let sample_end = rows.len().min(COLUMN_TYPE_SAMPLE_ROWS + 1);
            let sample = &rows[1..sample_end];

            for column in 0..header.len() {
                let cell_types: Vec<CellType> = sample
                    .iter()
                    .map(|row| classify_cell(row.get(column).unwrap_or("")))
                    .collect();

                let is_column_of = |cell_type: CellType| {
                    cell_types
                        .iter()
                        .all(|t| *t == cell_type || *t == CellType::Empty)
                        && cell_types.contains(&cell_type)
                };

                if word_column.is_none() && is_column_of(CellType::Text) {
                    word_column = Some(column);
                }
                if count_column.is_none() && is_column_of(CellType::Number) {
                    count_column = Some(column);
                }
            }
        }

        match (word_column, count_column) {
            (Some(word_column), Some(count_column)) if word_column != count_column => {
                Ok((word_column, count_column))
            }
            _ => Err(Error::ParserError(
                "Could not reliably infer word and frequency columns. Please ensure the table \
                 has clear 'word' (text) and 'frequency' (number) columns."
                    .to_string(),
            )),
        }
    }
}

impl TableReader for CsvTableReader {
    fn supported_extensions(&self) -> &[&str] {
        self.extensions
    }

    fn read_table(&self, bytes: &[u8]) -> Result<Vec<WordCount>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // The header row takes part in column inference
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(bytes);

        let rows = reader
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()?;

        if rows.len() < 2 {
            return Err(Error::ParserError(
                "Table has insufficient data (less than 2 rows).".to_string(),
            ));
        }

        let (word_column, count_column) = self.infer_columns(&rows)?;
        debug!(
            "Using column {} for words and column {} for counts",
            word_column, count_column
        );

        let mut word_counts = Vec::new();
        let mut skipped_rows = 0;

        for row in &rows[1..] {
            let word = row.get(word_column).map(str::trim).unwrap_or("");
            let count = row.get(count_column).and_then(parse_leading_integer);

            match count {
                Some(count) if !word.is_empty() && count > 0 => {
                    word_counts.push(WordCount::new(word, count));
                }
                _ => skipped_rows += 1,
            }
        }

        if skipped_rows > 0 {
            warn!("Skipped {} rows without a word or a positive count", skipped_rows);
        }

        if word_counts.is_empty() {
            return Err(Error::ParserError(
                "No valid word-frequency pairs found in the table.".to_string(),
            ));
        }

        Ok(word_counts)
    }
}

fn classify_cell(cell: &str) -> CellType {
    let cell = cell.trim();

    if cell.is_empty() {
        CellType::Empty
    } else if is_decimal_number(cell) {
        CellType::Number
    } else {
        CellType::Text
    }
}

/// Matches `digits` or `digits.digits`.
fn is_decimal_number(cell: &str) -> bool {
    let mut parts = cell.splitn(2, '.');
    let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    match (parts.next(), parts.next()) {
        (Some(whole), None) => is_digits(whole),
        (Some(whole), Some(fraction)) => is_digits(whole) && is_digits(fraction),
        _ => false,
    }
}

/// Parses the optionally signed integer prefix of a cell, so `"12.7"` reads as 12.
fn parse_leading_integer(cell: &str) -> Option<Frequency> {
    let cell = cell.trim();

    let sign_length = if cell.starts_with(['+', '-']) { 1 } else { 0 };
    let digit_length = cell[sign_length..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();

    if digit_length == 0 {
        return None;
    }

    cell[..sign_length + digit_length].parse().ok()
}
