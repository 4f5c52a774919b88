use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The analyzer received an empty list of word counts.
    NoData,
    /// Fewer than two points survived the log-domain filter.
    InsufficientData(usize),
    ParserError(String),
    UnsupportedSource(String),
    IoError(std::io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoData => write!(f, "No data: there are no word counts to analyze"),
            Error::InsufficientData(usable_points) => write!(
                f,
                "Insufficient data for regression: {} usable point(s), at least 2 are required",
                usable_points
            ),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::UnsupportedSource(msg) => write!(f, "Unsupported Source: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(format!("CSV: {}", err))
    }
}
