use crate::record::RecordLine;

/// Possible errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A record without any point, nothing to reconstruct
    #[error("Record has an empty point set")]
    EmptyInput,

    /// Number of records outside of what a figure can hold
    #[error("Wrong number of files: expected 1 to {max}, got {0}", max = crate::MAX_RECORDS)]
    Usage(usize),

    #[error("Invalid render configuration: {0}")]
    Config(String),

    #[error("Undefined error: {0}")]
    // Used when it is not worth to create a new error type.
    /// Undefined error
    Undefined(String),
}

/// Problems with the contents of a single record
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Missing {0} line")]
    MissingLine(RecordLine),

    #[error("The {0} line is not valid UTF-8")]
    Encoding(RecordLine),

    #[error("The {0} label spans more than one line")]
    MultilineLabel(RecordLine),

    #[error("Malformed {line} line: {source}")]
    Malformed {
        line: RecordLine,
        #[source]
        source: serde_json::Error,
    },

    #[error("Tour visits {found} positions but the point set has {expected} points")]
    TourLength { expected: usize, found: usize },

    #[error("Tour position {position} refers to point {index}, but only {len} points exist")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
