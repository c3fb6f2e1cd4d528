use thiserror::Error;

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed command {line:?}")]
    MalformedCommand {
        line: String,
        #[source]
        source: nom::error::Error<String>,
    },

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("a chain needs at least 2 knots, got {0}")]
    ChainTooShort(usize),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("reading commands: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn at_line(self, line: usize) -> Error {
        Error::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
