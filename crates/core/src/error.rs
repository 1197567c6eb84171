use thiserror::Error;

/// Recoverable conditions surfaced by the palette engine.
///
/// Each is local to a single user action: a rejected input leaves
/// prior state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid color literal '{input}'")]
    Parse { input: String },

    #[error("shade percent '{value}' is not a finite number")]
    NonFiniteShade { value: String },

    #[error("unsupported format '{kind}': expected hex|rgb|hsl|lch")]
    UnsupportedFormat { kind: String },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn parse(input: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
        }
    }
}
