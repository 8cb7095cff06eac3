/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A default or class length that isn't a positive number.
    InvalidConfiguration(i64),
    /// The composite length leaves no room for filler next to the per class characters.
    InsufficientLength { target: usize, classes: usize },
    /// Random characters were requested from an empty character set.
    EmptyAlphabet,
    ConfigError(config::ConfigError),
    Generic(&'static str),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(len) => {
                write!(f, "invalid password length value: {len}")
            }
            Self::InsufficientLength { target, classes } => write!(
                f,
                "password length {target} is too short for {classes} character classes"
            ),
            Self::EmptyAlphabet => write!(f, "can't pick characters from an empty alphabet"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigError(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
