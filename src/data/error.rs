/// Errors raised while reading the test set.
#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    MissingHeader,
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read samples: {}", e),
            Self::MissingHeader => write!(f, "sample file has no header row"),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {} has {} fields, header has {}",
                line, found, expected
            ),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
