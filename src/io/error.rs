use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse lattice description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid lattice description: {0}")]
    Validation(String),
}

impl Error {
    pub fn validation(details: impl Into<String>) -> Self {
        Self::Validation(details.into())
    }
}
