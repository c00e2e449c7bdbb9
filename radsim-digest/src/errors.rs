use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("No restriction enzyme named {0} found in the enzyme table")]
    UnknownEnzyme(String),

    #[error("Second restriction enzyme name for ddRad sequencing is missing")]
    MissingSecondEnzyme,

    #[error("Invalid digest parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid enzyme table at line {line}: {reason}")]
    InvalidEnzymeTable { line: usize, reason: String },

    #[error("Motif {motif} can't be compiled: {reason}")]
    InvalidMotif { motif: String, reason: String },

    #[error("Can't read file: {0}")]
    FileRead(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
