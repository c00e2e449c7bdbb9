use std::io;
use thiserror::Error;

/// Error type for radsim-io operations.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// IO error occurred while reading a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be opened.
    #[error("Can't read file: {0}")]
    FileRead(String),

    /// The requested contig has no header line in the FASTA file.
    #[error("Contig {contig} not found in {path}")]
    ContigNotFound { contig: String, path: String },

    /// A data line was found before the `#CHROM` header line.
    #[error("VCF file has no #CHROM header line before the first record")]
    MissingVcfHeader,

    /// A VCF data line could not be parsed.
    #[error("Malformed VCF record at line {line}: {reason}")]
    VcfParse { line: usize, reason: String },
}

/// Result type alias for radsim-io operations.
pub type Result<T> = std::result::Result<T, ReaderError>;
