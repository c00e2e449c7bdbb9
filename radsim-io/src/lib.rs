//! # Input utilities for radsim.
//!
//! This small crate reads the two inputs of a simulated RAD-seq run:
//!
//! - a single chromosome out of a (optionally gzipped) FASTA genome, see [`read_fasta`]
//! - a stream of genotype-bearing records out of a (optionally gzipped) VCF, see [`VcfReader`]
//!
pub mod error;
pub mod fasta;
pub mod vcf;

// re-expose core functions
pub use error::*;
pub use fasta::*;
pub use vcf::*;
