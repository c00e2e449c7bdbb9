//! Core data model for radsim.
//!
//! This crate holds the small set of types shared by the readers, the digest
//! simulation and the command line tool:
//!
//! - [`SequencedSite`]: a `(start, stop)` window "read" by a simulated RAD-seq run
//! - [`Genotype`]: a per-sample genotype call reduced to its shape
//! - [`VariantRecord`]: one position of a multi-sample variant call file
//!
//! # Example
//!
//! ```
//! use radsim_core::models::{Genotype, SequencedSite, VariantRecord};
//!
//! let site = SequencedSite::new(-93, 107);
//! let record = VariantRecord::new("chr1", 50, vec![Genotype::HomRef, Genotype::HomAlt]);
//!
//! assert!(site.contains_strictly(record.pos));
//! assert!(record.is_discordant_homozygous());
//! ```

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::ModelError;
