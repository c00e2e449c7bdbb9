//! In-silico RAD-seq digestion of a reference chromosome.
//!
//! This crate simulates which parts of a chromosome a RAD-seq library would
//! sequence, and which of those carry variation between two samples:
//!
//! - Locating restriction enzyme motifs in a DNA sequence ([`motif`])
//! - Resolving enzyme names to recognition sites ([`enzymes`])
//! - Enumerating sequenced windows for single-enzyme (SingleRad) and
//!   double-digest (ddRad) libraries ([`digest`])
//! - Keeping the windows that contain a homozygous-discordant variant ([`variants`])
//!
//! # Example
//!
//! ```
//! use radsim_digest::{DigestParams, MotifPolicy, RestrictionEnzymeTable, run_single_rad};
//!
//! let dna = "GGTTAAAGATCGGCGAGCCAATGGATCGACGATCA";
//! let table = RestrictionEnzymeTable::builtin();
//!
//! let sites = run_single_rad(dna, "DpnII", &table, &DigestParams::default(), MotifPolicy::Literal).unwrap();
//! assert_eq!(sites.len(), 3);
//! assert_eq!((sites[0].start, sites[0].stop), (-93, 107));
//! ```

pub mod consts;
pub mod digest;
pub mod enzymes;
pub mod errors;
pub mod motif;
pub mod summary;
pub mod variants;

// re-exports
pub use consts::*;
pub use digest::{DigestParams, RadMode, run_ddrad, run_single_rad};
pub use enzymes::{EnzymeLookup, RestrictionEnzymeTable};
pub use errors::DigestError;
pub use motif::{MotifPolicy, find_motifs, find_motifs_iupac};
pub use summary::RadSummary;
pub use variants::find_variable_sites;
