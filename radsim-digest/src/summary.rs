use std::fmt::{self, Display};

use serde::Serialize;

use radsim_core::models::SequencedSite;

use crate::digest::RadMode;

///
/// Headline numbers of a simulated run.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadSummary {
    pub mode: String,
    pub chromosome: String,
    pub enzymes: Vec<String>,
    pub input_length: usize,
    pub sequenced_sites: usize,
    pub sequenced_bases: i64,
    pub percent_sequenced: f64,
    pub variable_sites: usize,
    pub variable_fraction: f64,
}

impl RadSummary {
    pub fn new(
        mode: RadMode,
        chromosome: &str,
        enzymes: &[&str],
        input_length: usize,
        sequenced_sites: &[SequencedSite],
        variable_sites: &[SequencedSite],
    ) -> Self {
        let sequenced_bases: i64 = sequenced_sites.iter().map(|s| s.width()).sum();

        let percent_sequenced = if input_length == 0 {
            0.0
        } else {
            100.0 * sequenced_bases as f64 / input_length as f64
        };

        let variable_fraction = if sequenced_sites.is_empty() {
            0.0
        } else {
            variable_sites.len() as f64 / sequenced_sites.len() as f64
        };

        RadSummary {
            mode: mode.to_string(),
            chromosome: chromosome.to_string(),
            enzymes: enzymes.iter().map(|e| e.to_string()).collect(),
            input_length,
            sequenced_sites: sequenced_sites.len(),
            sequenced_bases,
            percent_sequenced,
            variable_sites: variable_sites.len(),
            variable_fraction,
        }
    }
}

impl Display for RadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} sequencing complete.", self.mode)?;
        writeln!(f, "\tlength of input sequence: {}", self.input_length)?;
        writeln!(
            f,
            "\tnumber of sequencing sites located: {}",
            self.sequenced_sites
        )?;
        writeln!(
            f,
            "\tpercentage of nucleotides sequenced: {:.3}%",
            self.percent_sequenced
        )?;
        writeln!(f, "checking for variation within sequenced sites")?;
        writeln!(f, "\tnumber of sites with variation: {}", self.variable_sites)?;
        write!(
            f,
            "\tfraction of sites with variation: {}",
            self.variable_fraction
        )
    }
}
