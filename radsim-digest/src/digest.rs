//! SingleRad and ddRad site enumeration.
//!
//! Both modes turn motif offsets into [`SequencedSite`] windows. Windows are
//! emitted in the order of the offsets they come from, are never clamped to the
//! chromosome, and are neither merged nor deduplicated.

use std::fmt::{self, Display};
use std::str::FromStr;

use radsim_core::models::SequencedSite;

use crate::consts::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_READ_LENGTH, MAX_PARAM_SIZE};
use crate::enzymes::EnzymeLookup;
use crate::errors::{DigestError, Result};
use crate::motif::MotifPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadMode {
    SingleRad,
    DdRad,
}

impl FromStr for RadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SingleRad" => Ok(RadMode::SingleRad),
            "ddRad" => Ok(RadMode::DdRad),
            _ => Err(format!(
                "Invalid mode: {}. Valid options are 'SingleRad' or 'ddRad'",
                s
            )),
        }
    }
}

impl Display for RadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadMode::SingleRad => write!(f, "SingleRad"),
            RadMode::DdRad => write!(f, "ddRad"),
        }
    }
}

///
/// Library prep and sequencing parameters of a simulated run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestParams {
    /// read length; SingleRad reads this far on both sides of a cut site
    pub read_length: i64,
    /// ddRad fragments must be strictly longer than this
    pub min_size: i64,
    /// ddRad fragments must be strictly shorter than this
    pub max_size: i64,
}

impl Default for DigestParams {
    fn default() -> Self {
        DigestParams {
            read_length: DEFAULT_READ_LENGTH,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl DigestParams {
    pub fn validate(&self) -> Result<()> {
        if self.read_length <= 0 || self.read_length > MAX_PARAM_SIZE {
            return Err(DigestError::InvalidParams(format!(
                "read length must be in 1..={}, got {}",
                MAX_PARAM_SIZE, self.read_length
            )));
        }
        if self.max_size > MAX_PARAM_SIZE {
            return Err(DigestError::InvalidParams(format!(
                "max size must be at most {}, got {}",
                MAX_PARAM_SIZE, self.max_size
            )));
        }
        if self.min_size < 0 || self.min_size >= self.max_size {
            return Err(DigestError::InvalidParams(format!(
                "fragment size window ({}, {}) is empty",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    /// Open window test on a fragment length: `min_size < size < max_size`.
    #[inline]
    pub fn fragment_in_window(&self, size: i64) -> bool {
        self.min_size < size && size < self.max_size
    }
}

/// Greatest offset strictly below `pos`. `sorted` must be ascending.
fn nearest_below(sorted: &[usize], pos: usize) -> Option<usize> {
    let idx = sorted.partition_point(|&p| p < pos);
    idx.checked_sub(1).map(|i| sorted[i])
}

/// Smallest offset strictly above `pos`. `sorted` must be ascending.
fn nearest_above(sorted: &[usize], pos: usize) -> Option<usize> {
    let idx = sorted.partition_point(|&p| p <= pos);
    sorted.get(idx).copied()
}

///
/// Simulate a single-enzyme RAD-seq run.
///
/// Every cut site `o` of `re1` yields the window `(o - read_length, o + read_length)`.
///
/// # Arguments
/// - dna: chromosome sequence
/// - re1: enzyme name, resolved through `enzymes`
/// - enzymes: name to recognition-site lookup
/// - params: read length (the size window is not used)
/// - policy: how the motif is searched for
pub fn run_single_rad(
    dna: &str,
    re1: &str,
    enzymes: &dyn EnzymeLookup,
    params: &DigestParams,
    policy: MotifPolicy,
) -> Result<Vec<SequencedSite>> {
    params.validate()?;
    let motif = enzymes.resolve(re1)?;

    let cut_sites = policy.locate(dna, motif)?;
    log::info!("Located {} {} ({}) cut sites", cut_sites.len(), re1, motif);

    let read_length = params.read_length;
    let sequenced_sites = cut_sites
        .into_iter()
        .map(|loc| {
            let loc = loc as i64;
            SequencedSite::new(loc - read_length, loc + read_length)
        })
        .collect();

    Ok(sequenced_sites)
}

///
/// Simulate a double-digest RAD-seq run.
///
/// For every `re1` cut site, the closest `re2` cut site on each side is paired
/// with it when the fragment between them is inside the size window and no other
/// `re1` site lies between the two. A pairing yields one read at each end of the
/// fragment, both pointing inwards. If the `re1` site is the first (or last) one,
/// there is no competing site on that side and the pairing is allowed.
///
/// Both enzyme names are resolved before any scanning happens.
pub fn run_ddrad(
    dna: &str,
    re1: &str,
    re2: &str,
    enzymes: &dyn EnzymeLookup,
    params: &DigestParams,
    policy: MotifPolicy,
) -> Result<Vec<SequencedSite>> {
    params.validate()?;
    let motif1 = enzymes.resolve(re1)?;
    let motif2 = enzymes.resolve(re2)?;

    let re1_sites = policy.locate(dna, motif1)?;
    let re2_sites = policy.locate(dna, motif2)?;
    log::info!(
        "Located {} {} ({}) and {} {} ({}) cut sites",
        re1_sites.len(),
        re1,
        motif1,
        re2_sites.len(),
        re2,
        motif2
    );

    let read_length = params.read_length;
    let mut sequenced_sites = Vec::new();

    for &r1 in &re1_sites {
        let r1_pos = r1 as i64;

        // look left
        if let Some(l2) = nearest_below(&re2_sites, r1) {
            let l2_pos = l2 as i64;
            let no_competing_site = nearest_below(&re1_sites, r1).is_none_or(|l1| l2 > l1);
            if params.fragment_in_window(r1_pos - l2_pos) && no_competing_site {
                sequenced_sites.push(SequencedSite::new(l2_pos, l2_pos + read_length));
                sequenced_sites.push(SequencedSite::new(r1_pos - read_length, r1_pos));
            }
        }

        // look right
        if let Some(g2) = nearest_above(&re2_sites, r1) {
            let g2_pos = g2 as i64;
            let no_competing_site = nearest_above(&re1_sites, r1).is_none_or(|g1| g1 > g2);
            if params.fragment_in_window(g2_pos - r1_pos) && no_competing_site {
                sequenced_sites.push(SequencedSite::new(r1_pos, r1_pos + read_length));
                sequenced_sites.push(SequencedSite::new(g2_pos - read_length, g2_pos));
            }
        }
    }

    log::debug!("ddRad kept {} fragments", sequenced_sites.len() / 2);

    Ok(sequenced_sites)
}

///
/// Run either mode. `re2` is required for ddRad and ignored for SingleRad.
///
pub fn run_rad(
    mode: RadMode,
    dna: &str,
    re1: &str,
    re2: Option<&str>,
    enzymes: &dyn EnzymeLookup,
    params: &DigestParams,
    policy: MotifPolicy,
) -> Result<Vec<SequencedSite>> {
    match mode {
        RadMode::SingleRad => run_single_rad(dna, re1, enzymes, params, policy),
        RadMode::DdRad => {
            let re2 = re2.ok_or(DigestError::MissingSecondEnzyme)?;
            run_ddrad(dna, re1, re2, enzymes, params, policy)
        }
    }
}
