use std::fmt::{self, Display};
use std::str::FromStr;

use regex::bytes::Regex;

use crate::errors::{DigestError, Result};

///
/// How a recognition site is searched for in a DNA sequence.
///
/// The two policies give different answers whenever a motif carries IUPAC
/// ambiguity codes or occurrences overlap, so a run uses exactly one of them.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotifPolicy {
    /// Exact substring search, non-overlapping. See [`find_motifs`].
    #[default]
    Literal,
    /// Ambiguity codes expanded to character classes, overlapping. See [`find_motifs_iupac`].
    Iupac,
}

impl MotifPolicy {
    pub fn locate(&self, dna: &str, motif: &str) -> Result<Vec<usize>> {
        match self {
            MotifPolicy::Literal => Ok(find_motifs(dna, motif)),
            MotifPolicy::Iupac => find_motifs_iupac(dna, motif),
        }
    }
}

impl FromStr for MotifPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "literal" => Ok(MotifPolicy::Literal),
            "iupac" => Ok(MotifPolicy::Iupac),
            _ => Err(format!(
                "Invalid motif policy: {}. Valid options are 'literal' or 'iupac'",
                s
            )),
        }
    }
}

impl Display for MotifPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotifPolicy::Literal => write!(f, "literal"),
            MotifPolicy::Iupac => write!(f, "iupac"),
        }
    }
}

/// Find every non-overlapping occurrence of `motif` in `dna`.
///
/// The scan runs left to right and resumes right after the end of the previous
/// match, so an occurrence overlapping an earlier one is skipped. Offsets are
/// returned in ascending order.
///
/// An empty motif, or one longer than the sequence, yields no offsets.
///
/// # Examples
///
/// ```
/// use radsim_digest::find_motifs;
///
/// let hits = find_motifs("GGTTAAAGATCGGCGAGCCAATGGATCGACGATCA", "GATC");
/// assert_eq!(hits, vec![7, 23, 30]);
/// ```
pub fn find_motifs(dna: &str, motif: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if motif.is_empty() {
        return positions;
    }

    let mut loc = 0;
    while loc < dna.len() {
        match dna[loc..].find(motif) {
            Some(hit) => {
                positions.push(loc + hit);
                loc += hit + motif.len();
            }
            None => break,
        }
    }

    positions
}

/// Translate a motif with IUPAC ambiguity codes into a regular expression.
pub fn iupac_pattern(motif: &str) -> String {
    motif
        .chars()
        .map(|c| match c {
            'N' => "[ACGT]".to_string(),
            'R' => "[AG]".to_string(),
            'Y' => "[CT]".to_string(),
            'W' => "[AT]".to_string(),
            'S' => "[CG]".to_string(),
            'M' => "[AC]".to_string(),
            'K' => "[GT]".to_string(),
            'B' => "[CGT]".to_string(),
            'D' => "[AGT]".to_string(),
            'H' => "[ACT]".to_string(),
            'V' => "[ACG]".to_string(),
            other => regex::escape(&other.to_string()),
        })
        .collect()
}

/// Find every occurrence of a motif that may contain IUPAC ambiguity codes.
///
/// Unlike [`find_motifs`], a match may start inside the previous one, so
/// `find_motifs_iupac("AAAA", "AA")` returns `[0, 1, 2]`.
pub fn find_motifs_iupac(dna: &str, motif: &str) -> Result<Vec<usize>> {
    if motif.is_empty() {
        return Ok(Vec::new());
    }

    let re = Regex::new(&iupac_pattern(motif)).map_err(|e| DigestError::InvalidMotif {
        motif: motif.to_string(),
        reason: e.to_string(),
    })?;

    let haystack = dna.as_bytes();
    let mut positions = Vec::new();
    let mut start = 0;
    while start < haystack.len() {
        match re.find_at(haystack, start) {
            Some(m) => {
                positions.push(m.start());
                start = m.start() + 1;
            }
            None => break,
        }
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn dna() -> &'static str {
        "GGTTAAAGATCGGCGAGCCAATGGATCGACGATCA"
    }

    #[rstest]
    fn test_find_motifs_reference_example(dna: &str) {
        assert_eq!(find_motifs(dna, "GATC"), vec![7, 23, 30]);
    }

    #[rstest]
    #[case("AAAAA", "AA", vec![0, 2])]
    #[case("ACGT", "ACGTACGT", vec![])]
    #[case("ACGT", "", vec![])]
    #[case("", "A", vec![])]
    #[case("ACGT", "ACGT", vec![0])]
    #[case("GATCgatcGATC", "GATC", vec![0, 8])]
    fn test_find_motifs_edge_cases(
        #[case] dna: &str,
        #[case] motif: &str,
        #[case] expected: Vec<usize>,
    ) {
        assert_eq!(find_motifs(dna, motif), expected);
    }

    #[rstest]
    #[case("GATC")]
    #[case("GA")]
    #[case("CG")]
    #[case("A")]
    fn test_find_motifs_hits_match_and_do_not_overlap(dna: &str, #[case] motif: &str) {
        let hits = find_motifs(dna, motif);
        for hit in &hits {
            assert_eq!(&dna[*hit..*hit + motif.len()], motif);
        }
        for pair in hits.windows(2) {
            assert!(pair[1] - pair[0] >= motif.len());
        }
    }

    #[rstest]
    fn test_iupac_pattern() {
        assert_eq!(iupac_pattern("GCWGC"), "GC[AT]GC");
        assert_eq!(iupac_pattern("CCNNGG"), "CC[ACGT][ACGT]GG");
    }

    #[rstest]
    #[case("AAAA", "AA", vec![0, 1, 2])]
    #[case("GCAGCTGCTGC", "GCWGC", vec![0, 3, 6])]
    #[case("GGTTAAAGATCGGCGAGCCAATGGATCGACGATCA", "GATC", vec![7, 23, 30])]
    #[case("ACGT", "", vec![])]
    fn test_find_motifs_iupac(
        #[case] dna: &str,
        #[case] motif: &str,
        #[case] expected: Vec<usize>,
    ) {
        assert_eq!(find_motifs_iupac(dna, motif).unwrap(), expected);
    }

    #[rstest]
    fn test_policies_disagree_on_ambiguity_codes() {
        let dna = "GCAGCTGCTGC";
        assert_eq!(MotifPolicy::Literal.locate(dna, "GCWGC").unwrap(), Vec::<usize>::new());
        assert_eq!(MotifPolicy::Iupac.locate(dna, "GCWGC").unwrap(), vec![0, 3, 6]);
    }

    #[rstest]
    #[case("literal", MotifPolicy::Literal)]
    #[case("IUPAC", MotifPolicy::Iupac)]
    fn test_policy_from_str(#[case] s: &str, #[case] expected: MotifPolicy) {
        assert_eq!(s.parse::<MotifPolicy>().unwrap(), expected);
    }

    #[rstest]
    fn test_policy_from_str_invalid() {
        assert!("regex".parse::<MotifPolicy>().is_err());
    }
}
