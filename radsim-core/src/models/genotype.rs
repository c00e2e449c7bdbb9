use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ModelError;

///
/// Shape of a single sample's genotype call.
///
/// Derived once from the allele indices of a `GT` field. Phasing is ignored, so
/// `0|0` and `0/0` are both [`Genotype::HomRef`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genotype {
    /// every allele is the reference allele (`0/0`)
    HomRef,
    /// every allele is the same alternate allele (`1/1`, `2/2`)
    HomAlt,
    /// at least two different alleles (`0/1`, `1/2`)
    Het,
    /// no call, or a partial call (`./.`, `./1`)
    Missing,
}

impl Genotype {
    pub fn is_called(&self) -> bool {
        !matches!(self, Genotype::Missing)
    }

    ///
    /// Build a genotype from the allele indices of a call. `None` marks a missing allele.
    ///
    pub fn from_alleles(alleles: &[Option<u32>]) -> Self {
        if alleles.is_empty() || alleles.iter().any(|a| a.is_none()) {
            return Genotype::Missing;
        }

        let first = alleles[0];
        if alleles.iter().any(|a| *a != first) {
            return Genotype::Het;
        }

        match first {
            Some(0) => Genotype::HomRef,
            _ => Genotype::HomAlt,
        }
    }
}

impl FromStr for Genotype {
    type Err = ModelError;

    ///
    /// Parse the value of a `GT` field, e.g. `0/1`, `1|1`, `./.` or a haploid `0`.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let gt = s.trim();
        if gt.is_empty() {
            return Ok(Genotype::Missing);
        }

        let alleles = gt
            .split(['/', '|'])
            .map(|allele| match allele {
                "." => Ok(None),
                a => a
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|_| ModelError::InvalidGenotype(s.to_string())),
            })
            .collect::<Result<Vec<Option<u32>>, ModelError>>()?;

        Ok(Genotype::from_alleles(&alleles))
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genotype::HomRef => write!(f, "hom_ref"),
            Genotype::HomAlt => write!(f, "hom_alt"),
            Genotype::Het => write!(f, "het"),
            Genotype::Missing => write!(f, "missing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("0/0", Genotype::HomRef)]
    #[case("0|0", Genotype::HomRef)]
    #[case("1/1", Genotype::HomAlt)]
    #[case("2|2", Genotype::HomAlt)]
    #[case("0/1", Genotype::Het)]
    #[case("1|0", Genotype::Het)]
    #[case("1/2", Genotype::Het)]
    #[case("./.", Genotype::Missing)]
    #[case("./1", Genotype::Missing)]
    #[case(".", Genotype::Missing)]
    #[case("", Genotype::Missing)]
    #[case("0", Genotype::HomRef)]
    #[case("1", Genotype::HomAlt)]
    fn test_parse_gt(#[case] gt: &str, #[case] expected: Genotype) {
        assert_eq!(gt.parse::<Genotype>().unwrap(), expected);
    }

    #[rstest]
    #[case("A/T")]
    #[case("0/x")]
    fn test_parse_gt_invalid(#[case] gt: &str) {
        assert_eq!(
            gt.parse::<Genotype>(),
            Err(ModelError::InvalidGenotype(gt.to_string()))
        );
    }

    #[rstest]
    fn test_is_called() {
        assert!(Genotype::HomRef.is_called());
        assert!(Genotype::Het.is_called());
        assert!(!Genotype::Missing.is_called());
    }
}
