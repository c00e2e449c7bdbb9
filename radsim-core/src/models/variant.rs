use crate::models::genotype::Genotype;

///
/// One data line of a variant call file, reduced to what the simulation needs.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub chrom: String,
    /// 1-based position, as written in the file
    pub pos: i64,
    /// one genotype per sample, in header order
    pub genotypes: Vec<Genotype>,
}

impl VariantRecord {
    pub fn new(chrom: impl Into<String>, pos: i64, genotypes: Vec<Genotype>) -> Self {
        VariantRecord {
            chrom: chrom.into(),
            pos,
            genotypes,
        }
    }

    ///
    /// Number of samples with a (fully) called genotype
    ///
    pub fn num_called(&self) -> usize {
        self.genotypes.iter().filter(|gt| gt.is_called()).count()
    }

    ///
    /// True when exactly two genotypes are called and the first two samples are
    /// opposite homozygotes (one `0/0`, the other `1/1`), in either order.
    ///
    pub fn is_discordant_homozygous(&self) -> bool {
        if self.num_called() != 2 {
            return false;
        }

        matches!(
            (self.genotypes.first(), self.genotypes.get(1)),
            (Some(Genotype::HomRef), Some(Genotype::HomAlt))
                | (Some(Genotype::HomAlt), Some(Genotype::HomRef))
        )
    }
}
