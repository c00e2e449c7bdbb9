use radsim_core::models::{SequencedSite, VariantRecord};

///
/// Sites sorted by start, for point queries. Query results keep the input order
/// of the sites.
///
struct SiteIndex {
    /// (start, position in the input list), ascending
    starts: Vec<(i64, usize)>,
    max_width: i64,
}

impl SiteIndex {
    fn build(sites: &[SequencedSite]) -> Self {
        let mut starts: Vec<(i64, usize)> = sites
            .iter()
            .enumerate()
            .map(|(idx, site)| (site.start, idx))
            .collect();
        starts.sort_unstable();

        let max_width = sites.iter().map(|s| s.width()).max().unwrap_or(0);

        SiteIndex { starts, max_width }
    }

    /// Indices of every site with `start < pos < stop`, ascending.
    fn find(&self, sites: &[SequencedSite], pos: i64) -> Vec<usize> {
        // a site containing pos must start in (pos - max_width, pos)
        let lo = self
            .starts
            .partition_point(|&(start, _)| start <= pos.saturating_sub(self.max_width));
        let hi = self.starts.partition_point(|&(start, _)| start < pos);

        let mut hits: Vec<usize> = self.starts[lo..hi]
            .iter()
            .map(|&(_, idx)| idx)
            .filter(|&idx| sites[idx].contains_strictly(pos))
            .collect();
        hits.sort_unstable();
        hits
    }
}

/// Keep the sequenced sites that carry variation between two samples.
///
/// Records are consumed lazily and only while they belong to `chrom`: the scan
/// stops at the first record of any other contig, so the records of `chrom` must
/// be contiguous and come first (as in a sorted, single-chromosome VCF).
///
/// A record qualifies when exactly two of its genotypes are called and the first
/// two samples are opposite homozygotes (`0/0` and `1/1`, either way round). For
/// every qualifying record, each site with `start < pos < stop` is appended to
/// the output, in input order. A site is repeated once per qualifying variant it
/// contains.
///
/// Positions are compared as written in the variant file, with no conversion
/// between 1-based and 0-based coordinates.
///
/// # Errors
///
/// The first error produced by `records` is returned as is.
pub fn find_variable_sites<I, E>(
    records: I,
    chrom: &str,
    sequenced_sites: &[SequencedSite],
) -> Result<Vec<SequencedSite>, E>
where
    I: IntoIterator<Item = Result<VariantRecord, E>>,
{
    let index = SiteIndex::build(sequenced_sites);
    let mut variable_sites = Vec::new();

    let mut scanned: usize = 0;
    let mut qualifying: usize = 0;

    for record in records {
        let record = record?;
        if record.chrom != chrom {
            log::debug!(
                "Reached contig {} at position {}, stopping the scan",
                record.chrom,
                record.pos
            );
            break;
        }
        scanned += 1;

        if !record.is_discordant_homozygous() {
            continue;
        }
        qualifying += 1;

        variable_sites.extend(
            index
                .find(sequenced_sites, record.pos)
                .into_iter()
                .map(|idx| sequenced_sites[idx]),
        );
    }

    log::info!(
        "Scanned {} records on {}, {} homozygous-discordant",
        scanned,
        chrom,
        qualifying
    );

    Ok(variable_sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use radsim_core::models::Genotype::{self, *};
    use rstest::*;

    type TestResult = Result<VariantRecord, String>;

    fn rec(chrom: &str, pos: i64, genotypes: &[Genotype]) -> TestResult {
        Ok(VariantRecord::new(chrom, pos, genotypes.to_vec()))
    }

    #[fixture]
    fn sites() -> Vec<SequencedSite> {
        vec![
            SequencedSite::new(100, 300),
            SequencedSite::new(-50, 150),
            SequencedSite::new(1000, 1100),
            SequencedSite::new(100, 300),
        ]
    }

    #[rstest]
    fn test_discordant_variant_hits_every_containing_site(sites: Vec<SequencedSite>) {
        let records = vec![rec("chr1", 120, &[HomRef, HomAlt])];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();

        assert_eq!(result, vec![sites[0], sites[1], sites[3]]);
    }

    #[rstest]
    #[case(&[HomRef, HomRef])]
    #[case(&[HomAlt, HomAlt])]
    #[case(&[HomRef, Het])]
    #[case(&[HomRef, Missing])]
    #[case(&[HomAlt])]
    fn test_non_discordant_variants_never_count(
        sites: Vec<SequencedSite>,
        #[case] genotypes: &[Genotype],
    ) {
        let records = vec![rec("chr1", 1050, genotypes)];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert!(result.is_empty());
    }

    #[rstest]
    #[case(1000, false)]
    #[case(1001, true)]
    #[case(1099, true)]
    #[case(1100, false)]
    fn test_boundaries_are_excluded(
        sites: Vec<SequencedSite>,
        #[case] pos: i64,
        #[case] hit: bool,
    ) {
        let records = vec![rec("chr1", pos, &[HomAlt, HomRef])];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert_eq!(result.len(), if hit { 1 } else { 0 });
        for site in result {
            assert!(site.start < pos && pos < site.stop);
        }
    }

    #[rstest]
    fn test_repeated_once_per_variant(sites: Vec<SequencedSite>) {
        let records = vec![
            rec("chr1", 1010, &[HomRef, HomAlt]),
            rec("chr1", 1020, &[HomAlt, HomRef]),
        ];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert_eq!(result, vec![sites[2], sites[2]]);
    }

    #[rstest]
    fn test_scan_stops_at_other_contig(sites: Vec<SequencedSite>) {
        let records = vec![
            rec("chr1", 1010, &[HomRef, HomAlt]),
            rec("chr2", 1020, &[HomRef, HomAlt]),
            rec("chr1", 1030, &[HomRef, HomAlt]),
        ];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert_eq!(result, vec![sites[2]]);
    }

    #[rstest]
    fn test_scan_stops_even_if_first_record_is_other_contig(sites: Vec<SequencedSite>) {
        let records = vec![
            rec("chr0", 10, &[HomRef, HomAlt]),
            rec("chr1", 1010, &[HomRef, HomAlt]),
        ];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_stream_is_not_read_past_contig_change(sites: Vec<SequencedSite>) {
        let records = vec![
            rec("chr1", 1010, &[HomRef, HomAlt]),
            rec("chr2", 1020, &[HomRef, HomAlt]),
            Err("unreadable".to_string()),
        ];
        let result = find_variable_sites(records, "chr1", &sites);
        assert_eq!(result, Ok(vec![sites[2]]));
    }

    #[rstest]
    fn test_record_errors_propagate(sites: Vec<SequencedSite>) {
        let records = vec![rec("chr1", 1010, &[HomRef, HomAlt]), Err("bad line".to_string())];
        let result = find_variable_sites(records, "chr1", &sites);
        assert_eq!(result, Err("bad line".to_string()));
    }

    #[rstest]
    fn test_mixed_width_sites() {
        let sites = vec![
            SequencedSite::new(0, 1000),
            SequencedSite::new(400, 500),
            SequencedSite::new(450, 550),
        ];
        let records = vec![rec("chr1", 460, &[HomRef, HomAlt])];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert_eq!(result, sites);
    }

    #[rstest]
    #[case(i64::MIN)]
    #[case(i64::MAX)]
    fn test_extreme_positions_hit_nothing(sites: Vec<SequencedSite>, #[case] pos: i64) {
        let records = vec![rec("chr1", pos, &[HomRef, HomAlt])];
        let result = find_variable_sites(records, "chr1", &sites).unwrap();
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_no_sites() {
        let records = vec![rec("chr1", 10, &[HomRef, HomAlt])];
        let result = find_variable_sites(records, "chr1", &[]).unwrap();
        assert!(result.is_empty());
    }
}
