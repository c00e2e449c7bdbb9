use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use radsim_digest::digest::run_rad as simulate;
use radsim_digest::{
    DEFAULT_CHROM, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_READ_LENGTH, DigestError,
    DigestParams, EnzymeLookup, MotifPolicy, RadMode, RadSummary, RestrictionEnzymeTable,
    find_variable_sites,
};
use radsim_io::{VcfReader, read_fasta};

///
/// The built-in enzyme table, extended with a user table when one is given.
///
pub fn load_enzyme_table(path: Option<&String>) -> Result<RestrictionEnzymeTable> {
    let mut table = RestrictionEnzymeTable::builtin();
    if let Some(path) = path {
        let custom = RestrictionEnzymeTable::from_file(path)
            .with_context(|| format!("Failed to load enzyme table: {}", path))?;
        log::info!("Loaded {} enzymes from {}", custom.len(), path);
        table.merge(custom);
    }
    Ok(table)
}

fn digest_params(matches: &ArgMatches) -> Result<DigestParams> {
    let params = DigestParams {
        read_length: matches
            .get_one::<i64>("read-length")
            .copied()
            .unwrap_or(DEFAULT_READ_LENGTH),
        min_size: matches
            .get_one::<i64>("min-size")
            .copied()
            .unwrap_or(DEFAULT_MIN_SIZE),
        max_size: matches
            .get_one::<i64>("max-size")
            .copied()
            .unwrap_or(DEFAULT_MAX_SIZE),
    };
    params.validate()?;
    Ok(params)
}

pub fn run_rad(matches: &ArgMatches) -> Result<()> {
    let re1 = matches
        .get_one::<String>("re1")
        .expect("A restriction enzyme name is required.");

    let genome = matches
        .get_one::<String>("genome")
        .expect("A path to a genome file is required.");

    let vcf = matches
        .get_one::<String>("vcf")
        .expect("A path to a VCF file is required.");

    let mode: RadMode = matches
        .get_one::<String>("mode")
        .expect("A mode is required.")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let policy: MotifPolicy = matches
        .get_one::<String>("motif-policy")
        .expect("motif-policy has a default value")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let default_chrom = DEFAULT_CHROM.to_string();
    let chrom = matches
        .get_one::<String>("chrom")
        .unwrap_or(&default_chrom);

    let re2 = matches.get_one::<String>("re2").map(|s| s.as_str());

    // configuration errors are reported before any file is read
    let params = digest_params(matches)?;
    let table = load_enzyme_table(matches.get_one::<String>("enzymes"))?;
    table.resolve(re1)?;
    let enzymes: Vec<&str> = match (mode, re2) {
        (RadMode::SingleRad, _) => vec![re1.as_str()],
        (RadMode::DdRad, Some(re2)) => {
            table.resolve(re2)?;
            vec![re1.as_str(), re2]
        }
        (RadMode::DdRad, None) => return Err(DigestError::MissingSecondEnzyme.into()),
    };

    match mode {
        RadMode::SingleRad => println!(
            "running {} for chromosome {} and restriction enzyme {}",
            mode, chrom, re1
        ),
        RadMode::DdRad => println!(
            "running {} for chromosome {} and restriction enzymes {}",
            mode,
            chrom,
            enzymes.join(" and ")
        ),
    }

    let dna = read_fasta(genome, chrom)
        .with_context(|| format!("Failed to read chromosome {} from {}", chrom, genome))?;
    log::info!("Read {} bases of {} from {}", dna.len(), chrom, genome);

    let seq_sites = simulate(mode, &dna, re1, re2, &table, &params, policy)?;

    let records = VcfReader::from_path_or_stdin(vcf)
        .with_context(|| format!("Failed to open VCF file: {}", vcf))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} records)")?,
    );
    pb.set_message(format!("Scanning {} for variation on {}", vcf, chrom));
    pb.enable_steady_tick(Duration::from_millis(120));

    let variable_sites = find_variable_sites(records.inspect(|_| pb.inc(1)), chrom, &seq_sites)
        .with_context(|| format!("Failed to read VCF file: {}", vcf))?;
    pb.finish_and_clear();

    let summary = RadSummary::new(
        mode,
        chrom,
        &enzymes,
        dna.len(),
        &seq_sites,
        &variable_sites,
    );
    println!("{}", summary);

    if let Some(json_path) = matches.get_one::<String>("json") {
        write_json(&summary, json_path)?;
    }

    println!("\nAnalysis Complete");

    Ok(())
}

fn write_json(summary: &RadSummary, output_path: &str) -> Result<()> {
    let json =
        serde_json::to_string_pretty(summary).context("Failed to serialize summary to JSON")?;

    match output_path {
        "-" => {
            io::stdout().write_all(json.as_bytes())?;
            println!(); // trailing newline
        }
        p => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            eprintln!("Summary written to {}", p);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use radsim_io::ReaderError;
    use rstest::*;
    use tempfile::tempdir;

    use crate::rad::cli::RAD_CMD;

    fn data_path(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data")
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    fn rad_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["radsim", RAD_CMD];
        argv.extend_from_slice(args);
        let matches = crate::build_parser().try_get_matches_from(argv).unwrap();
        matches.subcommand_matches(RAD_CMD).unwrap().clone()
    }

    #[rstest]
    fn test_ddrad_without_re2_fails_before_reading_genome() {
        let matches = rad_matches(&["EcoRI", "/does/not/exist.fa", "/does/not/exist.vcf", "ddRad"]);
        let err = run_rad(&matches).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigestError>(),
            Some(DigestError::MissingSecondEnzyme)
        ));
    }

    #[rstest]
    #[case(&["NotAnEnzyme", "/does/not/exist.fa", "/does/not/exist.vcf", "SingleRad"])]
    #[case(&["EcoRI", "/does/not/exist.fa", "/does/not/exist.vcf", "ddRad", "--re2", "NotAnEnzyme"])]
    fn test_unknown_enzyme_fails_before_reading_genome(#[case] args: &[&str]) {
        let err = run_rad(&rad_matches(args)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigestError>(),
            Some(DigestError::UnknownEnzyme(name)) if name == "NotAnEnzyme"
        ));
    }

    #[rstest]
    fn test_invalid_window_fails_before_reading_genome() {
        let matches = rad_matches(&[
            "EcoRI", "/does/not/exist.fa", "/does/not/exist.vcf", "ddRad", "--re2", "MspI",
            "--min-size", "700", "--max-size", "300",
        ]);
        let err = run_rad(&matches).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigestError>(),
            Some(DigestError::InvalidParams(_))
        ));
    }

    #[rstest]
    fn test_missing_genome_is_a_read_error() {
        let matches = rad_matches(&["DpnII", "/does/not/exist.fa", "/does/not/exist.vcf", "SingleRad"]);
        let err = run_rad(&matches).unwrap_err();
        assert!(err.downcast_ref::<ReaderError>().is_some());
    }

    #[rstest]
    fn test_json_summary_is_written() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("summary.json");
        let genome = data_path("toy.fa");
        let vcf = data_path("toy.vcf");

        let matches = rad_matches(&[
            "EcoRI",
            &genome,
            &vcf,
            "ddRad",
            "--re2",
            "MspI",
            "--chrom",
            "chr1",
            "--json",
            json_path.to_str().unwrap(),
        ]);
        run_rad(&matches).unwrap();

        let written = std::fs::read_to_string(&json_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["mode"], "ddRad");
        assert_eq!(json["chromosome"], "chr1");
        assert_eq!(json["enzymes"], serde_json::json!(["EcoRI", "MspI"]));
        assert_eq!(json["input_length"], 2000);
        assert_eq!(json["sequenced_sites"], 8);
        assert_eq!(json["sequenced_bases"], 800);
        assert_eq!(json["variable_sites"], 2);
        assert_eq!(json["variable_fraction"], 0.25);
    }
}
