use clap::{Arg, Command, arg, value_parser};

pub const RAD_CMD: &str = "rad";

pub fn create_rad_cli() -> Command {
    Command::new(RAD_CMD)
        .about("Run SingleRad or ddRad sequencing on one chromosome of a FASTA genome and compare the sequenced sites to the variants of a VCF file.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("re1")
                .required(true)
                .help("Name (not the motif) of the restriction enzyme"),
        )
        .arg(
            Arg::new("genome")
                .required(true)
                .help("Path to the genome FASTA file (.fa or .fa.gz)"),
        )
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("Path to the VCF file with the DNA polymorphisms of two samples, or - for stdin"),
        )
        .arg(
            Arg::new("mode")
                .required(true)
                .value_parser(["SingleRad", "ddRad"])
                .help("SingleRad for single RAD sequencing, ddRad for double digest RAD sequencing"),
        )
        .arg(
            arg!(--re2 <RE2>)
                .required(false)
                .help("Name of the second restriction enzyme (required for ddRad)"),
        )
        .arg(
            arg!(--chrom <CHROM>)
                .required(false)
                .help("Chromosome to sequence [default: NC_036780.1]"),
        )
        .arg(
            Arg::new("read-length")
                .long("read-length")
                .required(false)
                .value_parser(value_parser!(i64))
                .help("Length of the sequencing reads [default: 100]"),
        )
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .required(false)
                .value_parser(value_parser!(i64))
                .help("ddRad fragments must be longer than this [default: 300]"),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .required(false)
                .value_parser(value_parser!(i64))
                .help("ddRad fragments must be shorter than this [default: 700]"),
        )
        .arg(
            Arg::new("motif-policy")
                .long("motif-policy")
                .required(false)
                .default_value("literal")
                .value_parser(["literal", "iupac"])
                .help("literal: exact, non-overlapping search. iupac: expand ambiguity codes, overlapping search"),
        )
        .arg(
            arg!(--enzymes <TABLE>)
                .required(false)
                .help("Extra two column (name, site) enzyme table, added to the built-in one"),
        )
        .arg(
            arg!(--json <PATH>)
                .required(false)
                .help("Also write the summary as JSON to this path (- for stdout)"),
        )
}
