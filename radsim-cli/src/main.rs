mod enzymes;
mod rad;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "radsim";
    pub const BIN_NAME: &str = "radsim";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Simulate RAD sequencing (SingleRad and ddRad) on a reference chromosome and find the sequenced sites that carry variation between two samples.")
        .subcommand_required(true)
        .subcommand(rad::cli::create_rad_cli())
        .subcommand(enzymes::cli::create_enzymes_cli())
}

/// Logs go to stderr; `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    log::debug!("{} {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // RAD
        //
        Some((rad::cli::RAD_CMD, matches)) => {
            rad::handlers::run_rad(matches)?;
        }

        //
        // ENZYMES
        //
        Some((enzymes::cli::ENZYMES_CMD, matches)) => {
            enzymes::handlers::run_enzymes(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_parse_ddrad_invocation() {
        let matches = build_parser()
            .try_get_matches_from([
                "radsim", "rad", "AanI", "genome.fa", "calls.vcf", "ddRad", "--re2", "MroI",
                "--min-size", "250",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, rad::cli::RAD_CMD);
        assert_eq!(sub.get_one::<String>("re2").unwrap(), "MroI");
        assert_eq!(sub.get_one::<i64>("min-size").copied(), Some(250));
        assert_eq!(sub.get_one::<i64>("max-size"), None);
        assert_eq!(sub.get_one::<String>("motif-policy").unwrap(), "literal");
    }

    #[rstest]
    #[case("SingleRAD")]
    #[case("double")]
    fn test_parse_rejects_unknown_mode(#[case] mode: &str) {
        let res = build_parser().try_get_matches_from(["radsim", "rad", "AanI", "g.fa", "v.vcf", mode]);
        assert!(res.is_err());
    }

    #[rstest]
    fn test_parse_rejects_non_numeric_read_length() {
        let res = build_parser().try_get_matches_from([
            "radsim", "rad", "AanI", "g.fa", "v.vcf", "SingleRad", "--read-length", "long",
        ]);
        assert!(res.is_err());
    }
}
