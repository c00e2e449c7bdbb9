use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::ArgMatches;

use crate::rad::handlers::load_enzyme_table;

pub fn run_enzymes(matches: &ArgMatches) -> Result<()> {
    let table = load_enzyme_table(matches.get_one::<String>("enzymes"))?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for (name, site) in table.iter() {
        writeln!(writer, "{}\t{}", name, site)?;
    }
    writer.flush()?;

    Ok(())
}
