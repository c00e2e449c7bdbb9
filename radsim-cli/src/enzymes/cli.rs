use clap::{Command, arg};

pub const ENZYMES_CMD: &str = "enzymes";

pub fn create_enzymes_cli() -> Command {
    Command::new(ENZYMES_CMD)
        .about("List the restriction enzymes radsim knows about, with their recognition sites.")
        .arg(
            arg!(--enzymes <TABLE>)
                .required(false)
                .help("Extra two column (name, site) enzyme table, added to the built-in one"),
        )
}
