use clap::{App, Arg, ArgMatches, SubCommand};

use crate::dseq::Topology;
use crate::errors::*;

#[derive(Debug)]
pub struct SitesArgs {
    pub fasta: String,
    pub enzymes: Vec<String>,
    pub table: Option<String>,
    pub output: Option<String>,
    pub topology: Topology,
    pub threads: usize,
}

#[derive(Debug)]
pub struct DigestArgs {
    pub fasta: String,
    pub enzymes: Vec<String>,
    pub table: Option<String>,
    pub output: Option<String>,
    pub topology: Topology,
}

#[derive(Debug)]
pub struct EnzymesArgs {
    pub table: Option<String>,
    pub output: Option<String>,
}

pub enum Args {
    Sites(SitesArgs),
    Digest(DigestArgs),
    Enzymes(EnzymesArgs),
    None,
}

fn enzyme_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("enzyme")
        .short("e")
        .long("enzyme")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1)
        .required(true)
        .help("Restriction enzyme to search for; may be given multiple times.")
}

fn table_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("table")
        .long("table")
        .takes_value(true)
        .help("Tab-separated table of enzymes used instead of the built-in set.")
}

fn output_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("output")
        .long("output")
        .takes_value(true)
        .help("Write output to this file instead of STDOUT.")
}

fn circular_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("circular")
        .long("circular")
        .help("Treat sequences as circular; sites may span the end of a sequence.")
}

fn sites_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("sites")
        .about("List cut-sites of one or more enzymes in FASTA sequence(s)")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more sequences.")
                .required(true),
        )
        .arg(enzyme_arg())
        .arg(table_arg())
        .arg(output_arg())
        .arg(circular_arg())
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn digest_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("digest")
        .about("Cut FASTA sequence(s) into double stranded fragments")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more sequences.")
                .required(true),
        )
        .arg(enzyme_arg())
        .arg(table_arg())
        .arg(output_arg())
        .arg(circular_arg())
}

fn enzymes_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("enzymes")
        .about("Print table of known restriction enzymes")
        .arg(table_arg())
        .arg(output_arg())
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_strings(matches: &ArgMatches, key: &str) -> Result<Vec<String>> {
    match matches.values_of(key) {
        Some(values) => Ok(values.map(|v| v.to_string()).collect()),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_topology(matches: &ArgMatches) -> Topology {
    if matches.is_present("circular") {
        Topology::Circular
    } else {
        Topology::Linear
    }
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("recut")
        .version("0.1.0")
        .author("Mikkel Schubert")
        .subcommand(sites_command())
        .subcommand(digest_command())
        .subcommand(enzymes_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("sites") {
        Ok(Args::Sites(SitesArgs {
            fasta: get_string(matches, "fasta")?,
            enzymes: get_strings(matches, "enzyme")?,
            table: matches.value_of("table").map(|s| s.to_string()),
            output: matches.value_of("output").map(|s| s.to_string()),
            topology: get_topology(matches),
            threads: parse_threads(matches)?,
        }))
    } else if let Some(matches) = matches.subcommand_matches("digest") {
        Ok(Args::Digest(DigestArgs {
            fasta: get_string(matches, "fasta")?,
            enzymes: get_strings(matches, "enzyme")?,
            table: matches.value_of("table").map(|s| s.to_string()),
            output: matches.value_of("output").map(|s| s.to_string()),
            topology: get_topology(matches),
        }))
    } else if let Some(matches) = matches.subcommand_matches("enzymes") {
        Ok(Args::Enzymes(EnzymesArgs {
            table: matches.value_of("table").map(|s| s.to_string()),
            output: matches.value_of("output").map(|s| s.to_string()),
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
