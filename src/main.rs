// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod args;
mod batch;
mod commands;
mod common;
mod constants;
mod dseq;
mod enzyme;
mod errors;
mod iupac;
mod pattern;
mod progress;
mod site;
mod table;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn inner_main() -> errors::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match args::parse_args()? {
        args::Args::Sites(args) => commands::sites::main(&args),
        args::Args::Digest(args) => commands::digest::main(&args),
        args::Args::Enzymes(args) => commands::enzymes::main(&args),
        args::Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
