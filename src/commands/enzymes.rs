use std::io::Write;

use crate::args::EnzymesArgs;
use crate::common::open_file_or_stdout;
use crate::enzyme::{CutType, Enzyme};
use crate::errors::*;
use crate::table;

pub fn main(args: &EnzymesArgs) -> Result<()> {
    let enzymes: Vec<Enzyme> = match &args.table {
        Some(path) => table::read_enzymes(path)?.into_iter().map(|(_, v)| v).collect(),
        None => Enzyme::all()?,
    };

    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(out, "Name\tSite\tLength\tCutType\tCut5\tCut3\tOverhang")
        .chain_err(|| "failed to write output header")?;

    for enzyme in enzymes {
        let cut_type = match enzyme.cut_type {
            CutType::Blunt => "blunt",
            CutType::Sticky => "sticky",
        };

        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            enzyme.name,
            enzyme.site,
            enzyme.length,
            cut_type,
            enzyme.five_prime_cut,
            enzyme.three_prime_cut,
            String::from_utf8_lossy(&enzyme.overhang_sequence()),
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}
