use std::io::Write;

use bio_types::strand;
use rayon::prelude::*;

use crate::args::SitesArgs;
use crate::batch::RestrictionBatch;
use crate::common::{collect_enzymes, open_file_or_stdout, read_fasta};
use crate::dseq::Topology;
use crate::errors::*;
use crate::site::{RecognitionSite, SiteMatcher};

fn write_sites(out: &mut dyn Write, name: &str, sites: &[RecognitionSite]) -> Result<()> {
    for site in sites {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            name,
            site.enzyme.name,
            site.site_index + 1,
            strand::Strand::from(site.strand).strand_symbol(),
            site.watson_cut,
            site.crick_cut,
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}

pub fn main(args: &SitesArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    let batch = RestrictionBatch::new(collect_enzymes(&args.enzymes, &args.table)?);
    let (names, sequences) = read_fasta(&args.fasta)?;

    eprintln!("Finding cut-sites for {} enzyme(s)", batch.len());
    let circular = args.topology == Topology::Circular;
    let results = sequences
        .par_iter()
        .map(|sequence| batch.find_all(sequence, circular))
        .collect::<Result<Vec<_>>>()
        .chain_err(|| "failed to search for recognition sites")?;

    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(out, "Contig\tEnzyme\tSite\tStrand\tWatsonCut\tCrickCut")
        .chain_err(|| "failed to write output header")?;

    for (name, sites) in names.iter().zip(&results) {
        write_sites(&mut out, name, sites)?;
    }

    Ok(())
}
