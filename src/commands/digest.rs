use std::io::Write;

use crate::args::DigestArgs;
use crate::batch::RestrictionBatch;
use crate::common::{collect_enzymes, open_file_or_stdout, read_fasta};
use crate::dseq::Dseq;
use crate::errors::*;
use crate::progress;

fn write_fragments(out: &mut dyn Write, name: &str, fragments: &[Dseq]) -> Result<()> {
    for (idx, fragment) in fragments.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            name,
            idx + 1,
            String::from_utf8_lossy(fragment.watson()),
            String::from_utf8_lossy(fragment.crick()),
            fragment.overhang(),
            fragment.topology(),
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}

pub fn main(args: &DigestArgs) -> Result<()> {
    let batch = RestrictionBatch::new(collect_enzymes(&args.enzymes, &args.table)?);
    let (names, sequences) = read_fasta(&args.fasta)?;

    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(out, "Contig\tFragment\tWatson\tCrick\tOverhang\tTopology")
        .chain_err(|| "failed to write output header")?;

    let progress = progress::sequences(sequences.len(), "Digesting: ");
    for (name, sequence) in names.iter().zip(&sequences) {
        let fragments = Dseq::from_watson(sequence, args.topology)
            .cut(&batch)
            .chain_err(|| format!("failed to digest {:?}", name))?;

        write_fragments(&mut out, name, &fragments)?;
        progress.inc(1);
    }

    progress.finish();

    Ok(())
}
