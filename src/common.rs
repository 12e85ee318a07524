use std::fs::File;
use std::io;
use std::io::Write;

use bio::io::fasta;

use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::table;

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

/// Looks up enzymes by name in a table, if given, or the built-in set.
pub fn collect_enzymes(names: &[String], table: &Option<String>) -> Result<Vec<Enzyme>> {
    let table = match table {
        Some(path) => Some(table::read_enzymes(path)?),
        None => None,
    };

    let mut enzymes = Vec::with_capacity(names.len());
    for name in names {
        let enzyme = match &table {
            Some(table) => match table.get(name) {
                Some(enzyme) => enzyme.clone(),
                None => return Err(ErrorKind::UnknownEnzyme(name.clone()).into()),
            },
            None => Enzyme::get(name)?,
        };

        enzymes.push(enzyme);
    }

    Ok(enzymes)
}

/// Reads the names and sequences of all records in a FASTA file.
pub fn read_fasta(filename: &str) -> Result<(Vec<String>, Vec<Vec<u8>>)> {
    eprintln!("Reading sequences from {:?}", filename);
    let reader = fasta::Reader::from_file(filename)
        .chain_err(|| format!("failed to open FASTA file {:?}", filename))?;

    let mut names = Vec::new();
    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record.chain_err(|| "failed to read FASTA sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        names.push(record.id().to_owned());
        sequences.push(record.seq().to_owned());
    }

    eprintln!("  read {} sequences.", sequences.len());

    Ok((names, sequences))
}
