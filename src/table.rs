//! Tables of pre-normalised enzyme records.
//!
//! Each non-empty, non-comment (`#`) line holds nine tab-separated columns in
//! the order used by REBASE `emboss_e` files:
//!
//! ```text
//! name  site  length  ncuts  blunt  c1  c2  c3  c4
//! ```
//!
//! where `ncuts` is 0 (unknown), 1 or 2, `blunt` is 1 for blunt cutters, and
//! `c1`..`c4` are the first 5', first 3', second 5', and second 3' cuts.
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::constants::TABLE_COLUMNS;
use crate::enzyme::{CutType, Enzyme, NumberOfCuts};
use crate::errors::*;

/// Enzymes keyed by name.
pub type EnzymeTable = BTreeMap<String, Enzyme>;

pub fn read_enzymes<P: AsRef<Path> + Debug>(path: &P) -> Result<EnzymeTable> {
    let file = File::open(path).chain_err(|| format!("failed to open enzyme table {:?}", path))?;

    parse_enzymes(BufReader::new(file))
        .chain_err(|| format!("failed to read enzyme table {:?}", path))
}

pub fn parse_enzymes<R: BufRead>(reader: R) -> Result<EnzymeTable> {
    let mut table = EnzymeTable::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from table")?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let row: Vec<&str> = line.split('\t').map(|v| v.trim()).collect();
        let enzyme = parse_row(idx + 1, &row)?;

        if table.contains_key(&enzyme.name) {
            warn!("duplicate enzyme {:?} at line {}; ignoring", enzyme.name, idx + 1);
        } else {
            table.insert(enzyme.name.clone(), enzyme);
        }
    }

    Ok(table)
}

fn parse_row(line: usize, row: &[&str]) -> Result<Enzyme> {
    if row.len() != TABLE_COLUMNS {
        return Err(invalid(
            line,
            format!("expected {} columns, found {}", TABLE_COLUMNS, row.len()),
        ));
    }

    let name = row[0];
    let site = row[1];
    let length = parse_int(line, "length", row[2])?;
    if length != site.len() as isize {
        return Err(invalid(
            line,
            format!("site {:?} does not have length {}", site, length),
        ));
    }

    let ncuts = parse_int(line, "ncuts", row[3])?;
    let cuts = match NumberOfCuts::from_count(ncuts as usize) {
        Some(cuts) => cuts,
        _ => return Err(invalid(line, format!("invalid number of cuts {}", ncuts))),
    };

    let cut_type = match row[4] {
        "0" => CutType::Sticky,
        "1" => CutType::Blunt,
        other => return Err(invalid(line, format!("invalid cut type {:?}", other))),
    };

    let mut cut_sites = [0; 4];
    for (cut_site, (key, value)) in cut_sites
        .iter_mut()
        .zip(["c1", "c2", "c3", "c4"].iter().zip(&row[5..]))
    {
        *cut_site = parse_int(line, key, value)?;
    }

    Enzyme::new(name, site.as_bytes(), cuts, cut_type, cut_sites)
        .chain_err(|| ErrorKind::InvalidTable(line, format!("invalid enzyme {:?}", name)))
}

fn parse_int(line: usize, key: &str, value: &str) -> Result<isize> {
    match value.parse::<isize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(invalid(line, format!("invalid {} ({:?}): {}", key, value, err))),
    }
}

fn invalid(line: usize, reason: String) -> Error {
    ErrorKind::InvalidTable(line, reason).into()
}
