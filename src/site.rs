use std::collections::BTreeMap;
use std::fmt;

use bio_types::strand;

use crate::enzyme::Enzyme;
use crate::errors::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Watson,
    Crick,
}

impl From<Strand> for strand::Strand {
    fn from(strand: Strand) -> strand::Strand {
        match strand {
            Strand::Watson => strand::Strand::Forward,
            Strand::Crick => strand::Strand::Reverse,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Watson => write!(f, "watson"),
            Strand::Crick => write!(f, "crick"),
        }
    }
}

/// A recognition site found by a matcher, with the cuts it implies.
#[derive(Clone, Debug, PartialEq)]
pub struct RecognitionSite<'a> {
    /// Start of the site on the (non-wrapped) Watson strand.
    pub site_index: usize,
    pub enzyme: &'a Enzyme,
    pub strand: Strand,
    pub watson_cut: isize,
    pub crick_cut: isize,
}

impl<'a> RecognitionSite<'a> {
    pub fn new(enzyme: &'a Enzyme, site_index: usize, strand: Strand) -> RecognitionSite<'a> {
        let (watson_cut, crick_cut) = enzyme.cut_coordinates(site_index, strand);

        RecognitionSite {
            site_index,
            enzyme,
            strand,
            watson_cut,
            crick_cut,
        }
    }
}

/// Watson strand cut positions, keyed by enzyme name.
pub type CutMap = BTreeMap<String, Vec<isize>>;

pub trait SiteMatcher {
    /// Finds the first recognition site(s) starting at or after `offset`.
    ///
    /// Returns an empty list if there are no further sites, including when
    /// `offset` equals the sequence length; offsets past the end are an
    /// `InvalidOffset` error. All returned sites share the same site index.
    fn next_sites<'a>(
        &'a self,
        sequence: &[u8],
        offset: usize,
        circular: bool,
    ) -> Result<Vec<RecognitionSite<'a>>>;

    /// Every recognition site in a sequence, ordered by site index.
    fn find_all<'a>(
        &'a self,
        sequence: &[u8],
        circular: bool,
    ) -> Result<Vec<RecognitionSite<'a>>> {
        let mut found = Vec::new();
        let mut offset = 0;

        loop {
            let sites = self.next_sites(sequence, offset, circular)?;
            match sites.last() {
                Some(site) => offset = site.site_index + 1,
                None => break,
            }

            found.extend(sites);
        }

        Ok(found)
    }

    /// Collects the Watson strand cut of every recognition site in a sequence.
    fn search(&self, sequence: &[u8], circular: bool) -> Result<CutMap> {
        let mut cuts = CutMap::new();
        for site in self.find_all(sequence, circular)? {
            cuts.entry(site.enzyme.name.clone())
                .or_insert_with(Vec::new)
                .push(site.watson_cut);
        }

        Ok(cuts)
    }
}

/// Upper-cased sequence from `offset` onwards, followed by up to `wrap` bases
/// from the start of the sequence if it is circular. `None` at the end of the
/// sequence.
pub fn search_window(
    sequence: &[u8],
    offset: usize,
    circular: bool,
    wrap: usize,
) -> Result<Option<Vec<u8>>> {
    if offset > sequence.len() {
        return Err(ErrorKind::InvalidOffset(offset, sequence.len()).into());
    } else if offset == sequence.len() {
        return Ok(None);
    }

    let wrap = if circular {
        usize::min(sequence.len(), wrap)
    } else {
        0
    };

    let mut window = Vec::with_capacity(sequence.len() - offset + wrap);
    window.extend_from_slice(&sequence[offset..]);
    window.extend_from_slice(&sequence[..wrap]);
    window.make_ascii_uppercase();

    Ok(Some(window))
}
