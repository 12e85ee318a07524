use std::fmt;

use bio::alphabets::dna;

use crate::errors::*;
use crate::site::{SiteMatcher, Strand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Linear,
    Circular,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topology::Linear => write!(f, "linear"),
            Topology::Circular => write!(f, "circular"),
        }
    }
}

/// A double stranded DNA sequence.
///
/// Both strands are stored 5' to 3' as written against the Watson strand, i.e.
/// the Crick strand is complemented but not reversed. `watson[i]` pairs with
/// `crick[i - overhang]`: a positive overhang means the Crick strand extends
/// past the 5' end of the Watson strand, a negative overhang the reverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dseq {
    watson: Vec<u8>,
    crick: Vec<u8>,
    overhang: isize,
    topology: Topology,
}

impl Dseq {
    pub fn new(watson: &[u8], crick: &[u8], overhang: isize, topology: Topology) -> Dseq {
        Dseq {
            watson: watson.to_owned(),
            crick: crick.to_owned(),
            overhang,
            topology,
        }
    }

    /// Blunt double stranded sequence with the Crick strand derived from Watson.
    pub fn from_watson(watson: &[u8], topology: Topology) -> Dseq {
        Dseq {
            watson: watson.to_owned(),
            crick: watson.iter().map(|&nuc| dna::complement(nuc)).collect(),
            overhang: 0,
            topology,
        }
    }

    pub fn watson(&self) -> &[u8] {
        &self.watson
    }

    pub fn crick(&self) -> &[u8] {
        &self.crick
    }

    pub fn overhang(&self) -> isize {
        self.overhang
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_circular(&self) -> bool {
        self.topology == Topology::Circular
    }

    /// Length of the Watson strand.
    pub fn len(&self) -> usize {
        self.watson.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watson.is_empty() && self.crick.is_empty()
    }

    /// Cuts the sequence at every recognition site found by `matcher`,
    /// returning the fragments in order.
    ///
    /// Fragments are linear, except that a circular sequence without any
    /// sites is returned unchanged. If a matcher reports more than one site at
    /// a position, only the first is used.
    ///
    /// Every site yields exactly one fragment. Cuts that fall before the
    /// previous cut or past the end of the sequence are clamped, so such a
    /// site yields an empty fragment; concatenating the fragments always
    /// gives back the original strands.
    pub fn cut<M: SiteMatcher + ?Sized>(&self, matcher: &M) -> Result<Vec<Dseq>> {
        let mut fragments = Vec::new();

        let mut next_search_start = 0;
        let mut last_overhang = 0;

        let mut last_watson_cut = 0;
        let mut last_crick_cut = 0;

        loop {
            let sites = matcher.next_sites(&self.watson, next_search_start, self.is_circular())?;
            let site = match sites.first() {
                Some(site) => site,
                None => break,
            };

            if sites.len() > 1 {
                warn!(
                    "{} recognition sites found at position {}; only {} ({}) is used",
                    sites.len(),
                    site.site_index,
                    site.enzyme.name,
                    site.strand
                );
            }

            // Cuts never move backwards or past the end of a strand
            let watson_cut = clamp(site.watson_cut, last_watson_cut, self.watson.len());
            let crick_cut = clamp(site.crick_cut, last_crick_cut, self.crick.len());

            let overhang = match site.strand {
                Strand::Watson => {
                    let overhang = last_overhang;
                    last_overhang = watson_cut as isize - crick_cut as isize;
                    next_search_start = usize::max(watson_cut, site.site_index + 1);

                    overhang
                }
                Strand::Crick => {
                    next_search_start = site.site_index + 1;

                    watson_cut as isize - crick_cut as isize
                }
            };

            debug!(
                "{} cuts at {}/{} ({} strand site at {})",
                site.enzyme.name, watson_cut, crick_cut, site.strand, site.site_index
            );

            fragments.push(Dseq::new(
                &self.watson[last_watson_cut..watson_cut],
                &self.crick[last_crick_cut..crick_cut],
                overhang,
                Topology::Linear,
            ));

            last_watson_cut = watson_cut;
            last_crick_cut = crick_cut;
        }

        let topology = if fragments.is_empty() {
            self.topology
        } else {
            Topology::Linear
        };

        fragments.push(Dseq::new(
            &self.watson[last_watson_cut..],
            &self.crick[last_crick_cut..],
            last_overhang,
            topology,
        ));

        Ok(fragments)
    }
}

fn clamp(cut: isize, min: usize, max: usize) -> usize {
    if cut < min as isize {
        min
    } else {
        usize::min(cut as usize, max)
    }
}

impl fmt::Display for Dseq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let watson_pad = isize::max(0, self.overhang) as usize;
        let crick_pad = isize::max(0, -self.overhang) as usize;

        writeln!(
            f,
            "{:pad$}{}",
            "",
            String::from_utf8_lossy(&self.watson),
            pad = watson_pad
        )?;
        write!(
            f,
            "{:pad$}{}",
            "",
            String::from_utf8_lossy(&self.crick),
            pad = crick_pad
        )
    }
}
