use std::fmt;

use bio::alphabets::dna;

use crate::iupac;

/// A recognition site written 5' to 3', possibly containing IUPAC codes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SitePattern {
    site: Vec<u8>,
}

impl SitePattern {
    pub fn new(site: &[u8]) -> SitePattern {
        SitePattern {
            site: site.to_ascii_uppercase(),
        }
    }

    /// The same site as read 5' to 3' on the opposite strand.
    pub fn reverse_complement(&self) -> SitePattern {
        SitePattern {
            site: dna::revcomp(&self.site),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.site.is_empty() && self.site.iter().all(|&nuc| iupac::expand(nuc).is_some())
    }

    /// True if the site contains no ambiguity codes.
    pub fn is_literal(&self) -> bool {
        self.site.iter().all(|&nuc| iupac::is_concrete(nuc))
    }

    /// Checks if the site matches the start of an (upper-case) window.
    pub fn matches(&self, window: &[u8]) -> bool {
        self.len() <= window.len()
            && self
                .site
                .iter()
                .zip(window.iter())
                .all(|(&query, &candidate)| iupac::matches(query, candidate))
    }

    /// Regular expression matching the site, with ambiguity codes expanded
    /// into character classes.
    pub fn to_regex(&self) -> String {
        let mut pattern = String::with_capacity(self.site.len());
        for &nuc in &self.site {
            match iupac::expand(nuc) {
                Some(choices) if choices.len() > 1 => {
                    pattern.push('[');
                    pattern.extend(choices.iter().map(|&c| c as char));
                    pattern.push(']');
                }
                _ => pattern.push(nuc as char),
            }
        }

        pattern
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.site
    }

    pub fn len(&self) -> usize {
        self.site.len()
    }

    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }
}

impl fmt::Display for SitePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.site))
    }
}
