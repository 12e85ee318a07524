use regex::bytes::{Regex, RegexBuilder};

use crate::errors::*;
use crate::pattern::SitePattern;
use crate::site::{search_window, RecognitionSite, SiteMatcher, Strand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutType {
    Blunt,
    Sticky,
}

/// Number of strand cuts, as counted by REBASE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberOfCuts {
    Unknown,
    One,
    Two,
}

impl NumberOfCuts {
    pub fn from_count(count: usize) -> Option<NumberOfCuts> {
        match count {
            0 => Some(NumberOfCuts::Unknown),
            1 => Some(NumberOfCuts::One),
            2 => Some(NumberOfCuts::Two),
            _ => None,
        }
    }
}

// Name, recognition site, first 5' and 3' cut, REBASE ID
const BUILTIN: [(&str, &[u8], isize, isize, Option<u32>); 15] = [
    ("BamHI", b"GGATCC", 1, 5, Some(185)),
    ("BbsI", b"GAAGAC", 8, 12, None),
    ("BglI", b"GCCNNNNNGGC", 7, 4, None),
    ("BsaI", b"GGTCTC", 7, 11, Some(313)),
    ("BsmBI", b"CGTCTC", 7, 11, None),
    ("EcoRI", b"GAATTC", 1, 5, Some(993)),
    ("EcoRV", b"GATATC", 3, 3, None),
    ("HindIII", b"AAGCTT", 1, 5, None),
    ("KpnI", b"GGTACC", 5, 1, None),
    ("NotI", b"GCGGCCGC", 2, 6, None),
    ("PstI", b"CTGCAG", 5, 1, None),
    ("SalI", b"GTCGAC", 1, 5, None),
    ("SapI", b"GCTCTTC", 8, 11, None),
    ("SmaI", b"CCCGGG", 3, 3, None),
    ("XhoI", b"CTCGAG", 1, 5, None),
];

/// A restriction enzyme. Cut offsets follow the REBASE convention: they are
/// counted from the first base of the site as written 5' to 3', and a cut is
/// made to the right of the given base.
#[derive(Clone, Debug)]
pub struct Enzyme {
    pub name: String,

    pub site: SitePattern,
    pub reverse_site: SitePattern,
    pub length: usize,
    pub substrate: &'static str,

    forward: Regex,
    reverse: Regex,

    pub cut_type: CutType,
    pub cuts: NumberOfCuts,

    pub five_prime_cut: isize,
    pub three_prime_cut: isize,
    pub five_prime_cut_2: isize,
    pub three_prime_cut_2: isize,

    pub rebase_id: Option<u32>,
}

impl Enzyme {
    /// Creates an enzyme from already normalised attributes; `cut_sites` holds
    /// the first 5', first 3', second 5', and second 3' cut offsets.
    pub fn new(
        name: &str,
        site: &[u8],
        cuts: NumberOfCuts,
        cut_type: CutType,
        cut_sites: [isize; 4],
    ) -> Result<Enzyme> {
        let site = SitePattern::new(site);
        if !site.is_valid() {
            return Err(ErrorKind::InvalidSite(name.into(), site.to_string()).into());
        }

        let reverse_site = site.reverse_complement();
        let [five_prime_cut, three_prime_cut, five_prime_cut_2, three_prime_cut_2] = cut_sites;

        Ok(Enzyme {
            name: name.into(),
            length: site.len(),
            substrate: "DNA",
            forward: compile(&site)?,
            reverse: compile(&reverse_site)?,
            site,
            reverse_site,
            cut_type,
            cuts,
            five_prime_cut,
            three_prime_cut,
            five_prime_cut_2,
            three_prime_cut_2,
            rebase_id: None,
        })
    }

    /// Single cutter with the given first 5' and 3' cut offsets.
    pub fn with_cuts(
        name: &str,
        site: &[u8],
        five_prime: isize,
        three_prime: isize,
    ) -> Result<Enzyme> {
        let cut_type = if five_prime == three_prime {
            CutType::Blunt
        } else {
            CutType::Sticky
        };

        Enzyme::new(
            name,
            site,
            NumberOfCuts::Two,
            cut_type,
            [five_prime, three_prime, 0, 0],
        )
    }

    /// Looks up a built-in enzyme (case-insensitive).
    pub fn get(name: &str) -> Result<Enzyme> {
        let lowercase = name.to_ascii_lowercase();

        for (builtin, site, five_prime, three_prime, rebase_id) in BUILTIN.iter() {
            if builtin.to_ascii_lowercase() == lowercase {
                let mut enzyme = Enzyme::with_cuts(builtin, site, *five_prime, *three_prime)?;
                enzyme.rebase_id = *rebase_id;

                return Ok(enzyme);
            }
        }

        Err(ErrorKind::UnknownEnzyme(name.into()).into())
    }

    /// All built-in enzymes, sorted by name.
    pub fn all() -> Result<Vec<Enzyme>> {
        BUILTIN.iter().map(|(name, ..)| Enzyme::get(name)).collect()
    }

    pub fn is_palindromic(&self) -> bool {
        self.site == self.reverse_site
    }

    pub fn uri(&self) -> Option<String> {
        self.rebase_id
            .map(|id| format!("https://identifiers.org/rebase:{}", id))
    }

    pub fn overhang_length(&self) -> usize {
        (self.three_prime_cut - self.five_prime_cut).abs() as usize
    }

    /// Bases between the two first cuts; positions outside the site are 'N'.
    pub fn overhang_sequence(&self) -> Vec<u8> {
        let start = isize::min(self.five_prime_cut, self.three_prime_cut);
        let end = isize::max(self.five_prime_cut, self.three_prime_cut);
        let site = self.site.as_bytes();

        (start..end)
            .map(|idx| {
                if idx >= 0 && (idx as usize) < site.len() {
                    site[idx as usize]
                } else {
                    b'N'
                }
            })
            .collect()
    }

    /// Watson and Crick cut coordinates for a site starting at `site_index`
    /// on the Watson strand. Crick matches are reflected through the site.
    pub fn cut_coordinates(&self, site_index: usize, strand: Strand) -> (isize, isize) {
        let start = site_index as isize;
        let length = self.length as isize;

        match strand {
            Strand::Watson => (start + self.five_prime_cut, start + self.three_prime_cut),
            Strand::Crick => (
                start + length - self.three_prime_cut,
                start + length - self.five_prime_cut,
            ),
        }
    }
}

impl PartialEq for Enzyme {
    fn eq(&self, other: &Enzyme) -> bool {
        self.name == other.name
            && self.site == other.site
            && self.cut_type == other.cut_type
            && self.cuts == other.cuts
            && self.five_prime_cut == other.five_prime_cut
            && self.three_prime_cut == other.three_prime_cut
            && self.five_prime_cut_2 == other.five_prime_cut_2
            && self.three_prime_cut_2 == other.three_prime_cut_2
            && self.rebase_id == other.rebase_id
    }
}

impl SiteMatcher for Enzyme {
    fn next_sites<'a>(
        &'a self,
        sequence: &[u8],
        offset: usize,
        circular: bool,
    ) -> Result<Vec<RecognitionSite<'a>>> {
        let window = match search_window(sequence, offset, circular, self.length - 1)? {
            Some(window) => window,
            None => return Ok(Vec::new()),
        };

        // Matches starting in the wrapped-around bases were already seen at
        // the start of the sequence
        let find = |regex: &Regex| {
            regex
                .find(&window)
                .map(|m| m.start() + offset)
                .filter(|&start| start < sequence.len())
        };

        let sites = match (find(&self.forward), find(&self.reverse)) {
            (Some(watson), Some(crick)) if watson == crick => {
                if self.is_palindromic() {
                    vec![RecognitionSite::new(self, watson, Strand::Watson)]
                } else {
                    vec![
                        RecognitionSite::new(self, watson, Strand::Watson),
                        RecognitionSite::new(self, crick, Strand::Crick),
                    ]
                }
            }
            (Some(watson), Some(crick)) if crick < watson => {
                vec![RecognitionSite::new(self, crick, Strand::Crick)]
            }
            (Some(watson), _) => vec![RecognitionSite::new(self, watson, Strand::Watson)],
            (None, Some(crick)) => vec![RecognitionSite::new(self, crick, Strand::Crick)],
            (None, None) => Vec::new(),
        };

        Ok(sites)
    }
}

fn compile(site: &SitePattern) -> Result<Regex> {
    RegexBuilder::new(&site.to_regex())
        .case_insensitive(true)
        .build()
        .chain_err(|| format!("failed to compile pattern for site {:?}", site.to_string()))
}
