use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rayon::prelude::*;
use regex::bytes::{Regex, RegexBuilder};

use crate::constants::*;
use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::site::{search_window, CutMap, RecognitionSite, SiteMatcher, Strand};

/// Lookup tables from literal site text to the indices of enzymes with that
/// site, alongside the combined pattern they were built from.
struct BatchIndex {
    pattern: Regex,
    forward: HashMap<Vec<u8>, Vec<usize>>,
    reverse: HashMap<Vec<u8>, Vec<usize>>,
    // Enzymes with ambiguity codes in their sites; resolved by IUPAC matching
    degenerate: Vec<usize>,
}

impl BatchIndex {
    fn build(enzymes: &[Enzyme]) -> Result<BatchIndex> {
        let mut alternatives: Vec<(usize, String)> = Vec::new();
        let mut forward: HashMap<Vec<u8>, Vec<usize>> = HashMap::new();
        let mut reverse: HashMap<Vec<u8>, Vec<usize>> = HashMap::new();
        let mut degenerate = Vec::new();

        for (idx, enzyme) in enzymes.iter().enumerate() {
            for site in &[&enzyme.site, &enzyme.reverse_site] {
                let regex = site.to_regex();
                if !alternatives.iter().any(|(_, other)| *other == regex) {
                    alternatives.push((site.len(), regex));
                }
            }

            if enzyme.site.is_literal() {
                forward
                    .entry(enzyme.site.as_bytes().to_vec())
                    .or_insert_with(Vec::new)
                    .push(idx);
                reverse
                    .entry(enzyme.reverse_site.as_bytes().to_vec())
                    .or_insert_with(Vec::new)
                    .push(idx);
            } else {
                degenerate.push(idx);
            }
        }

        // Alternation picks the first alternative matching at the leftmost
        // position, so shorter sites win; longer sites are found by probing
        alternatives.sort_by_key(|(len, _)| *len);
        let combined: Vec<String> = alternatives.into_iter().map(|(_, regex)| regex).collect();

        let pattern = RegexBuilder::new(&combined.join("|"))
            .case_insensitive(true)
            .build()
            .chain_err(|| "failed to compile combined recognition site pattern")?;

        Ok(BatchIndex {
            pattern,
            forward,
            reverse,
            degenerate,
        })
    }

    /// Enzymes with a site starting at `start` in the (upper-case) window,
    /// given a combined-pattern match ending at `end`.
    fn resolve(
        &self,
        enzymes: &[Enzyme],
        window: &[u8],
        start: usize,
        end: usize,
    ) -> Vec<(usize, Strand)> {
        let mut found: Vec<(usize, Strand)> = Vec::new();
        let mut add = |idx: usize, strand: Strand| {
            if !found.iter().any(|(other, _)| *other == idx) {
                found.push((idx, strand));
            }
        };

        let max_end = usize::min(window.len(), end + MAX_EXTENSION_PROBE);
        for probe_end in end..=max_end {
            let text = &window[start..probe_end];

            if let Some(indices) = self.forward.get(text) {
                indices.iter().for_each(|&idx| add(idx, Strand::Watson));
            }

            if let Some(indices) = self.reverse.get(text) {
                indices.iter().for_each(|&idx| add(idx, Strand::Crick));
            }
        }

        let min_len = end - start;
        let max_len = min_len + MAX_EXTENSION_PROBE;
        for &idx in &self.degenerate {
            let enzyme = &enzymes[idx];
            if enzyme.length < min_len || enzyme.length > max_len {
                continue;
            }

            if enzyme.site.matches(&window[start..]) {
                add(idx, Strand::Watson);
            } else if enzyme.reverse_site.matches(&window[start..]) {
                add(idx, Strand::Crick);
            }
        }

        found
    }
}

/// A set of enzymes searched for simultaneously using a single combined
/// pattern. The pattern and lookup tables are built on first use and rebuilt
/// after enzymes are added.
pub struct RestrictionBatch {
    enzymes: Vec<Enzyme>,
    cache: Mutex<Option<Arc<BatchIndex>>>,
}

impl RestrictionBatch {
    pub fn new(enzymes: Vec<Enzyme>) -> RestrictionBatch {
        RestrictionBatch {
            enzymes,
            cache: Mutex::new(None),
        }
    }

    pub fn add(&mut self, enzyme: Enzyme) {
        self.enzymes.push(enzyme);
        self.cache = Mutex::new(None);
    }

    pub fn enzymes(&self) -> &[Enzyme] {
        &self.enzymes
    }

    pub fn contains(&self, name: &str) -> bool {
        self.enzymes.iter().any(|enzyme| enzyme.name == name)
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }

    /// Searches several sequences in parallel, sharing the combined pattern.
    pub fn search_many(&self, sequences: &[Vec<u8>], circular: bool) -> Result<Vec<CutMap>> {
        sequences
            .par_iter()
            .map(|sequence| self.search(sequence, circular))
            .collect()
    }

    fn index(&self) -> Result<Arc<BatchIndex>> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| Error::from("restriction batch cache lock was poisoned"))?;

        if let Some(index) = &*cache {
            return Ok(Arc::clone(index));
        }

        debug!("building combined pattern for {} enzymes", self.enzymes.len());
        let index = Arc::new(BatchIndex::build(&self.enzymes)?);
        *cache = Some(Arc::clone(&index));

        Ok(index)
    }
}

impl Clone for RestrictionBatch {
    fn clone(&self) -> RestrictionBatch {
        RestrictionBatch::new(self.enzymes.clone())
    }
}

impl SiteMatcher for RestrictionBatch {
    fn next_sites<'a>(
        &'a self,
        sequence: &[u8],
        offset: usize,
        circular: bool,
    ) -> Result<Vec<RecognitionSite<'a>>> {
        let window = match search_window(sequence, offset, circular, BATCH_WRAP_LEN)? {
            Some(window) => window,
            None => return Ok(Vec::new()),
        };

        if self.enzymes.is_empty() {
            return Ok(Vec::new());
        }

        let index = self.index()?;
        let hit = match index.pattern.find(&window) {
            Some(hit) => hit,
            None => return Ok(Vec::new()),
        };

        let site_index = hit.start() + offset;
        if site_index >= sequence.len() {
            trace!("ignoring wrapped-around match at {}", site_index);
            return Ok(Vec::new());
        }

        let found = index.resolve(&self.enzymes, &window, hit.start(), hit.end());
        assert!(
            !found.is_empty(),
            "combined pattern matched {:?} at {}, but no enzyme has that site",
            String::from_utf8_lossy(hit.as_bytes()),
            site_index
        );

        Ok(found
            .into_iter()
            .map(|(idx, strand)| RecognitionSite::new(&self.enzymes[idx], site_index, strand))
            .collect())
    }
}
