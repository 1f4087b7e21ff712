use std::collections::hash_set;
use std::collections::HashSet;

use log::debug;

use crate::encodings::is_nucleotide;
use crate::Error;

/// Distinct, uppercased k-shingles of one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShingleSet {
    ksize: usize,
    shingles: HashSet<String>,
}

impl ShingleSet {
    pub fn ksize(&self) -> usize {
        self.ksize
    }

    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    pub fn contains(&self, shingle: &str) -> bool {
        self.shingles.contains(shingle)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.shingles.iter()
    }

    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut shingles: Vec<String> = self.shingles.iter().cloned().collect();
        shingles.sort_unstable();
        shingles
    }
}

impl<'a> IntoIterator for &'a ShingleSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.shingles.iter()
    }
}

impl IntoIterator for ShingleSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.shingles.into_iter()
    }
}

/// Slide a window of length `k` over `sequence` one symbol at a time and
/// collect every distinct window.
///
/// Windows are validated in order; the first symbol outside `ACGT` (any case)
/// aborts extraction and is reported with its 1-based position in `sequence`.
pub fn extract(sequence: &str, k: usize) -> Result<ShingleSet, Error> {
    if k == 0 {
        return Err(Error::invalid_ksize(k));
    }

    let symbols: Vec<char> = sequence.chars().collect();
    if symbols.is_empty() || k > symbols.len() {
        return Err(Error::InvalidInput {
            message: format!(
                "the sequence ({}) should have length greater than or equal to the value of k ({})",
                sequence, k
            ),
        });
    }

    let mut shingles: HashSet<String> = HashSet::with_capacity(symbols.len() - k + 1);
    for (start, window) in symbols.windows(k).enumerate() {
        if let Some(offset) = window.iter().position(|&nt| !is_nucleotide(nt)) {
            return Err(Error::InvalidAlphabet {
                character: window[offset],
                position: start + offset + 1,
            });
        }
        shingles.insert(window.iter().map(|nt| nt.to_ascii_uppercase()).collect());
    }

    debug!(
        "extracted {} distinct {}-shingles from {} symbols",
        shingles.len(),
        k,
        symbols.len()
    );

    Ok(ShingleSet { ksize: k, shingles })
}
