use fixedbitset::FixedBitSet;
use log::debug;

use crate::encodings::{encode, universe_size};
use crate::sketch::shingle::{extract, ShingleSet};
use crate::Error;
use crate::ShingleIndex;

/// One bit per possible k-shingle, set iff that shingle occurs in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceVector {
    ksize: usize,
    bits: FixedBitSet,
}

impl PresenceVector {
    /// Extract the shingles of `sequence` and mark each one's index.
    pub fn build(sequence: &str, k: usize) -> Result<PresenceVector, Error> {
        let shingles = extract(sequence, k)?;
        PresenceVector::from_shingles(&shingles)
    }

    pub fn from_shingles(shingles: &ShingleSet) -> Result<PresenceVector, Error> {
        let ksize = shingles.ksize();
        let mut bits = FixedBitSet::with_capacity(universe_size(ksize)?);

        for shingle in shingles {
            bits.insert(encode(shingle)?);
        }

        debug!(
            "presence vector for k={}: {} of {} bits set",
            ksize,
            bits.count_ones(..),
            bits.len()
        );

        Ok(PresenceVector { ksize, bits })
    }

    pub fn ksize(&self) -> usize {
        self.ksize
    }

    /// Dimension of the vector, always 4^k.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Out-of-range indices read as absent.
    #[inline]
    pub fn contains(&self, index: ShingleIndex) -> bool {
        self.bits.contains(index)
    }

    /// Set indices in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = ShingleIndex> + '_ {
        self.bits.ones()
    }
}

/// Presence vector of dimension 4^k for `sequence`.
pub fn build_vector(sequence: &str, k: usize) -> Result<PresenceVector, Error> {
    PresenceVector::build(sequence, k)
}
