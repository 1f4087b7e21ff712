//! Permutation-based MinHash over a presence vector.
//!
//! For two sequences reduced under the *same* permutation, the probability
//! that both yield the same value equals the Jaccard similarity of their
//! shingle sets. Each call to [`minhash`] draws a fresh permutation, so values
//! from separate calls are not comparable; use [`Permutation::first_present`]
//! to reduce several vectors with one permutation.

use log::{debug, error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::encodings::universe_size;
use crate::sketch::vector::PresenceVector;
use crate::Error;
use crate::ShingleIndex;

/// An ordering of every index in `[0, 4^k)`, each exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    order: Vec<ShingleIndex>,
}

impl Permutation {
    /// `0, 1, ..., 4^k - 1` in natural order.
    pub fn identity(k: usize) -> Result<Permutation, Error> {
        let size = universe_size(k)?;
        Ok(Permutation {
            order: (0..size).collect(),
        })
    }

    pub fn random_with<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Result<Permutation, Error> {
        let mut perm = Permutation::identity(k)?;
        perm.order.shuffle(rng);
        Ok(perm)
    }

    /// Wrap an explicit ordering, checking it is a bijection of `[0, len)`.
    pub fn from_vec(order: Vec<ShingleIndex>) -> Result<Permutation, Error> {
        let mut seen = vec![false; order.len()];
        for &index in &order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(Error::InvalidParameter {
                        message: format!("index {} appears more than once in permutation", index),
                    })
                }
                None => {
                    return Err(Error::InvalidParameter {
                        message: format!(
                            "index {} is outside a permutation of length {}",
                            index,
                            order.len()
                        ),
                    })
                }
            }
        }
        Ok(Permutation { order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<ShingleIndex> {
        self.order
    }

    /// First index, in permuted order, whose bit is set in `vector`.
    ///
    /// `None` only when `vector` is all zeros.
    pub fn first_present(&self, vector: &PresenceVector) -> Result<Option<ShingleIndex>, Error> {
        if self.len() != vector.len() {
            return Err(Error::InvalidParameter {
                message: format!(
                    "permutation of length {} cannot be applied to a vector of length {}",
                    self.len(),
                    vector.len()
                ),
            });
        }
        Ok(self.order.iter().copied().find(|&i| vector.contains(i)))
    }
}

/// Source of permutations for [`minhash_with`].
pub trait Permuter {
    fn permutation(&mut self, k: usize) -> Result<Permutation, Error>;
}

/// Fresh entropy-seeded shuffle on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPermuter;

impl Permuter for RandomPermuter {
    fn permutation(&mut self, k: usize) -> Result<Permutation, Error> {
        generate_permutation(k)
    }
}

/// Reproducible sequence of permutations from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededPermuter {
    rng: StdRng,
}

impl SeededPermuter {
    pub fn new(seed: u64) -> SeededPermuter {
        SeededPermuter {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Permuter for SeededPermuter {
    fn permutation(&mut self, k: usize) -> Result<Permutation, Error> {
        Permutation::random_with(k, &mut self.rng)
    }
}

impl<F> Permuter for F
where
    F: FnMut(usize) -> Result<Permutation, Error>,
{
    fn permutation(&mut self, k: usize) -> Result<Permutation, Error> {
        self(k)
    }
}

/// Uniformly random permutation of `[0, 4^k)`, unseeded.
pub fn generate_permutation(k: usize) -> Result<Permutation, Error> {
    Permutation::random_with(k, &mut rand::thread_rng())
}

/// MinHash of `sequence` under a permutation drawn from `permuter`.
pub fn minhash_with<P: Permuter + ?Sized>(
    permuter: &mut P,
    sequence: &str,
    k: usize,
) -> Result<Option<ShingleIndex>, Error> {
    let vector = PresenceVector::build(sequence, k)?;
    let permutation = permuter.permutation(k)?;
    let value = permutation.first_present(&vector)?;

    debug!("minhash for k={}: {:?}", k, value);
    Ok(value)
}

/// MinHash of `sequence` under a fresh random permutation; errors are returned.
pub fn try_minhash(sequence: &str, k: usize) -> Result<Option<ShingleIndex>, Error> {
    minhash_with(&mut RandomPermuter, sequence, k)
}

/// MinHash of `sequence` under a fresh random permutation.
///
/// Validation failures are logged and yield `None` instead of an error.
pub fn minhash(sequence: &str, k: usize) -> Option<ShingleIndex> {
    match try_minhash(sequence, k) {
        Ok(value) => value,
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}
