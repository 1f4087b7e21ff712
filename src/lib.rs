//! # MinHash of DNA sequences over k-shingles.
//!
//! A sequence is cut into overlapping k-shingles, every shingle is encoded as
//! a base-4 integer (A=0, C=1, G=2, T=3), and the encoded shingles mark a
//! presence vector of dimension 4^k. The [MinHash][0] value is the first
//! index, under a uniformly random permutation of `[0, 4^k)`, whose bit is set.
//!
//! [0]: https://en.wikipedia.org/wiki/MinHash
//!
//! The vector is materialized in full, so memory grows as 4^k: k = 10 already
//! means a million-element vector and permutation.

pub mod errors;
pub use errors::MinHashError as Error;

pub mod cmd;

pub mod encodings;
pub mod sketch;

pub use encodings::{decode, encode};
pub use sketch::minhash::{generate_permutation, minhash, minhash_with, try_minhash};
pub use sketch::shingle::extract;
pub use sketch::vector::{build_vector, PresenceVector};

/// Base-4 encoding of a shingle, usable directly as a presence vector offset.
pub type ShingleIndex = usize;

/// Parse a k-mer size, treating anything but a positive integer as invalid.
pub fn parse_ksize(value: &str) -> Result<usize, Error> {
    match value.trim().parse::<usize>() {
        Ok(k) if k > 0 => Ok(k),
        _ => Err(Error::invalid_ksize(value)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use assert_matches::assert_matches;

    #[test]
    fn ksize_parsing() {
        assert_eq!(parse_ksize("4").unwrap(), 4);
        assert_eq!(parse_ksize(" 12 ").unwrap(), 12);
        for bad in &["0", "-3", "2.5", "four", ""] {
            assert_matches!(parse_ksize(bad), Err(Error::InvalidParameter { .. }));
        }
    }
}
