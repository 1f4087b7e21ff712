use std::fmt;

use log::{error, info};
use serde::Serialize;

use crate::encodings::{decode, encode};
use crate::sketch::minhash::{minhash_with, Permuter, RandomPermuter, SeededPermuter};
use crate::sketch::shingle::extract;
use crate::Error;
use crate::ShingleIndex;

pub const DEMO_SEQUENCE: &str = "AAAAACGTACCATGCAGTACGATCAGTTGCA";
pub const DEMO_KSIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinHashReport {
    pub sequence: String,
    pub ksize: usize,
    pub minhash: Option<ShingleIndex>,
    pub error: Option<String>,
}

impl MinHashReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for MinHashReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(e) = &self.error {
            writeln!(f, "{}", e)?;
        }
        match self.minhash {
            Some(value) => write!(f, "The minhash value is {}", value),
            None => write!(f, "The minhash value is None"),
        }
    }
}

/// Compute the MinHash, folding any validation failure into the report.
pub fn minhash_report<P: Permuter + ?Sized>(
    permuter: &mut P,
    sequence: &str,
    k: usize,
) -> MinHashReport {
    let (minhash, error) = match minhash_with(permuter, sequence, k) {
        Ok(value) => (value, None),
        Err(e) => {
            error!("{}", e);
            (None, Some(e.to_string()))
        }
    };

    MinHashReport {
        sequence: sequence.into(),
        ksize: k,
        minhash,
        error,
    }
}

pub fn compute_minhash(sequence: &str, k: usize, seed: Option<u64>) -> MinHashReport {
    info!("computing minhash for k={} (seed: {:?})", k, seed);
    match seed {
        Some(seed) => minhash_report(&mut SeededPermuter::new(seed), sequence, k),
        None => minhash_report(&mut RandomPermuter, sequence, k),
    }
}

/// Distinct shingles in lexicographic order, one `SHINGLE\tINDEX` per line.
pub fn list_shingles(sequence: &str, k: usize) -> Result<String, Error> {
    let shingles = extract(sequence, k)?;

    let mut lines = Vec::with_capacity(shingles.len());
    for shingle in shingles.to_sorted_vec() {
        let index = encode(&shingle)?;
        lines.push(format!("{}\t{}", shingle, index));
    }

    Ok(lines.join("\n"))
}

pub fn encode_shingle(shingle: &str) -> Result<String, Error> {
    Ok(encode(shingle)?.to_string())
}

pub fn decode_index(index: &str, k: usize) -> Result<String, Error> {
    let index: ShingleIndex = index.trim().parse().map_err(|_| Error::InvalidParameter {
        message: format!("index ({}) should be a non-negative integer", index),
    })?;
    decode(index, k)
}
