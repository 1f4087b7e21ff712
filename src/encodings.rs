use crate::Error;
use crate::ShingleIndex;

/// Symbols in digit order: A=0, C=1, G=2, T=3.
pub const NUCLEOTIDES: [u8; 4] = *b"ACGT";

const INVALID: u8 = 0xff;

const DIGITS: [u8; 256] = {
    let mut lookup = [INVALID; 256];
    lookup[b'A' as usize] = 0;
    lookup[b'C' as usize] = 1;
    lookup[b'G' as usize] = 2;
    lookup[b'T' as usize] = 3;
    lookup[b'a' as usize] = 0;
    lookup[b'c' as usize] = 1;
    lookup[b'g' as usize] = 2;
    lookup[b't' as usize] = 3;
    lookup
};

/// Base-4 digit of a nucleotide, case-insensitive.
#[inline]
pub fn digit(nt: char) -> Option<u8> {
    if !nt.is_ascii() {
        return None;
    }
    match DIGITS[nt as usize] {
        INVALID => None,
        d => Some(d),
    }
}

#[inline]
pub fn is_nucleotide(nt: char) -> bool {
    digit(nt).is_some()
}

/// Number of distinct k-shingles over the 4-symbol alphabet, 4^k.
pub fn universe_size(k: usize) -> Result<usize, Error> {
    if k == 0 {
        return Err(Error::invalid_ksize(k));
    }
    u32::try_from(k)
        .ok()
        .and_then(|exp| 4usize.checked_pow(exp))
        .ok_or_else(|| Error::InvalidParameter {
            message: format!("4^{} does not fit in a shingle index", k),
        })
}

/// Encode a shingle as a base-4 numeral, leftmost symbol most significant.
///
/// Distinct shingles of the same length always map to distinct indices in
/// `[0, 4^len)`, so the result can be used directly as an offset into a
/// presence vector of that dimension.
pub fn encode(shingle: &str) -> Result<ShingleIndex, Error> {
    if shingle.is_empty() {
        return Err(Error::InvalidInput {
            message: "an empty shingle cannot be encoded".into(),
        });
    }

    let mut index: ShingleIndex = 0;
    for (pos, nt) in shingle.chars().enumerate() {
        let d = digit(nt).ok_or(Error::InvalidAlphabet {
            character: nt,
            position: pos + 1,
        })?;
        index = index
            .checked_mul(4)
            .and_then(|i| i.checked_add(d as ShingleIndex))
            .ok_or_else(|| Error::InvalidParameter {
                message: format!("shingle of length {} overflows the index type", pos + 1),
            })?;
    }

    Ok(index)
}

/// Inverse of [`encode`] for shingles of length `k`, zero-padded with `A`.
pub fn decode(index: ShingleIndex, k: usize) -> Result<String, Error> {
    let size = universe_size(k)?;
    if index >= size {
        return Err(Error::InvalidParameter {
            message: format!("index {} is outside [0, 4^{})", index, k),
        });
    }

    let mut shingle = vec![NUCLEOTIDES[0]; k];
    let mut rest = index;
    for slot in shingle.iter_mut().rev() {
        *slot = NUCLEOTIDES[rest % 4];
        rest /= 4;
    }

    Ok(shingle.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    use assert_matches::assert_matches;

    #[test]
    fn encode_acgt() {
        assert_eq!(encode("ACGT").unwrap(), 27);
        assert_eq!(encode("acgt").unwrap(), 27);
        assert_eq!(encode("A").unwrap(), 0);
        assert_eq!(encode("TTTT").unwrap(), 255);
    }

    #[test]
    fn leftmost_is_most_significant() {
        assert_eq!(encode("CA").unwrap(), 4);
        assert_eq!(encode("AC").unwrap(), 1);
    }

    #[test]
    fn encode_rejects_bad_symbols() {
        assert_matches!(
            encode("ACNT"),
            Err(Error::InvalidAlphabet {
                character: 'N',
                position: 3
            })
        );
        assert_matches!(encode("ACé"), Err(Error::InvalidAlphabet { character: 'é', .. }));
        assert_matches!(encode(""), Err(Error::InvalidInput { .. }));
    }

    #[test]
    fn encode_overflow() {
        let long = "T".repeat(64);
        assert_matches!(encode(&long), Err(Error::InvalidParameter { .. }));
    }

    #[test]
    fn decode_pads_with_a() {
        assert_eq!(decode(27, 4).unwrap(), "ACGT");
        assert_eq!(decode(0, 3).unwrap(), "AAA");
        assert_eq!(decode(3, 3).unwrap(), "AAT");
        assert_matches!(decode(64, 3), Err(Error::InvalidParameter { .. }));
        assert_matches!(decode(0, 0), Err(Error::InvalidParameter { .. }));
    }

    #[test]
    fn universe() {
        assert_eq!(universe_size(1).unwrap(), 4);
        assert_eq!(universe_size(4).unwrap(), 256);
        assert_eq!(universe_size(10).unwrap(), 1_048_576);
        assert_matches!(universe_size(0), Err(Error::InvalidParameter { .. }));
        assert_matches!(universe_size(200), Err(Error::InvalidParameter { .. }));
    }

    #[test]
    fn digits() {
        assert_eq!(digit('g'), Some(2));
        assert_eq!(digit('N'), None);
        assert!(is_nucleotide('t'));
        assert!(!is_nucleotide('U'));
    }
}
