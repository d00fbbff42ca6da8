//! Gray-code sequencing.
//!
//! A Gray code orders binary numbers so that consecutive values, including
//! the wraparound from last to first, differ in exactly one bit. Karnaugh
//! axes are sequenced this way so that grid neighbours correspond to
//! truth-table rows differing in exactly one variable.

/// Converts a binary index to its reflected Gray code.
///
/// ```text
/// g = k xor (k >> 1)
/// ```
pub fn to_gray(index: usize) -> usize {
    index ^ (index >> 1)
}

/// The Gray-code sequence over `bits` bits: `2^bits` values, each adjacent
/// pair (and the wraparound pair) differing in exactly one bit.
pub fn sequence(bits: usize) -> Vec<usize> {
    (0..1usize << bits).map(to_gray).collect()
}

/// Bit-string axis labels in Gray order, e.g. `["00", "01", "11", "10"]` for
/// two bits.
pub fn labels(bits: usize) -> Vec<String> {
    sequence(bits)
        .into_iter()
        .map(|value| {
            (0..bits)
                .rev()
                .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequences() {
        assert_eq!(sequence(1), vec![0, 1]);
        assert_eq!(sequence(2), vec![0, 1, 3, 2]);
        assert_eq!(sequence(3), vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn test_adjacency_including_wraparound() {
        for bits in 1..=3 {
            let seq = sequence(bits);
            for i in 0..seq.len() {
                let a = seq[i];
                let b = seq[(i + 1) % seq.len()];
                assert_eq!(
                    (a ^ b).count_ones(),
                    1,
                    "bits={}: {} and {} differ in more than one bit",
                    bits,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_sequence_is_a_permutation() {
        for bits in 1..=4 {
            let mut seq = sequence(bits);
            seq.sort_unstable();
            let expected: Vec<usize> = (0..1usize << bits).collect();
            assert_eq!(seq, expected);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(labels(1), vec!["0", "1"]);
        assert_eq!(labels(2), vec!["00", "01", "11", "10"]);
    }
}
