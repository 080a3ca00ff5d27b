//! Tryte-level packing and counting primitives.
//!
//! A *tryte* is a byte packing up to five trits $`t_0 \dots t_4`$ in base 3,
//!
//! ```text
//! byte = t0 + 3*t1 + 9*t2 + 27*t3 + 81*t4
//! ```
//!
//! so well-formed tryte values lie in `0..243`. Slot 0 is the least
//! significant. The count tables defined here let rank and select queries
//! resolve whole trytes and fractional tryte suffixes with single table
//! lookups instead of per-trit loops.

/// The number of trits packed in one tryte.
pub const TRITS_PER_TRYTE: usize = 5;

/// The number of well-formed tryte values, $`3^5`$.
pub const NUM_TRYTE_VALUES: usize = 243;

/// Powers of three addressing the five slots of a tryte.
pub const POW3: [u8; TRITS_PER_TRYTE] = [1, 3, 9, 27, 81];

/// Extracts the trit stored in slot `k` of `tryte`.
#[inline(always)]
pub const fn trit_at(tryte: u8, k: usize) -> u8 {
    (tryte / POW3[k]) % 3
}

/// Builds the partial-count table for `target`.
///
/// Entry `[k][v]` is the number of occurrences of `target` among the first
/// `k + 1` slots of the packed byte `v`; values lie in `0..=5`. The table is
/// evaluated at compile time, once per target.
pub const fn prefix_counts(target: u8) -> [[u8; NUM_TRYTE_VALUES]; TRITS_PER_TRYTE] {
    assert!(target < 3, "target trit must be in 0..=2");
    let mut lut = [[0u8; NUM_TRYTE_VALUES]; TRITS_PER_TRYTE];
    let mut v = 0;
    while v < NUM_TRYTE_VALUES {
        let mut count = 0u8;
        let mut k = 0;
        while k < TRITS_PER_TRYTE {
            if trit_at(v as u8, k) == target {
                count += 1;
            }
            lut[k][v] = count;
            k += 1;
        }
        v += 1;
    }
    lut
}

/// Builds the full-tryte count table for `target`.
///
/// Entry `[v]` is the number of occurrences of `target` among all five slots
/// of the packed byte `v` — the last row of [`prefix_counts`].
pub const fn full_counts(target: u8) -> [u8; NUM_TRYTE_VALUES] {
    let lut = prefix_counts(target);
    lut[TRITS_PER_TRYTE - 1]
}
