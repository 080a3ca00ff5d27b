//! Two-level rank/select directory over packed trit data.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::serialization::Serializable;
use crate::trit_vectors::data::{
    IndexBuild, TritSelectIndex, TritVector, TritVectorData, TritVectorIndex,
};
use crate::tryte::{self, NUM_TRYTE_VALUES, TRITS_PER_TRYTE};

/// The number of trits covered by one large block.
///
/// Chosen so that blocks align to byte boundaries and every small-block
/// delta provably fits in 16 bits: the largest delta counts the first
/// 13,090 trytes of a span, at most 65,450 occurrences.
pub const TRITS_PER_LB: usize = 65_500;

/// The number of trits covered by one small block.
pub const TRITS_PER_SB: usize = 50;

/// The number of trytes covered by one large block.
pub const TRYTES_PER_LB: usize = TRITS_PER_LB / TRITS_PER_TRYTE; // 13,100

/// The number of trytes covered by one small block.
pub const TRYTES_PER_SB: usize = TRITS_PER_SB / TRITS_PER_TRYTE; // 10

/// The number of small blocks sharing one large block.
pub const SBS_PER_LB: usize = TRITS_PER_LB / TRITS_PER_SB; // 1,310

/// Rank/select directory for the target trit `TARGET` over a trit vector.
///
/// Stores cumulative occurrence counts at two granularities: 64-bit counts
/// per [`TRITS_PER_LB`] trits and 16-bit deltas per [`TRITS_PER_SB`] trits,
/// about 4.1% of the packed data size. Rank resolves in constant time from
/// the two block entries plus at most nine full-tryte lookups and one
/// partial-tryte lookup; select bisects both block levels and finishes with
/// a bounded scan.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use tritvec::trit_vectors::{RsIndex, TritVectorBuilder, prelude::*};
///
/// let mut builder = TritVectorBuilder::new();
/// builder.extend_trits([0, 1, 2, 0, 1, 2, 2])?;
/// let tv = builder.freeze::<RsIndex<1>>();
///
/// assert_eq!(tv.num_target_trits(), 2);
/// assert_eq!(tv.rank(4), Some(1));
/// assert_eq!(tv.rank(7), None);
/// assert_eq!(tv.select(1), Some(4));
/// assert_eq!(tv.select(2), None);
/// # Ok(())
/// # }
/// ```
///
/// # References
///
/// - R. González, S. Grabowski, V. Mäkinen, and G. Navarro, "Practical
///   implementation of rank and select queries," In WEA, 2005.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsIndex<const TARGET: u8> {
    large_blocks: Vec<u64>,
    small_blocks: Vec<u16>,
    num_target_trits: usize,
}

/// Builder for [`RsIndex`].
#[derive(Debug, Clone, Default)]
pub struct RsIndexBuilder<const TARGET: u8> {
    large_blocks: Vec<u64>,
    small_blocks: Vec<u16>,
    num_target_trits: usize,
}

impl<const TARGET: u8> RsIndexBuilder<TARGET> {
    /// Creates a builder populated with the block counts for `data`.
    pub fn from_data(data: &TritVectorData) -> Self {
        let trytes = data.trytes();
        let mut large_blocks = Vec::with_capacity(trytes.len() / TRYTES_PER_LB + 1);
        let mut small_blocks = Vec::with_capacity(trytes.len() / TRYTES_PER_SB + 1);

        let mut rank = 0usize;
        for (i, &t) in trytes.iter().enumerate() {
            if i % TRYTES_PER_LB == 0 {
                large_blocks.push(rank as u64);
            }
            if i % TRYTES_PER_SB == 0 {
                let delta = rank - *large_blocks.last().unwrap() as usize;
                debug_assert!(delta <= u16::MAX as usize);
                small_blocks.push(delta as u16);
            }
            rank += RsIndex::<TARGET>::FULL[t as usize] as usize;
        }
        if TARGET == 0 {
            // the padding slots of the final tryte hold zeros but are not
            // part of the logical sequence
            rank -= data.num_padding_trits();
        }
        Self {
            large_blocks,
            small_blocks,
            num_target_trits: rank,
        }
    }

    /// Freezes and returns the built [`RsIndex`].
    pub fn build(mut self) -> RsIndex<TARGET> {
        self.large_blocks.shrink_to_fit();
        self.small_blocks.shrink_to_fit();
        RsIndex {
            large_blocks: self.large_blocks,
            small_blocks: self.small_blocks,
            num_target_trits: self.num_target_trits,
        }
    }
}

impl<const TARGET: u8> RsIndex<TARGET> {
    const FULL: [u8; NUM_TRYTE_VALUES] = tryte::full_counts(TARGET);
    const PREFIX: [[u8; NUM_TRYTE_VALUES]; TRITS_PER_TRYTE] = tryte::prefix_counts(TARGET);

    /// Creates the directory for `data`.
    pub fn new(data: &TritVectorData) -> Self {
        RsIndexBuilder::from_data(data).build()
    }

    /// Returns the number of occurrences of `TARGET` in the indexed vector.
    pub const fn num_target_trits(&self) -> usize {
        self.num_target_trits
    }
}

impl<const TARGET: u8> IndexBuild for RsIndex<TARGET> {
    fn build(data: &TritVectorData) -> Self {
        Self::new(data)
    }
}

impl<const TARGET: u8> TritVectorIndex for RsIndex<TARGET> {
    fn num_target_trits(&self, _data: &TritVectorData) -> usize {
        self.num_target_trits
    }

    fn rank(&self, data: &TritVectorData, pos: usize) -> Option<usize> {
        if data.len() <= pos {
            return None;
        }
        let mut r = self.large_blocks[pos / TRITS_PER_LB] as usize
            + self.small_blocks[pos / TRITS_PER_SB] as usize;

        let trytes = data.trytes();
        let tryte_pos = pos / TRITS_PER_TRYTE;
        let tryte_beg = tryte_pos / TRYTES_PER_SB * TRYTES_PER_SB;
        for &t in &trytes[tryte_beg..tryte_pos] {
            r += Self::FULL[t as usize] as usize;
        }

        let k = pos % TRITS_PER_TRYTE;
        if k != 0 {
            r += Self::PREFIX[k - 1][trytes[tryte_pos] as usize] as usize;
        }
        Some(r)
    }
}

impl<const TARGET: u8> TritSelectIndex for RsIndex<TARGET> {
    fn select(&self, data: &TritVectorData, k: usize) -> Option<usize> {
        if self.num_target_trits <= k {
            return None;
        }

        // (1) bisect the large blocks
        let mut left = 0;
        let mut right = self.large_blocks.len();
        while left + 1 < right {
            let center = (left + right) / 2;
            if (k as u64) < self.large_blocks[center] {
                right = center;
            } else {
                left = center;
            }
        }
        let mut n = k - self.large_blocks[left] as usize;

        // (2) bisect the small blocks belonging to that large block
        left *= SBS_PER_LB;
        right = (left + SBS_PER_LB).min(self.small_blocks.len());
        while left + 1 < right {
            let center = (left + right) / 2;
            if n < self.small_blocks[center] as usize {
                right = center;
            } else {
                left = center;
            }
        }
        n -= self.small_blocks[left] as usize;

        // (3) scan the at most ten trytes of the small block for the
        // (n+1)-th occurrence
        let trytes = data.trytes();
        let mut i = left * TRYTES_PER_SB;
        n += 1;
        loop {
            let cnt = Self::FULL[trytes[i] as usize] as usize;
            if n <= cnt {
                break;
            }
            n -= cnt;
            i += 1;
        }

        let t = trytes[i] as usize;
        for slot in 0..TRITS_PER_TRYTE - 1 {
            if Self::PREFIX[slot][t] as usize == n {
                return Some(i * TRITS_PER_TRYTE + slot);
            }
        }
        debug_assert_eq!(Self::PREFIX[TRITS_PER_TRYTE - 1][t] as usize, n);
        Some(i * TRITS_PER_TRYTE + TRITS_PER_TRYTE - 1)
    }
}

impl<const TARGET: u8> Serializable for RsIndex<TARGET> {
    /// Layout: `u64` large-block count, the `u64` large blocks, `u64`
    /// small-block count, the `u16` small blocks, then the `u64` total.
    fn save_into<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_u64::<LittleEndian>(self.large_blocks.len() as u64)?;
        for &lb in &self.large_blocks {
            writer.write_u64::<LittleEndian>(lb)?;
        }
        writer.write_u64::<LittleEndian>(self.small_blocks.len() as u64)?;
        for &sb in &self.small_blocks {
            writer.write_u16::<LittleEndian>(sb)?;
        }
        writer.write_u64::<LittleEndian>(self.num_target_trits as u64)?;
        Ok(())
    }

    /// Restores the directory, validating block-array consistency.
    fn load_from<R: Read>(mut reader: R) -> Result<Self> {
        let lb_len = reader.read_u64::<LittleEndian>()? as usize;
        let mut large_blocks = vec![0u64; lb_len];
        reader.read_u64_into::<LittleEndian>(&mut large_blocks)?;
        let sb_len = reader.read_u64::<LittleEndian>()? as usize;
        let mut small_blocks = vec![0u16; sb_len];
        reader.read_u16_into::<LittleEndian>(&mut small_blocks)?;
        let num_target_trits = reader.read_u64::<LittleEndian>()? as usize;

        if lb_len != sb_len.div_ceil(SBS_PER_LB) {
            return Err(Error::invalid_metadata(format!(
                "expected {} large blocks for {sb_len} small blocks, but got {lb_len}.",
                sb_len.div_ceil(SBS_PER_LB)
            )));
        }
        if large_blocks.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::invalid_metadata(
                "large block counts must be non-decreasing.",
            ));
        }
        Ok(Self {
            large_blocks,
            small_blocks,
            num_target_trits,
        })
    }

    fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<u64>() * (3 + self.large_blocks.len())
            + std::mem::size_of::<u16>() * self.small_blocks.len()
    }
}

/// Directory bundling the three per-target indexes over one vector.
///
/// Wraps [`RsIndex<0>`], [`RsIndex<1>`], and [`RsIndex<2>`] so that any
/// symbol can be queried at run time, the usual shape for consumers walking
/// ternary structures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsFullIndex {
    t0: RsIndex<0>,
    t1: RsIndex<1>,
    t2: RsIndex<2>,
}

impl RsFullIndex {
    /// Creates the three directories for `data`.
    pub fn new(data: &TritVectorData) -> Self {
        Self {
            t0: RsIndex::new(data),
            t1: RsIndex::new(data),
            t2: RsIndex::new(data),
        }
    }

    /// Returns the number of occurrences of `trit`, or [`None`] if `trit`
    /// is not in `0..=2`.
    pub fn num_target_trits_of(&self, trit: u8) -> Option<usize> {
        match trit {
            0 => Some(self.t0.num_target_trits()),
            1 => Some(self.t1.num_target_trits()),
            2 => Some(self.t2.num_target_trits()),
            _ => None,
        }
    }

    /// Rank query for `trit`; [`None`] if `trit` or `pos` is out of range.
    pub fn rank_of(&self, data: &TritVectorData, trit: u8, pos: usize) -> Option<usize> {
        match trit {
            0 => self.t0.rank(data, pos),
            1 => self.t1.rank(data, pos),
            2 => self.t2.rank(data, pos),
            _ => None,
        }
    }

    /// Select query for `trit`; [`None`] if `trit` or `k` is out of range.
    pub fn select_of(&self, data: &TritVectorData, trit: u8, k: usize) -> Option<usize> {
        match trit {
            0 => self.t0.select(data, k),
            1 => self.t1.select(data, k),
            2 => self.t2.select(data, k),
            _ => None,
        }
    }
}

impl IndexBuild for RsFullIndex {
    fn build(data: &TritVectorData) -> Self {
        Self::new(data)
    }
}

impl Serializable for RsFullIndex {
    /// Layout: the three per-target directories in symbol order.
    fn save_into<W: Write>(&self, mut writer: W) -> Result<()> {
        self.t0.save_into(&mut writer)?;
        self.t1.save_into(&mut writer)?;
        self.t2.save_into(&mut writer)?;
        Ok(())
    }

    fn load_from<R: Read>(mut reader: R) -> Result<Self> {
        let t0 = RsIndex::load_from(&mut reader)?;
        let t1 = RsIndex::load_from(&mut reader)?;
        let t2 = RsIndex::load_from(&mut reader)?;
        Ok(Self { t0, t1, t2 })
    }

    fn size_in_bytes(&self) -> usize {
        self.t0.size_in_bytes() + self.t1.size_in_bytes() + self.t2.size_in_bytes()
    }
}

impl TritVector<RsFullIndex> {
    /// Builds the fully indexed vector from an iterator of trits.
    ///
    /// # Errors
    ///
    /// Returns an error if any item is not in `0..=2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use tritvec::trit_vectors::{RsFullIndex, TritVector};
    ///
    /// let tv = TritVector::<RsFullIndex>::from_trits([0, 1, 2, 0, 1])?;
    ///
    /// assert_eq!(tv.num_target_trits_of(0), Some(2));
    /// assert_eq!(tv.rank_of(2, 3), Some(1));
    /// assert_eq!(tv.select_of(1, 1), Some(4));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_trits<I>(trits: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let data = TritVectorData::from_trits(trits)?;
        let index = RsFullIndex::new(&data);
        Ok(Self::new(data, index))
    }

    /// Returns the number of occurrences of `trit`, or [`None`] if `trit`
    /// is not in `0..=2`.
    pub fn num_target_trits_of(&self, trit: u8) -> Option<usize> {
        self.index.num_target_trits_of(trit)
    }

    /// Rank query for `trit`; [`None`] if `trit` or `pos` is out of range.
    pub fn rank_of(&self, trit: u8, pos: usize) -> Option<usize> {
        self.index.rank_of(&self.data, trit, pos)
    }

    /// Select query for `trit`; [`None`] if `trit` or `k` is out of range.
    pub fn select_of(&self, trit: u8, k: usize) -> Option<usize> {
        self.index.select_of(&self.data, trit, k)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    use super::*;
    use crate::trit_vectors::data::NoIndex;
    use crate::trit_vectors::prelude::*;

    fn repeating_pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 3) as u8).collect()
    }

    fn random_trits(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(0..3u8)).collect()
    }

    fn build<const TARGET: u8>(trits: &[u8]) -> TritVector<RsIndex<TARGET>> {
        let mut builder = crate::trit_vectors::TritVectorBuilder::new();
        builder.extend_trits(trits.iter().copied()).unwrap();
        builder.freeze::<RsIndex<TARGET>>()
    }

    fn check_against_linear<const TARGET: u8>(trits: &[u8]) {
        let tv = build::<TARGET>(trits);
        let reference = NoIndex::<TARGET>;

        assert_eq!(
            tv.num_target_trits(),
            reference.num_target_trits(&tv.data),
            "count mismatch for len {}",
            trits.len()
        );
        for pos in 0..trits.len() {
            assert_eq!(
                tv.rank(pos),
                reference.rank(&tv.data, pos),
                "rank({pos}) mismatch for len {}",
                trits.len()
            );
        }
        assert_eq!(tv.rank(trits.len()), None);
        for k in 0..tv.num_target_trits() {
            assert_eq!(
                tv.select(k),
                reference.select(&tv.data, k),
                "select({k}) mismatch for len {}",
                trits.len()
            );
        }
        assert_eq!(tv.select(tv.num_target_trits()), None);
    }

    #[test]
    fn empty_vector() {
        let tv = build::<1>(&[]);
        assert_eq!(tv.num_target_trits(), 0);
        assert_eq!(tv.rank(0), None);
        assert_eq!(tv.select(0), None);
    }

    #[test]
    fn single_trit() {
        for t in 0..3u8 {
            let tv0 = build::<0>(&[t]);
            assert_eq!(tv0.num_target_trits(), usize::from(t == 0));
            let tv1 = build::<1>(&[t]);
            assert_eq!(tv1.num_target_trits(), usize::from(t == 1));
            let tv2 = build::<2>(&[t]);
            assert_eq!(tv2.num_target_trits(), usize::from(t == 2));
        }
    }

    #[test]
    fn repeating_pattern_of_fifty() {
        // "012" repeated over 50 positions; the ones sit at 1, 4, ..., 49.
        let trits = repeating_pattern(50);
        let tv = build::<1>(&trits);

        assert_eq!(tv.num_target_trits(), 17);
        assert_eq!(tv.rank(0), Some(0));
        assert_eq!(tv.rank(1), Some(0));
        assert_eq!(tv.rank(2), Some(1));
        assert_eq!(tv.rank(5), Some(1));
        assert_eq!(tv.rank(25), Some(8));
        assert_eq!(tv.rank(50), None);
        assert_eq!(tv.select(0), Some(1));
        assert_eq!(tv.select(16), Some(49));
        assert_eq!(tv.select(17), None);
    }

    #[test]
    fn all_zeros() {
        let tv = build::<0>(&[0; 5]);
        for i in 0..5 {
            assert_eq!(tv.rank(i), Some(i));
            assert_eq!(tv.select(i), Some(i));
        }
        assert_eq!(tv.num_target_trits(), 5);

        let tv = build::<1>(&[0; 5]);
        assert_eq!(tv.num_target_trits(), 0);
        assert_eq!(tv.select(0), None);
    }

    #[test]
    fn single_packed_tryte() {
        // 4 = 1 + 1*3 packs (1, 1, 0, 0, 0).
        let tv = build::<1>(&[1, 1, 0, 0, 0]);
        assert_eq!(tv.data.trytes(), &[4]);
        assert_eq!(tv.rank(0), Some(0));
        assert_eq!(tv.rank(1), Some(1));
        assert_eq!(tv.rank(2), Some(2));
        assert_eq!(tv.rank(3), Some(2));
        assert_eq!(tv.rank(4), Some(2));
        assert_eq!(tv.select(0), Some(0));
        assert_eq!(tv.select(1), Some(1));
    }

    #[test]
    fn small_lengths_against_linear() {
        for len in [1, 2, 4, 5, 6, 9, 10, 11, 49, 50, 51, 55, 100] {
            let trits = random_trits(len, len as u64);
            check_against_linear::<0>(&trits);
            check_against_linear::<1>(&trits);
            check_against_linear::<2>(&trits);
        }
    }

    #[test]
    fn small_block_boundary() {
        // One small block plus five trits; queries must stitch across the
        // 50-trit seam.
        let trits = random_trits(55, 7);
        let tv = build::<2>(&trits);
        let expect = |pos: usize| trits[..pos].iter().filter(|&&t| t == 2).count();
        for pos in [49, 50, 51, 54] {
            assert_eq!(tv.rank(pos), Some(expect(pos)));
        }
        let crossing = expect(50);
        if crossing < tv.num_target_trits() {
            let sel = tv.select(crossing).unwrap();
            assert!(sel >= 50);
            assert_eq!(trits[sel], 2);
        }
    }

    #[test]
    fn large_block_boundary() {
        // One full large block plus one extra trit.
        let mut trits = repeating_pattern(TRITS_PER_LB);
        trits.push(1);
        let tv = build::<1>(&trits);

        assert_eq!(tv.index.large_blocks.len(), 2);
        let lb1 = tv.index.large_blocks[1] as usize;
        assert_eq!(tv.rank(TRITS_PER_LB), Some(lb1));
        assert_eq!(tv.select(lb1), Some(TRITS_PER_LB));
        assert_eq!(tv.num_target_trits(), lb1 + 1);
    }

    #[test]
    fn block_entries_agree_with_rank() {
        let trits = random_trits(2 * TRITS_PER_LB + 137, 42);
        let tv = build::<1>(&trits);
        for (i, &lb) in tv.index.large_blocks.iter().enumerate().skip(1) {
            assert_eq!(tv.rank(i * TRITS_PER_LB), Some(lb as usize));
        }
        for (i, &sb) in tv.index.small_blocks.iter().enumerate().skip(1) {
            let lb = tv.index.large_blocks[i / SBS_PER_LB] as usize;
            assert_eq!(tv.rank(i * TRITS_PER_SB), Some(lb + sb as usize));
        }
    }

    #[test]
    fn randomized_against_linear() {
        let trits = random_trits(10 * TRITS_PER_SB, 99);
        check_against_linear::<0>(&trits);
        check_against_linear::<1>(&trits);
        check_against_linear::<2>(&trits);
    }

    #[test]
    fn rank_select_inverse_over_large_input() {
        let trits = random_trits(TRITS_PER_LB + 1234, 5);
        let tv = build::<2>(&trits);
        for k in (0..tv.num_target_trits()).step_by(997) {
            let pos = tv.select(k).unwrap();
            assert_eq!(trits[pos], 2);
            assert_eq!(tv.rank(pos), Some(k));
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let trits = random_trits(12_345, 3);
        let tv = build::<1>(&trits);

        let mut buf = Vec::new();
        tv.index.save_into(&mut buf).unwrap();
        assert_eq!(buf.len(), tv.index.size_in_bytes());

        let loaded = RsIndex::<1>::load_from(&buf[..]).unwrap();
        assert_eq!(tv.index, loaded);

        // re-attach the loaded directory to its vector
        let rebound = TritVector::new(tv.data.clone(), loaded);
        for pos in (0..trits.len()).step_by(61) {
            assert_eq!(rebound.rank(pos), tv.rank(pos));
        }
    }

    #[test]
    fn load_rejects_inconsistent_blocks() {
        // Two large blocks over a single small-block span.
        let mut buf = Vec::new();
        buf.extend_from_slice(&2u64.to_le_bytes());
        buf.extend_from_slice(&0u64.to_le_bytes());
        buf.extend_from_slice(&0u64.to_le_bytes());
        buf.extend_from_slice(&1u64.to_le_bytes());
        buf.extend_from_slice(&0u16.to_le_bytes());
        buf.extend_from_slice(&0u64.to_le_bytes());
        let err = RsIndex::<1>::load_from(&buf[..]).unwrap_err();
        assert!(matches!(err, Error::InvalidMetadata(_)));
    }

    #[test]
    fn load_rejects_decreasing_large_blocks() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&2u64.to_le_bytes());
        buf.extend_from_slice(&5u64.to_le_bytes());
        buf.extend_from_slice(&3u64.to_le_bytes());
        buf.extend_from_slice(&(SBS_PER_LB as u64 + 1).to_le_bytes());
        for _ in 0..=SBS_PER_LB {
            buf.extend_from_slice(&0u16.to_le_bytes());
        }
        buf.extend_from_slice(&5u64.to_le_bytes());
        let err = RsIndex::<1>::load_from(&buf[..]).unwrap_err();
        assert!(matches!(err, Error::InvalidMetadata(_)));
    }

    #[test]
    fn full_index_covers_all_targets() {
        let trits = random_trits(777, 21);
        let tv = TritVector::<RsFullIndex>::from_trits(trits.iter().copied()).unwrap();

        let total: usize = (0..3u8)
            .map(|t| tv.num_target_trits_of(t).unwrap())
            .sum();
        assert_eq!(total, trits.len());

        for t in 0..3u8 {
            let expect = trits.iter().filter(|&&x| x == t).count();
            assert_eq!(tv.num_target_trits_of(t), Some(expect));
            for pos in (0..trits.len()).step_by(53) {
                let naive = trits[..pos].iter().filter(|&&x| x == t).count();
                assert_eq!(tv.rank_of(t, pos), Some(naive));
            }
        }
        assert_eq!(tv.rank_of(3, 0), None);
        assert_eq!(tv.select_of(3, 0), None);
    }

    #[test]
    fn full_index_serialization_roundtrip() {
        let tv = TritVector::<RsFullIndex>::from_trits(random_trits(321, 13).into_iter()).unwrap();
        let mut buf = Vec::new();
        tv.save_into(&mut buf).unwrap();
        let other = TritVector::<RsFullIndex>::load_from(&buf[..]).unwrap();
        assert_eq!(tv, other);
    }
}
