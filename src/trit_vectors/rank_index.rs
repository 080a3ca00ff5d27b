//! Lean rank-only directory over packed trit data.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::serialization::Serializable;
use crate::trit_vectors::data::{IndexBuild, TritVectorData, TritVectorIndex};
use crate::trit_vectors::rs_index::{
    SBS_PER_LB, TRITS_PER_LB, TRITS_PER_SB, TRYTES_PER_LB, TRYTES_PER_SB,
};
use crate::tryte::{self, NUM_TRYTE_VALUES, TRITS_PER_TRYTE};

/// Rank-only directory for the target trit `TARGET` over a trit vector.
///
/// The slim sibling of [`RsIndex`](crate::trit_vectors::RsIndex) for
/// consumers that never select: large blocks shrink to 32 bits, no total is
/// stored, and the final fractional byte is resolved by four constant-folded
/// slot comparisons instead of the partial-count table. The rank contract is
/// identical. Sequences are limited to $`2^{32}`$ trits.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use tritvec::trit_vectors::{RankIndex, TritVectorBuilder, prelude::*};
///
/// let mut builder = TritVectorBuilder::new();
/// builder.extend_trits([0, 1, 2, 0, 1, 2, 2])?;
/// let tv = builder.freeze::<RankIndex<0>>();
///
/// assert_eq!(tv.rank(4), Some(2));
/// assert_eq!(tv.rank(7), None);
/// assert_eq!(tv.num_target_trits(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankIndex<const TARGET: u8> {
    large_blocks: Vec<u32>,
    small_blocks: Vec<u16>,
}

impl<const TARGET: u8> RankIndex<TARGET> {
    const FULL: [u8; NUM_TRYTE_VALUES] = tryte::full_counts(TARGET);

    /// Creates the directory for `data`.
    pub fn new(data: &TritVectorData) -> Self {
        let trytes = data.trytes();
        let mut large_blocks = Vec::with_capacity(trytes.len() / TRYTES_PER_LB + 1);
        let mut small_blocks = Vec::with_capacity(trytes.len() / TRYTES_PER_SB + 1);

        let mut rank = 0usize;
        for (i, &t) in trytes.iter().enumerate() {
            if i % TRYTES_PER_LB == 0 {
                debug_assert!(rank <= u32::MAX as usize);
                large_blocks.push(rank as u32);
            }
            if i % TRYTES_PER_SB == 0 {
                let delta = rank - *large_blocks.last().unwrap() as usize;
                debug_assert!(delta <= u16::MAX as usize);
                small_blocks.push(delta as u16);
            }
            rank += Self::FULL[t as usize] as usize;
        }
        Self {
            large_blocks,
            small_blocks,
        }
    }
}

impl<const TARGET: u8> IndexBuild for RankIndex<TARGET> {
    fn build(data: &TritVectorData) -> Self {
        Self::new(data)
    }
}

impl<const TARGET: u8> TritVectorIndex for RankIndex<TARGET> {
    /// Recomputed on demand from the final block entries and a bounded tail
    /// scan; this directory stores no total.
    fn num_target_trits(&self, data: &TritVectorData) -> usize {
        let trytes = data.trytes();
        if trytes.is_empty() {
            return 0;
        }
        let last_sb = (trytes.len() - 1) / TRYTES_PER_SB;
        let mut r = self.large_blocks[last_sb / SBS_PER_LB] as usize
            + self.small_blocks[last_sb] as usize;
        for &t in &trytes[last_sb * TRYTES_PER_SB..] {
            r += Self::FULL[t as usize] as usize;
        }
        if TARGET == 0 {
            r -= data.num_padding_trits();
        }
        r
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

        let tryte = trytes[tryte_pos];
        let k = pos % TRITS_PER_TRYTE;
        if k > 0 && tryte % 3 == TARGET {
            r += 1;
        }
        if k > 1 && tryte / 3 % 3 == TARGET {
            r += 1;
        }
        if k > 2 && tryte / 9 % 3 == TARGET {
            r += 1;
        }
        if k > 3 && tryte / 27 % 3 == TARGET {
            r += 1;
        }
        Some(r)
    }
}

impl<const TARGET: u8> Serializable for RankIndex<TARGET> {
    /// Layout: `u64` large-block count, the `u32` large blocks, `u64`
    /// small-block count, then the `u16` small blocks.
    fn save_into<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_u64::<LittleEndian>(self.large_blocks.len() as u64)?;
        for &lb in &self.large_blocks {
            writer.write_u32::<LittleEndian>(lb)?;
        }
        writer.write_u64::<LittleEndian>(self.small_blocks.len() as u64)?;
        for &sb in &self.small_blocks {
            writer.write_u16::<LittleEndian>(sb)?;
        }
        Ok(())
    }

    /// Restores the directory, validating block-array consistency.
    fn load_from<R: Read>(mut reader: R) -> Result<Self> {
        let lb_len = reader.read_u64::<LittleEndian>()? as usize;
        let mut large_blocks = vec![0u32; lb_len];
        reader.read_u32_into::<LittleEndian>(&mut large_blocks)?;
        let sb_len = reader.read_u64::<LittleEndian>()? as usize;
        let mut small_blocks = vec![0u16; sb_len];
        reader.read_u16_into::<LittleEndian>(&mut small_blocks)?;

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
        })
    }

    fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<u64>() * 2
            + std::mem::size_of::<u32>() * self.large_blocks.len()
            + std::mem::size_of::<u16>() * self.small_blocks.len()
    }
}
