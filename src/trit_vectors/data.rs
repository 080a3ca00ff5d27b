//! Raw packed storage and generic wrapper for trit vectors.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::serialization::Serializable;
use crate::trit_vectors::{Access, NumTrits, Rank, Select};
use crate::tryte::{self, NUM_TRYTE_VALUES, POW3, TRITS_PER_TRYTE};

/// Builder that packs trits five to a byte into a [`TritVectorData`].
///
/// Trits are appended one at a time with [`Self::push_trit`]; complete bytes
/// are emitted as slots fill, and [`Self::into_data`] (or [`Self::freeze`])
/// flushes the final partial byte with its unused slots left at zero.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use tritvec::trit_vectors::TritVectorBuilder;
///
/// let mut builder = TritVectorBuilder::new();
/// builder.extend_trits([0, 1, 2, 0, 1])?;
/// let data = builder.into_data();
///
/// assert_eq!(data.len(), 5);
/// assert_eq!(data.trytes(), &[102]); // 0 + 1*3 + 2*9 + 0*27 + 1*81
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TritVectorBuilder {
    trytes: Vec<u8>,
    cur: u8,
    slot: usize,
    len: usize,
}

impl TritVectorBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder reserving space for `capa` trits.
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            trytes: Vec::with_capacity(capa.div_ceil(TRITS_PER_TRYTE)),
            ..Self::default()
        }
    }

    /// Appends a single trit.
    ///
    /// # Errors
    ///
    /// Returns an error if `trit` is not in `0..=2`.
    pub fn push_trit(&mut self, trit: u8) -> Result<()> {
        if trit > 2 {
            return Err(Error::invalid_argument(format!(
                "trit must be in 0..=2, but got {trit}."
            )));
        }
        self.cur += trit * POW3[self.slot];
        self.slot += 1;
        self.len += 1;
        if self.slot == TRITS_PER_TRYTE {
            self.trytes.push(self.cur);
            self.cur = 0;
            self.slot = 0;
        }
        Ok(())
    }

    /// Appends trits from an iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if any item is not in `0..=2`.
    pub fn extend_trits<I>(&mut self, trits: I) -> Result<()>
    where
        I: IntoIterator<Item = u8>,
    {
        for t in trits {
            self.push_trit(t)?;
        }
        Ok(())
    }

    /// Returns the number of trits pushed so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if no trits have been pushed.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Finalizes the builder into raw packed data, flushing the partial byte.
    pub fn into_data(mut self) -> TritVectorData {
        if self.slot != 0 {
            self.trytes.push(self.cur);
        }
        self.trytes.shrink_to_fit();
        TritVectorData {
            trytes: self.trytes,
            len: self.len,
        }
    }

    /// Finalizes the builder and constructs the index `I` over the data.
    pub fn freeze<I: IndexBuild>(self) -> TritVector<I> {
        let data = self.into_data();
        let index = I::build(&data);
        TritVector::new(data, index)
    }
}

/// Immutable packed trit data without auxiliary indexes.
///
/// Stores $`n`$ trits in $`\lceil n/5 \rceil`$ bytes; each byte holds five
/// trits in base 3 and therefore lies in `0..243`. Unused slots of the final
/// byte are zero. Both invariants are enforced by [`TritVectorBuilder`] and
/// re-checked when loading serialized data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TritVectorData {
    trytes: Vec<u8>,
    len: usize,
}

impl TritVectorData {
    /// Creates packed data from an iterator of trits.
    ///
    /// # Errors
    ///
    /// Returns an error if any item is not in `0..=2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use tritvec::trit_vectors::{TritVectorData, prelude::*};
    ///
    /// let data = TritVectorData::from_trits([2, 0, 1])?;
    /// assert_eq!(data.len(), 3);
    /// assert_eq!(data.access(0), Some(2));
    /// assert_eq!(data.access(3), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_trits<I>(trits: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut builder = TritVectorBuilder::new();
        builder.extend_trits(trits)?;
        Ok(builder.into_data())
    }

    /// Returns the number of trits stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the vector is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the raw packed bytes.
    pub fn trytes(&self) -> &[u8] {
        &self.trytes
    }

    /// Returns the number of packed bytes stored.
    pub fn num_trytes(&self) -> usize {
        self.trytes.len()
    }

    /// Returns the number of unused trailing slots in the final byte.
    ///
    /// These slots always hold zero; per-target counts over whole bytes must
    /// discount them when the target is 0.
    pub fn num_padding_trits(&self) -> usize {
        self.trytes.len() * TRITS_PER_TRYTE - self.len
    }
}

impl Access for TritVectorData {
    fn access(&self, pos: usize) -> Option<u8> {
        if pos < self.len {
            let t = self.trytes[pos / TRITS_PER_TRYTE];
            Some(tryte::trit_at(t, pos % TRITS_PER_TRYTE))
        } else {
            None
        }
    }
}

impl Serializable for TritVectorData {
    /// Layout: `u64` trit count, `u64` byte count, then the raw bytes.
    fn save_into<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_u64::<LittleEndian>(self.len as u64)?;
        writer.write_u64::<LittleEndian>(self.trytes.len() as u64)?;
        writer.write_all(&self.trytes)?;
        Ok(())
    }

    /// Restores the data, validating the structural invariants.
    fn load_from<R: Read>(mut reader: R) -> Result<Self> {
        let len = reader.read_u64::<LittleEndian>()? as usize;
        let num_trytes = reader.read_u64::<LittleEndian>()? as usize;
        if num_trytes != len.div_ceil(TRITS_PER_TRYTE) {
            return Err(Error::invalid_metadata(format!(
                "expected {} trytes for {len} trits, but got {num_trytes}.",
                len.div_ceil(TRITS_PER_TRYTE)
            )));
        }
        let mut trytes = vec![0u8; num_trytes];
        reader.read_exact(&mut trytes)?;
        if let Some(&t) = trytes.iter().find(|&&t| t as usize >= NUM_TRYTE_VALUES) {
            return Err(Error::invalid_metadata(format!(
                "tryte values must be less than {NUM_TRYTE_VALUES}, but got {t}."
            )));
        }
        let data = Self { trytes, len };
        for pos in data.len..data.num_trytes() * TRITS_PER_TRYTE {
            let t = data.trytes[pos / TRITS_PER_TRYTE];
            if tryte::trit_at(t, pos % TRITS_PER_TRYTE) != 0 {
                return Err(Error::invalid_metadata(
                    "trailing slots of the final tryte must be zero.",
                ));
            }
        }
        Ok(data)
    }

    fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<u64>() * 2 + self.trytes.len()
    }
}

/// Interface for constructing an index over packed trit data.
pub trait IndexBuild: Sized {
    /// Builds the index for `data`.
    fn build(data: &TritVectorData) -> Self;
}

/// Index trait for rank queries over trit vector data.
///
/// The target trit is fixed by the implementing type; query methods borrow
/// the data they were built from, so the index itself stores only the
/// auxiliary counts.
pub trait TritVectorIndex: IndexBuild {
    /// Counts occurrences of the target trit in the whole sequence.
    fn num_target_trits(&self, data: &TritVectorData) -> usize;

    /// Returns the number of occurrences of the target trit among positions
    /// `0..pos`, or [`None`] if `pos >= data.len()`.
    fn rank(&self, data: &TritVectorData, pos: usize) -> Option<usize>;
}

/// Extension trait for indexes that also answer select queries.
pub trait TritSelectIndex: TritVectorIndex {
    /// Returns the position of the `(k+1)`-th occurrence of the target trit,
    /// or [`None`] if fewer than `k + 1` occurrences exist.
    fn select(&self, data: &TritVectorData, k: usize) -> Option<usize>;
}

/// Placeholder index that performs linear scans over the data.
///
/// Queries walk the packed bytes with the full-tryte count table, so they
/// are linear but byte-parallel. Useful as a zero-space fallback and as the
/// reference implementation in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIndex<const TARGET: u8>;

impl<const TARGET: u8> NoIndex<TARGET> {
    const FULL: [u8; NUM_TRYTE_VALUES] = tryte::full_counts(TARGET);
    const PREFIX: [[u8; NUM_TRYTE_VALUES]; TRITS_PER_TRYTE] = tryte::prefix_counts(TARGET);
}

impl<const TARGET: u8> IndexBuild for NoIndex<TARGET> {
    fn build(_: &TritVectorData) -> Self {
        Self
    }
}

impl<const TARGET: u8> TritVectorIndex for NoIndex<TARGET> {
    fn num_target_trits(&self, data: &TritVectorData) -> usize {
        let mut r: usize = data
            .trytes()
            .iter()
            .map(|&t| Self::FULL[t as usize] as usize)
            .sum();
        if TARGET == 0 {
            r -= data.num_padding_trits();
        }
        r
    }

    fn rank(&self, data: &TritVectorData, pos: usize) -> Option<usize> {
        if data.len() <= pos {
            return None;
        }
        let trytes = data.trytes();
        let (tpos, left) = (pos / TRITS_PER_TRYTE, pos % TRITS_PER_TRYTE);
        let mut r = 0;
        for &t in &trytes[..tpos] {
            r += Self::FULL[t as usize] as usize;
        }
        if left != 0 {
            r += Self::PREFIX[left - 1][trytes[tpos] as usize] as usize;
        }
        Some(r)
    }
}

impl<const TARGET: u8> TritSelectIndex for NoIndex<TARGET> {
    fn select(&self, data: &TritVectorData, k: usize) -> Option<usize> {
        let trytes = data.trytes();
        let mut tpos = 0;
        let mut cur_rank = 0;
        while tpos < trytes.len() {
            let cnt = Self::FULL[trytes[tpos] as usize] as usize;
            if k < cur_rank + cnt {
                break;
            }
            tpos += 1;
            cur_rank += cnt;
        }
        if tpos == trytes.len() {
            return None;
        }
        let t = trytes[tpos] as usize;
        let n = k - cur_rank + 1;
        let slot = (0..TRITS_PER_TRYTE)
            .find(|&s| Self::PREFIX[s][t] as usize == n)
            .unwrap();
        let sel = tpos * TRITS_PER_TRYTE + slot;
        // padding slots of the final byte are not selectable
        if sel < data.len() {
            Some(sel)
        } else {
            None
        }
    }
}

/// Immutable trit vector data combined with an auxiliary index.
///
/// The wrapper owns both parts, which guarantees the data outlives every
/// query the index answers. An index loaded separately is re-attached to its
/// vector by composing [`TritVector::new`] from the parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TritVector<I> {
    /// Raw packed data.
    pub data: TritVectorData,
    /// Associated index.
    pub index: I,
}

impl<I> TritVector<I> {
    /// Creates a new wrapper from data and index.
    pub const fn new(data: TritVectorData, index: I) -> Self {
        Self { data, index }
    }

    /// Returns the number of trits stored.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the vector is empty.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Creates an iterator over all trits.
    pub const fn iter(&self) -> Iter<'_, I> {
        Iter { tv: self, pos: 0 }
    }

    /// Collects all trits into a `Vec<u8>` for inspection.
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl<const TARGET: u8> From<TritVectorData> for TritVector<NoIndex<TARGET>> {
    fn from(data: TritVectorData) -> Self {
        TritVector::new(data, NoIndex)
    }
}

impl<I: TritVectorIndex> NumTrits for TritVector<I> {
    fn num_trits(&self) -> usize {
        self.data.len()
    }

    fn num_target_trits(&self) -> usize {
        self.index.num_target_trits(&self.data)
    }
}

impl<I> Access for TritVector<I> {
    fn access(&self, pos: usize) -> Option<u8> {
        self.data.access(pos)
    }
}

impl<I: TritVectorIndex> Rank for TritVector<I> {
    fn rank(&self, pos: usize) -> Option<usize> {
        self.index.rank(&self.data, pos)
    }
}

impl<I: TritSelectIndex> Select for TritVector<I> {
    fn select(&self, k: usize) -> Option<usize> {
        self.index.select(&self.data, k)
    }
}

impl<I: IndexBuild> Serializable for TritVector<I> {
    /// Persists the data only; the index is rebuilt when loading.
    fn save_into<W: Write>(&self, writer: W) -> Result<()> {
        self.data.save_into(writer)
    }

    fn load_from<R: Read>(reader: R) -> Result<Self> {
        let data = TritVectorData::load_from(reader)?;
        let index = I::build(&data);
        Ok(Self::new(data, index))
    }

    fn size_in_bytes(&self) -> usize {
        self.data.size_in_bytes()
    }
}

/// Iterator over trits in a [`TritVector`].
pub struct Iter<'a, I> {
    tv: &'a TritVector<I>,
    pos: usize,
}

impl<'a, I> Iter<'a, I> {
    /// Creates a new iterator.
    pub const fn new(tv: &'a TritVector<I>) -> Self {
        Self { tv, pos: 0 }
    }
}

impl<I> Iterator for Iter<'_, I> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.tv.len() {
            let t = self.tv.access(self.pos).unwrap();
            self.pos += 1;
            Some(t)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tv.len(), Some(self.tv.len()))
    }
}
