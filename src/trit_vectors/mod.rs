//! Top module for trit vectors.
//!
//! # Introduction
//!
//! Let $`T = (t_0, t_1, \dots, t_{u-1})`$ be a sequence of $`u`$ symbols
//! drawn from the ternary alphabet $`\{0, 1, 2\}`$, and let $`c`$ be a
//! chosen *target* symbol. Our trit vectors support the following queries:
//!
//! - $`\textrm{Access}(i)`$ returns $`t_i`$ (implemented by [`Access`]).
//! - $`\textrm{Rank}(i)`$ returns $`|\{ j < i \mid t_j = c \}|`$
//!   (implemented by [`Rank`]).
//! - $`\textrm{Select}(n)`$ returns the position of the $`(n+1)`$-th
//!   occurrence of $`c`$ (implemented by [`Select`]).
//!
//! The target symbol is fixed at the type level: each index is instantiated
//! for one `TARGET`, and [`RsFullIndex`] bundles all three instantiations
//! when every symbol must be queryable.
//!
//! # Data structures
//!
//! The sequence itself is always stored as [`TritVectorData`], packing five
//! trits per byte. Auxiliary indexes trade space for query time:
//!
//! | Implementation | [`Access`] | [`Rank`] | [`Select`] | Extra space |
//! | --- | :-: | :-: | :-: | :-: |
//! | [`TritVector<NoIndex<C>>`] | $`O(1)`$ | $`O(u)`$ | $`O(u)`$ | none |
//! | [`TritVector<RankIndex<C>>`] | $`O(1)`$ | $`O(1)`$ | -- | $`\approx 4.1\%`$ |
//! | [`TritVector<RsIndex<C>>`] | $`O(1)`$ | $`O(1)`$ | $`O(\lg u)`$ | $`\approx 4.1\%`$ |
//!
//! [`NoIndex`] performs honest linear scans and serves as the correctness
//! reference; [`RankIndex`] is the lean choice when only rank is needed;
//! [`RsIndex`] is the full directory with constant-time rank and
//! logarithmic-time select.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tritvec::trit_vectors::{RsIndex, TritVectorBuilder, prelude::*};
//!
//! let mut builder = TritVectorBuilder::new();
//! builder.extend_trits([0, 1, 2, 0, 1, 2, 2])?;
//! let tv = builder.freeze::<RsIndex<2>>();
//!
//! assert_eq!(tv.len(), 7);
//! assert_eq!(tv.access(2), Some(2));
//!
//! assert_eq!(tv.rank(2), Some(0));
//! assert_eq!(tv.rank(6), Some(2));
//!
//! assert_eq!(tv.select(0), Some(2));
//! assert_eq!(tv.select(2), Some(6));
//! # Ok(())
//! # }
//! ```
pub mod data;
pub mod prelude;
pub mod rank_index;
pub mod rs_index;

pub use data::{
    IndexBuild, NoIndex, TritSelectIndex, TritVector, TritVectorBuilder, TritVectorData,
    TritVectorIndex,
};
pub use rank_index::RankIndex;
pub use rs_index::{RsFullIndex, RsIndex, RsIndexBuilder};

/// Interface for reporting basic statistics of an indexed trit sequence.
pub trait NumTrits {
    /// Returns the number of trits stored.
    fn num_trits(&self) -> usize;

    /// Returns the number of occurrences of the target trit.
    fn num_target_trits(&self) -> usize;
}

/// Interface for accessing elements of a trit sequence.
pub trait Access {
    /// Returns the `pos`-th trit, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<u8>;
}

/// Interface for rank queries on trit sequences.
pub trait Rank {
    /// Returns the number of occurrences of the target trit among positions
    /// `0..pos`, or [`None`] if `pos` is not less than the sequence length.
    ///
    /// Positions at and past the logical length are rejected even when the
    /// final packed byte has spare slots; use [`NumTrits::num_target_trits`]
    /// for the total.
    fn rank(&self, pos: usize) -> Option<usize>;
}

/// Interface for select queries on trit sequences.
pub trait Select {
    /// Returns the position of the `(k+1)`-th occurrence of the target trit,
    /// or [`None`] if fewer than `k + 1` occurrences exist.
    fn select(&self, k: usize) -> Option<usize>;
}
