//! # Succinct ternary sequences in Rust
//!
//! Tritvec stores immutable sequences drawn from the three-symbol alphabet
//! $`\{0, 1, 2\}`$ — *trits* — in compressed space and answers the two
//! fundamental succinct-data-structure queries on them:
//!
//! - $`\textrm{Rank}(i)`$ — the number of occurrences of a chosen symbol
//!   among the first $`i`$ positions, in constant time.
//! - $`\textrm{Select}(n)`$ — the position of the $`(n+1)`$-th occurrence of
//!   a chosen symbol, in logarithmic time with a tiny constant.
//!
//! Trits are packed five to a byte in base 3, so the raw sequence occupies
//! $`\lceil n/5 \rceil`$ bytes; the auxiliary rank/select directories add
//! about 4.1% on top.
//!
//! ## Design policy
//!
//! - **Maintain interface consistency:**
//!   all indexed structures share the same behavior traits
//!   ([`trit_vectors::Access`], [`trit_vectors::Rank`], [`trit_vectors::Select`]),
//!   so they can be swapped as components of larger structures.
//!
//! - **Ensure safety:**
//!   the implementation is pure Rust and avoids unsafe instructions.
//!
//! ## Data structures
//!
//! See [`trit_vectors`] for the provided structures and their complexities.
//!
//! ## Serialization
//!
//! Every structure can be written to and restored from byte streams through
//! [`Serializable`]; the layouts are documented per type.
//!
//! ## Limitation
//!
//! This library is designed to run on 64-bit machines.
#![deny(missing_docs)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("`target_pointer_width` must be 64");

pub mod error;
pub mod serialization;
pub mod trit_vectors;
pub mod tryte;

pub use error::{Error, Result};
pub use serialization::Serializable;
pub use trit_vectors::{
    NoIndex, RankIndex, RsFullIndex, RsIndex, RsIndexBuilder, TritVector, TritVectorBuilder,
    TritVectorData,
};
