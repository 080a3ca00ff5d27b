//! The prelude for trit vectors.
//!
//! The purpose of this module is to alleviate imports of the common behavior
//! traits for trit vectors.
//!
//! ```
//! # #![allow(unused_imports)]
//! use tritvec::trit_vectors::prelude::*;
//! ```
pub use crate::trit_vectors::{Access, NumTrits, Rank, Select};
