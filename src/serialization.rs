//! Stream serialization utilities.

use std::io::{Read, Write};

use crate::error::Result;

/// Types that can be written to and restored from raw byte streams.
///
/// The on-disk layouts are native little-endian and documented per
/// implementor; no schema or versioning is attached, so a stream is only
/// meaningful to the type that wrote it.
pub trait Serializable: Sized {
    /// Writes `self` into `writer`.
    fn save_into<W: Write>(&self, writer: W) -> Result<()>;

    /// Reads an instance back from `reader`.
    fn load_from<R: Read>(reader: R) -> Result<Self>;

    /// Returns the number of bytes of the serialized form.
    fn size_in_bytes(&self) -> usize;
}
