//! Content digests for change detection.

mod hash;

pub use hash::ContentHash;
