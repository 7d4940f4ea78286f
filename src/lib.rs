//! Contiguous containers built directly on raw, uninitialized memory.
//!
//! [`RawMemory`] owns an uninitialized block sized for a number of slots and
//! never constructs or drops anything. [`Vector`] owns one `RawMemory` plus a
//! length and performs every transition between uninitialized slots and live
//! values: construction, relocation on growth, shifting on insert/erase, and
//! destruction.
//!
//! ```
//! use raw_containers::vector;
//!
//! let mut v = vector![1, 2];
//! v.insert(1, 42);
//! v.erase(0);
//! v.resize(4);
//! assert_eq!(v, &[42, 2, 0, 0]);
//! ```

#[cfg(feature = "raw_vector")]
mod raw_vector;

#[cfg(feature = "raw_vector")]
pub use raw_vector::*;
