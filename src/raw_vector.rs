mod error;
mod raw_memory;
mod vector;
mod vector_macros;

pub use error::TryReserveError;
pub use raw_memory::RawMemory;
pub use vector::{IntoIter, Vector};
