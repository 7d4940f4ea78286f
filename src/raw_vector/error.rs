use core::alloc::Layout;

use thiserror::Error;

/// Errors returned by fallible `RawMemory` and `Vector` allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryReserveError {
    /// The requested slot count does not fit in a valid allocation layout.
    #[error("capacity overflow: requested slots exceed isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator could not satisfy the request.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocError { layout: Layout },
}

impl TryReserveError {
    /// Turns the error into the behavior of the infallible entry points:
    /// a panic on overflow, an allocation abort otherwise.
    #[cold]
    pub(crate) fn handle(self) -> ! {
        match self {
            TryReserveError::CapacityOverflow => panic!("capacity overflow"),
            TryReserveError::AllocError { layout } => std::alloc::handle_alloc_error(layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TryReserveError::CapacityOverflow.to_string(),
            "capacity overflow: requested slots exceed isize::MAX bytes"
        );

        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            TryReserveError::AllocError { layout }.to_string(),
            "memory allocation of 32 bytes failed"
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn handle_panics_on_overflow() {
        TryReserveError::CapacityOverflow.handle();
    }
}
