use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ops::{Index, IndexMut},
    ptr::NonNull,
    slice,
};
use std::alloc;

use super::TryReserveError;

/// An owned block of uninitialized memory with room for `capacity` values of `T`.
///
/// `RawMemory` never constructs or drops a `T`. Which slots hold live values is
/// tracked by the owner (see [`Vector`](crate::Vector)); dropping a `RawMemory`
/// only releases the block, so every live value must be dropped or moved out
/// beforehand.
///
/// The type is move-only: duplicating a block would need element-aware copy
/// logic that belongs to the owner.
///
/// # Examples
///
/// ```
/// use raw_containers::RawMemory;
///
/// let mut memory: RawMemory<String> = RawMemory::allocate(2);
/// assert_eq!(memory.capacity(), 2);
///
/// memory[0].write("slot".to_owned());
/// let value = unsafe { memory[0].assume_init_read() };
/// assert_eq!(value, "slot");
/// ```
pub struct RawMemory<T> {
    buffer: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawMemory<T> {}
unsafe impl<T: Sync> Sync for RawMemory<T> {}

impl<T> RawMemory<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty block. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::RawMemory;
    ///
    /// let memory: RawMemory<u32> = RawMemory::new();
    /// assert_eq!(memory.capacity(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        RawMemory {
            buffer: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block for `capacity` values.
    ///
    /// A zero capacity, or a zero-sized `T`, never touches the allocator.
    ///
    /// # Panics
    ///
    /// Panics if the block size overflows `isize::MAX` bytes. Aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) if the allocator fails.
    #[must_use]
    #[inline]
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(memory) => memory,
            Err(error) => error.handle(),
        }
    }

    /// Allocates a block for `capacity` values, reporting failure instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::{RawMemory, TryReserveError};
    ///
    /// assert!(RawMemory::<u8>::try_allocate(16).is_ok());
    /// assert_eq!(
    ///     RawMemory::<u64>::try_allocate(usize::MAX).err(),
    ///     Some(TryReserveError::CapacityOverflow)
    /// );
    /// ```
    pub fn try_allocate(capacity: usize) -> Result<Self, TryReserveError> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(RawMemory {
                buffer: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        let layout =
            Layout::array::<T>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
        // SAFETY: `layout` has a non-zero size, checked above.
        let ptr = unsafe { alloc::alloc(layout) };
        let buffer =
            NonNull::new(ptr.cast::<T>()).ok_or(TryReserveError::AllocError { layout })?;

        log::trace!(
            "allocated {} bytes for {} slots of {}",
            layout.size(),
            capacity,
            core::any::type_name::<T>()
        );

        Ok(RawMemory {
            buffer,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Returns the number of slots in the block, initialized or not.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    #[must_use]
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_ptr()
    }

    /// Returns the address of slot `offset`.
    ///
    /// `offset == capacity()` yields the one-past-the-end address, which may be
    /// used for pointer arithmetic but must never be read or written.
    ///
    /// Requesting `offset > capacity()` violates the contract; it is only
    /// checked in debug builds.
    #[must_use]
    #[inline]
    pub fn address(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "address offset (is {offset}) should be <= capacity (is {})",
            self.capacity
        );
        self.buffer.as_ptr().wrapping_add(offset)
    }

    /// Views every slot of the block as possibly-uninitialized memory.
    #[must_use]
    #[inline]
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY: the block spans `capacity` slots and `MaybeUninit` needs no initialization.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast(), self.capacity) }
    }

    #[must_use]
    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: as above; `&mut self` makes the view unique.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_ptr().cast(), self.capacity) }
    }

    /// Exchanges the blocks owned by `self` and `other`. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::RawMemory;
    ///
    /// let mut a: RawMemory<u16> = RawMemory::allocate(3);
    /// let mut b: RawMemory<u16> = RawMemory::new();
    /// a.swap(&mut b);
    /// assert_eq!(a.capacity(), 0);
    /// assert_eq!(b.capacity(), 3);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut RawMemory<T>) {
        mem::swap(&mut self.buffer, &mut other.buffer);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || Self::IS_ZST {
            return;
        }

        // SAFETY: the same layout was validated by `Layout::array` when the
        // block was allocated.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            );
            alloc::dealloc(self.buffer.as_ptr().cast(), layout);
        }

        log::trace!(
            "released {} slots of {}",
            self.capacity,
            core::any::type_name::<T>()
        );
    }
}

impl<T> Default for RawMemory<T> {
    /// Creates an empty block, which makes `mem::take` a transfer of ownership.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for RawMemory<T> {
    type Output = MaybeUninit<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_uninit_slice()[index]
    }
}

impl<T> IndexMut<usize> for RawMemory<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_uninit_slice_mut()[index]
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("buffer", &self.buffer)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn zero_capacity_is_empty_marker() {
        let memory: RawMemory<u64> = RawMemory::allocate(0);
        assert_eq!(memory.capacity(), 0);
        assert_eq!(memory.as_ptr(), NonNull::<u64>::dangling().as_ptr() as *const u64);
    }

    #[test]
    fn slots_are_addressable() {
        let mut memory: RawMemory<u32> = RawMemory::allocate(4);
        assert_eq!(memory.capacity(), 4);

        for (i, slot) in memory.as_uninit_slice_mut().iter_mut().enumerate() {
            slot.write(i as u32 * 10);
        }

        unsafe {
            assert_eq!(*memory.address(2), 20);
            assert_eq!(memory[3].assume_init(), 30);
        }

        let end = memory.address(4);
        assert_eq!(end as usize - memory.as_ptr() as usize, 4 * mem::size_of::<u32>());
    }

    #[test]
    fn swap_and_take_transfer_ownership() {
        let mut a: RawMemory<u8> = RawMemory::allocate(8);
        let a_ptr = a.as_ptr();

        let b = mem::take(&mut a);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 8);
        assert_eq!(b.as_ptr(), a_ptr);

        let mut c = RawMemory::new();
        let mut b = b;
        c.swap(&mut b);
        assert_eq!(c.capacity(), 8);
        assert_eq!(b.capacity(), 0);
    }

    #[test]
    fn capacity_overflow_is_reported() {
        assert_eq!(
            RawMemory::<u32>::try_allocate(usize::MAX / 2).err(),
            Some(TryReserveError::CapacityOverflow)
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn allocate_panics_on_overflow() {
        let _memory = RawMemory::<u64>::allocate(usize::MAX);
    }

    #[test]
    fn zero_sized_types_never_allocate() {
        let memory: RawMemory<()> = RawMemory::allocate(usize::MAX);
        assert_eq!(memory.capacity(), usize::MAX);
    }

    #[test]
    fn drop_does_not_drop_slots() {
        let counter = Cell::new(0);
        struct DC<'a>(&'a Cell<u32>);
        impl Drop for DC<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        {
            let mut memory: RawMemory<DC<'_>> = RawMemory::allocate(2);
            memory[0].write(DC(&counter));
            memory[1].write(DC(&counter));
        }
        assert_eq!(counter.get(), 0);
    }

    #[test]
    #[should_panic]
    fn index_past_capacity_panics() {
        let memory: RawMemory<u8> = RawMemory::allocate(2);
        let _ = &memory[2];
    }
}
