use core::fmt;
use core::{
    fmt::Debug,
    hash::Hash,
    iter::{self, FusedIterator},
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::SliceIndex,
};

use scopeguard::ScopeGuard;

use super::{RawMemory, TryReserveError};

/// A growable vector built on top of an owned [`RawMemory`] block.
///
/// Slots `[0, len)` of the block hold live values, slots `[len, capacity)`
/// are uninitialized. Growth always allocates a fresh block, moves the live
/// values across and swaps the blocks; the old block is never resized in place.
///
/// # Examples
///
/// ```
/// use raw_containers::Vector;
///
/// let mut v = Vector::new();
/// v.push(1);
/// v.push(2);
/// v.insert(1, 42);
/// assert_eq!(v, &[1, 42, 2]);
/// ```
pub struct Vector<T> {
    data: RawMemory<T>,
    size: usize,
}

impl<T> Vector<T> {
    /// Creates a new empty `Vector`. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let v: Vector<i32> = Vector::new();
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Vector {
            data: RawMemory::new(),
            size: 0,
        }
    }

    /// Creates an empty `Vector` with room for exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let v: Vector<String> = Vector::with_capacity(8);
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 8);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            data: RawMemory::allocate(capacity),
            size: 0,
        }
    }

    /// Fallible version of [`Vector::with_capacity`].
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        Ok(Vector {
            data: RawMemory::try_allocate(capacity)?,
            size: 0,
        })
    }

    /// Creates a `Vector` of `len` default-constructed elements, allocating
    /// exactly `len` slots.
    ///
    /// If a `Default::default` call panics, the elements built so far are
    /// dropped and the block is released before the panic propagates.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let v: Vector<u8> = Vector::with_len(3);
    /// assert_eq!(v, &[0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut result = Self::with_capacity(len);
        result.write_tail(iter::repeat_with(T::default).take(len));
        result
    }

    /// Creates a `Vector` holding `len` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let v = Vector::from_elem("x", 2);
    /// assert_eq!(v, &["x", "x"]);
    /// ```
    #[must_use]
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut result = Self::with_capacity(len);
        result.write_tail(iter::repeat(value).take(len));
        result
    }

    /// Forces the length of the vector to new_len.
    /// This is a low-level operation that maintains none of the normal invariants of the type.
    ///
    /// # Safety
    ///
    /// - new_len must be less than or equal to capacity().
    /// - the elements at old_len..new_len must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.size = new_len;
    }

    /// Returns the uninitialized tail `[len, capacity)` of the block.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let mut v: Vector<i32> = Vector::with_capacity(2);
    /// v.spare_capacity_mut()[0].write(10);
    /// unsafe {
    ///     v.set_len(1);
    /// }
    /// assert_eq!(v, &[10]);
    /// ```
    #[must_use]
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let len = self.size;
        &mut self.data.as_uninit_slice_mut()[len..]
    }

    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the next insertion has to reallocate.
    #[must_use]
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[must_use]
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.size) }
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.size;
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Exchanges the contents of two vectors in O(1). No element is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut a = vector![1, 2];
    /// let mut b = vector![3];
    /// a.swap_with(&mut b);
    /// assert_eq!(a, &[3]);
    /// assert_eq!(b, &[1, 2]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Grows the block to exactly `new_capacity` slots, moving every element
    /// into the new block. Does nothing if `new_capacity <= capacity()`.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not the
    /// number of additional elements.
    ///
    /// Any reallocation invalidates all references into the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![1, 2];
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(4);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.relocate_into(RawMemory::allocate(new_capacity));
    }

    /// Fallible version of [`Vector::reserve`]. On error the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::{vector, TryReserveError};
    ///
    /// let mut v = vector![1u64, 2];
    /// assert_eq!(v.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
    /// assert_eq!(v, &[1, 2]);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate_into(RawMemory::try_allocate(new_capacity)?);
        Ok(())
    }

    /// Resizes the vector to `new_len`, default-constructing new trailing
    /// elements or dropping excess ones.
    ///
    /// Growing past the capacity reserves exactly `new_len` slots first.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![42, 2];
    /// v.resize(4);
    /// assert_eq!(v, &[42, 2, 0, 0]);
    /// v.resize(1);
    /// assert_eq!(v, &[42]);
    /// ```
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the vector to `new_len`, filling new entries with values from `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push(1);
    /// v.resize_with(3, || 5);
    /// assert_eq!(v, &[1, 5, 5]);
    /// ```
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.size {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);
        let count = new_len - self.size;
        self.write_tail(iter::repeat_with(f).take(count));
    }

    /// Pushes a new value into the vector without checking that capacity is not exceeded.
    ///
    /// # Safety
    ///
    /// - len should be less than capacity.
    /// - undefined behavior otherwise.
    #[inline]
    pub unsafe fn unchecked_push(&mut self, value: T) -> &mut T {
        debug_assert!(!self.is_full());
        let index = self.size;
        self.data.address(index).write(value);
        self.size = index + 1;
        &mut *self.data.address(index)
    }

    /// Appends an element to the back of the vector and returns a mutable reference to it.
    ///
    /// A full vector grows to `max(1, 2 * len)` slots, which keeps `push`
    /// amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let mut v = Vector::new();
    /// *v.push(10) += 1;
    /// assert_eq!(v, &[11]);
    /// assert_eq!(v.capacity(), 1);
    /// v.push(12);
    /// assert_eq!(v.capacity(), 2);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        let index = self.size;
        self.emplace(index, move || value)
    }

    /// Fallible version of [`Vector::push`]. On error the vector is unchanged
    /// and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, TryReserveError> {
        let index = self.size;
        if self.is_full() {
            let new_data = RawMemory::try_allocate(self.grown_capacity()?)?;
            self.insert_with_reallocate(new_data, index, move || value);
        } else {
            self.insert_in_place(index, move || value);
        }
        self.size += 1;

        Ok(unsafe { self.as_mut_slice().get_unchecked_mut(index) })
    }

    /// Pops the last value from the vector without checking that the vector is not empty.
    ///
    /// # Safety
    ///
    /// - vector should not be empty.
    /// - undefined behavior otherwise.
    #[inline]
    pub unsafe fn unchecked_pop(&mut self) -> T {
        debug_assert!(!self.is_empty());
        self.size -= 1;
        ptr::read(self.data.address(self.size))
    }

    /// Drops the last element in place without checking that the vector is not empty.
    ///
    /// The length is decremented before the element is dropped.
    ///
    /// # Safety
    ///
    /// - vector should not be empty.
    /// - undefined behavior otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![String::from("a"), String::from("b")];
    /// unsafe { v.pop_back() };
    /// assert_eq!(v, &["a"]);
    /// ```
    #[inline]
    pub unsafe fn pop_back(&mut self) {
        debug_assert!(!self.is_empty());
        self.size -= 1;
        ptr::drop_in_place(self.data.address(self.size));
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let mut v = Vector::new();
    /// assert_eq!(v.pop(), None);
    /// v.push(1);
    /// assert_eq!(v.pop(), Some(1));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.unchecked_pop() })
        }
    }

    /// Shortens the vector to `new_len`, dropping the trailing elements.
    ///
    /// Has no effect if `new_len >= len()`. The capacity is unchanged.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.size {
            return;
        }

        let tail = ptr::slice_from_raw_parts_mut(self.data.address(new_len), self.size - new_len);
        self.size = new_len;
        unsafe { ptr::drop_in_place(tail) };
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Constructs a new element at `index` from `f`, shifting every element
    /// at and after `index` one slot to the right.
    ///
    /// The value is produced before anything is moved, so a panic in `f`
    /// leaves the vector untouched. A full vector reallocates to
    /// `max(1, 2 * len)` slots and builds the new element straight into its
    /// final slot of the new block.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![String::from("a"), String::from("c")];
    /// v.emplace(1, || String::from("b"));
    /// assert_eq!(v, &["a", "b", "c"]);
    /// ```
    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.size;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        // `index == capacity` can only hold when full: the one-past-end slot
        // is never written in place.
        if self.is_full() || index == self.capacity() {
            let new_capacity = self
                .grown_capacity()
                .unwrap_or_else(|error| error.handle());
            self.insert_with_reallocate(RawMemory::allocate(new_capacity), index, f);
        } else {
            self.insert_in_place(index, f);
        }
        self.size += 1;

        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Inserts an element at position `index`, shifting subsequent elements to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![1, 3];
    /// v.insert(1, 2);
    /// assert_eq!(v, &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, element: T) -> &mut T {
        self.emplace(index, move || element)
    }

    /// Removes and returns the element at `index`, shifting the following
    /// elements one slot to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![1, 2];
    /// assert_eq!(v.remove(0), 1);
    /// assert_eq!(v, &[2]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.size;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }

        unsafe {
            let slot = self.data.address(index);
            let removed = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.size = len - 1;
            removed
        }
    }

    /// Drops the element at `index` and closes the gap. Never reallocates.
    ///
    /// Returns `index`, which now holds the element that followed the erased one
    /// (or equals `len()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut v = vector![1, 42, 2];
    /// let next = v.erase(0);
    /// assert_eq!(v[next], 42);
    /// assert_eq!(v, &[42, 2]);
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// `max(1, 2 * len)`, the capacity of the block a full vector grows into.
    #[inline]
    fn grown_capacity(&self) -> Result<usize, TryReserveError> {
        if self.size == 0 {
            Ok(1)
        } else {
            self.size
                .checked_mul(2)
                .ok_or(TryReserveError::CapacityOverflow)
        }
    }

    /// Moves every live element into `new_data` and adopts it; the old block
    /// is released without dropping anything.
    fn relocate_into(&mut self, mut new_data: RawMemory<T>) {
        debug_assert!(new_data.capacity() >= self.size);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), new_data.as_mut_ptr(), self.size);
        }
        log::trace!(
            "relocated {} elements: capacity {} -> {}",
            self.size,
            self.capacity(),
            new_data.capacity()
        );
        self.data.swap(&mut new_data);
    }

    /// Builds the new element directly into slot `index` of `new_data`, then
    /// moves the prefix and the suffix around it and adopts the new block.
    ///
    /// Leaves `size` untouched; the caller bumps it.
    fn insert_with_reallocate<F>(&mut self, mut new_data: RawMemory<T>, index: usize, f: F)
    where
        F: FnOnce() -> T,
    {
        debug_assert!(new_data.capacity() > self.size);
        unsafe {
            new_data.address(index).write(f());

            let from = self.data.as_ptr();
            let to = new_data.as_mut_ptr();
            ptr::copy_nonoverlapping(from, to, index);
            ptr::copy_nonoverlapping(from.add(index), to.add(index + 1), self.size - index);
        }
        log::trace!(
            "relocated {} elements around index {}: capacity {} -> {}",
            self.size,
            index,
            self.capacity(),
            new_data.capacity()
        );
        self.data.swap(&mut new_data);
    }

    /// Inserts using the spare slot at `size`. Leaves `size` untouched.
    fn insert_in_place<F>(&mut self, index: usize, f: F)
    where
        F: FnOnce() -> T,
    {
        debug_assert!(index < self.capacity() && !self.is_full());
        let len = self.size;
        unsafe {
            if index == len {
                self.data.address(len).write(f());
            } else {
                let value = f();
                let slot = self.data.address(index);
                ptr::copy(slot, slot.add(1), len - index);
                slot.write(value);
            }
        }
    }

    /// Constructs values from `values` into the spare slots, stopping at the
    /// capacity. The length is committed once all of them are built; a panic
    /// drops the ones already constructed.
    fn write_tail<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.size;
        let base = self.data.address(0);
        let remaining = self.capacity() - start;

        let mut constructed = scopeguard::guard(start, |constructed| unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(start),
                constructed - start,
            ));
        });

        for value in values.into_iter().take(remaining) {
            unsafe { base.add(*constructed).write(value) };
            *constructed += 1;
        }

        self.size = ScopeGuard::into_inner(constructed);
    }
}

impl<T> Drop for Vector<T> {
    #[inline]
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> FromIterator<T> for Vector<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T> Extend<T> for Vector<T> {
    /// Extends the vector with the contents of the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.extend([1, 2]);
    /// assert_eq!(v, &[1, 2]);
    /// ```
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let it = iter.into_iter();
        let (lowerbound, _) = it.size_hint();
        if lowerbound > self.capacity() - self.size {
            let wanted = self.size.saturating_add(lowerbound);
            self.reserve(wanted.max(self.size.saturating_mul(2)));
        }

        for elem in it {
            self.push(elem);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Vector<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Creates an iterator that consumes the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut iter = vector![1, 2].into_iter();
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next_back(), Some(2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);
        let end = this.size;
        IntoIter {
            data: mem::take(&mut this.data),
            begin: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clones the vector into a block sized to exactly `len()` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let mut v = Vector::with_capacity(8);
    /// v.push(1);
    /// let c = v.clone();
    /// assert_eq!(c, &[1]);
    /// assert_eq!(c.capacity(), 1);
    /// ```
    fn clone(&self) -> Self {
        let mut result = Self::with_capacity(self.size);
        result.write_tail(self.iter().cloned());
        result
    }

    /// Makes `self` a copy of `source`.
    ///
    /// If `source` does not fit in the current block, a complete clone is
    /// built first and swapped in, so a panicking `clone` leaves `self`
    /// unchanged. Otherwise the existing block is reused: the shared prefix
    /// is assigned with `clone_from`, missing elements are cloned in place
    /// and excess ones are dropped. A panic on that path leaves `self` with a
    /// partially assigned, but valid, contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut dst = vector![0, 0, 0, 0];
    /// let src = vector![1, 2];
    /// dst.clone_from(&src);
    /// assert_eq!(dst, &[1, 2]);
    /// assert_eq!(dst.capacity(), 4);
    /// ```
    fn clone_from(&mut self, source: &Self) {
        if source.size > self.capacity() {
            let mut copy = source.clone();
            self.swap_with(&mut copy);
            return;
        }

        let shared = self.size.min(source.size);
        self.as_mut_slice()[..shared].clone_from_slice(&source[..shared]);
        if source.size > self.size {
            self.write_tail(source[shared..].iter().cloned());
        } else {
            self.truncate(source.size);
        }
    }
}

impl<T> Default for Vector<T> {
    /// Creates an empty vector, which makes `mem::take` an O(1) transfer.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut a = vector![1, 2];
    /// let b = std::mem::take(&mut a);
    /// assert!(a.is_empty());
    /// assert_eq!(b, &[1, 2]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I> Index<I> for Vector<T>
where
    I: SliceIndex<[T]>,
{
    type Output = <I as SliceIndex<[T]>>::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I> IndexMut<I> for Vector<T>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut <Vector<T> as Index<I>>::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const M: usize> PartialEq<&[U; M]> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; M]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T, U, const M: usize> PartialEq<[U; M]> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T, U> PartialEq<Vec<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T> Eq for Vector<T> where T: Eq {}

impl<T> PartialOrd for Vector<T>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for Vector<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for Vector<T>
where
    T: Hash,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> Debug for Vector<T> {
    /// Formats the vector using the debug formatter.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// assert_eq!(format!("{:?}", vector![1, 2]), "[1, 2]");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> std::borrow::Borrow<[T]> for Vector<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> std::borrow::BorrowMut<[T]> for Vector<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Moves the array elements into a block of exactly `N` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::Vector;
    ///
    /// let v = Vector::from([1, 2, 3]);
    /// assert_eq!(v, &[1, 2, 3]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    #[inline]
    fn from(value: [T; N]) -> Self {
        let mut result = Self::with_capacity(N);
        result.write_tail(value);
        result
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        let mut result = Self::with_capacity(slice.len());
        result.write_tail(slice.iter().cloned());
        result
    }
}

/// Iterator returned by `Vector::into_iter`.
pub struct IntoIter<T> {
    data: RawMemory<T>,
    begin: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    #[inline]
    const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns a slice of the remaining iterator elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_containers::vector;
    ///
    /// let mut iter = vector![1, 2, 3].into_iter();
    /// iter.next();
    /// assert_eq!(iter.as_slice(), &[2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.data.address(self.begin), self.len()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.data.address(self.begin), self.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.begin == self.end {
            None
        } else {
            let value = unsafe { ptr::read(self.data.address(self.begin)) };
            self.begin += 1;
            Some(value)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.begin == self.end {
            None
        } else {
            self.end -= 1;
            Some(unsafe { ptr::read(self.data.address(self.end)) })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    #[inline]
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for IntoIter<T> {
    #[inline]
    fn default() -> Self {
        Self {
            data: RawMemory::new(),
            begin: 0,
            end: 0,
        }
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Vector::from(self.as_slice()).into_iter()
    }
}

impl<T: fmt::Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> AsRef<[T]> for IntoIter<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
