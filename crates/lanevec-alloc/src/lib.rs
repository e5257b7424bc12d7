//! Alignment-exact allocation for packed lane-vector registers.
//!
//! Packed registers are over-aligned: a register holding `L` lanes of a
//! `w`-byte element is `L * w` bytes large *and* `L * w` bytes aligned, so
//! that any heap instance satisfies hardware register alignment. The global
//! allocator honors any power-of-two alignment, but this crate adds the two
//! behaviors register-sized allocations need on top of it:
//!
//! 1. **A process-wide allocation-failure handler.** When an allocation
//!    fails, the handler (if one is registered) is invoked and the
//!    allocation retried, until either the allocation succeeds or the
//!    handler declines to act. Only then is [`AllocError::OutOfMemory`]
//!    reported. This mirrors the classic reserve-pool pattern: a handler
//!    can drop caches and return `true` to ask for a retry.
//! 2. **Bookkeeping.** Allocation statistics (live bytes, counts, peak,
//!    failures) are tracked for diagnostics.
//!
//! The handler is the only process-wide mutable state. Looking it up and
//! invoking it happen under one [`parking_lot::Mutex`] critical section, so
//! the allocation path is safe for concurrent use from multiple threads.
//!
//! Size-exact register allocations should go through [`AlignedBox`]; other
//! shapes (arrays of registers, mixed buffers) belong to the default
//! allocator — `Vec` and friends already handle those correctly.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

use std::alloc::{self, GlobalAlloc, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use parking_lot::Mutex;
use thiserror::Error;

/// Errors that can occur during allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The request could not be satisfied, and no failure handler was able
    /// to free up memory.
    #[error("out of memory: failed to allocate {requested} bytes (alignment {align})")]
    OutOfMemory {
        /// Requested allocation size in bytes.
        requested: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
    /// The requested layout is not allocatable (e.g. zero size).
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// A process-wide allocation-failure callback.
///
/// Invoked when an allocation fails. Returning `true` asks the allocation
/// path to retry (the handler is expected to have released memory);
/// returning `false` declines, and the allocation reports
/// [`AllocError::OutOfMemory`].
pub type FailureHandler = fn() -> bool;

static FAILURE_HANDLER: Mutex<Option<FailureHandler>> = Mutex::new(None);
static STATS: Mutex<AllocStats> = Mutex::new(AllocStats::new());

/// Install or clear the process-wide allocation-failure handler.
///
/// Returns the previously installed handler. The swap happens under the
/// same lock that guards handler invocation, so concurrent allocations
/// observe either the old or the new handler, never a torn state.
pub fn set_failure_handler(handler: Option<FailureHandler>) -> Option<FailureHandler> {
    let mut guard = FAILURE_HANDLER.lock();
    tracing::trace!(registered = handler.is_some(), "allocation failure handler updated");
    std::mem::replace(&mut *guard, handler)
}

/// Whether a failure handler is currently registered.
pub fn has_failure_handler() -> bool {
    FAILURE_HANDLER.lock().is_some()
}

/// Allocate memory for `layout`, retrying through the failure handler.
///
/// The returned address is a multiple of `layout.align()`. On exhaustion
/// the registered handler is consulted in a loop: each `true` return
/// triggers a retry, a `false` return (or an absent handler) reports
/// [`AllocError::OutOfMemory`]. A zero-size layout is rejected as
/// [`AllocError::InvalidLayout`].
pub fn allocate(layout: Layout) -> AllocResult<NonNull<u8>> {
    if layout.size() == 0 {
        return Err(AllocError::InvalidLayout("zero-size allocation".into()));
    }
    loop {
        // SAFETY: layout.size() is non-zero, checked above.
        let ptr = unsafe { alloc::alloc(layout) };
        if let Some(ptr) = NonNull::new(ptr) {
            STATS.lock().record_alloc(layout.size());
            return Ok(ptr);
        }
        // Exhausted. Query and invoke the handler as one critical section
        // so a concurrent `set_failure_handler` cannot interleave.
        let guard = FAILURE_HANDLER.lock();
        match *guard {
            Some(handler) => {
                tracing::warn!(
                    size = layout.size(),
                    align = layout.align(),
                    "allocation failed, invoking failure handler"
                );
                if !handler() {
                    STATS.lock().record_failure();
                    return Err(AllocError::OutOfMemory {
                        requested: layout.size(),
                        align: layout.align(),
                    });
                }
            }
            None => {
                STATS.lock().record_failure();
                return Err(AllocError::OutOfMemory {
                    requested: layout.size(),
                    align: layout.align(),
                });
            }
        }
    }
}

/// Deallocate a block previously returned by [`allocate`].
///
/// A null `ptr` is a no-op. Otherwise `layout` must be the layout the
/// block was allocated with.
pub fn deallocate(ptr: *mut u8, layout: Layout) {
    if ptr.is_null() || layout.size() == 0 {
        return;
    }
    // SAFETY: the caller guarantees `ptr` came from `allocate(layout)`.
    unsafe { alloc::dealloc(ptr, layout) };
    STATS.lock().record_dealloc(layout.size());
}

/// A snapshot of allocation statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Bytes currently allocated through this crate.
    pub bytes_allocated: usize,
    /// Total number of allocations performed.
    pub allocation_count: usize,
    /// Total number of deallocations performed.
    pub deallocation_count: usize,
    /// Peak live bytes.
    pub peak_bytes: usize,
    /// Number of terminally failed allocations.
    pub failed_allocations: usize,
}

impl AllocStats {
    /// Create empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes_allocated: 0,
            allocation_count: 0,
            deallocation_count: 0,
            peak_bytes: 0,
            failed_allocations: 0,
        }
    }

    fn record_alloc(&mut self, size: usize) {
        self.bytes_allocated += size;
        self.allocation_count += 1;
        self.peak_bytes = self.peak_bytes.max(self.bytes_allocated);
    }

    fn record_dealloc(&mut self, size: usize) {
        self.bytes_allocated = self.bytes_allocated.saturating_sub(size);
        self.deallocation_count += 1;
    }

    fn record_failure(&mut self) {
        self.failed_allocations += 1;
    }
}

/// Current allocation statistics.
#[must_use]
pub fn stats() -> AllocStats {
    *STATS.lock()
}

/// An owning, exactly-aligned heap box.
///
/// `AlignedBox::new` routes the size-exact allocation through [`allocate`]
/// (and therefore through the failure-handler retry loop); `Drop` reverses
/// it through [`deallocate`]. The pointee's own alignment requirement is
/// what makes the allocation register-exact: over-aligned register types
/// carry their alignment in their `Layout`.
pub struct AlignedBox<T> {
    ptr: NonNull<T>,
}

impl<T> AlignedBox<T> {
    /// Move `value` into a freshly allocated, exactly-aligned block.
    pub fn new(value: T) -> AllocResult<Self> {
        let layout = Layout::new::<T>();
        let ptr = allocate(layout)?.cast::<T>();
        // SAFETY: `ptr` is valid for writes of `T` and properly aligned.
        unsafe { ptr.as_ptr().write(value) };
        Ok(Self { ptr })
    }

    /// The block's address, for alignment inspection.
    #[must_use]
    pub fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }
}

impl<T> Deref for AlignedBox<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: `ptr` is valid and uniquely owned for the box lifetime.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> DerefMut for AlignedBox<T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: as above, and `&mut self` guarantees uniqueness.
        unsafe { self.ptr.as_mut() }
    }
}

impl<T> Drop for AlignedBox<T> {
    fn drop(&mut self) {
        let layout = Layout::new::<T>();
        // SAFETY: the pointee was written in `new` and not dropped since.
        unsafe { self.ptr.as_ptr().drop_in_place() };
        deallocate(self.ptr.as_ptr().cast::<u8>(), layout);
    }
}

// SAFETY: AlignedBox owns its pointee; it is as Send/Sync as T itself.
unsafe impl<T: Send> Send for AlignedBox<T> {}
unsafe impl<T: Sync> Sync for AlignedBox<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for AlignedBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AlignedBox").field(&**self).finish()
    }
}

/// A standard-allocator adapter forwarding to [`allocate`]/[`deallocate`].
///
/// Implements [`GlobalAlloc`], so containers of lane-vector types can be
/// backed by the failure-handler-aware path. Per the `GlobalAlloc`
/// contract, failure is reported as a null pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneAlloc;

// SAFETY: forwards to the global allocator with matching layouts.
unsafe impl GlobalAlloc for LaneAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        match allocate(layout) {
            Ok(ptr) => ptr.as_ptr(),
            Err(_) => std::ptr::null_mut(),
        }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        deallocate(ptr, layout);
    }
}

/// Align `size` up to the next multiple of `align`.
#[inline]
#[must_use]
pub const fn align_up(size: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (size + align - 1) & !(align - 1)
}

/// Whether `ptr` is a multiple of `align`.
#[inline]
#[must_use]
pub fn is_aligned(ptr: *const u8, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    (ptr as usize) & (align - 1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 8), 0);
        assert_eq!(align_up(1, 8), 8);
        assert_eq!(align_up(8, 8), 8);
        assert_eq!(align_up(9, 8), 16);
        assert_eq!(align_up(100, 64), 128);
    }

    #[test]
    fn test_allocate_respects_alignment() {
        for align in [1usize, 2, 4, 16, 64, 256, 1024] {
            let layout = Layout::from_size_align(align, align).unwrap();
            let ptr = allocate(layout).unwrap();
            assert!(is_aligned(ptr.as_ptr(), align));
            deallocate(ptr.as_ptr(), layout);
        }
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let layout = Layout::from_size_align(0, 8).unwrap();
        assert!(matches!(allocate(layout), Err(AllocError::InvalidLayout(_))));
    }

    #[test]
    fn test_deallocate_null_is_noop() {
        let layout = Layout::from_size_align(64, 64).unwrap();
        deallocate(std::ptr::null_mut(), layout);
    }

    #[test]
    fn test_absurd_allocation_reports_oom() {
        let layout = Layout::from_size_align(1usize << 60, 64).unwrap();
        match allocate(layout) {
            Err(AllocError::OutOfMemory { requested, align }) => {
                assert_eq!(requested, 1usize << 60);
                assert_eq!(align, 64);
            }
            other => panic!("expected OutOfMemory, got {other:?}"),
        }
    }

    static HANDLER_CALLED: AtomicBool = AtomicBool::new(false);

    fn declining_handler() -> bool {
        HANDLER_CALLED.store(true, Ordering::SeqCst);
        false
    }

    #[test]
    fn test_failure_handler_is_consulted_and_restored() {
        let previous = set_failure_handler(Some(declining_handler));
        assert!(has_failure_handler());

        let layout = Layout::from_size_align(1usize << 60, 64).unwrap();
        let result = allocate(layout);

        let ours = set_failure_handler(previous);
        assert_eq!(ours, Some(declining_handler as FailureHandler));

        assert!(HANDLER_CALLED.load(Ordering::SeqCst));
        assert!(matches!(result, Err(AllocError::OutOfMemory { .. })));
    }

    #[test]
    fn test_aligned_box_roundtrip() {
        #[repr(C, align(64))]
        #[derive(Debug, PartialEq)]
        struct Wide([u8; 64]);

        let boxed = AlignedBox::new(Wide([7; 64])).unwrap();
        assert!(is_aligned(boxed.addr() as *const u8, 64));
        assert_eq!(boxed.0[13], 7);
    }

    #[test]
    fn test_stats_count_allocations() {
        let before = stats();
        let layout = Layout::from_size_align(128, 128).unwrap();
        let ptr = allocate(layout).unwrap();
        deallocate(ptr.as_ptr(), layout);
        let after = stats();
        // Counters are monotonic, so this holds even with concurrent tests.
        assert!(after.allocation_count > before.allocation_count);
        assert!(after.deallocation_count > before.deallocation_count);
        assert!(after.peak_bytes >= 128);
    }
}
