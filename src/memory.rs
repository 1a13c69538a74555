//! Unchecked load, store and gather.
//!
//! None of these validate their pointers; [`crate::checked`] wraps the same
//! kernels with bounds and alignment checks.
//!
//! Masking differs per operation:
//! - `load_masked` zero-fills unselected lanes,
//! - `store_masked` leaves unselected destination elements untouched,
//! - `gather_masked` keeps the passthrough value in unselected lanes.

use crate::cpu_kernels::Kernel;
use crate::pack::{Lanes, Mask, Pack};
use crate::traits::Offset;

/// Reads `W` contiguous elements starting at `src`.
///
/// # Safety
/// `src` must be valid for `W` reads and aligned to `Pack::<T, W>::ALIGN`.
#[inline(always)]
pub unsafe fn load<T: Lanes<W>, const W: usize>(src: *const T) -> Pack<T, W> {
    Pack::from_repr(<T::Repr as Kernel>::load(src))
}

/// Like [`load`], with `T::ZERO` in every unselected lane.
///
/// # Safety
/// Same as [`load`]. All `W` elements must be readable even when unselected.
#[inline(always)]
pub unsafe fn load_masked<T: Lanes<W>, const W: usize>(src: *const T, mask: &Mask<T, W>) -> Pack<T, W> {
    Pack::from_repr(<T::Repr as Kernel>::load_masked(src, mask.repr()))
}

/// Writes all `W` lanes of `v` to `dst`.
///
/// # Safety
/// `dst` must be valid for `W` writes and aligned to `Pack::<T, W>::ALIGN`.
#[inline(always)]
pub unsafe fn store<T: Lanes<W>, const W: usize>(v: &Pack<T, W>, dst: *mut T) {
    v.repr().store(dst)
}

/// Writes the selected lanes of `v`; unselected elements of `dst` keep their
/// previous contents.
///
/// # Safety
/// Same as [`store`].
#[inline(always)]
pub unsafe fn store_masked<T: Lanes<W>, const W: usize>(v: &Pack<T, W>, dst: *mut T, mask: &Mask<T, W>) {
    v.repr().store_masked(dst, mask.repr())
}

/// Lane `i` is `*base.offset(offsets[i])`. Offsets count elements, not bytes.
///
/// # Safety
/// Every `base.offset(offsets[i])` must be valid for a read.
#[cfg_attr(feature = "vectorize-hint", inline(always))]
#[cfg_attr(not(feature = "vectorize-hint"), inline)]
pub unsafe fn gather<T, O, const W: usize>(base: *const T, offsets: &Pack<O, W>) -> Pack<T, W>
where
    T: Lanes<W>,
    O: Offset + Lanes<W>,
{
    let mut out = Pack::<T, W>::zero();
    for i in 0..W {
        let offset = offsets.lane_unchecked(i).to_isize();
        out.set_lane_unchecked(i, base.offset(offset).read());
    }
    out
}

/// Like [`gather`], but only selected lanes are read; unselected lanes keep
/// the value they have in `src`.
///
/// # Safety
/// `base.offset(offsets[i])` must be valid for a read for every selected `i`.
#[cfg_attr(feature = "vectorize-hint", inline(always))]
#[cfg_attr(not(feature = "vectorize-hint"), inline)]
pub unsafe fn gather_masked<T, O, const W: usize>(
    base: *const T,
    offsets: &Pack<O, W>,
    mask: &Mask<T, W>,
    src: Pack<T, W>,
) -> Pack<T, W>
where
    T: Lanes<W>,
    O: Offset + Lanes<W>,
{
    let mut out = src;
    for i in 0..W {
        if mask.test_unchecked(i) {
            let offset = offsets.lane_unchecked(i).to_isize();
            out.set_lane_unchecked(i, base.offset(offset).read());
        }
    }
    out
}
