//! Checked mode: slice-based entry points that validate lengths, alignment,
//! offsets, lane indices and integer divisors, then call the same kernels as
//! the unchecked path. A passing call returns exactly what the unchecked call
//! would.
//!
//! Rejections are logged at `debug` and returned as [`PackError`].

use crate::memory;
use crate::pack::{Lanes, Mask, Pack};
use crate::traits::Offset;
use crate::validation::{
    validate_alignment, validate_divisor, validate_lane, validate_len, validate_offset, PackError,
    PackResult,
};

fn reject<T>(op: &str, err: PackError) -> PackResult<T> {
    log::debug!("checked {op} rejected: {err}");
    Err(err)
}

fn validate_buffer<T: Lanes<W>, const W: usize>(ptr: *const T, len: usize) -> PackResult<()> {
    validate_len(len, W)?;
    validate_alignment(ptr, Pack::<T, W>::ALIGN)
}

/// Reads the first `W` elements of `src`, which must be aligned to
/// `Pack::<T, W>::ALIGN`.
pub fn load<T: Lanes<W>, const W: usize>(src: &[T]) -> PackResult<Pack<T, W>> {
    if let Err(e) = validate_buffer::<T, W>(src.as_ptr(), src.len()) {
        return reject("load", e);
    }
    // SAFETY: length and alignment validated.
    Ok(unsafe { memory::load(src.as_ptr()) })
}

pub fn load_masked<T: Lanes<W>, const W: usize>(src: &[T], mask: &Mask<T, W>) -> PackResult<Pack<T, W>> {
    if let Err(e) = validate_buffer::<T, W>(src.as_ptr(), src.len()) {
        return reject("load_masked", e);
    }
    // SAFETY: length and alignment validated.
    Ok(unsafe { memory::load_masked(src.as_ptr(), mask) })
}

pub fn store<T: Lanes<W>, const W: usize>(v: &Pack<T, W>, dst: &mut [T]) -> PackResult<()> {
    if let Err(e) = validate_buffer::<T, W>(dst.as_ptr(), dst.len()) {
        return reject("store", e);
    }
    // SAFETY: length and alignment validated.
    unsafe { memory::store(v, dst.as_mut_ptr()) };
    Ok(())
}

pub fn store_masked<T: Lanes<W>, const W: usize>(
    v: &Pack<T, W>,
    dst: &mut [T],
    mask: &Mask<T, W>,
) -> PackResult<()> {
    if let Err(e) = validate_buffer::<T, W>(dst.as_ptr(), dst.len()) {
        return reject("store_masked", e);
    }
    // SAFETY: length and alignment validated.
    unsafe { memory::store_masked(v, dst.as_mut_ptr(), mask) };
    Ok(())
}

/// Every offset must index into `base`.
pub fn gather<T, O, const W: usize>(base: &[T], offsets: &Pack<O, W>) -> PackResult<Pack<T, W>>
where
    T: Lanes<W>,
    O: Offset + Lanes<W>,
{
    for (lane, offset) in offsets.to_array().into_iter().enumerate() {
        if let Err(e) = validate_offset(lane, offset, base.len()) {
            return reject("gather", e);
        }
    }
    // SAFETY: every offset validated against `base`.
    Ok(unsafe { memory::gather(base.as_ptr(), offsets) })
}

/// Only offsets of selected lanes must index into `base`.
pub fn gather_masked<T, O, const W: usize>(
    base: &[T],
    offsets: &Pack<O, W>,
    mask: &Mask<T, W>,
    src: Pack<T, W>,
) -> PackResult<Pack<T, W>>
where
    T: Lanes<W>,
    O: Offset + Lanes<W>,
{
    let selected = mask.to_array();
    for (lane, offset) in offsets.to_array().into_iter().enumerate() {
        if !selected[lane] {
            continue;
        }
        if let Err(e) = validate_offset(lane, offset, base.len()) {
            return reject("gather_masked", e);
        }
    }
    // SAFETY: every selected offset validated against `base`.
    Ok(unsafe { memory::gather_masked(base.as_ptr(), offsets, mask, src) })
}

pub fn lane<T: Lanes<W>, const W: usize>(v: &Pack<T, W>, index: usize) -> PackResult<T> {
    if let Err(e) = validate_lane(index, W) {
        return reject("lane", e);
    }
    // SAFETY: index validated.
    Ok(unsafe { v.lane_unchecked(index) })
}

pub fn set_lane<T: Lanes<W>, const W: usize>(v: &mut Pack<T, W>, index: usize, value: T) -> PackResult<()> {
    if let Err(e) = validate_lane(index, W) {
        return reject("set_lane", e);
    }
    // SAFETY: index validated.
    unsafe { v.set_lane_unchecked(index, value) };
    Ok(())
}

fn validate_quotient<T: Lanes<W>, const W: usize>(op: &str, a: &Pack<T, W>, b: &Pack<T, W>) -> PackResult<()> {
    let (a, b) = (a.to_array(), b.to_array());
    for lane in 0..W {
        if let Err(e) = validate_divisor(lane, a[lane], b[lane]) {
            return reject(op, e);
        }
    }
    Ok(())
}

/// `a / b`, rejecting integer division by zero and `MIN / -1` instead of
/// panicking or wrapping.
pub fn div<T: Lanes<W>, const W: usize>(a: Pack<T, W>, b: Pack<T, W>) -> PackResult<Pack<T, W>> {
    validate_quotient("div", &a, &b)?;
    Ok(a / b)
}

/// `a % b` with the same checks as [`div`].
pub fn rem<T: Lanes<W>, const W: usize>(a: Pack<T, W>, b: Pack<T, W>) -> PackResult<Pack<T, W>> {
    validate_quotient("rem", &a, &b)?;
    Ok(a % b)
}
