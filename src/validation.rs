//! Validation for the checked entry points.
//!
//! Each check is a small inline function returning `PackResult<()>`, so the
//! checked wrappers read as a list of `?` lines before the unchecked call.
//!
//! # Design
//!
//! - All checks return `PackError`, never panic
//! - Offsets are validated with `checked_add` / sign checks, not pointer math

use std::ops::{Deref, DerefMut};

use thiserror::Error;

use crate::dispatch::IsaLevel;
use crate::traits::{Element, Offset};

/// Contract violations the checked path reports instead of invoking UB.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("buffer holds {len} elements, {needed} required")]
    ShortBuffer { needed: usize, len: usize },
    #[error("address {addr:#x} is not aligned to {align} bytes")]
    Misaligned { addr: usize, align: usize },
    #[error("lane {lane}: offset {offset} outside buffer of {len} elements")]
    OffsetOutOfRange { lane: usize, offset: i64, len: usize },
    #[error("lane index {index} out of range for width {width}")]
    LaneOutOfRange { index: usize, width: usize },
    #[error("lane {lane}: integer division by zero")]
    DivideByZero { lane: usize },
    #[error("lane {lane}: integer division overflow (MIN / -1)")]
    DivideOverflow { lane: usize },
    #[error("built for {compiled}, host supports only {host}")]
    UnsupportedHost { compiled: IsaLevel, host: IsaLevel },
}

pub type PackResult<T> = Result<T, PackError>;

/// Validate that a buffer holds at least `needed` elements.
#[inline]
pub fn validate_len(len: usize, needed: usize) -> PackResult<()> {
    if len < needed {
        return Err(PackError::ShortBuffer { needed, len });
    }
    Ok(())
}

/// Validate that `ptr` is aligned to `align` bytes.
#[inline]
pub fn validate_alignment<T>(ptr: *const T, align: usize) -> PackResult<()> {
    let addr = ptr as usize;
    if addr % align != 0 {
        return Err(PackError::Misaligned { addr, align });
    }
    Ok(())
}

/// Validate a gather offset against a buffer of `len` elements.
#[inline]
pub fn validate_offset<O: Offset>(lane: usize, offset: O, len: usize) -> PackResult<()> {
    let off = offset.to_i64();
    if off < 0 || off as u64 >= len as u64 {
        return Err(PackError::OffsetOutOfRange { lane, offset: off, len });
    }
    Ok(())
}

/// Validate a lane index against a width.
#[inline]
pub fn validate_lane(index: usize, width: usize) -> PackResult<()> {
    if index >= width {
        return Err(PackError::LaneOutOfRange { index, width });
    }
    Ok(())
}

/// Validate one lane of an integer division. Float lanes always pass.
#[inline]
pub fn validate_divisor<T: Element>(lane: usize, lhs: T, rhs: T) -> PackResult<()> {
    if lhs.checked_div(rhs).is_none() {
        return Err(PackError::DivideByZero { lane });
    }
    if lhs.div_overflows(rhs) {
        return Err(PackError::DivideOverflow { lane });
    }
    Ok(())
}

/// 64-byte aligned storage; satisfies `Pack::<T, W>::ALIGN` for every pack.
///
/// # Example
/// ```
/// use lanepack::{checked, Aligned};
///
/// let buf = Aligned([1.0f32; 16]);
/// let v = checked::load::<f32, 16>(&buf[..]).unwrap();
/// assert_eq!(v.lane(15), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C, align(64))]
pub struct Aligned<A>(pub A);

impl<A> Deref for Aligned<A> {
    type Target = A;

    fn deref(&self) -> &A {
        &self.0
    }
}

impl<A> DerefMut for Aligned<A> {
    fn deref_mut(&mut self) -> &mut A {
        &mut self.0
    }
}
