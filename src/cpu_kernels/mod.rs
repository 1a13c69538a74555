//! # CPU Kernel Tiers
//!
//! Storage types behind `Pack<T, W>` and the operations on them:
//!
//! | Storage        | Tier     | Used for                                        |
//! |----------------|----------|-------------------------------------------------|
//! | `Scalar<T>`    | `Scalar` | W = 1                                           |
//! | `Array<T, N>`  | `Scalar` | W = 4 when the target has no 4-lane register    |
//! | `Split<H>`     | `Split`  | W = 8, 16 when the target has no W-lane register |
//! | `Native<R, T>` | `Native` | a hardware register `R` holding W lanes of `T`  |
//!
//! Native storage is generated per ISA by `expand_isa_impls!` from the
//! `simd_primitive!` table; `select` maps each (T, W) to the storage the
//! active target features allow.
//!
//! All storages are layout-compatible with `[T; W]`, which the per-lane
//! helpers at the bottom of this file rely on.

use std::marker::PhantomData;
use std::mem::size_of;

use crate::dispatch::{Op, Tier};
use crate::traits::Element;

pub mod scalar;
pub mod select;
pub mod split;

#[cfg(target_arch = "x86_64")]
pub mod avx;
#[cfg(target_arch = "x86_64")]
pub mod avx2;
#[cfg(target_arch = "x86_64")]
pub mod avx512;
#[cfg(target_arch = "aarch64")]
pub mod neon;
#[cfg(target_arch = "x86_64")]
pub mod sse;

pub use scalar::{Array, Scalar};
pub use split::Split;

/// Lane storage for one (element, width) pair.
///
/// # Safety
/// Implementors must be `#[repr]`-compatible with `[Self::Elem; Self::WIDTH]`:
/// same size, lane `i` at byte offset `i * size_of::<Elem>()`.
pub unsafe trait Kernel: Copy + Send + Sync + 'static {
    type Elem: Element;
    const WIDTH: usize;
    /// Tier of the storage itself.
    const TIER: Tier;

    /// Tier a given op resolves to on this storage.
    fn op_tier(op: Op) -> Tier;

    fn splat(value: Self::Elem) -> Self;

    /// # Safety
    /// `src` must be valid for `WIDTH` reads and aligned to `align_of::<Self>()`.
    unsafe fn load(src: *const Self::Elem) -> Self;
    /// Unselected lanes come back as `Elem::ZERO`.
    ///
    /// # Safety
    /// Same as [`Kernel::load`]; every lane must be readable even if unselected.
    unsafe fn load_masked(src: *const Self::Elem, mask: Self) -> Self;
    /// # Safety
    /// `dst` must be valid for `WIDTH` writes and aligned to `align_of::<Self>()`.
    unsafe fn store(self, dst: *mut Self::Elem);
    /// Writes selected lanes only; unselected destination elements are not touched.
    ///
    /// # Safety
    /// Same as [`Kernel::store`].
    unsafe fn store_masked(self, dst: *mut Self::Elem, mask: Self);

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    fn rem(self, rhs: Self) -> Self;
    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;

    /// Mask with lanes set where `self == rhs`.
    fn cmp_eq(self, rhs: Self) -> Self {
        compare_lanes(self, rhs, |a, b| a == b)
    }
    fn cmp_lt(self, rhs: Self) -> Self {
        compare_lanes(self, rhs, |a, b| a < b)
    }
    fn cmp_le(self, rhs: Self) -> Self {
        compare_lanes(self, rhs, |a, b| a <= b)
    }
}

/// Storage that is exactly a low half followed by a high half.
pub trait Composite: Kernel {
    type Half: Kernel<Elem = Self::Elem>;

    fn split(self) -> (Self::Half, Self::Half);
    fn join(lo: Self::Half, hi: Self::Half) -> Self;
}

/// A hardware register `R` holding lanes of `T`.
///
/// The element parameter keeps `__m256i` as i32x8 and `__m256i` as i64x4
/// apart at the type level.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Native<R, T> {
    reg: R,
    _elem: PhantomData<T>,
}

impl<R: Copy, T> Native<R, T> {
    #[inline(always)]
    pub const fn wrap(reg: R) -> Self {
        Self { reg, _elem: PhantomData }
    }

    #[inline(always)]
    pub fn register(self) -> R {
        self.reg
    }
}

/// Native storage and its raw register type.
pub trait NativeRepr: Kernel {
    type Register: Copy;

    fn from_register(reg: Self::Register) -> Self;
    fn into_register(self) -> Self::Register;
}

impl<R: Copy, T> NativeRepr for Native<R, T>
where
    Native<R, T>: Kernel,
{
    type Register = R;

    #[inline(always)]
    fn from_register(reg: R) -> Self {
        Self::wrap(reg)
    }

    #[inline(always)]
    fn into_register(self) -> R {
        self.reg
    }
}

// ============================================================================
// Per-lane helpers
// ============================================================================
// These operate on the memory image of a storage value. They back the
// lane-loop arms of `simd_primitive!`, lane access and comparisons.

#[inline(always)]
const fn lanes_in<R, T>() -> usize {
    size_of::<R>() / size_of::<T>()
}

/// Reads lane `i` of a register image.
///
/// # Safety
/// `R` must be layout-compatible with `[T; N]` and `i < N`.
#[inline(always)]
pub unsafe fn lane<T: Element, R: Copy>(v: &R, i: usize) -> T {
    (v as *const R as *const T).add(i).read_unaligned()
}

/// Writes lane `i` of a register image.
///
/// # Safety
/// Same as [`lane`].
#[inline(always)]
pub unsafe fn set_lane<T: Element, R: Copy>(v: &mut R, i: usize, value: T) {
    (v as *mut R as *mut T).add(i).write_unaligned(value)
}

/// Applies `f` lane by lane to two register images.
///
/// # Safety
/// `R` must be layout-compatible with `[T; N]`.
#[cfg_attr(feature = "vectorize-hint", inline(always))]
#[cfg_attr(not(feature = "vectorize-hint"), inline)]
pub unsafe fn zip_register<T: Element, R: Copy>(a: R, b: R, f: fn(T, T) -> T) -> R {
    let mut out = a;
    for i in 0..lanes_in::<R, T>() {
        set_lane(&mut out, i, f(lane::<T, R>(&a, i), lane::<T, R>(&b, i)));
    }
    out
}

/// Zero-filled load of the selected lanes.
///
/// # Safety
/// `R` must be layout-compatible with `[T; N]`; `src` valid for the selected lanes.
#[cfg_attr(feature = "vectorize-hint", inline(always))]
#[cfg_attr(not(feature = "vectorize-hint"), inline)]
pub unsafe fn load_register_masked<T: Element, R: Copy>(src: *const T, mask: R) -> R {
    let mut out: R = std::mem::zeroed();
    for i in 0..lanes_in::<R, T>() {
        if lane::<T, R>(&mask, i).is_selected() {
            set_lane(&mut out, i, src.add(i).read());
        }
    }
    out
}

/// Stores the selected lanes, leaving the others untouched.
///
/// # Safety
/// `R` must be layout-compatible with `[T; N]`; `dst` valid for the selected lanes.
#[cfg_attr(feature = "vectorize-hint", inline(always))]
#[cfg_attr(not(feature = "vectorize-hint"), inline)]
pub unsafe fn store_register_masked<T: Element, R: Copy>(dst: *mut T, v: R, mask: R) {
    for i in 0..lanes_in::<R, T>() {
        if lane::<T, R>(&mask, i).is_selected() {
            dst.add(i).write(lane::<T, R>(&v, i));
        }
    }
}

/// Lane-wise predicate producing a mask image (`ALL_ONES` / `ZERO`).
#[cfg_attr(feature = "vectorize-hint", inline(always))]
#[cfg_attr(not(feature = "vectorize-hint"), inline)]
pub fn compare_lanes<K: Kernel>(a: K, b: K, f: impl Fn(K::Elem, K::Elem) -> bool) -> K {
    let mut out = a;
    for i in 0..K::WIDTH {
        // SAFETY: `Kernel` guarantees the `[Elem; WIDTH]` layout.
        unsafe {
            let hit = f(lane::<K::Elem, K>(&a, i), lane::<K::Elem, K>(&b, i));
            set_lane(&mut out, i, if hit { <K::Elem as Element>::ALL_ONES } else { <K::Elem as Element>::ZERO });
        }
    }
    out
}
