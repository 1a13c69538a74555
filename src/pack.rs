//! `Pack<T, W>` and `Mask<T, W>`: fixed-width lane values over the storage
//! that [`Lanes`] selects for the build target.

use std::fmt;
use std::mem::{align_of, transmute_copy};
use std::ops::{BitAnd, BitOr, BitXor, Index, IndexMut, Not};

use crate::cpu_kernels::{Composite, Kernel, NativeRepr};
use crate::dispatch::{Op, Tier};
use crate::traits::Element;

/// Element types with a storage for width `W`.
///
/// Implemented for f32/f64/i32/i64 at W = 1, 4, 8, 16. Any other pair has no
/// `Lanes` impl and therefore no `Pack`.
pub trait Lanes<const W: usize>: Element {
    type Repr: Kernel<Elem = Self>;
}

/// `W` lanes of `T`.
#[repr(transparent)]
pub struct Pack<T: Lanes<W>, const W: usize>(pub(crate) T::Repr);

/// Per-lane predicate for `Pack<T, W>`. A selected lane holds the all-ones
/// bit pattern, an unselected lane all zeros.
#[repr(transparent)]
pub struct Mask<T: Lanes<W>, const W: usize>(pub(crate) T::Repr);

impl<T: Lanes<W>, const W: usize> Clone for Pack<T, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Lanes<W>, const W: usize> Copy for Pack<T, W> {}

impl<T: Lanes<W>, const W: usize> Clone for Mask<T, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Lanes<W>, const W: usize> Copy for Mask<T, W> {}

#[inline(always)]
fn check_lane(index: usize, width: usize) {
    assert!(index < width, "lane index {index} out of range for width {width}");
}

// ============================================================================
// Pack
// ============================================================================

impl<T: Lanes<W>, const W: usize> Pack<T, W> {
    pub const WIDTH: usize = W;
    /// Tier of the selected storage.
    pub const TIER: Tier = <T::Repr as Kernel>::TIER;
    /// Alignment `load`/`store` require of their pointer.
    pub const ALIGN: usize = align_of::<T::Repr>();

    /// Tier `op` resolves to for this (T, W) on the build target.
    pub fn op_tier(op: Op) -> Tier {
        <T::Repr as Kernel>::op_tier(op)
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Pack(<T::Repr as Kernel>::splat(value))
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    #[inline(always)]
    pub fn from_array(lanes: [T; W]) -> Self {
        // SAFETY: `Kernel` storage is layout-compatible with `[T; W]`;
        // transmute_copy reads unaligned.
        Pack(unsafe { transmute_copy(&lanes) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; W] {
        // SAFETY: as in `from_array`.
        unsafe { transmute_copy(&self.0) }
    }

    #[inline(always)]
    pub(crate) fn from_repr(repr: T::Repr) -> Self {
        Pack(repr)
    }

    #[inline(always)]
    pub(crate) fn repr(self) -> T::Repr {
        self.0
    }

    /// Lane `index`. Panics when `index >= W`.
    #[inline]
    pub fn lane(self, index: usize) -> T {
        check_lane(index, W);
        // SAFETY: bounds checked above.
        unsafe { self.lane_unchecked(index) }
    }

    /// # Safety
    /// `index < W`.
    #[inline(always)]
    pub unsafe fn lane_unchecked(self, index: usize) -> T {
        crate::cpu_kernels::lane::<T, T::Repr>(&self.0, index)
    }

    /// Panics when `index >= W`.
    #[inline]
    pub fn set_lane(&mut self, index: usize, value: T) {
        check_lane(index, W);
        // SAFETY: bounds checked above.
        unsafe { self.set_lane_unchecked(index, value) }
    }

    /// # Safety
    /// `index < W`.
    #[inline(always)]
    pub unsafe fn set_lane_unchecked(&mut self, index: usize, value: T) {
        crate::cpu_kernels::set_lane::<T, T::Repr>(&mut self.0, index, value)
    }

    /// Copy of `self` with lane `index` set to `value`.
    #[inline]
    pub fn replace(mut self, index: usize, value: T) -> Self {
        self.set_lane(index, value);
        self
    }

    /// Raw register of a native pack.
    #[inline(always)]
    pub fn native(self) -> <T::Repr as NativeRepr>::Register
    where
        T::Repr: NativeRepr,
    {
        self.0.into_register()
    }

    #[inline(always)]
    pub fn from_native(reg: <T::Repr as NativeRepr>::Register) -> Self
    where
        T::Repr: NativeRepr,
    {
        Pack(<T::Repr as NativeRepr>::from_register(reg))
    }

    // ------------------------------------------------------------------------
    // Comparisons (IEEE for floats: any NaN compares unequal and unordered)
    // ------------------------------------------------------------------------

    #[inline(always)]
    pub fn simd_eq(self, rhs: Self) -> Mask<T, W> {
        Mask(self.0.cmp_eq(rhs.0))
    }

    #[inline(always)]
    pub fn simd_ne(self, rhs: Self) -> Mask<T, W> {
        !self.simd_eq(rhs)
    }

    #[inline(always)]
    pub fn simd_lt(self, rhs: Self) -> Mask<T, W> {
        Mask(self.0.cmp_lt(rhs.0))
    }

    #[inline(always)]
    pub fn simd_le(self, rhs: Self) -> Mask<T, W> {
        Mask(self.0.cmp_le(rhs.0))
    }

    #[inline(always)]
    pub fn simd_gt(self, rhs: Self) -> Mask<T, W> {
        Mask(rhs.0.cmp_lt(self.0))
    }

    #[inline(always)]
    pub fn simd_ge(self, rhs: Self) -> Mask<T, W> {
        Mask(rhs.0.cmp_le(self.0))
    }
}

impl<T: Lanes<W>, const W: usize> Default for Pack<T, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Lanes<W>, const W: usize> From<T> for Pack<T, W> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: Lanes<W>, const W: usize> From<[T; W]> for Pack<T, W> {
    #[inline(always)]
    fn from(lanes: [T; W]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Lanes<W>, const W: usize> From<Pack<T, W>> for [T; W] {
    #[inline(always)]
    fn from(v: Pack<T, W>) -> Self {
        v.to_array()
    }
}

/// Lane-wise numeric equality; a NaN lane makes two packs unequal.
impl<T: Lanes<W>, const W: usize> PartialEq for Pack<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<T: Lanes<W>, const W: usize> fmt::Debug for Pack<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pack<{}, {}>{:?}", T::NAME, W, self.to_array())
    }
}

impl<T: Lanes<W>, const W: usize> Index<usize> for Pack<T, W> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        check_lane(index, W);
        // SAFETY: bounds checked; storage is `[T; W]`-compatible and aligned
        // at least to `T`.
        unsafe { &*(&self.0 as *const T::Repr as *const T).add(index) }
    }
}

impl<T: Lanes<W>, const W: usize> IndexMut<usize> for Pack<T, W> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        check_lane(index, W);
        // SAFETY: as in `index`.
        unsafe { &mut *(&mut self.0 as *mut T::Repr as *mut T).add(index) }
    }
}

// ============================================================================
// Mask
// ============================================================================

impl<T: Lanes<W>, const W: usize> Mask<T, W> {
    pub const WIDTH: usize = W;

    #[inline(always)]
    fn lane_bits(selected: bool) -> T {
        if selected {
            T::ALL_ONES
        } else {
            T::ZERO
        }
    }

    #[inline(always)]
    pub fn splat(selected: bool) -> Self {
        Mask(<T::Repr as Kernel>::splat(Self::lane_bits(selected)))
    }

    #[inline]
    pub fn from_array(selected: [bool; W]) -> Self {
        Mask(Pack::<T, W>::from_array(selected.map(Self::lane_bits)).0)
    }

    #[inline]
    pub fn to_array(self) -> [bool; W] {
        Pack::<T, W>(self.0).to_array().map(Element::is_selected)
    }

    /// Whether lane `index` is selected. Panics when `index >= W`.
    #[inline]
    pub fn test(self, index: usize) -> bool {
        check_lane(index, W);
        // SAFETY: bounds checked above.
        unsafe { self.test_unchecked(index) }
    }

    /// # Safety
    /// `index < W`.
    #[inline(always)]
    pub unsafe fn test_unchecked(self, index: usize) -> bool {
        crate::cpu_kernels::lane::<T, T::Repr>(&self.0, index).is_selected()
    }

    /// Panics when `index >= W`.
    #[inline]
    pub fn set(&mut self, index: usize, selected: bool) {
        check_lane(index, W);
        // SAFETY: bounds checked above.
        unsafe { crate::cpu_kernels::set_lane::<T, T::Repr>(&mut self.0, index, Self::lane_bits(selected)) }
    }

    pub fn any(self) -> bool {
        self.to_array().iter().any(|&s| s)
    }

    pub fn all(self) -> bool {
        self.to_array().iter().all(|&s| s)
    }

    pub fn none(self) -> bool {
        !self.any()
    }

    /// Number of selected lanes.
    pub fn count(self) -> usize {
        self.to_array().iter().filter(|&&s| s).count()
    }

    /// Lanes of `if_set` where selected, of `if_clear` elsewhere.
    #[inline(always)]
    pub fn select(self, if_set: Pack<T, W>, if_clear: Pack<T, W>) -> Pack<T, W> {
        let keep = if_set.0.and(self.0);
        let other = if_clear.0.and((!self).0);
        Pack(keep.or(other))
    }

    /// The mask as a pack of raw lane patterns.
    #[inline(always)]
    pub fn to_bits(self) -> Pack<T, W> {
        Pack(self.0)
    }

    #[inline(always)]
    pub(crate) fn repr(self) -> T::Repr {
        self.0
    }
}

impl<T: Lanes<W>, const W: usize> Default for Mask<T, W> {
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<T: Lanes<W>, const W: usize> From<[bool; W]> for Mask<T, W> {
    fn from(selected: [bool; W]) -> Self {
        Self::from_array(selected)
    }
}

impl<T: Lanes<W>, const W: usize> PartialEq for Mask<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<T: Lanes<W>, const W: usize> Eq for Mask<T, W> {}

impl<T: Lanes<W>, const W: usize> fmt::Debug for Mask<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask<{}, {}>{:?}", T::NAME, W, self.to_array())
    }
}

impl<T: Lanes<W>, const W: usize> BitAnd for Mask<T, W> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Mask(self.0.and(rhs.0))
    }
}

impl<T: Lanes<W>, const W: usize> BitOr for Mask<T, W> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Mask(self.0.or(rhs.0))
    }
}

impl<T: Lanes<W>, const W: usize> BitXor for Mask<T, W> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Mask(self.0.xor(rhs.0))
    }
}

impl<T: Lanes<W>, const W: usize> Not for Mask<T, W> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Mask(self.0.xor(<T::Repr as Kernel>::splat(T::ALL_ONES)))
    }
}

// ============================================================================
// Halves
// ============================================================================

macro_rules! impl_halves {
    ($w:literal => $h:literal) => {
        impl<T> Pack<T, $w>
        where
            T: Lanes<$w> + Lanes<$h>,
            <T as Lanes<$w>>::Repr: Composite<Half = <T as Lanes<$h>>::Repr>,
        {
            /// Lanes `[0, W/2)`.
            #[inline(always)]
            pub fn lo(self) -> Pack<T, $h> {
                Pack(self.0.split().0)
            }

            /// Lanes `[W/2, W)`.
            #[inline(always)]
            pub fn hi(self) -> Pack<T, $h> {
                Pack(self.0.split().1)
            }

            #[inline(always)]
            pub fn split(self) -> (Pack<T, $h>, Pack<T, $h>) {
                let (lo, hi) = self.0.split();
                (Pack(lo), Pack(hi))
            }

            /// Concatenates `lo` (lanes `[0, W/2)`) and `hi`.
            #[inline(always)]
            pub fn from_halves(lo: Pack<T, $h>, hi: Pack<T, $h>) -> Self {
                Pack(<<T as Lanes<$w>>::Repr as Composite>::join(lo.0, hi.0))
            }
        }

        impl<T> Mask<T, $w>
        where
            T: Lanes<$w> + Lanes<$h>,
            <T as Lanes<$w>>::Repr: Composite<Half = <T as Lanes<$h>>::Repr>,
        {
            #[inline(always)]
            pub fn lo(self) -> Mask<T, $h> {
                Mask(self.0.split().0)
            }

            #[inline(always)]
            pub fn hi(self) -> Mask<T, $h> {
                Mask(self.0.split().1)
            }

            #[inline(always)]
            pub fn from_halves(lo: Mask<T, $h>, hi: Mask<T, $h>) -> Self {
                Mask(<<T as Lanes<$w>>::Repr as Composite>::join(lo.0, hi.0))
            }
        }
    };
}

impl_halves!(8 => 4);
impl_halves!(16 => 8);
