//! Scalar-loop storage: one element (`Scalar<T>`, W = 1) or a plain lane
//! array (`Array<T, N>`) for widths the target has no register for.

use crate::cpu_kernels::Kernel;
use crate::dispatch::{Op, Tier};
use crate::traits::Element;

/// A single lane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct Scalar<T>(pub T);

unsafe impl<T: Element> Kernel for Scalar<T> {
    type Elem = T;
    const WIDTH: usize = 1;
    const TIER: Tier = Tier::Scalar;

    fn op_tier(_op: Op) -> Tier {
        Tier::Scalar
    }

    #[inline(always)]
    fn splat(value: T) -> Self {
        Scalar(value)
    }

    #[inline(always)]
    unsafe fn load(src: *const T) -> Self {
        Scalar(src.read())
    }

    #[inline(always)]
    unsafe fn load_masked(src: *const T, mask: Self) -> Self {
        if mask.0.is_selected() {
            Scalar(src.read())
        } else {
            Scalar(T::ZERO)
        }
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut T) {
        dst.write(self.0)
    }

    #[inline(always)]
    unsafe fn store_masked(self, dst: *mut T, mask: Self) {
        if mask.0.is_selected() {
            dst.write(self.0)
        }
    }

    #[inline(always)] fn add(self, rhs: Self) -> Self { Scalar(self.0.elem_add(rhs.0)) }
    #[inline(always)] fn sub(self, rhs: Self) -> Self { Scalar(self.0.elem_sub(rhs.0)) }
    #[inline(always)] fn mul(self, rhs: Self) -> Self { Scalar(self.0.elem_mul(rhs.0)) }
    #[inline(always)] fn div(self, rhs: Self) -> Self { Scalar(self.0.elem_div(rhs.0)) }
    #[inline(always)] fn rem(self, rhs: Self) -> Self { Scalar(self.0.elem_rem(rhs.0)) }
    #[inline(always)] fn and(self, rhs: Self) -> Self { Scalar(self.0.bit_and(rhs.0)) }
    #[inline(always)] fn or(self, rhs: Self) -> Self { Scalar(self.0.bit_or(rhs.0)) }
    #[inline(always)] fn xor(self, rhs: Self) -> Self { Scalar(self.0.bit_xor(rhs.0)) }
}

/// `N` lanes processed one at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Array<T, const N: usize>(pub [T; N]);

impl<T: Element, const N: usize> Array<T, N> {
    #[cfg_attr(feature = "vectorize-hint", inline(always))]
    #[cfg_attr(not(feature = "vectorize-hint"), inline)]
    fn zip(self, rhs: Self, f: fn(T, T) -> T) -> Self {
        Array(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

unsafe impl<T: Element, const N: usize> Kernel for Array<T, N> {
    type Elem = T;
    const WIDTH: usize = N;
    const TIER: Tier = Tier::Scalar;

    fn op_tier(_op: Op) -> Tier {
        Tier::Scalar
    }

    #[inline(always)]
    fn splat(value: T) -> Self {
        Array([value; N])
    }

    #[cfg_attr(feature = "vectorize-hint", inline(always))]
    #[cfg_attr(not(feature = "vectorize-hint"), inline)]
    unsafe fn load(src: *const T) -> Self {
        Array(std::array::from_fn(|i| src.add(i).read()))
    }

    #[cfg_attr(feature = "vectorize-hint", inline(always))]
    #[cfg_attr(not(feature = "vectorize-hint"), inline)]
    unsafe fn load_masked(src: *const T, mask: Self) -> Self {
        Array(std::array::from_fn(|i| {
            if mask.0[i].is_selected() {
                src.add(i).read()
            } else {
                T::ZERO
            }
        }))
    }

    #[cfg_attr(feature = "vectorize-hint", inline(always))]
    #[cfg_attr(not(feature = "vectorize-hint"), inline)]
    unsafe fn store(self, dst: *mut T) {
        for (i, v) in self.0.into_iter().enumerate() {
            dst.add(i).write(v);
        }
    }

    #[cfg_attr(feature = "vectorize-hint", inline(always))]
    #[cfg_attr(not(feature = "vectorize-hint"), inline)]
    unsafe fn store_masked(self, dst: *mut T, mask: Self) {
        for i in 0..N {
            if mask.0[i].is_selected() {
                dst.add(i).write(self.0[i]);
            }
        }
    }

    #[inline(always)] fn add(self, rhs: Self) -> Self { self.zip(rhs, T::elem_add) }
    #[inline(always)] fn sub(self, rhs: Self) -> Self { self.zip(rhs, T::elem_sub) }
    #[inline(always)] fn mul(self, rhs: Self) -> Self { self.zip(rhs, T::elem_mul) }
    #[inline(always)] fn div(self, rhs: Self) -> Self { self.zip(rhs, T::elem_div) }
    #[inline(always)] fn rem(self, rhs: Self) -> Self { self.zip(rhs, T::elem_rem) }
    #[inline(always)] fn and(self, rhs: Self) -> Self { self.zip(rhs, T::bit_and) }
    #[inline(always)] fn or(self, rhs: Self) -> Self { self.zip(rhs, T::bit_or) }
    #[inline(always)] fn xor(self, rhs: Self) -> Self { self.zip(rhs, T::bit_xor) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_masked_load_zero_fills() {
        let x = 42i64;
        let off = unsafe { Scalar::load_masked(&x, Scalar(0)) };
        let on = unsafe { Scalar::load_masked(&x, Scalar(i64::ALL_ONES)) };
        assert_eq!(off.0, 0);
        assert_eq!(on.0, 42);
    }

    #[test]
    fn array_masked_store_skips_unselected() {
        let mut dst = [9.0f64; 4];
        let v = Array([1.0, 2.0, 3.0, 4.0]);
        let m = Array([f64::ALL_ONES, 0.0, f64::ALL_ONES, 0.0]);
        unsafe { v.store_masked(dst.as_mut_ptr(), m) };
        assert_eq!(dst, [1.0, 9.0, 3.0, 9.0]);
    }

    #[test]
    fn array_ops_use_element_semantics() {
        let a = Array([i32::MAX, 7, -7, 10]);
        let b = Array([1, 2, 2, 3]);
        assert_eq!(a.add(b).0, [i32::MIN, 9, -5, 13]);
        assert_eq!(a.rem(b).0, [0, 1, -1, 1]);
        assert_eq!(a.cmp_lt(b).0, [0, 0, -1, 0]);
    }
}
