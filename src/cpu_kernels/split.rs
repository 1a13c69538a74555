//! Composite storage: a width-2N value kept as two width-N halves.
//!
//! Every op recurses into both halves, so an f64x16 on an AVX-512 build runs
//! as two native f64x8 ops, and on a scalar build bottoms out in two `Array`s
//! of four.

use crate::cpu_kernels::{Composite, Kernel};
use crate::dispatch::{Op, Tier};

/// Low half at lanes `[0, N)`, high half at `[N, 2N)`.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Split<H> {
    pub lo: H,
    pub hi: H,
}

macro_rules! split_binary {
    ($($op:ident),+) => {
        $(
            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                Split { lo: self.lo.$op(rhs.lo), hi: self.hi.$op(rhs.hi) }
            }
        )+
    };
}

unsafe impl<H: Kernel> Kernel for Split<H> {
    type Elem = H::Elem;
    const WIDTH: usize = 2 * H::WIDTH;
    const TIER: Tier = Tier::Split;

    fn op_tier(op: Op) -> Tier {
        match op {
            Op::Gather | Op::GatherMasked => Tier::Scalar,
            _ => Tier::Split,
        }
    }

    #[inline(always)]
    fn splat(value: H::Elem) -> Self {
        let half = H::splat(value);
        Split { lo: half, hi: half }
    }

    #[inline(always)]
    unsafe fn load(src: *const H::Elem) -> Self {
        Split { lo: H::load(src), hi: H::load(src.add(H::WIDTH)) }
    }

    #[inline(always)]
    unsafe fn load_masked(src: *const H::Elem, mask: Self) -> Self {
        Split {
            lo: H::load_masked(src, mask.lo),
            hi: H::load_masked(src.add(H::WIDTH), mask.hi),
        }
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut H::Elem) {
        self.lo.store(dst);
        self.hi.store(dst.add(H::WIDTH));
    }

    #[inline(always)]
    unsafe fn store_masked(self, dst: *mut H::Elem, mask: Self) {
        self.lo.store_masked(dst, mask.lo);
        self.hi.store_masked(dst.add(H::WIDTH), mask.hi);
    }

    split_binary!(add, sub, mul, div, rem, and, or, xor, cmp_eq, cmp_lt, cmp_le);
}

impl<H: Kernel> Composite for Split<H> {
    type Half = H;

    #[inline(always)]
    fn split(self) -> (H, H) {
        (self.lo, self.hi)
    }

    #[inline(always)]
    fn join(lo: H, hi: H) -> Self {
        Split { lo, hi }
    }
}
