/// Implements [`Kernel`](crate::cpu_kernels::Kernel) for one native register
/// storage.
///
/// This macro is the "Layer 2" of the architecture. It takes an ISA
/// identifier, an element type, a width and the register type, and routes
/// every kernel operation through `simd_primitive!` for that key. Ops the
/// table has no instruction for land on its lane-loop arms, and `op_tier`
/// reports them as `Scalar`. Also emits the `From` conversions between the
/// register and its `Pack`.
#[macro_export]
macro_rules! expand_isa_impls {
    ($isa:ident, $elem:ident, $w:tt, $reg:ty) => {
        unsafe impl $crate::cpu_kernels::Kernel for $crate::cpu_kernels::Native<$reg, $elem> {
            type Elem = $elem;
            const WIDTH: usize = $w;
            const TIER: $crate::dispatch::Tier = $crate::dispatch::Tier::Native;

            fn op_tier(op: $crate::dispatch::Op) -> $crate::dispatch::Tier {
                const NATIVE: &[$crate::dispatch::Op] = $crate::simd_primitive!($isa, $elem, $w, native_ops);
                match op {
                    $crate::dispatch::Op::Gather | $crate::dispatch::Op::GatherMasked => {
                        $crate::dispatch::Tier::Scalar
                    }
                    _ if NATIVE.contains(&op) => $crate::dispatch::Tier::Native,
                    _ => $crate::dispatch::Tier::Scalar,
                }
            }

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                #[allow(unused_unsafe)]
                unsafe { Self::wrap($crate::simd_primitive!($isa, $elem, $w, splat, value)) }
            }

            #[inline(always)]
            unsafe fn load(src: *const $elem) -> Self {
                Self::wrap($crate::simd_primitive!($isa, $elem, $w, load, src))
            }

            #[inline(always)]
            unsafe fn load_masked(src: *const $elem, mask: Self) -> Self {
                Self::wrap($crate::simd_primitive!($isa, $elem, $w, load_masked, src, mask.register()))
            }

            #[inline(always)]
            unsafe fn store(self, dst: *mut $elem) {
                $crate::simd_primitive!($isa, $elem, $w, store, dst, self.register())
            }

            #[inline(always)]
            unsafe fn store_masked(self, dst: *mut $elem, mask: Self) {
                $crate::simd_primitive!($isa, $elem, $w, store_masked, dst, self.register(), mask.register())
            }

            $crate::expand_isa_impls!(@binary $isa, $elem, $w, add, sub, mul, div, rem, and, or, xor);
        }

        impl From<$reg> for $crate::pack::Pack<$elem, $w> {
            #[inline(always)]
            fn from(reg: $reg) -> Self {
                Self::from_native(reg)
            }
        }

        impl From<$crate::pack::Pack<$elem, $w>> for $reg {
            #[inline(always)]
            fn from(v: $crate::pack::Pack<$elem, $w>) -> Self {
                v.native()
            }
        }
    };

    (@binary $isa:ident, $elem:ident, $w:tt, $($op:ident),+) => {
        $(
            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                #[allow(unused_unsafe)]
                unsafe {
                    Self::wrap($crate::simd_primitive!($isa, $elem, $w, $op, self.register(), rhs.register()))
                }
            }
        )+
    };
}

/// Implements [`Composite`](crate::cpu_kernels::Composite) for a native
/// register that is exactly two native half registers, so `lo()`/`hi()` on a
/// native pack stay in registers instead of bouncing through memory.
#[macro_export]
macro_rules! expand_composite_impls {
    ($isa:ident, $elem:ident, $w:tt, $reg:ty, $half:ty) => {
        impl $crate::cpu_kernels::Composite for $crate::cpu_kernels::Native<$reg, $elem> {
            type Half = $crate::cpu_kernels::Native<$half, $elem>;

            #[inline(always)]
            fn split(self) -> (Self::Half, Self::Half) {
                let v = self.register();
                #[allow(unused_unsafe)]
                unsafe {
                    (
                        $crate::cpu_kernels::Native::wrap($crate::simd_primitive!($isa, $elem, $w, lo, v)),
                        $crate::cpu_kernels::Native::wrap($crate::simd_primitive!($isa, $elem, $w, hi, v)),
                    )
                }
            }

            #[inline(always)]
            fn join(lo: Self::Half, hi: Self::Half) -> Self {
                #[allow(unused_unsafe)]
                unsafe {
                    Self::wrap($crate::simd_primitive!($isa, $elem, $w, join, lo.register(), hi.register()))
                }
            }
        }
    };
}
