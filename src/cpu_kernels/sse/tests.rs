#[cfg(test)]
#[cfg(target_arch = "x86_64")]
mod tests {
    use std::arch::x86_64::{__m128, __m128i};

    use crate::cpu_kernels::{Kernel, Native};
    use crate::dispatch::{Op, Tier};
    use crate::validation::Aligned;

    type F32x4 = Native<__m128, f32>;
    type I32x4 = Native<__m128i, i32>;

    #[test]
    fn test_sse_add_f32() {
        let a = Aligned([1.0f32, 2.0, 3.0, 4.0]);
        let mut out = Aligned([0.0f32; 4]);
        unsafe {
            let va = F32x4::load(a.as_ptr());
            va.add(F32x4::splat(0.5)).store(out.as_mut_ptr());
        }
        assert_eq!(*out, [1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn test_sse_masked_load_clears() {
        let a = Aligned([9i32, 9, 9, 9]);
        let mask = unsafe { I32x4::load(Aligned([-1i32, 0, -1, 0]).as_ptr()) };
        let mut out = Aligned([0i32; 4]);
        unsafe { I32x4::load_masked(a.as_ptr(), mask).store(out.as_mut_ptr()) };
        assert_eq!(*out, [9, 0, 9, 0]);
    }

    #[test]
    fn test_sse_masked_store_falls_back_per_lane() {
        assert_eq!(F32x4::op_tier(Op::StoreMasked), Tier::Scalar);
        let mask = unsafe { F32x4::load(Aligned([0.0f32, f32::from_bits(u32::MAX), 0.0, 0.0]).as_ptr()) };
        let mut out = Aligned([7.0f32; 4]);
        unsafe { F32x4::splat(1.0).store_masked(out.as_mut_ptr(), mask) };
        assert_eq!(*out, [7.0, 1.0, 7.0, 7.0]);
    }

    #[test]
    fn test_sse_i32_mul_tier() {
        let expected = if cfg!(target_feature = "sse4.1") { Tier::Native } else { Tier::Scalar };
        assert_eq!(I32x4::op_tier(Op::Mul), expected);
        let mut out = Aligned([0i32; 4]);
        unsafe { I32x4::splat(-3).mul(I32x4::splat(7)).store(out.as_mut_ptr()) };
        assert_eq!(*out, [-21; 4]);
    }

    #[test]
    fn test_sse_rem_uses_lane_loop() {
        assert_eq!(F32x4::op_tier(Op::Rem), Tier::Scalar);
        let mut out = Aligned([0.0f32; 4]);
        unsafe { F32x4::splat(7.5).rem(F32x4::splat(2.0)).store(out.as_mut_ptr()) };
        assert_eq!(*out, [1.5; 4]);
    }
}
