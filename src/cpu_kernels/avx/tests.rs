#[cfg(test)]
#[cfg(target_arch = "x86_64")]
mod tests {
    use crate::dispatch::{Op, Tier};
    use crate::memory;
    use crate::pack::{Mask, Pack};
    use crate::validation::Aligned;

    #[test]
    fn test_avx_f32x8_is_native() {
        assert_eq!(Pack::<f32, 8>::TIER, Tier::Native);
        assert_eq!(Pack::<f64, 4>::TIER, Tier::Native);
        assert_eq!(Pack::<f64, 4>::op_tier(Op::StoreMasked), Tier::Native);
    }

    #[test]
    fn test_avx_maskload_ignores_unselected_memory() {
        let src = Aligned([f64::NAN, 2.0, f64::NAN, 4.0]);
        let mask = Mask::<f64, 4>::from_array([false, true, false, true]);
        let v = unsafe { memory::load_masked(src.as_ptr(), &mask) };
        assert_eq!(v.to_array(), [0.0, 2.0, 0.0, 4.0]);
    }

    #[test]
    fn test_avx_maskstore_preserves_memory() {
        let mut dst = Aligned([-1.0f32; 8]);
        let mask = Mask::<f32, 8>::from_array([true, false, false, true, true, false, false, true]);
        unsafe { memory::store_masked(&Pack::splat(3.0), dst.as_mut_ptr(), &mask) };
        assert_eq!(*dst, [3.0, -1.0, -1.0, 3.0, 3.0, -1.0, -1.0, 3.0]);
    }

    #[test]
    fn test_avx_split_to_sse_halves() {
        let v = Pack::<f32, 8>::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(v.lo().to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.hi().to_array(), [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(Pack::<f32, 8>::from_halves(v.hi(), v.lo()).lane(0), 5.0);
    }

    #[test]
    fn test_avx_native_register_round_trip() {
        let v = Pack::<f64, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
        let reg: std::arch::x86_64::__m256d = v.into();
        let back = Pack::<f64, 4>::from(reg);
        assert_eq!(back, v);
        assert_eq!(Pack::<f64, 4>::from_native(v.native()), v);
    }
}
