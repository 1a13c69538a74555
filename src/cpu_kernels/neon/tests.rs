#[cfg(test)]
#[cfg(target_arch = "aarch64")]
mod tests {
    use crate::dispatch::{Op, Tier};
    use crate::memory;
    use crate::pack::{Mask, Pack};
    use crate::validation::Aligned;

    // On aarch64, NEON is always available for this project scope.

    #[test]
    fn test_neon_storage() {
        assert_eq!(Pack::<f32, 4>::TIER, Tier::Native);
        assert_eq!(Pack::<i32, 4>::TIER, Tier::Native);
        assert_eq!(Pack::<f32, 8>::TIER, Tier::Split);
        assert_eq!(Pack::<f64, 4>::TIER, Tier::Scalar);
        assert_eq!(Pack::<f32, 4>::op_tier(Op::Div), Tier::Native);
        assert_eq!(Pack::<i32, 4>::op_tier(Op::Div), Tier::Scalar);
    }

    #[test]
    fn test_neon_add_f32() {
        let a = Aligned([1.0f32; 8]);
        let v = unsafe { memory::load::<f32, 8>(a.as_ptr()) };
        assert_eq!((v + 2.0f32).to_array(), [3.0; 8]);
    }

    #[test]
    fn test_neon_masked_load_and_store() {
        let src = Aligned([4i32, 5, 6, 7]);
        let mask = Mask::<i32, 4>::from_array([false, true, true, false]);
        let v = unsafe { memory::load_masked(src.as_ptr(), &mask) };
        assert_eq!(v.to_array(), [0, 5, 6, 0]);
        let mut dst = Aligned([1i32; 4]);
        unsafe { memory::store_masked(&Pack::splat(-1), dst.as_mut_ptr(), &mask) };
        assert_eq!(*dst, [1, -1, -1, 1]);
    }
}
