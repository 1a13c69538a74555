#[cfg(test)]
#[cfg(target_arch = "x86_64")]
mod tests {
    use crate::dispatch::{Op, Tier};
    use crate::memory;
    use crate::pack::{Mask, Pack};
    use crate::validation::Aligned;

    #[test]
    fn test_avx2_integer_storage_is_native() {
        assert_eq!(Pack::<i32, 8>::TIER, Tier::Native);
        assert_eq!(Pack::<i64, 4>::TIER, Tier::Native);
        assert_eq!(Pack::<i32, 8>::op_tier(Op::Mul), Tier::Native);
        // no 64-bit low multiply without AVX-512DQ
        assert_eq!(Pack::<i64, 4>::op_tier(Op::Mul), Tier::Scalar);
        assert_eq!(Pack::<i32, 8>::op_tier(Op::Div), Tier::Scalar);
    }

    #[test]
    fn test_avx2_i64_mul_wraps_like_scalar() {
        let a = Pack::<i64, 4>::from_array([i64::MAX, -3, 1 << 40, 0]);
        let b = Pack::<i64, 4>::from_array([2, 5, 1 << 30, 9]);
        let expected: [i64; 4] = std::array::from_fn(|i| a.lane(i).wrapping_mul(b.lane(i)));
        assert_eq!((a * b).to_array(), expected);
    }

    #[test]
    fn test_avx2_masked_round_trip_i32() {
        let src = Aligned([1i32, 2, 3, 4, 5, 6, 7, 8]);
        let mask = Mask::<i32, 8>::from_array([true, true, false, false, true, true, false, false]);
        let v = unsafe { memory::load_masked(src.as_ptr(), &mask) };
        assert_eq!(v.to_array(), [1, 2, 0, 0, 5, 6, 0, 0]);

        let mut dst = Aligned([100i32; 8]);
        unsafe { memory::store_masked(&v, dst.as_mut_ptr(), &!mask) };
        assert_eq!(*dst, [100, 100, 0, 0, 100, 100, 0, 0]);
    }

    #[test]
    fn test_avx2_split_to_sse_halves() {
        let v = Pack::<i32, 8>::from_array([10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!(v.hi().to_array(), [14, 15, 16, 17]);
        assert_eq!(Pack::<i32, 8>::from_halves(v.lo(), v.hi()), v);
    }
}
