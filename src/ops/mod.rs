//! Lane-wise operators on `Pack<T, W>`.
//!
//! `+ - * / %` follow the element type: integers wrap, integer `/` and `%`
//! by zero panic, floats follow IEEE-754 and `%` is the truncated remainder.
//! `& | ^` act on the bit pattern, floats included.
//!
//! Every operator also accepts a scalar on either side, broadcast to all
//! lanes, when the scalar widens losslessly into the element type
//! (see [`Broadcast`](crate::traits::Broadcast)).

crate::define_pack_binary_op!(Add, add, AddAssign, add_assign, add);
crate::define_pack_binary_op!(Sub, sub, SubAssign, sub_assign, sub);
crate::define_pack_binary_op!(Mul, mul, MulAssign, mul_assign, mul);
crate::define_pack_binary_op!(Div, div, DivAssign, div_assign, div);
crate::define_pack_binary_op!(Rem, rem, RemAssign, rem_assign, rem);
crate::define_pack_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
crate::define_pack_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, or);
crate::define_pack_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

crate::define_pack_scalar_ops!(f32 <= f32, i16, u16);
crate::define_pack_scalar_ops!(f64 <= f64, f32, i32, u32);
crate::define_pack_scalar_ops!(i32 <= i32, i16, u16);
crate::define_pack_scalar_ops!(i64 <= i64, i32, u32);

#[cfg(test)]
mod tests {
    use crate::pack::Pack;

    #[test]
    fn float_division_w4() {
        let a = Pack::<f32, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
        let b = Pack::<f32, 4>::splat(2.0);
        assert_eq!((a / b).to_array(), [0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn integer_remainder_w8() {
        let a = Pack::<i32, 8>::from_array([10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!((a % 3i32).to_array(), [1, 2, 0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn compound_assignment_mutates_left_only() {
        let mut a = Pack::<i64, 16>::splat(5);
        let b = Pack::<i64, 16>::splat(3);
        a -= b;
        a *= 2i32;
        assert_eq!(a, Pack::splat(4));
        assert_eq!(b, Pack::splat(3));
    }

    #[test]
    fn scalar_on_either_side() {
        let v = Pack::<f64, 8>::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let left = 10.0f32 - v;
        let right = v - 10u32;
        assert_eq!(left.lane(0), 9.0);
        assert_eq!(right.lane(7), -2.0);
        assert_eq!((2i16 * Pack::<i32, 4>::splat(21)).to_array(), [42; 4]);
    }

    #[test]
    fn integer_arithmetic_wraps() {
        let a = Pack::<i32, 8>::splat(i32::MAX);
        assert_eq!((a + 1i32).to_array(), [i32::MIN; 8]);
        let m = Pack::<i64, 4>::splat(i64::MIN);
        assert_eq!((m / -1i64).to_array(), [i64::MIN; 4]);
        assert_eq!((Pack::<i64, 4>::splat(i64::MAX) * 2i64).lane(0), -2);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let a = Pack::<i32, 4>::splat(1);
        let _ = a / Pack::<i32, 4>::from_array([1, 1, 0, 1]);
    }

    #[test]
    fn float_bitwise_acts_on_pattern() {
        let v = Pack::<f32, 16>::splat(-3.5);
        let abs = v & f32::from_bits(0x7fff_ffff);
        assert_eq!(abs, Pack::splat(3.5));
        assert_eq!((v ^ -0.0f32).lane(15), 3.5);
    }

    #[test]
    fn float_remainder_truncates() {
        let a = Pack::<f64, 4>::from_array([5.5, -5.5, 7.0, 1.0]);
        assert_eq!((a % 2.0f64).to_array(), [1.5, -1.5, 1.0, 1.0]);
    }
}
