use std::fmt::Debug;

/// Core element trait for pack lanes.
///
/// Provides a unified interface for the scalar operations every storage tier
/// falls back to, across f32/f64/i32/i64. Compile-time monomorphization, zero
/// runtime overhead.
///
/// Integer arithmetic wraps, matching the packed integer instructions.
/// Integer division and remainder by zero panic.
pub trait Element:
    Debug + Clone + Copy + Send + Sync + Default + PartialEq + PartialOrd + 'static
{
    const ZERO: Self;
    /// Lane value whose bit pattern is all ones: a selected mask lane.
    const ALL_ONES: Self;
    const NAME: &'static str;

    /// Unsigned integer of the same size, used for bit-domain operations.
    type Bits: Copy + Eq + Debug;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;

    /// A mask lane is selected when any of its bits are set.
    fn is_selected(self) -> bool;

    // Arithmetic (explicit methods for SIMD macro compatibility)
    fn elem_add(self, other: Self) -> Self;
    fn elem_sub(self, other: Self) -> Self;
    fn elem_mul(self, other: Self) -> Self;
    fn elem_div(self, other: Self) -> Self;
    fn elem_rem(self, other: Self) -> Self;

    // Bit-domain ops; for floats these act on the IEEE-754 pattern
    fn bit_and(self, other: Self) -> Self;
    fn bit_or(self, other: Self) -> Self;
    fn bit_xor(self, other: Self) -> Self;

    /// `None` when `self / other` would trap (integer divide by zero).
    fn checked_div(self, other: Self) -> Option<Self>;
    /// True when `self / other` overflows (integer `MIN / -1`).
    fn div_overflows(self, other: Self) -> bool;
}

macro_rules! impl_float_element {
    ($t:ident, $bits:ident) => {
        impl Element for $t {
            const ZERO: Self = 0.0;
            const ALL_ONES: Self = $t::from_bits($bits::MAX);
            const NAME: &'static str = stringify!($t);

            type Bits = $bits;

            #[inline(always)] fn to_bits(self) -> $bits { $t::to_bits(self) }
            #[inline(always)] fn from_bits(bits: $bits) -> Self { $t::from_bits(bits) }
            #[inline(always)] fn is_selected(self) -> bool { $t::to_bits(self) != 0 }

            #[inline(always)] fn elem_add(self, other: Self) -> Self { self + other }
            #[inline(always)] fn elem_sub(self, other: Self) -> Self { self - other }
            #[inline(always)] fn elem_mul(self, other: Self) -> Self { self * other }
            #[inline(always)] fn elem_div(self, other: Self) -> Self { self / other }
            #[inline(always)] fn elem_rem(self, other: Self) -> Self { self % other }

            #[inline(always)]
            fn bit_and(self, other: Self) -> Self { $t::from_bits(self.to_bits() & other.to_bits()) }
            #[inline(always)]
            fn bit_or(self, other: Self) -> Self { $t::from_bits(self.to_bits() | other.to_bits()) }
            #[inline(always)]
            fn bit_xor(self, other: Self) -> Self { $t::from_bits(self.to_bits() ^ other.to_bits()) }

            #[inline(always)] fn checked_div(self, other: Self) -> Option<Self> { Some(self / other) }
            #[inline(always)] fn div_overflows(self, _other: Self) -> bool { false }
        }
    };
}

macro_rules! impl_int_element {
    ($t:ident, $bits:ident) => {
        impl Element for $t {
            const ZERO: Self = 0;
            const ALL_ONES: Self = -1;
            const NAME: &'static str = stringify!($t);

            type Bits = $bits;

            #[inline(always)] fn to_bits(self) -> $bits { self as $bits }
            #[inline(always)] fn from_bits(bits: $bits) -> Self { bits as $t }
            #[inline(always)] fn is_selected(self) -> bool { self != 0 }

            #[inline(always)] fn elem_add(self, other: Self) -> Self { self.wrapping_add(other) }
            #[inline(always)] fn elem_sub(self, other: Self) -> Self { self.wrapping_sub(other) }
            #[inline(always)] fn elem_mul(self, other: Self) -> Self { self.wrapping_mul(other) }
            #[inline(always)] fn elem_div(self, other: Self) -> Self { self.wrapping_div(other) }
            #[inline(always)] fn elem_rem(self, other: Self) -> Self { self.wrapping_rem(other) }

            #[inline(always)] fn bit_and(self, other: Self) -> Self { self & other }
            #[inline(always)] fn bit_or(self, other: Self) -> Self { self | other }
            #[inline(always)] fn bit_xor(self, other: Self) -> Self { self ^ other }

            #[inline(always)]
            fn checked_div(self, other: Self) -> Option<Self> {
                if other == 0 { None } else { Some(self.wrapping_div(other)) }
            }
            #[inline(always)]
            fn div_overflows(self, other: Self) -> bool { self == $t::MIN && other == -1 }
        }
    };
}

impl_float_element!(f32, u32);
impl_float_element!(f64, u64);
impl_int_element!(i32, u32);
impl_int_element!(i64, u64);

/// Integer element usable as a gather offset (element units, not bytes).
pub trait Offset: Element {
    /// Pointer offset. Callers must have checked the range (see `to_i64`);
    /// narrowing may truncate on 32-bit targets.
    fn to_isize(self) -> isize;
    /// Exact value, for range checks before narrowing.
    fn to_i64(self) -> i64;
}

impl Offset for i32 {
    #[inline(always)]
    fn to_isize(self) -> isize { self as isize }
    #[inline(always)]
    fn to_i64(self) -> i64 { i64::from(self) }
}

impl Offset for i64 {
    #[inline(always)]
    fn to_isize(self) -> isize { self as isize }
    #[inline(always)]
    fn to_i64(self) -> i64 { self }
}

/// Scalar types that broadcast losslessly into lanes of `T`.
///
/// Gates the scalar-broadcast operator overloads: `Pack<T, W> op s` compiles
/// only when `s: Broadcast<T>`.
pub trait Broadcast<T: Element>: Copy {
    fn widen(self) -> T;
}

macro_rules! impl_broadcast {
    ($t:ident <= $($s:ident),+) => {
        $(
            impl Broadcast<$t> for $s {
                #[inline(always)]
                fn widen(self) -> $t { <$t>::from(self) }
            }
        )+
    };
}

impl_broadcast!(f32 <= f32, i16, u16);
impl_broadcast!(f64 <= f64, f32, i32, u32);
impl_broadcast!(i32 <= i32, i16, u16);
impl_broadcast!(i64 <= i64, i32, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_bit_ops_act_on_patterns() {
        let neg = -2.5f32;
        let abs_mask = f32::from_bits(0x7fff_ffff);
        assert_eq!(neg.bit_and(abs_mask), 2.5);
        assert_eq!(2.5f32.bit_xor(-0.0), -2.5);
        assert_eq!(0.0f64.bit_or(-0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn all_ones_is_selected() {
        assert!(f32::ALL_ONES.is_selected());
        assert!(f64::ALL_ONES.is_selected());
        assert!(i32::ALL_ONES.is_selected());
        assert!(!i64::ZERO.is_selected());
        // -0.0 has its sign bit set, so it counts as selected
        assert!((-0.0f32).is_selected());
        assert_eq!(f32::ALL_ONES.to_bits(), u32::MAX);
        assert_eq!(f64::ALL_ONES.to_bits(), u64::MAX);
    }

    #[test]
    fn integer_ops_wrap() {
        assert_eq!(i32::MAX.elem_add(1), i32::MIN);
        assert_eq!(i64::MIN.elem_div(-1), i64::MIN);
        assert_eq!(i32::MIN.elem_rem(-1), 0);
        assert!(i32::MIN.div_overflows(-1));
        assert_eq!(7i32.checked_div(0), None);
        assert_eq!(1.0f32.checked_div(0.0), Some(f32::INFINITY));
    }

    #[test]
    fn broadcast_widens_losslessly() {
        assert_eq!(Broadcast::<f64>::widen(1.5f32), 1.5f64);
        assert_eq!(Broadcast::<i64>::widen(u32::MAX), u32::MAX as i64);
        assert_eq!(Broadcast::<f32>::widen(-3i16), -3.0f32);
    }
}
