//! Scalar operator implementations: the golden reference for lanepack.
//!
//! These serve as:
//! 1. Golden reference for correctness testing of every pack tier.
//! 2. Plain loops over slices, so a mismatch points at the pack code rather
//!    than at the reference.
//!
//! Integer semantics match packed integer instructions: `+ - *` wrap,
//! `MIN / -1` wraps to `MIN`, `MIN % -1` is `0`, division by zero panics.
//! Bitwise ops on floats act on the IEEE-754 bit pattern.
//!
//! This crate is compiled with `opt-level = 1` in test profiles (see the
//! workspace root Cargo.toml) so the reference stays a straight loop.

pub mod elementwise;

pub use elementwise::*;

/// Lane-wise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 8] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
    ];
}

/// Scalar semantics of one element type.
pub trait Reference: Copy {
    fn apply(op: BinaryOp, a: Self, b: Self) -> Self;

    /// Equality that treats two NaNs with the same bits as equal.
    fn same(a: Self, b: Self) -> bool;
}

macro_rules! impl_reference_float {
    ($t:ident) => {
        impl Reference for $t {
            #[inline(never)]
            fn apply(op: BinaryOp, a: $t, b: $t) -> $t {
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Rem => a % b,
                    BinaryOp::And => $t::from_bits(a.to_bits() & b.to_bits()),
                    BinaryOp::Or => $t::from_bits(a.to_bits() | b.to_bits()),
                    BinaryOp::Xor => $t::from_bits(a.to_bits() ^ b.to_bits()),
                }
            }

            fn same(a: $t, b: $t) -> bool {
                a == b || (a.is_nan() && b.is_nan())
            }
        }
    };
}

macro_rules! impl_reference_int {
    ($t:ident) => {
        impl Reference for $t {
            #[inline(never)]
            fn apply(op: BinaryOp, a: $t, b: $t) -> $t {
                match op {
                    BinaryOp::Add => a.wrapping_add(b),
                    BinaryOp::Sub => a.wrapping_sub(b),
                    BinaryOp::Mul => a.wrapping_mul(b),
                    BinaryOp::Div => a.wrapping_div(b),
                    BinaryOp::Rem => a.wrapping_rem(b),
                    BinaryOp::And => a & b,
                    BinaryOp::Or => a | b,
                    BinaryOp::Xor => a ^ b,
                }
            }

            fn same(a: $t, b: $t) -> bool {
                a == b
            }
        }
    };
}

impl_reference_float!(f32);
impl_reference_float!(f64);
impl_reference_int!(i32);
impl_reference_int!(i64);
