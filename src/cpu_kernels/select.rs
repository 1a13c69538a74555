//! Storage selection: one concrete kernel type per (element, width), picked
//! by the target features the crate is compiled with.
//!
//! | Width | Native when                       | Otherwise          |
//! |-------|-----------------------------------|--------------------|
//! | 1     | never                             | `Scalar<T>`        |
//! | 4     | f32/i32: SSE2 or NEON; f64: AVX; i64: AVX2 | `Array<T, 4>` |
//! | 8     | f32: AVX; i32: AVX2; f64/i64: AVX-512F | `Split<x4>`   |
//! | 16    | f32/i32: AVX-512F; f64/i64: never | `Split<x8>`        |

#[allow(unused_imports)]
use crate::cpu_kernels::{Array, Native, Scalar, Split};
use crate::pack::Lanes;
use crate::traits::Element;

// ============================================================================
// Width 4
// ============================================================================

#[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
pub type F32x4 = Native<std::arch::x86_64::__m128, f32>;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub type F32x4 = Native<std::arch::aarch64::float32x4_t, f32>;
#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse"),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub type F32x4 = Array<f32, 4>;

#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
pub type I32x4 = Native<std::arch::x86_64::__m128i, i32>;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub type I32x4 = Native<std::arch::aarch64::int32x4_t, i32>;
#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub type I32x4 = Array<i32, 4>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub type F64x4 = Native<std::arch::x86_64::__m256d, f64>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub type F64x4 = Array<f64, 4>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub type I64x4 = Native<std::arch::x86_64::__m256i, i64>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub type I64x4 = Array<i64, 4>;

// ============================================================================
// Width 8
// ============================================================================

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub type F32x8 = Native<std::arch::x86_64::__m256, f32>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub type F32x8 = Split<F32x4>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub type I32x8 = Native<std::arch::x86_64::__m256i, i32>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub type I32x8 = Split<I32x4>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub type F64x8 = Native<std::arch::x86_64::__m512d, f64>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
pub type F64x8 = Split<F64x4>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub type I64x8 = Native<std::arch::x86_64::__m512i, i64>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
pub type I64x8 = Split<I64x4>;

// ============================================================================
// Width 16
// ============================================================================

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub type F32x16 = Native<std::arch::x86_64::__m512, f32>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
pub type F32x16 = Split<F32x8>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub type I32x16 = Native<std::arch::x86_64::__m512i, i32>;
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
pub type I32x16 = Split<I32x8>;

pub type F64x16 = Split<F64x8>;
pub type I64x16 = Split<I64x8>;

// ============================================================================
// Lanes
// ============================================================================

impl<T: Element> Lanes<1> for T {
    type Repr = Scalar<T>;
}

macro_rules! impl_lanes {
    ($elem:ident => $x4:ident, $x8:ident, $x16:ident) => {
        impl Lanes<4> for $elem {
            type Repr = $x4;
        }
        impl Lanes<8> for $elem {
            type Repr = $x8;
        }
        impl Lanes<16> for $elem {
            type Repr = $x16;
        }
    };
}

impl_lanes!(f32 => F32x4, F32x8, F32x16);
impl_lanes!(f64 => F64x4, F64x8, F64x16);
impl_lanes!(i32 => I32x4, I32x8, I32x16);
impl_lanes!(i64 => I64x4, I64x8, I64x16);
