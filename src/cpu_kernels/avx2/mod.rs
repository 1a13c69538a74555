//! AVX2 256-bit integer registers.

// Expand AVX2 i32x8 (__m256i), split into two SSE2 i32x4
#[cfg(target_feature = "avx2")]
crate::expand_isa_impls!(avx2, i32, 8, std::arch::x86_64::__m256i);
#[cfg(target_feature = "avx2")]
crate::expand_composite_impls!(avx2, i32, 8, std::arch::x86_64::__m256i, std::arch::x86_64::__m128i);
// Expand AVX2 i64x4 (__m256i)
#[cfg(target_feature = "avx2")]
crate::expand_isa_impls!(avx2, i64, 4, std::arch::x86_64::__m256i);

#[cfg(all(test, target_feature = "avx2"))]
mod tests;
