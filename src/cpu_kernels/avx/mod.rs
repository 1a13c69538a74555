//! AVX 256-bit float registers.

// Expand AVX f32x8 (__m256), split into two SSE f32x4
#[cfg(target_feature = "avx")]
crate::expand_isa_impls!(avx, f32, 8, std::arch::x86_64::__m256);
#[cfg(target_feature = "avx")]
crate::expand_composite_impls!(avx, f32, 8, std::arch::x86_64::__m256, std::arch::x86_64::__m128);
// Expand AVX f64x4 (__m256d)
#[cfg(target_feature = "avx")]
crate::expand_isa_impls!(avx, f64, 4, std::arch::x86_64::__m256d);

#[cfg(all(test, target_feature = "avx"))]
mod tests;
