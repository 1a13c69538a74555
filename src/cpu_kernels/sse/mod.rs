//! SSE / SSE2 4-lane registers, the x86_64 baseline.

// Expand SSE f32x4 (__m128)
#[cfg(target_feature = "sse")]
crate::expand_isa_impls!(sse, f32, 4, std::arch::x86_64::__m128);
// Expand SSE2 i32x4 (__m128i)
#[cfg(target_feature = "sse2")]
crate::expand_isa_impls!(sse, i32, 4, std::arch::x86_64::__m128i);

#[cfg(all(test, target_feature = "sse2"))]
mod tests;
