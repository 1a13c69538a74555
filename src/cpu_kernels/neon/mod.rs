//! NEON 128-bit registers (aarch64).

// Expand NEON f32x4 and i32x4 implementations
#[cfg(target_feature = "neon")]
crate::expand_isa_impls!(neon, f32, 4, std::arch::aarch64::float32x4_t);
#[cfg(target_feature = "neon")]
crate::expand_isa_impls!(neon, i32, 4, std::arch::aarch64::int32x4_t);

#[cfg(all(test, target_feature = "neon"))]
mod tests;
