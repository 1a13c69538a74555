//! AVX-512F 512-bit registers. Each splits into two 256-bit halves.

#[cfg(target_feature = "avx512f")]
crate::expand_isa_impls!(avx512, f32, 16, std::arch::x86_64::__m512);
#[cfg(target_feature = "avx512f")]
crate::expand_composite_impls!(avx512, f32, 16, std::arch::x86_64::__m512, std::arch::x86_64::__m256);

#[cfg(target_feature = "avx512f")]
crate::expand_isa_impls!(avx512, i32, 16, std::arch::x86_64::__m512i);
#[cfg(target_feature = "avx512f")]
crate::expand_composite_impls!(avx512, i32, 16, std::arch::x86_64::__m512i, std::arch::x86_64::__m256i);

#[cfg(target_feature = "avx512f")]
crate::expand_isa_impls!(avx512, f64, 8, std::arch::x86_64::__m512d);
#[cfg(target_feature = "avx512f")]
crate::expand_composite_impls!(avx512, f64, 8, std::arch::x86_64::__m512d, std::arch::x86_64::__m256d);

#[cfg(target_feature = "avx512f")]
crate::expand_isa_impls!(avx512, i64, 8, std::arch::x86_64::__m512i);
#[cfg(target_feature = "avx512f")]
crate::expand_composite_impls!(avx512, i64, 8, std::arch::x86_64::__m512i, std::arch::x86_64::__m256i);
