/// Maps abstract pack operations to concrete hardware intrinsics or to the
/// per-lane fallback.
///
/// # Architecture
/// This macro is the "Layer 1" of the macro architecture. Each arm is keyed by
/// `(isa, element, width, op)` and provides:
/// - `native_ops`: the ops that have a direct instruction for this key
/// - compute primitives (splat, load, store, add, ...)
/// - `lo` / `hi` / `join` for registers that hold two native halves
///
/// An op without an instruction for a key falls through to the generic arms
/// at the bottom, which run the element's scalar operation lane by lane on the
/// register's memory image.
///
/// # Usage
/// ```ignore
/// simd_primitive!(sse, f32, 4, add, a, b)  // -> _mm_add_ps(a, b)
/// simd_primitive!(sse, f32, 4, rem, a, b)  // -> lane loop over f32 `%`
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // SSE / SSE2 (x86_64 baseline)
    // ========================================================================

    // --- f32 x 4 (__m128) ---
    (sse, f32, 4, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub, $crate::dispatch::Op::Mul,
            $crate::dispatch::Op::Div, $crate::dispatch::Op::And, $crate::dispatch::Op::Or,
            $crate::dispatch::Op::Xor,
        ]
    };
    (sse, f32, 4, splat, $v:expr) => { std::arch::x86_64::_mm_set1_ps($v) };
    (sse, f32, 4, load, $p:expr) => { std::arch::x86_64::_mm_load_ps($p) };
    // Reads all four lanes, then clears the unselected ones
    (sse, f32, 4, load_masked, $p:expr, $m:expr) => {
        std::arch::x86_64::_mm_and_ps(std::arch::x86_64::_mm_load_ps($p), $m)
    };
    (sse, f32, 4, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_store_ps($p, $v) };
    (sse, f32, 4, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_ps($a, $b) };
    (sse, f32, 4, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm_sub_ps($a, $b) };
    (sse, f32, 4, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm_mul_ps($a, $b) };
    (sse, f32, 4, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm_div_ps($a, $b) };
    (sse, f32, 4, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm_and_ps($a, $b) };
    (sse, f32, 4, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm_or_ps($a, $b) };
    (sse, f32, 4, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm_xor_ps($a, $b) };

    // --- i32 x 4 (__m128i) ---
    // _mm_mullo_epi32 needs SSE4.1; plain SSE2 multiplies lane by lane
    (sse, i32, 4, native_ops) => {
        if cfg!(target_feature = "sse4.1") {
            &[
                $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
                $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub, $crate::dispatch::Op::Mul,
                $crate::dispatch::Op::And, $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
            ] as &[$crate::dispatch::Op]
        } else {
            &[
                $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
                $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
                $crate::dispatch::Op::And, $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
            ] as &[$crate::dispatch::Op]
        }
    };
    (sse, i32, 4, splat, $v:expr) => { std::arch::x86_64::_mm_set1_epi32($v) };
    (sse, i32, 4, load, $p:expr) => {
        std::arch::x86_64::_mm_load_si128($p as *const std::arch::x86_64::__m128i)
    };
    (sse, i32, 4, load_masked, $p:expr, $m:expr) => {
        std::arch::x86_64::_mm_and_si128(
            std::arch::x86_64::_mm_load_si128($p as *const std::arch::x86_64::__m128i),
            $m,
        )
    };
    (sse, i32, 4, store, $p:expr, $v:expr) => {
        std::arch::x86_64::_mm_store_si128($p as *mut std::arch::x86_64::__m128i, $v)
    };
    (sse, i32, 4, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_epi32($a, $b) };
    (sse, i32, 4, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm_sub_epi32($a, $b) };
    (sse, i32, 4, mul, $a:expr, $b:expr) => {
        if cfg!(target_feature = "sse4.1") {
            std::arch::x86_64::_mm_mullo_epi32($a, $b)
        } else {
            $crate::cpu_kernels::zip_register::<i32, _>($a, $b, <i32 as $crate::traits::Element>::elem_mul)
        }
    };
    (sse, i32, 4, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm_and_si128($a, $b) };
    (sse, i32, 4, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm_or_si128($a, $b) };
    (sse, i32, 4, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm_xor_si128($a, $b) };

    // ========================================================================
    // AVX Implementation
    // ========================================================================

    // --- f32 x 8 (__m256) ---
    (avx, f32, 8, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::Mul, $crate::dispatch::Op::Div, $crate::dispatch::Op::And,
            $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (avx, f32, 8, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_ps($v) };
    (avx, f32, 8, load, $p:expr) => { std::arch::x86_64::_mm256_load_ps($p) };
    (avx, f32, 8, load_masked, $p:expr, $m:expr) => {
        std::arch::x86_64::_mm256_maskload_ps($p, std::arch::x86_64::_mm256_castps_si256($m))
    };
    (avx, f32, 8, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_store_ps($p, $v) };
    (avx, f32, 8, store_masked, $p:expr, $v:expr, $m:expr) => {
        std::arch::x86_64::_mm256_maskstore_ps($p, std::arch::x86_64::_mm256_castps_si256($m), $v)
    };
    (avx, f32, 8, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_ps($a, $b) };
    (avx, f32, 8, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_sub_ps($a, $b) };
    (avx, f32, 8, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mul_ps($a, $b) };
    (avx, f32, 8, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_div_ps($a, $b) };
    (avx, f32, 8, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_and_ps($a, $b) };
    (avx, f32, 8, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_or_ps($a, $b) };
    (avx, f32, 8, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_xor_ps($a, $b) };
    (avx, f32, 8, lo, $v:expr) => { std::arch::x86_64::_mm256_castps256_ps128($v) };
    (avx, f32, 8, hi, $v:expr) => { std::arch::x86_64::_mm256_extractf128_ps::<1>($v) };
    (avx, f32, 8, join, $lo:expr, $hi:expr) => { std::arch::x86_64::_mm256_set_m128($hi, $lo) };

    // --- f64 x 4 (__m256d) ---
    (avx, f64, 4, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::Mul, $crate::dispatch::Op::Div, $crate::dispatch::Op::And,
            $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (avx, f64, 4, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_pd($v) };
    (avx, f64, 4, load, $p:expr) => { std::arch::x86_64::_mm256_load_pd($p) };
    (avx, f64, 4, load_masked, $p:expr, $m:expr) => {
        std::arch::x86_64::_mm256_maskload_pd($p, std::arch::x86_64::_mm256_castpd_si256($m))
    };
    (avx, f64, 4, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_store_pd($p, $v) };
    (avx, f64, 4, store_masked, $p:expr, $v:expr, $m:expr) => {
        std::arch::x86_64::_mm256_maskstore_pd($p, std::arch::x86_64::_mm256_castpd_si256($m), $v)
    };
    (avx, f64, 4, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_pd($a, $b) };
    (avx, f64, 4, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_sub_pd($a, $b) };
    (avx, f64, 4, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mul_pd($a, $b) };
    (avx, f64, 4, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_div_pd($a, $b) };
    (avx, f64, 4, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_and_pd($a, $b) };
    (avx, f64, 4, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_or_pd($a, $b) };
    (avx, f64, 4, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_xor_pd($a, $b) };

    // ========================================================================
    // AVX2 Implementation
    // ========================================================================

    // --- i32 x 8 (__m256i) ---
    (avx2, i32, 8, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::Mul, $crate::dispatch::Op::And, $crate::dispatch::Op::Or,
            $crate::dispatch::Op::Xor,
        ]
    };
    (avx2, i32, 8, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_epi32($v) };
    (avx2, i32, 8, load, $p:expr) => {
        std::arch::x86_64::_mm256_load_si256($p as *const std::arch::x86_64::__m256i)
    };
    (avx2, i32, 8, load_masked, $p:expr, $m:expr) => { std::arch::x86_64::_mm256_maskload_epi32($p, $m) };
    (avx2, i32, 8, store, $p:expr, $v:expr) => {
        std::arch::x86_64::_mm256_store_si256($p as *mut std::arch::x86_64::__m256i, $v)
    };
    (avx2, i32, 8, store_masked, $p:expr, $v:expr, $m:expr) => {
        std::arch::x86_64::_mm256_maskstore_epi32($p, $m, $v)
    };
    (avx2, i32, 8, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_epi32($a, $b) };
    (avx2, i32, 8, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_sub_epi32($a, $b) };
    (avx2, i32, 8, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mullo_epi32($a, $b) };
    (avx2, i32, 8, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_and_si256($a, $b) };
    (avx2, i32, 8, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_or_si256($a, $b) };
    (avx2, i32, 8, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_xor_si256($a, $b) };
    (avx2, i32, 8, lo, $v:expr) => { std::arch::x86_64::_mm256_castsi256_si128($v) };
    (avx2, i32, 8, hi, $v:expr) => { std::arch::x86_64::_mm256_extracti128_si256::<1>($v) };
    (avx2, i32, 8, join, $lo:expr, $hi:expr) => { std::arch::x86_64::_mm256_set_m128i($hi, $lo) };

    // --- i64 x 4 (__m256i) ---
    // No 64-bit low multiply below AVX-512DQ
    (avx2, i64, 4, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::And, $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (avx2, i64, 4, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_epi64x($v) };
    (avx2, i64, 4, load, $p:expr) => {
        std::arch::x86_64::_mm256_load_si256($p as *const std::arch::x86_64::__m256i)
    };
    (avx2, i64, 4, load_masked, $p:expr, $m:expr) => { std::arch::x86_64::_mm256_maskload_epi64($p, $m) };
    (avx2, i64, 4, store, $p:expr, $v:expr) => {
        std::arch::x86_64::_mm256_store_si256($p as *mut std::arch::x86_64::__m256i, $v)
    };
    (avx2, i64, 4, store_masked, $p:expr, $v:expr, $m:expr) => {
        std::arch::x86_64::_mm256_maskstore_epi64($p, $m, $v)
    };
    (avx2, i64, 4, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_epi64($a, $b) };
    (avx2, i64, 4, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_sub_epi64($a, $b) };
    (avx2, i64, 4, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_and_si256($a, $b) };
    (avx2, i64, 4, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_or_si256($a, $b) };
    (avx2, i64, 4, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_xor_si256($a, $b) };

    // ========================================================================
    // AVX-512F Implementation
    // ========================================================================
    // Masks live in vector registers; they are turned into k-masks with a
    // self-test, which is AVX-512F (movepi32_mask would need DQ).

    // --- f32 x 16 (__m512) ---
    (avx512, f32, 16, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::Mul, $crate::dispatch::Op::Div, $crate::dispatch::Op::And,
            $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (avx512, f32, 16, splat, $v:expr) => { std::arch::x86_64::_mm512_set1_ps($v) };
    (avx512, f32, 16, load, $p:expr) => { std::arch::x86_64::_mm512_load_ps($p) };
    (avx512, f32, 16, load_masked, $p:expr, $m:expr) => {{
        let m = std::arch::x86_64::_mm512_castps_si512($m);
        std::arch::x86_64::_mm512_maskz_load_ps(std::arch::x86_64::_mm512_test_epi32_mask(m, m), $p)
    }};
    (avx512, f32, 16, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_store_ps($p, $v) };
    (avx512, f32, 16, store_masked, $p:expr, $v:expr, $m:expr) => {{
        let m = std::arch::x86_64::_mm512_castps_si512($m);
        std::arch::x86_64::_mm512_mask_store_ps($p, std::arch::x86_64::_mm512_test_epi32_mask(m, m), $v)
    }};
    (avx512, f32, 16, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_add_ps($a, $b) };
    (avx512, f32, 16, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_sub_ps($a, $b) };
    (avx512, f32, 16, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mul_ps($a, $b) };
    (avx512, f32, 16, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_div_ps($a, $b) };
    // _mm512_and_ps is DQ; go through the integer domain
    (avx512, f32, 16, and, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm512_castsi512_ps(std::arch::x86_64::_mm512_and_si512(
            std::arch::x86_64::_mm512_castps_si512($a),
            std::arch::x86_64::_mm512_castps_si512($b),
        ))
    };
    (avx512, f32, 16, or, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm512_castsi512_ps(std::arch::x86_64::_mm512_or_si512(
            std::arch::x86_64::_mm512_castps_si512($a),
            std::arch::x86_64::_mm512_castps_si512($b),
        ))
    };
    (avx512, f32, 16, xor, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm512_castsi512_ps(std::arch::x86_64::_mm512_xor_si512(
            std::arch::x86_64::_mm512_castps_si512($a),
            std::arch::x86_64::_mm512_castps_si512($b),
        ))
    };
    (avx512, f32, 16, lo, $v:expr) => { std::arch::x86_64::_mm512_castps512_ps256($v) };
    (avx512, f32, 16, hi, $v:expr) => {
        std::arch::x86_64::_mm256_castpd_ps(std::arch::x86_64::_mm512_extractf64x4_pd::<1>(
            std::arch::x86_64::_mm512_castps_pd($v),
        ))
    };
    (avx512, f32, 16, join, $lo:expr, $hi:expr) => {
        std::arch::x86_64::_mm512_castpd_ps(std::arch::x86_64::_mm512_insertf64x4::<1>(
            std::arch::x86_64::_mm512_castpd256_pd512(std::arch::x86_64::_mm256_castps_pd($lo)),
            std::arch::x86_64::_mm256_castps_pd($hi),
        ))
    };

    // --- i32 x 16 (__m512i) ---
    (avx512, i32, 16, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::Mul, $crate::dispatch::Op::And, $crate::dispatch::Op::Or,
            $crate::dispatch::Op::Xor,
        ]
    };
    (avx512, i32, 16, splat, $v:expr) => { std::arch::x86_64::_mm512_set1_epi32($v) };
    (avx512, i32, 16, load, $p:expr) => { std::arch::x86_64::_mm512_load_epi32($p) };
    (avx512, i32, 16, load_masked, $p:expr, $m:expr) => {{
        let m = $m;
        std::arch::x86_64::_mm512_maskz_load_epi32(std::arch::x86_64::_mm512_test_epi32_mask(m, m), $p)
    }};
    (avx512, i32, 16, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_store_epi32($p, $v) };
    (avx512, i32, 16, store_masked, $p:expr, $v:expr, $m:expr) => {{
        let m = $m;
        std::arch::x86_64::_mm512_mask_store_epi32($p, std::arch::x86_64::_mm512_test_epi32_mask(m, m), $v)
    }};
    (avx512, i32, 16, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_add_epi32($a, $b) };
    (avx512, i32, 16, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_sub_epi32($a, $b) };
    (avx512, i32, 16, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mullo_epi32($a, $b) };
    (avx512, i32, 16, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_and_si512($a, $b) };
    (avx512, i32, 16, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_or_si512($a, $b) };
    (avx512, i32, 16, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_xor_si512($a, $b) };
    (avx512, i32, 16, lo, $v:expr) => { std::arch::x86_64::_mm512_castsi512_si256($v) };
    (avx512, i32, 16, hi, $v:expr) => { std::arch::x86_64::_mm512_extracti64x4_epi64::<1>($v) };
    (avx512, i32, 16, join, $lo:expr, $hi:expr) => {
        std::arch::x86_64::_mm512_inserti64x4::<1>(std::arch::x86_64::_mm512_castsi256_si512($lo), $hi)
    };

    // --- f64 x 8 (__m512d) ---
    (avx512, f64, 8, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::Mul, $crate::dispatch::Op::Div, $crate::dispatch::Op::And,
            $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (avx512, f64, 8, splat, $v:expr) => { std::arch::x86_64::_mm512_set1_pd($v) };
    (avx512, f64, 8, load, $p:expr) => { std::arch::x86_64::_mm512_load_pd($p) };
    (avx512, f64, 8, load_masked, $p:expr, $m:expr) => {{
        let m = std::arch::x86_64::_mm512_castpd_si512($m);
        std::arch::x86_64::_mm512_maskz_load_pd(std::arch::x86_64::_mm512_test_epi64_mask(m, m), $p)
    }};
    (avx512, f64, 8, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_store_pd($p, $v) };
    (avx512, f64, 8, store_masked, $p:expr, $v:expr, $m:expr) => {{
        let m = std::arch::x86_64::_mm512_castpd_si512($m);
        std::arch::x86_64::_mm512_mask_store_pd($p, std::arch::x86_64::_mm512_test_epi64_mask(m, m), $v)
    }};
    (avx512, f64, 8, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_add_pd($a, $b) };
    (avx512, f64, 8, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_sub_pd($a, $b) };
    (avx512, f64, 8, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mul_pd($a, $b) };
    (avx512, f64, 8, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_div_pd($a, $b) };
    (avx512, f64, 8, and, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm512_castsi512_pd(std::arch::x86_64::_mm512_and_si512(
            std::arch::x86_64::_mm512_castpd_si512($a),
            std::arch::x86_64::_mm512_castpd_si512($b),
        ))
    };
    (avx512, f64, 8, or, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm512_castsi512_pd(std::arch::x86_64::_mm512_or_si512(
            std::arch::x86_64::_mm512_castpd_si512($a),
            std::arch::x86_64::_mm512_castpd_si512($b),
        ))
    };
    (avx512, f64, 8, xor, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm512_castsi512_pd(std::arch::x86_64::_mm512_xor_si512(
            std::arch::x86_64::_mm512_castpd_si512($a),
            std::arch::x86_64::_mm512_castpd_si512($b),
        ))
    };
    (avx512, f64, 8, lo, $v:expr) => { std::arch::x86_64::_mm512_castpd512_pd256($v) };
    (avx512, f64, 8, hi, $v:expr) => { std::arch::x86_64::_mm512_extractf64x4_pd::<1>($v) };
    (avx512, f64, 8, join, $lo:expr, $hi:expr) => {
        std::arch::x86_64::_mm512_insertf64x4::<1>(std::arch::x86_64::_mm512_castpd256_pd512($lo), $hi)
    };

    // --- i64 x 8 (__m512i) ---
    // _mm512_mullo_epi64 is DQ; multiply falls through to the lane loop
    (avx512, i64, 8, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::StoreMasked, $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub,
            $crate::dispatch::Op::And, $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (avx512, i64, 8, splat, $v:expr) => { std::arch::x86_64::_mm512_set1_epi64($v) };
    (avx512, i64, 8, load, $p:expr) => { std::arch::x86_64::_mm512_load_epi64($p) };
    (avx512, i64, 8, load_masked, $p:expr, $m:expr) => {{
        let m = $m;
        std::arch::x86_64::_mm512_maskz_load_epi64(std::arch::x86_64::_mm512_test_epi64_mask(m, m), $p)
    }};
    (avx512, i64, 8, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_store_epi64($p, $v) };
    (avx512, i64, 8, store_masked, $p:expr, $v:expr, $m:expr) => {{
        let m = $m;
        std::arch::x86_64::_mm512_mask_store_epi64($p, std::arch::x86_64::_mm512_test_epi64_mask(m, m), $v)
    }};
    (avx512, i64, 8, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_add_epi64($a, $b) };
    (avx512, i64, 8, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_sub_epi64($a, $b) };
    (avx512, i64, 8, and, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_and_si512($a, $b) };
    (avx512, i64, 8, or, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_or_si512($a, $b) };
    (avx512, i64, 8, xor, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_xor_si512($a, $b) };
    (avx512, i64, 8, lo, $v:expr) => { std::arch::x86_64::_mm512_castsi512_si256($v) };
    (avx512, i64, 8, hi, $v:expr) => { std::arch::x86_64::_mm512_extracti64x4_epi64::<1>($v) };
    (avx512, i64, 8, join, $lo:expr, $hi:expr) => {
        std::arch::x86_64::_mm512_inserti64x4::<1>(std::arch::x86_64::_mm512_castsi256_si512($lo), $hi)
    };

    // ========================================================================
    // NEON Implementation (aarch64)
    // ========================================================================

    // --- f32 x 4 (float32x4_t) ---
    (neon, f32, 4, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub, $crate::dispatch::Op::Mul,
            $crate::dispatch::Op::Div, $crate::dispatch::Op::And, $crate::dispatch::Op::Or,
            $crate::dispatch::Op::Xor,
        ]
    };
    (neon, f32, 4, splat, $v:expr) => { std::arch::aarch64::vdupq_n_f32($v) };
    (neon, f32, 4, load, $p:expr) => { std::arch::aarch64::vld1q_f32($p) };
    (neon, f32, 4, load_masked, $p:expr, $m:expr) => {
        std::arch::aarch64::vreinterpretq_f32_u32(std::arch::aarch64::vandq_u32(
            std::arch::aarch64::vreinterpretq_u32_f32(std::arch::aarch64::vld1q_f32($p)),
            std::arch::aarch64::vreinterpretq_u32_f32($m),
        ))
    };
    (neon, f32, 4, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f32($p, $v) };
    (neon, f32, 4, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_f32($a, $b) };
    (neon, f32, 4, sub, $a:expr, $b:expr) => { std::arch::aarch64::vsubq_f32($a, $b) };
    (neon, f32, 4, mul, $a:expr, $b:expr) => { std::arch::aarch64::vmulq_f32($a, $b) };
    (neon, f32, 4, div, $a:expr, $b:expr) => { std::arch::aarch64::vdivq_f32($a, $b) };
    (neon, f32, 4, and, $a:expr, $b:expr) => {
        std::arch::aarch64::vreinterpretq_f32_u32(std::arch::aarch64::vandq_u32(
            std::arch::aarch64::vreinterpretq_u32_f32($a),
            std::arch::aarch64::vreinterpretq_u32_f32($b),
        ))
    };
    (neon, f32, 4, or, $a:expr, $b:expr) => {
        std::arch::aarch64::vreinterpretq_f32_u32(std::arch::aarch64::vorrq_u32(
            std::arch::aarch64::vreinterpretq_u32_f32($a),
            std::arch::aarch64::vreinterpretq_u32_f32($b),
        ))
    };
    (neon, f32, 4, xor, $a:expr, $b:expr) => {
        std::arch::aarch64::vreinterpretq_f32_u32(std::arch::aarch64::veorq_u32(
            std::arch::aarch64::vreinterpretq_u32_f32($a),
            std::arch::aarch64::vreinterpretq_u32_f32($b),
        ))
    };

    // --- i32 x 4 (int32x4_t) ---
    (neon, i32, 4, native_ops) => {
        &[
            $crate::dispatch::Op::Load, $crate::dispatch::Op::LoadMasked, $crate::dispatch::Op::Store,
            $crate::dispatch::Op::Add, $crate::dispatch::Op::Sub, $crate::dispatch::Op::Mul,
            $crate::dispatch::Op::And, $crate::dispatch::Op::Or, $crate::dispatch::Op::Xor,
        ]
    };
    (neon, i32, 4, splat, $v:expr) => { std::arch::aarch64::vdupq_n_s32($v) };
    (neon, i32, 4, load, $p:expr) => { std::arch::aarch64::vld1q_s32($p) };
    (neon, i32, 4, load_masked, $p:expr, $m:expr) => {
        std::arch::aarch64::vandq_s32(std::arch::aarch64::vld1q_s32($p), $m)
    };
    (neon, i32, 4, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_s32($p, $v) };
    (neon, i32, 4, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_s32($a, $b) };
    (neon, i32, 4, sub, $a:expr, $b:expr) => { std::arch::aarch64::vsubq_s32($a, $b) };
    (neon, i32, 4, mul, $a:expr, $b:expr) => { std::arch::aarch64::vmulq_s32($a, $b) };
    (neon, i32, 4, and, $a:expr, $b:expr) => { std::arch::aarch64::vandq_s32($a, $b) };
    (neon, i32, 4, or, $a:expr, $b:expr) => { std::arch::aarch64::vorrq_s32($a, $b) };
    (neon, i32, 4, xor, $a:expr, $b:expr) => { std::arch::aarch64::veorq_s32($a, $b) };

    // ========================================================================
    // Lane-loop fallback (any ISA without a matching arm above)
    // ========================================================================

    ($isa:ident, $elem:ident, $w:tt, load_masked, $p:expr, $m:expr) => {
        $crate::cpu_kernels::load_register_masked::<$elem, _>($p, $m)
    };
    ($isa:ident, $elem:ident, $w:tt, store_masked, $p:expr, $v:expr, $m:expr) => {
        $crate::cpu_kernels::store_register_masked::<$elem, _>($p, $v, $m)
    };
    ($isa:ident, $elem:ident, $w:tt, add, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::elem_add)
    };
    ($isa:ident, $elem:ident, $w:tt, sub, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::elem_sub)
    };
    ($isa:ident, $elem:ident, $w:tt, mul, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::elem_mul)
    };
    ($isa:ident, $elem:ident, $w:tt, div, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::elem_div)
    };
    ($isa:ident, $elem:ident, $w:tt, rem, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::elem_rem)
    };
    ($isa:ident, $elem:ident, $w:tt, and, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::bit_and)
    };
    ($isa:ident, $elem:ident, $w:tt, or, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::bit_or)
    };
    ($isa:ident, $elem:ident, $w:tt, xor, $a:expr, $b:expr) => {
        $crate::cpu_kernels::zip_register::<$elem, _>($a, $b, <$elem as $crate::traits::Element>::bit_xor)
    };
}
