//! Host ISA detection with caching.
//!
//! Storage is chosen at build time, so detection never changes which
//! instructions run. It only answers whether the host can run what the
//! binary was built for.

use std::sync::OnceLock;

use crate::dispatch::IsaLevel;
use crate::validation::{PackError, PackResult};

/// Cached detection result.
static HOST_ISA: OnceLock<IsaLevel> = OnceLock::new();

/// Highest ISA level the running host supports. Probed once per process.
pub fn detect_host_isa() -> IsaLevel {
    *HOST_ISA.get_or_init(|| {
        let level = probe_host();
        log::info!("Detected host ISA: {level}");
        level
    })
}

#[cfg(target_arch = "x86_64")]
fn probe_host() -> IsaLevel {
    if is_x86_feature_detected!("avx512f") {
        IsaLevel::Avx512
    } else if is_x86_feature_detected!("avx2") {
        IsaLevel::Avx2
    } else if is_x86_feature_detected!("avx") {
        IsaLevel::Avx
    } else if is_x86_feature_detected!("sse2") {
        IsaLevel::Sse2
    } else {
        IsaLevel::Scalar
    }
}

#[cfg(target_arch = "aarch64")]
fn probe_host() -> IsaLevel {
    if std::arch::is_aarch64_feature_detected!("neon") {
        IsaLevel::Neon
    } else {
        IsaLevel::Scalar
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn probe_host() -> IsaLevel {
    IsaLevel::Scalar
}

/// Whether a host at `host` can run code built for `compiled`.
pub fn supports(host: IsaLevel, compiled: IsaLevel) -> bool {
    match (host, compiled) {
        (_, IsaLevel::Scalar) => true,
        (IsaLevel::Neon, IsaLevel::Neon) => true,
        (IsaLevel::Neon, _) | (_, IsaLevel::Neon) => false,
        (host, compiled) => host >= compiled,
    }
}

/// Check the host against [`IsaLevel::compiled`].
///
/// Returns the compiled level when the host can run it. Otherwise logs a
/// warning and returns `PackError::UnsupportedHost`; running native kernels
/// on such a host would fault with an illegal instruction.
pub fn verify_host() -> PackResult<IsaLevel> {
    let compiled = IsaLevel::compiled();
    let host = detect_host_isa();
    if supports(host, compiled) {
        log::info!("Host {host} runs {compiled} build");
        Ok(compiled)
    } else {
        log::warn!("Binary built for {compiled} but host only supports {host}");
        Err(PackError::UnsupportedHost { compiled, host })
    }
}
