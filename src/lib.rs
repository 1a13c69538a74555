//! lanepack: portable fixed-width SIMD packs.
//!
//! `Pack<T, W>` holds `W` lanes of `T` for T in {f32, f64, i32, i64} and W in
//! {1, 4, 8, 16}. Every operation resolves at compile time to one of three
//! tiers:
//! - **Native**: one instruction on a hardware register (SSE2, AVX, AVX2,
//!   AVX-512F, NEON)
//! - **Split**: the operation on the low and high half-width packs
//! - **Scalar**: a loop over the lanes
//!
//! The tier is picked from the target features the crate is built with
//! (`-C target-cpu=native`, `-C target-feature=+avx2`, ...). Results are the
//! same on every tier.
//!
//! # Quick Start
//!
//! ```
//! use lanepack::{memory, Aligned, Mask, Pack};
//!
//! let buf = Aligned([1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! let v: Pack<f32, 8> = unsafe { memory::load(buf.as_ptr()) };
//! let w = v * 2.0f32 + 1.0f32;
//! assert_eq!(w.hi().to_array(), [11.0, 13.0, 15.0, 17.0]);
//!
//! let mut out = Aligned([0.0f32; 8]);
//! let odd = Mask::from_array([false, true, false, true, false, true, false, true]);
//! unsafe { memory::store_masked(&w, out.as_mut_ptr(), &odd) };
//! assert_eq!(out[1], 5.0);
//! assert_eq!(out[0], 0.0);
//! ```
//!
//! The [`memory`] functions are `unsafe` and unchecked; [`checked`] offers the
//! same operations on slices with every precondition validated.

#[macro_use]
pub mod macros;

pub mod checked;
pub mod cpu_kernels;
pub mod dispatch;
pub mod memory;
pub mod ops;
pub mod pack;
pub mod runtime_detection;
pub mod traits;
pub mod validation;

pub use dispatch::{IsaLevel, Op, Tier};
pub use pack::{Lanes, Mask, Pack};
pub use traits::{Broadcast, Element, Offset};
pub use validation::{Aligned, PackError, PackResult};

#[cfg(test)]
mod check_isa;
