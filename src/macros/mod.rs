//! Macro system for lanepack.
//!
//! Follows a 3-layer architecture:
//! 1. simd_primitive! (Hardware Primitives)
//! 2. expand_isa_impls! / expand_composite_impls! (Kernel impls per register)
//! 3. define_pack_* (Operator impls on `Pack`)

#[macro_use]
pub mod simd_primitive;
#[macro_use]
pub mod expand;
#[macro_use]
pub mod operator_templates;
