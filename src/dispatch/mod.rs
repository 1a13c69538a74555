//! Compile-time dispatch table.
//!
//! Every (operation, element, width) resolves to one of three tiers when the
//! crate is built:
//!
//! | Tier     | Meaning                                                    |
//! |----------|------------------------------------------------------------|
//! | `Native` | a single hardware instruction on the storage register      |
//! | `Split`  | the same operation applied to the low and high halves      |
//! | `Scalar` | a per-lane loop over the element type's scalar operation   |
//!
//! Nothing here is consulted at runtime by the kernels themselves; the
//! functions below only report what `cfg(target_feature)` already decided.

use std::fmt;

use crate::pack::{Lanes, Pack};

/// Operations that resolve through the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Load,
    LoadMasked,
    Store,
    StoreMasked,
    Gather,
    GatherMasked,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    CmpEq,
    CmpLt,
    CmpLe,
}

impl Op {
    pub const ALL: [Op; 17] = [
        Op::Load,
        Op::LoadMasked,
        Op::Store,
        Op::StoreMasked,
        Op::Gather,
        Op::GatherMasked,
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Rem,
        Op::And,
        Op::Or,
        Op::Xor,
        Op::CmpEq,
        Op::CmpLt,
        Op::CmpLe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Op::Load => "load",
            Op::LoadMasked => "load_masked",
            Op::Store => "store",
            Op::StoreMasked => "store_masked",
            Op::Gather => "gather",
            Op::GatherMasked => "gather_masked",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Rem => "rem",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::CmpEq => "cmp_eq",
            Op::CmpLt => "cmp_lt",
            Op::CmpLe => "cmp_le",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// How an operation is carried out for one storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Native,
    Split,
    Scalar,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Tier::Native => "native",
            Tier::Split => "split",
            Tier::Scalar => "scalar",
        })
    }
}

/// Instruction-set level. Ordered within one architecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsaLevel {
    Scalar,
    Sse2,
    Avx,
    Avx2,
    Avx512,
    Neon,
}

impl IsaLevel {
    /// The level this crate was compiled for.
    pub const fn compiled() -> IsaLevel {
        if cfg!(all(target_arch = "x86_64", target_feature = "avx512f")) {
            IsaLevel::Avx512
        } else if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
            IsaLevel::Avx2
        } else if cfg!(all(target_arch = "x86_64", target_feature = "avx")) {
            IsaLevel::Avx
        } else if cfg!(all(target_arch = "x86_64", target_feature = "sse2")) {
            IsaLevel::Sse2
        } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            IsaLevel::Neon
        } else {
            IsaLevel::Scalar
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IsaLevel::Scalar => "scalar",
            IsaLevel::Sse2 => "SSE2",
            IsaLevel::Avx => "AVX",
            IsaLevel::Avx2 => "AVX2",
            IsaLevel::Avx512 => "AVX-512F",
            IsaLevel::Neon => "NEON",
        }
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One resolved row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEntry {
    pub elem: &'static str,
    pub width: usize,
    pub op: Op,
    /// Tier of the storage itself.
    pub storage: Tier,
    /// Tier this particular op resolves to.
    pub tier: Tier,
}

impl fmt::Display for DispatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{:<2} {:<13} {} (storage {})",
            self.elem, self.width, self.op, self.tier, self.storage
        )
    }
}

/// Tier that `op` resolves to for `Pack<T, W>`.
#[inline]
pub fn tier_of<T: Lanes<W>, const W: usize>(op: Op) -> Tier {
    Pack::<T, W>::op_tier(op)
}

fn push_entries<T: Lanes<W>, const W: usize>(table: &mut Vec<DispatchEntry>) {
    for op in Op::ALL {
        table.push(DispatchEntry {
            elem: T::NAME,
            width: W,
            op,
            storage: Pack::<T, W>::TIER,
            tier: tier_of::<T, W>(op),
        });
    }
}

macro_rules! push_all_widths {
    ($table:expr, $($t:ident),+) => {
        $(
            push_entries::<$t, 1>($table);
            push_entries::<$t, 4>($table);
            push_entries::<$t, 8>($table);
            push_entries::<$t, 16>($table);
        )+
    };
}

/// Resolved tier for every supported (element, width, op).
pub fn dispatch_table() -> Vec<DispatchEntry> {
    let mut table = Vec::with_capacity(4 * 4 * Op::ALL.len());
    push_all_widths!(&mut table, f32, f64, i32, i64);
    table
}

/// Log the compiled ISA level and the dispatch table.
///
/// Native rows are logged at `debug`, everything else at `info`, so a quick
/// `info` run shows where a build falls back.
pub fn log_dispatch_table() {
    log::info!("lanepack compiled for {}", IsaLevel::compiled());
    for entry in dispatch_table() {
        if entry.tier == Tier::Native {
            log::debug!("{entry}");
        } else {
            log::info!("{entry}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_combination() {
        let table = dispatch_table();
        assert_eq!(table.len(), 4 * 4 * Op::ALL.len());
        for w in [1, 4, 8, 16] {
            assert!(table.iter().any(|e| e.elem == "i64" && e.width == w));
        }
    }

    #[test]
    fn gather_never_native() {
        for entry in dispatch_table() {
            if matches!(entry.op, Op::Gather | Op::GatherMasked) {
                assert_eq!(entry.tier, Tier::Scalar, "{entry}");
            }
        }
    }

    #[test]
    fn width_one_is_scalar() {
        for entry in dispatch_table().iter().filter(|e| e.width == 1) {
            assert_eq!(entry.storage, Tier::Scalar);
            assert_eq!(entry.tier, Tier::Scalar);
        }
    }

    #[test]
    fn split_storage_splits_lane_parallel_ops() {
        for entry in dispatch_table() {
            if entry.storage == Tier::Split && !matches!(entry.op, Op::Gather | Op::GatherMasked) {
                assert_eq!(entry.tier, Tier::Split, "{entry}");
            }
        }
    }

    #[test]
    fn compiled_level_matches_target() {
        let level = IsaLevel::compiled();
        #[cfg(target_arch = "x86_64")]
        assert!(level >= IsaLevel::Sse2);
        #[cfg(target_arch = "aarch64")]
        assert_eq!(level, IsaLevel::Neon);
        let _ = level;
    }
}
