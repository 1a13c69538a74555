//! Load / store / gather properties across every (element, width) pair.
//!
//! Pins the masking asymmetry:
//! - masked load zero-fills unselected lanes
//! - masked store leaves unselected destination elements bit-identical
//! - masked gather keeps the passthrough in unselected lanes

use proptest::prelude::*;

use lanepack::{memory, Aligned, Element, Lanes, Mask, Pack};

/// 64-byte aligned scratch that fits every pack.
type Buf<T> = Aligned<[T; 16]>;

fn bits<T: Element>(lanes: &[T]) -> Vec<T::Bits> {
    lanes.iter().map(|&x| x.to_bits()).collect()
}

fn round_trip<T: Lanes<W>, const W: usize>(src: &Buf<T>) -> Buf<T> {
    let mut dst = Aligned([T::ZERO; 16]);
    unsafe {
        let v = memory::load::<T, W>(src.as_ptr());
        memory::store(&v, dst.as_mut_ptr());
    }
    dst
}

fn masked_load<T: Lanes<W>, const W: usize>(src: &Buf<T>, sel: [bool; W]) -> Pack<T, W> {
    let mask = Mask::<T, W>::from_array(sel);
    unsafe { memory::load_masked(src.as_ptr(), &mask) }
}

fn masked_store<T: Lanes<W>, const W: usize>(v: &Pack<T, W>, dst: &mut Buf<T>, sel: [bool; W]) {
    let mask = Mask::<T, W>::from_array(sel);
    unsafe { memory::store_masked(v, dst.as_mut_ptr(), &mask) }
}

macro_rules! memory_props {
    ($name:ident, $t:ident, $w:literal, $uniform:ident) => {
        mod $name {
            use super::*;

            proptest! {
                #[test]
                fn load_store_is_bit_identical(a in prop::array::uniform16(any::<$t>())) {
                    let src = Aligned(a);
                    let dst = round_trip::<$t, $w>(&src);
                    prop_assert_eq!(bits(&dst[..$w]), bits(&src[..$w]));
                    prop_assert!(dst[$w..].iter().all(|&x| x.to_bits() == <$t as Element>::ZERO.to_bits()));
                }

                #[test]
                fn masked_load_zero_fills(
                    a in prop::array::uniform16(any::<$t>()),
                    sel in prop::array::$uniform(any::<bool>()),
                ) {
                    let src = Aligned(a);
                    let v = masked_load::<$t, $w>(&src, sel).to_array();
                    for i in 0..$w {
                        let want = if sel[i] { a[i] } else { <$t as Element>::ZERO };
                        prop_assert_eq!(v[i].to_bits(), want.to_bits());
                    }
                }

                #[test]
                fn masked_store_preserves_unselected(
                    a in prop::array::$uniform(any::<$t>()),
                    old in prop::array::uniform16(any::<$t>()),
                    sel in prop::array::$uniform(any::<bool>()),
                ) {
                    let mut dst = Aligned(old);
                    masked_store(&Pack::<$t, $w>::from_array(a), &mut dst, sel);
                    for i in 0..16 {
                        let want = if i < $w && sel[i] { a[i] } else { old[i] };
                        prop_assert_eq!(dst[i].to_bits(), want.to_bits());
                    }
                }

                #[test]
                fn gather_matches_indexing(
                    base in prop::collection::vec(any::<$t>(), 1..64),
                    raw in prop::array::$uniform(any::<u32>()),
                ) {
                    let offsets = raw.map(|r| (r as usize % base.len()) as i32);
                    let v = unsafe {
                        memory::gather(base.as_ptr(), &Pack::<i32, $w>::from_array(offsets))
                    };
                    let v: Pack<$t, $w> = v;
                    for i in 0..$w {
                        prop_assert_eq!(v[i].to_bits(), base[offsets[i] as usize].to_bits());
                    }
                }

                #[test]
                fn masked_gather_keeps_passthrough(
                    base in prop::collection::vec(any::<$t>(), 1..64),
                    raw in prop::array::$uniform(any::<u32>()),
                    sel in prop::array::$uniform(any::<bool>()),
                    pass in prop::array::$uniform(any::<$t>()),
                ) {
                    // unselected lanes point far outside `base`; they must never be read
                    let offsets: [i64; $w] = std::array::from_fn(|i| {
                        if sel[i] { (raw[i] as usize % base.len()) as i64 } else { i64::MAX / 2 }
                    });
                    let mask = Mask::<$t, $w>::from_array(sel);
                    let v = unsafe {
                        memory::gather_masked(
                            base.as_ptr(),
                            &Pack::<i64, $w>::from_array(offsets),
                            &mask,
                            Pack::from_array(pass),
                        )
                    };
                    for i in 0..$w {
                        let want = if sel[i] { base[offsets[i] as usize] } else { pass[i] };
                        prop_assert_eq!(v[i].to_bits(), want.to_bits());
                    }
                }
            }
        }
    };
}

memory_props!(f32_w1, f32, 1, uniform1);
memory_props!(f32_w4, f32, 4, uniform4);
memory_props!(f32_w8, f32, 8, uniform8);
memory_props!(f32_w16, f32, 16, uniform16);
memory_props!(f64_w1, f64, 1, uniform1);
memory_props!(f64_w4, f64, 4, uniform4);
memory_props!(f64_w8, f64, 8, uniform8);
memory_props!(f64_w16, f64, 16, uniform16);
memory_props!(i32_w1, i32, 1, uniform1);
memory_props!(i32_w4, i32, 4, uniform4);
memory_props!(i32_w8, i32, 8, uniform8);
memory_props!(i32_w16, i32, 16, uniform16);
memory_props!(i64_w1, i64, 1, uniform1);
memory_props!(i64_w4, i64, 4, uniform4);
memory_props!(i64_w8, i64, 8, uniform8);
memory_props!(i64_w16, i64, 16, uniform16);

#[test]
fn masked_load_ignores_garbage_in_unselected_lanes() {
    let src = Aligned([f32::NAN; 16]);
    let v = masked_load::<f32, 16>(&src, [false; 16]);
    assert_eq!(v, Pack::zero());
}
