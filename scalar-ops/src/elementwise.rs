//! Slice loops over [`Reference::apply`], one `extern "C"` symbol per
//! (op, element) so benchmarks can compare a pack against the plain loop.

use crate::{BinaryOp, Reference};

/// `out[i] = a[i] op b[i]` for `i < min(a.len(), b.len(), out.len())`.
#[inline(never)]
pub fn apply_slices<T: Reference>(op: BinaryOp, a: &[T], b: &[T], out: &mut [T]) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = T::apply(op, x, y);
    }
}

macro_rules! define_scalar_binary {
    ($($name:ident: $t:ident, $op:ident;)+) => {
        $(
            #[doc = concat!("`out[i] = a[i] ", stringify!($op), " b[i]` over `n` ", stringify!($t), " elements.")]
            ///
            /// # Safety
            /// `a`, `b` and `out` must be valid for `n` elements.
            #[no_mangle]
            #[inline(never)]
            pub unsafe extern "C" fn $name(a: *const $t, b: *const $t, out: *mut $t, n: usize) {
                for i in 0..n {
                    *out.add(i) = <$t as Reference>::apply(BinaryOp::$op, *a.add(i), *b.add(i));
                }
            }
        )+
    };
}

define_scalar_binary! {
    scalar_vec_add_f32: f32, Add;
    scalar_vec_mul_f64: f64, Mul;
    scalar_vec_rem_i32: i32, Rem;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_slices_truncates_to_shortest() {
        let a = [1i32, 2, 3];
        let b = [10i32, 20];
        let mut out = [0i32; 3];
        apply_slices(BinaryOp::Mul, &a, &b, &mut out);
        assert_eq!(out, [10, 40, 0]);
    }

    #[test]
    fn test_extern_loop() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [5.0f32, 6.0, 7.0, 8.0];
        let mut out = [0.0f32; 4];
        unsafe { scalar_vec_add_f32(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 4) };
        assert_eq!(out, [6.0, 8.0, 10.0, 12.0]);
    }
}
