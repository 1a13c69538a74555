/// Defines a lane-wise binary operator and its compound-assignment form for
/// `Pack<T, W>` pairs, routed to the kernel op of the same meaning.
#[macro_export]
macro_rules! define_pack_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $kernel:ident) => {
        impl<T: $crate::pack::Lanes<W>, const W: usize> core::ops::$trait for $crate::pack::Pack<T, W> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self::from_repr($crate::cpu_kernels::Kernel::$kernel(self.repr(), rhs.repr()))
            }
        }

        impl<T: $crate::pack::Lanes<W>, const W: usize> core::ops::$assign_trait for $crate::pack::Pack<T, W> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = core::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

/// Defines the scalar-broadcast forms of one operator for element `$t` and a
/// scalar `$s` that widens into it: `pack op s`, `s op pack`, `pack op= s`.
#[macro_export]
macro_rules! define_pack_scalar_op {
    ($t:ident, $s:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<const W: usize> core::ops::$trait<$s> for $crate::pack::Pack<$t, W>
        where
            $t: $crate::pack::Lanes<W>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: $s) -> Self {
                let rhs = Self::splat(<$s as $crate::traits::Broadcast<$t>>::widen(rhs));
                core::ops::$trait::$method(self, rhs)
            }
        }

        impl<const W: usize> core::ops::$trait<$crate::pack::Pack<$t, W>> for $s
        where
            $t: $crate::pack::Lanes<W>,
        {
            type Output = $crate::pack::Pack<$t, W>;

            #[inline(always)]
            fn $method(self, rhs: $crate::pack::Pack<$t, W>) -> $crate::pack::Pack<$t, W> {
                let lhs = $crate::pack::Pack::<$t, W>::splat(<$s as $crate::traits::Broadcast<$t>>::widen(self));
                core::ops::$trait::$method(lhs, rhs)
            }
        }

        impl<const W: usize> core::ops::$assign_trait<$s> for $crate::pack::Pack<$t, W>
        where
            $t: $crate::pack::Lanes<W>,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $s) {
                *self = core::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

/// All eight operators in scalar-broadcast form for each `$s` that widens
/// into `$t`.
#[macro_export]
macro_rules! define_pack_scalar_ops {
    ($t:ident <= $($s:ident),+) => {
        $(
            $crate::define_pack_scalar_op!($t, $s, Add, add, AddAssign, add_assign);
            $crate::define_pack_scalar_op!($t, $s, Sub, sub, SubAssign, sub_assign);
            $crate::define_pack_scalar_op!($t, $s, Mul, mul, MulAssign, mul_assign);
            $crate::define_pack_scalar_op!($t, $s, Div, div, DivAssign, div_assign);
            $crate::define_pack_scalar_op!($t, $s, Rem, rem, RemAssign, rem_assign);
            $crate::define_pack_scalar_op!($t, $s, BitAnd, bitand, BitAndAssign, bitand_assign);
            $crate::define_pack_scalar_op!($t, $s, BitOr, bitor, BitOrAssign, bitor_assign);
            $crate::define_pack_scalar_op!($t, $s, BitXor, bitxor, BitXorAssign, bitxor_assign);
        )+
    };
}
