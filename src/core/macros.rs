/******************************************\
|==========================================|
|      Macro: impl_from_to_primitive       |
|==========================================|
\******************************************/

/// Generates primitive conversions for a fieldless `repr` enum.
///
/// The default form (for `u8` discriminants) provides:
/// - `unsafe fn from_unchecked(index: u8) -> Self`: reinterprets a raw index
///   as the enum. The index must correspond to a declared variant.
/// - `const fn index(&self) -> usize`: the variant's discriminant, for array
///   indexing.
///
/// The two-argument form generates `from_unchecked` for another primitive
/// (e.g. `i8` for signed direction deltas).
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts a raw u8 index to ", stringify!($enum_name))]
            /// ## Safety
            /// - The index must be a valid discriminant of this enum.
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!(index < Self::NUM as u8, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to a usize index")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };

    ($enum_name:ident, $type_name:ty) => {
        impl $enum_name {
            #[doc=concat!("Converts a raw ", stringify!($type_name), " discriminant to ", stringify!($enum_name))]
            pub const fn from_unchecked(index: $type_name) -> Self {
                unsafe { std::mem::transmute(index) }
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` over all variants, in declaration order, for an
/// enum that exposes a `NUM` constant and `from_unchecked(u8)`.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns an iterator over all variants of ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|             Macro: impl_op               |
|==========================================|
\******************************************/

/// Implements one binary operator for a single-field tuple struct, either
/// against `Self` or against a given primitive operand type.
#[macro_export]
macro_rules! impl_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            type Output = Self;

            fn $method_name(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }
    };
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt, $other_type:ident) => {
        impl std::ops::$op_name<$other_type> for $struct_name {
            type Output = Self;

            fn $method_name(self, rhs: $other_type) -> Self::Output {
                Self(self.0 $op rhs)
            }
        }
    }
}

/******************************************\
|==========================================|
|          Macro: impl_assign_op           |
|==========================================|
\******************************************/

/// Implements the assignment form of an operator already provided by
/// [`impl_op`].
#[macro_export]
macro_rules! impl_assign_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt, $other_type:ident) => {
        impl std::ops::$op_name<$other_type> for $struct_name {
            fn $method_name(&mut self, rhs: $other_type) {
                *self = *self $op rhs;
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_bit_ops            |
|==========================================|
\******************************************/

/// Implements `&`, `|`, `^` and their assignment forms between two values of
/// the same wrapper struct.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        $crate::impl_op!($struct_name, BitAnd, bitand, &);
        $crate::impl_op!($struct_name, BitOr, bitor, |);
        $crate::impl_op!($struct_name, BitXor, bitxor, ^);

        $crate::impl_assign_op!($struct_name, BitAndAssign, bitand_assign, &, $struct_name);
        $crate::impl_assign_op!($struct_name, BitOrAssign, bitor_assign, |, $struct_name);
        $crate::impl_assign_op!($struct_name, BitXorAssign, bitxor_assign, ^, $struct_name);
    };
}

/******************************************\
|==========================================|
|        Macro: impl_bit_mani_ops          |
|==========================================|
\******************************************/

/// Implements `<<`, `>>` (against a primitive shift amount), their assignment
/// forms, and unary `!` for a wrapper struct.
#[macro_export]
macro_rules! impl_bit_mani_ops {
    ($struct_name:ident, $other_type:ident) => {
        $crate::impl_op!($struct_name, Shl, shl, <<, $other_type);
        $crate::impl_op!($struct_name, Shr, shr, >>, $other_type);

        impl std::ops::Not for $struct_name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }

        $crate::impl_assign_op!($struct_name, ShlAssign, shl_assign, <<, $other_type);
        $crate::impl_assign_op!($struct_name, ShrAssign, shr_assign, >>, $other_type);
    };
}
