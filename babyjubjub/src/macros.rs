//! Internal macros.

/// Derive the owned and mixed-reference variants of a binary operator, plus
/// its `*Assign` counterparts, from an existing `&T op &T` impl.
macro_rules! define_binop_variants {
    (
        $ty:ty,
        $trait:ident::$method:ident,
        $assign_trait:ident::$assign_method:ident
    ) => {
        impl $trait<$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $trait::$method(self, &rhs)
            }
        }

        impl $assign_trait<$ty> for $ty {
            fn $assign_method(&mut self, rhs: $ty) {
                *self = $trait::$method(&*self, &rhs);
            }
        }

        impl $assign_trait<&$ty> for $ty {
            fn $assign_method(&mut self, rhs: &$ty) {
                *self = $trait::$method(&*self, rhs);
            }
        }
    };
}
