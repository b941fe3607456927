//! Operator overloads. Scalar operands keep their side: `s - v` is
//! `(s - v.x, s - v.y)`.
//!
//! Bitwise operators are integer-only:
//!
//! ```compile_fail
//! use vector2::Vector2;
//!
//! let _ = Vector2::new(1.0f32, 2.0) & Vector2::new(1.0, 1.0);
//! ```
//!
//! ```compile_fail
//! use vector2::Vector2;
//!
//! let _ = Vector2::new(1.0f64, 2.0) << 1.0;
//! ```

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::vector::Vector2;

macro_rules! impl_vector_op {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident;)*) => {
        $(
            impl<T: $op<Output = T>> $op for Vector2<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    Vector2::new(self.x.$method(rhs.x), self.y.$method(rhs.y))
                }
            }

            impl<T: Copy + $op<Output = T>> $op_assign for Vector2<T> {
                #[inline]
                fn $method_assign(&mut self, rhs: Self) {
                    *self = (*self).$method(rhs);
                }
            }
        )*
    };
}

macro_rules! impl_scalar_op {
    ($op:ident::$method:ident, $op_assign:ident::$method_assign:ident: $($t:ty)*) => {
        $(
            impl $op<$t> for Vector2<$t> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: $t) -> Self::Output {
                    Vector2::new(self.x.$method(rhs), self.y.$method(rhs))
                }
            }

            impl $op<Vector2<$t>> for $t {
                type Output = Vector2<$t>;

                #[inline]
                fn $method(self, rhs: Vector2<$t>) -> Self::Output {
                    Vector2::new(self.$method(rhs.x), self.$method(rhs.y))
                }
            }

            impl $op_assign<$t> for Vector2<$t> {
                #[inline]
                fn $method_assign(&mut self, rhs: $t) {
                    *self = (*self).$method(rhs);
                }
            }
        )*
    };
}

macro_rules! impl_arithmetic_scalar_ops {
    ($($t:ty)*) => {
        impl_scalar_op!(Add::add, AddAssign::add_assign: $($t)*);
        impl_scalar_op!(Sub::sub, SubAssign::sub_assign: $($t)*);
        impl_scalar_op!(Mul::mul, MulAssign::mul_assign: $($t)*);
        impl_scalar_op!(Div::div, DivAssign::div_assign: $($t)*);
    };
}

macro_rules! impl_bitwise_scalar_ops {
    ($($t:ty)*) => {
        impl_scalar_op!(BitAnd::bitand, BitAndAssign::bitand_assign: $($t)*);
        impl_scalar_op!(BitOr::bitor, BitOrAssign::bitor_assign: $($t)*);
        impl_scalar_op!(BitXor::bitxor, BitXorAssign::bitxor_assign: $($t)*);
        impl_scalar_op!(Shl::shl, ShlAssign::shl_assign: $($t)*);
        impl_scalar_op!(Shr::shr, ShrAssign::shr_assign: $($t)*);
    };
}

impl_vector_op! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
}

impl_arithmetic_scalar_ops!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
impl_bitwise_scalar_ops!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Not<Output = T>> Not for Vector2<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Vector2::new(!self.x, !self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(1, 2);
        let b = Vector2::new(3, 4);
        assert_eq!(a + b, Vector2::new(4, 6));
        assert_eq!(a - b, Vector2::new(-2, -2));
        assert_eq!(a * b, Vector2::new(3, 8));
        assert_eq!(Vector2::new(8.0f32, 9.0) / Vector2::new(2.0, 3.0), Vector2::new(4.0, 3.0));
        assert_eq!(-a, Vector2::new(-1, -2));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let v = Vector2::new(2.0f64, 8.0);
        assert_eq!(v + 1.0, Vector2::new(3.0, 9.0));
        assert_eq!(v - 1.0, Vector2::new(1.0, 7.0));
        assert_eq!(v * 0.5, Vector2::new(1.0, 4.0));
        assert_eq!(v / 2.0, Vector2::new(1.0, 4.0));
        assert_eq!(1.0 + v, Vector2::new(3.0, 9.0));
        assert_eq!(3.0 * v, Vector2::new(6.0, 24.0));
    }

    #[test]
    fn test_scalar_on_the_left_keeps_operand_order() {
        let v = Vector2::new(2, 4);
        assert_eq!(10 - v, Vector2::new(8, 6));
        assert_eq!(16 / v, Vector2::new(8, 4));
        assert_eq!(1u32 << Vector2::new(2u32, 3), Vector2::new(4, 8));
        assert_eq!(64u8 >> Vector2::new(1u8, 3), Vector2::new(32, 8));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector2::new(1, 2);
        v += Vector2::new(1, 1);
        assert_eq!(v, Vector2::new(2, 3));
        v -= 1;
        assert_eq!(v, Vector2::new(1, 2));
        v *= Vector2::new(3, 2);
        assert_eq!(v, Vector2::new(3, 4));
        v /= 2;
        assert_eq!(v, Vector2::new(1, 2));
        v <<= 2;
        assert_eq!(v, Vector2::new(4, 8));
        v >>= Vector2::new(1, 2);
        assert_eq!(v, Vector2::new(2, 2));
        v |= 1;
        assert_eq!(v, Vector2::new(3, 3));
        v &= Vector2::new(1, 2);
        assert_eq!(v, Vector2::new(1, 2));
        v ^= 3;
        assert_eq!(v, Vector2::new(2, 1));
    }

    #[test]
    fn test_bitwise() {
        let a = Vector2::new(0b1100u8, 0b1010);
        let b = Vector2::new(0b1010u8, 0b0110);
        assert_eq!(a & b, Vector2::new(0b1000, 0b0010));
        assert_eq!(a | b, Vector2::new(0b1110, 0b1110));
        assert_eq!(a ^ b, Vector2::new(0b0110, 0b1100));
        assert_eq!(a & 0b0100, Vector2::new(0b0100, 0b0000));
        assert_eq!(0b0001 | a, Vector2::new(0b1101, 0b1011));
        assert_eq!(a << Vector2::new(1, 2), Vector2::new(0b11000, 0b101000));
        assert_eq!(a >> 2, Vector2::new(0b11, 0b10));
        assert_eq!(!Vector2::new(0u8, 0xf0), Vector2::new(0xff, 0x0f));
        assert_eq!(!Vector2::new(0i32, -1), Vector2::new(-1, 0));
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let zero = 0;
        let _ = Vector2::new(1, 2) / zero;
    }

    #[test]
    fn test_float_division_by_zero() {
        let v = Vector2::new(1.0f32, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert!(v.y.is_nan());
    }

    fn vector() -> impl Strategy<Value = Vector2<f64>> {
        (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6).prop_map(|(x, y)| Vector2::new(x, y))
    }

    proptest! {
        #[test]
        fn test_addition_commutes(a in vector(), b in vector()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn test_subtraction_anticommutes(a in vector(), b in vector()) {
            prop_assert_eq!(a - b, -(b - a));
        }

        #[test]
        fn test_integer_addition_commutes(
            (ax, ay) in any::<(i16, i16)>(),
            (bx, by) in any::<(i16, i16)>(),
        ) {
            let a = Vector2::new(ax, ay).as_::<i32>();
            let b = Vector2::new(bx, by).as_::<i32>();
            prop_assert_eq!(a + b, b + a);
        }
    }
}
