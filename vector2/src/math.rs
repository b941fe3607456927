pub trait Abs: Copy + PartialOrd {
    fn abs(self) -> Self;
}

macro_rules! impl_abs {
    (signed: $($t:ty)*) => {
        $(
            impl Abs for $t {
                #[inline]
                fn abs(self) -> Self {
                    num_traits::Signed::abs(&self)
                }
            }
        )*
    };
    (unsigned: $($t:ty)*) => {
        $(
            impl Abs for $t {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_abs!(signed: i8 i16 i32 i64 i128 isize f32 f64);
impl_abs!(unsigned: u8 u16 u32 u64 u128 usize);

/// Scalar math the geometric operations of [`Vector2`](crate::Vector2) are
/// built on.
///
/// Integer scalars follow truncating semantics: `sqrt` is the integer square
/// root (panics on a negative input), rounding is the identity, and `atan2`
/// and `rescale` go through `f64` and truncate the result toward zero.
#[cfg(any(feature = "std", feature = "libm"))]
pub trait Math: Copy + num_traits::Num + PartialOrd {
    fn sqrt(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// `self * length / sqrt(square)`.
    fn rescale(self, square: Self, length: Self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Nearest integer value, ties toward positive infinity.
    fn round_half_up(self) -> Self;
}

#[cfg(any(feature = "std", feature = "libm"))]
macro_rules! impl_float_math {
    ($($t:ty)*) => {
        $(
            impl Math for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    num_traits::Float::sqrt(self)
                }

                #[inline]
                fn atan2(self, other: Self) -> Self {
                    num_traits::Float::atan2(self, other)
                }

                #[inline]
                fn rescale(self, square: Self, length: Self) -> Self {
                    let inv_length = num_traits::Float::recip(num_traits::Float::sqrt(square));
                    self * (inv_length * length)
                }

                #[inline]
                fn floor(self) -> Self {
                    num_traits::Float::floor(self)
                }

                #[inline]
                fn ceil(self) -> Self {
                    num_traits::Float::ceil(self)
                }

                #[inline]
                fn round_half_up(self) -> Self {
                    let floor = num_traits::Float::floor(self);
                    // exact for finite values; NaN and infinities fall through unchanged
                    if self - floor >= 0.5 {
                        floor + 1.0
                    } else {
                        floor
                    }
                }
            }
        )*
    };
}

#[cfg(any(feature = "std", feature = "libm"))]
macro_rules! impl_integer_math {
    ($($t:ty)*) => {
        $(
            impl Math for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    num_integer::Roots::sqrt(&self)
                }

                #[inline]
                fn atan2(self, other: Self) -> Self {
                    num_traits::Float::atan2(self as f64, other as f64) as $t
                }

                #[inline]
                fn rescale(self, square: Self, length: Self) -> Self {
                    let inv_length =
                        num_traits::Float::recip(num_traits::Float::sqrt(square as f64));
                    (self as f64 * (inv_length * length as f64)) as $t
                }

                #[inline]
                fn floor(self) -> Self {
                    self
                }

                #[inline]
                fn ceil(self) -> Self {
                    self
                }

                #[inline]
                fn round_half_up(self) -> Self {
                    self
                }
            }
        )*
    };
}

#[cfg(any(feature = "std", feature = "libm"))]
impl_float_math!(f32 f64);
#[cfg(any(feature = "std", feature = "libm"))]
impl_integer_math!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    macro_rules! define_round_half_up_test {
        ($name:ident: $value:expr) => {
            #[test]
            fn $name() {
                let (input, expected): (f64, f64) = $value;
                assert_eq!(Math::round_half_up(input), expected);
                assert_eq!(Math::round_half_up(input as f32), expected as f32);
            }
        };
    }

    define_round_half_up_test!(round_half_up_test1: (2.5, 3.0));
    define_round_half_up_test!(round_half_up_test2: (-2.5, -2.0));
    define_round_half_up_test!(round_half_up_test3: (-2.6, -3.0));
    define_round_half_up_test!(round_half_up_test4: (2.4, 2.0));
    define_round_half_up_test!(round_half_up_test5: (-0.5, 0.0));
    define_round_half_up_test!(round_half_up_test6: (7.0, 7.0));

    #[test]
    fn test_round_half_up_just_below_half() {
        assert_eq!(Math::round_half_up(0.49999997f32), 0.0);
    }

    #[test]
    fn test_round_half_up_non_finite() {
        assert!(Math::round_half_up(f32::NAN).is_nan());
        assert_eq!(Math::round_half_up(f32::INFINITY), f32::INFINITY);
        assert_eq!(Math::round_half_up(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn test_float_rescale() {
        assert_relative_eq!(Math::rescale(3.0f64, 25.0, 1.0), 0.6);
        assert_relative_eq!(Math::rescale(3.0f32, 25.0, 10.0), 6.0);
        assert!(Math::rescale(0.0f32, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_integer_math() {
        assert_eq!(Math::sqrt(25i32), 5);
        assert_eq!(Math::sqrt(26u64), 5);
        assert_eq!(Math::sqrt(0i8), 0);
        assert_eq!(Math::atan2(1i32, 0), 1);
        assert_eq!(Math::atan2(0i32, -1), 3);
        assert_eq!(Math::rescale(3i32, 25, 10), 6);
        assert_eq!(Math::rescale(3i32, 25, 1), 0);
        assert_eq!(Math::rescale(0i32, 0, 1), 0);
        assert_eq!((Math::floor(7u8), Math::ceil(7u8), Math::round_half_up(-7i16)), (7, 7, -7));
    }

    #[test]
    #[should_panic]
    fn test_integer_sqrt_of_negative_panics() {
        let _ = Math::sqrt(-4i32);
    }

    #[test]
    fn test_abs() {
        assert_eq!(Abs::abs(-3i32), 3);
        assert_eq!(Abs::abs(3u32), 3);
        assert_eq!(Abs::abs(-0.5f64), 0.5);
        assert_eq!(Abs::abs(u8::MAX), u8::MAX);
    }
}
