use core::fmt;
use core::ops::{Index, IndexMut, Neg};

use num_traits::{AsPrimitive, CheckedDiv, Num, NumCast};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::Abs;
#[cfg(any(feature = "std", feature = "libm"))]
use crate::math::Math;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

macro_rules! in_place_and_into {
    ($(#[$attr:meta])* $name:ident, $into:ident => $core:ident($($arg:ident: $ty:ty),*)) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(&mut self, $($arg: $ty),*) -> &mut Self {
            *self = self.$core($($arg),*);
            self
        }

        #[inline]
        pub fn $into<'a>(&self, $($arg: $ty,)* dest: &'a mut Self) -> &'a mut Self {
            *dest = self.$core($($arg),*);
            dest
        }
    };
}

impl<T> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_array(&self) -> &[T; 2] {
        // SAFETY: `Vector2<T>` is `repr(C)` with exactly two fields of type `T`,
        // which is the layout of `[T; 2]`.
        unsafe { &*(self as *const Self as *const [T; 2]) }
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; 2] {
        // SAFETY: see `as_array`.
        unsafe { &mut *(self as *mut Self as *mut [T; 2]) }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> Vector2<U>
    where
        F: FnMut(T) -> U,
    {
        Vector2::new(f(self.x), f(self.y))
    }

    #[inline]
    fn zip_map<U, F>(self, other: Self, mut f: F) -> Vector2<U>
    where
        F: FnMut(T, T) -> U,
    {
        Vector2::new(f(self.x, other.x), f(self.y, other.y))
    }
}

impl<T: Copy> Vector2<T> {
    #[inline]
    pub const fn splat(s: T) -> Self {
        Self { x: s, y: s }
    }

    #[inline]
    pub const fn from_array(array: [T; 2]) -> Self {
        Self {
            x: array[0],
            y: array[1],
        }
    }

    pub fn from_slice(buffer: &[T]) -> Result<Self, Error> {
        match *buffer {
            [x, y, ..] => Ok(Self { x, y }),
            _ => Err(Error::BufferTooShort { len: buffer.len() }),
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Returns `x` alone. This is what unary plus yields for this type, which is
    /// why it is not an operator.
    #[inline]
    pub const fn first_component(&self) -> T {
        self.x
    }

    pub fn get(&self, index: usize) -> Result<T, Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::IndexOutOfRange { index }),
        }
    }

    pub fn set_component(&mut self, index: usize, value: T) -> Result<&mut Self, Error> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Error::IndexOutOfRange { index }),
        }
        Ok(self)
    }

    #[inline]
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn set_all(&mut self, s: T) -> &mut Self {
        self.set(s, s)
    }

    pub fn set_from_slice(&mut self, buffer: &[T]) -> Result<&mut Self, Error> {
        *self = Self::from_slice(buffer)?;
        Ok(self)
    }

    #[inline]
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    pub fn cast<U>(self) -> Option<Vector2<U>>
    where
        T: NumCast,
        U: NumCast,
    {
        Some(Vector2::new(
            <U as NumCast>::from(self.x)?,
            <U as NumCast>::from(self.y)?,
        ))
    }

    #[inline]
    pub fn as_<U>(self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|c| c.as_())
    }
}

impl<T: Copy + Num> Vector2<T> {
    #[inline]
    pub fn dot(&self, v: &Self) -> T {
        self.x * v.x + self.y * v.y
    }

    #[inline]
    pub fn square(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn distance_squared(&self, v: &Self) -> T {
        let dx = self.x - v.x;
        let dy = self.y - v.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn interpolated(self, other: Self, t: T) -> Self {
        self.zip_map(other, |a, b| a + (b - a) * t)
    }

    #[inline]
    pub fn mul_add(self, a: T, b: Self) -> Self {
        self.zip_map(b, |s, b| s + a * b)
    }

    #[inline]
    pub fn mul_add_vec(self, a: Self, b: Self) -> Self {
        Vector2::new(self.x + a.x * b.x, self.y + a.y * b.y)
    }

    in_place_and_into! {
        lerp, lerp_into => interpolated(other: Self, t: T)
    }

    in_place_and_into! {
        fma, fma_into => mul_add(a: T, b: Self)
    }

    in_place_and_into! {
        fma_vec, fma_vec_into => mul_add_vec(a: Self, b: Self)
    }

    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        self.set_all(T::zero())
    }

    #[inline]
    pub fn zero_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        dest.zero()
    }

    #[inline]
    pub fn one(&mut self) -> &mut Self {
        self.set_all(T::one())
    }

    #[inline]
    pub fn one_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        dest.one()
    }
}

impl<T: Copy + CheckedDiv> Vector2<T> {
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Some(Vector2::new(
            self.x.checked_div(&rhs.x)?,
            self.y.checked_div(&rhs.y)?,
        ))
    }
}

impl<T: Copy + Neg<Output = T>> Vector2<T> {
    #[inline]
    pub fn negated(self) -> Self {
        self.map(Neg::neg)
    }

    #[inline]
    pub fn perp(self) -> Self {
        Vector2::new(self.y, -self.x)
    }

    in_place_and_into! {
        negate, negate_into => negated()
    }

    in_place_and_into! {
        perpendicular, perpendicular_into => perp()
    }
}

impl<T: Copy + PartialOrd> Vector2<T> {
    #[inline]
    pub fn min_by_component(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a < b { a } else { b })
    }

    #[inline]
    pub fn max_by_component(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a > b { a } else { b })
    }

    in_place_and_into! {
        min, min_into => min_by_component(v: Self)
    }

    in_place_and_into! {
        max, max_into => max_by_component(v: Self)
    }
}

impl<T: Abs> Vector2<T> {
    #[inline]
    pub fn abs(self) -> Self {
        self.map(|c| c.abs())
    }

    in_place_and_into! {
        absolute, absolute_into => abs()
    }

    /// Index of the component with the smaller absolute value, 1 on a tie.
    #[inline]
    pub fn min_component(&self) -> usize {
        if self.x.abs() < self.y.abs() {
            0
        } else {
            1
        }
    }

    /// Index of the component with the larger absolute value, 0 on a tie.
    #[inline]
    pub fn max_component(&self) -> usize {
        if self.x.abs() >= self.y.abs() {
            0
        } else {
            1
        }
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: Math> Vector2<T> {
    #[inline]
    pub fn length(&self) -> T {
        self.square().sqrt()
    }

    #[inline]
    pub fn length_to(&self, v: &Self) -> T {
        self.dot(v).sqrt()
    }

    #[inline]
    pub fn distance(&self, v: &Self) -> T {
        self.distance_squared(v).sqrt()
    }

    /// `atan2(dot, cross)` in radians, where `cross = x * v.y - y * v.x`.
    ///
    /// The result equals a quarter turn minus the signed angle from `self` to
    /// `v`: parallel vectors give `pi / 2` and `v` a quarter turn
    /// counter-clockwise from `self` gives 0.
    #[inline]
    pub fn angle(&self, v: &Self) -> T {
        let cross = self.x * v.y - self.y * v.x;
        self.dot(v).atan2(cross)
    }

    #[inline]
    pub fn normalized(self) -> Self {
        self.with_length(T::one())
    }

    #[inline]
    pub fn with_length(self, length: T) -> Self {
        let square = self.square();
        self.map(|c| c.rescale(square, length))
    }

    #[inline]
    pub fn floored(self) -> Self {
        self.map(|c| c.floor())
    }

    #[inline]
    pub fn ceiled(self) -> Self {
        self.map(|c| c.ceil())
    }

    #[inline]
    pub fn rounded(self) -> Self {
        self.map(|c| c.round_half_up())
    }

    in_place_and_into! {
        /// Normalizing a zero vector does not panic: float components come out
        /// as NaN, integer components as 0.
        normalize, normalize_into => normalized()
    }

    in_place_and_into! {
        normalize_to, normalize_to_into => with_length(length: T)
    }

    in_place_and_into! {
        floor, floor_into => floored()
    }

    in_place_and_into! {
        ceil, ceil_into => ceiled()
    }

    in_place_and_into! {
        /// Rounds each component to the nearest integer value, ties toward
        /// positive infinity.
        round, round_into => rounded()
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", Error::IndexOutOfRange { index }),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", Error::IndexOutOfRange { index }),
        }
    }
}

impl<T> AsRef<[T; 2]> for Vector2<T> {
    fn as_ref(&self) -> &[T; 2] {
        self.as_array()
    }
}

impl<T> AsMut<[T; 2]> for Vector2<T> {
    fn as_mut(&mut self) -> &mut [T; 2] {
        self.as_mut_array()
    }
}

impl<T: Copy> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::from_array(array)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<'a, T: Copy> TryFrom<&'a [T]> for Vector2<T> {
    type Error = Error;

    fn try_from(buffer: &'a [T]) -> Result<Self, Self::Error> {
        Self::from_slice(buffer)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}
