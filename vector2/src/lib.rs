#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! A generic two-component numeric vector. Operations producing a vector
//! mutate the receiver, or write to `dest` in their `_into` form.
//!
//! ```
//! use vector2::Vector2;
//!
//! let mut v = Vector2::new(3.0f32, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let mut unit = Vector2::default();
//! v.normalize_into(&mut unit);
//! assert_eq!(v, Vector2::new(3.0, 4.0));
//!
//! v.negate().perpendicular();
//! assert_eq!(v, Vector2::new(-4.0, 3.0));
//! ```

pub mod cmp;
pub mod error;
#[cfg(feature = "glam")]
pub mod interop;
pub mod math;
pub mod ops;
pub mod vector;

pub use error::Error;
pub use math::Abs;
#[cfg(any(feature = "std", feature = "libm"))]
pub use math::Math;
pub use vector::Vector2;
