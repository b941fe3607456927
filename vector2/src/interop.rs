//! One-way conversions from `glam` vectors.
//!
//! Enabled by the `glam` feature. Nothing here converts back; `glam` is only a
//! data source.

use crate::vector::Vector2;

impl From<glam::Vec2> for Vector2<f32> {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<glam::DVec2> for Vector2<f64> {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<glam::IVec2> for Vector2<i32> {
    #[inline]
    fn from(v: glam::IVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}
