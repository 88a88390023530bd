//! Single precision wrappers around the double precision `libm` routines. Every function widens
//! its arguments to `f64`, evaluates there and narrows the result back to `f32`. Out of domain
//! input gives NaN (or an infinity) exactly as IEEE 754 prescribes, nothing panics.

/// Square root, NaN for negative input.
///
#[inline]
pub fn sqrt(n: f32) -> f32 {
    libm::sqrt(n as f64) as f32
}

/// Four quadrant arc tangent of `y / x`.
///
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    libm::atan2(y as f64, x as f64) as f32
}

/// Arc sine, NaN outside of [-1, 1].
///
#[inline]
pub fn asin(n: f32) -> f32 {
    libm::asin(n as f64) as f32
}

#[inline]
pub fn cos(n: f32) -> f32 {
    libm::cos(n as f64) as f32
}

#[inline]
pub fn sin(n: f32) -> f32 {
    libm::sin(n as f64) as f32
}

#[inline]
pub fn abs(n: f32) -> f32 {
    libm::fabs(n as f64) as f32
}
