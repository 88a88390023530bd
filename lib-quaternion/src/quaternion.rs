use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, Mul, Neg};
use cfg_if::cfg_if;
use crate::*;

/// Quaternion `w + x*i + y*j + z*k`. Any four floats are a valid value, including the zero
/// quaternion and quaternions that are not of unit length. Only unit quaternions describe
/// rotations, the operations that need one (euler angles, rotation matrix) normalize first.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    /// Scalar (real) component.
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 4]> for Quaternion {
    fn from(values: [f32; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::zero()
    }
}

impl Quaternion
{
    /// Create a new quaternion with the given values.
    ///
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Scalar only quaternion `(w, 0, 0, 0)`.
    ///
    pub const fn scalar(w: f32) -> Self {
        Quaternion { w, x: 0.0, y: 0.0, z: 0.0 }
    }

    /// The additive identity `(0, 0, 0, 0)`.
    ///
    pub const fn zero() -> Self {
        Quaternion::scalar(0.0)
    }

    /// Returns the identity quaternion (no rotation), which is also the multiplicative identity.
    ///
    pub const fn identity() -> Self {
        Quaternion::scalar(1.0)
    }

    /// Constructs a quaternion from a scalar (w) and a vector (x, y, z)
    ///
    pub const fn from_parts(w: f32, vector: Vector) -> Self {
        Quaternion {
            w,
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }

    /// The vector (imaginary) part of the quaternion.
    ///
    pub const fn vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Compute the conjugate of the quaternion.
    ///
    pub fn conjugate(&self) -> Self {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Squared magnitude `w² + x² + y² + z²`.
    ///
    #[inline]
    pub fn norm2(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Get the magnitude of the quaternion.
    ///
    #[inline]
    pub fn norm(&self) -> f32 {
        crate::sqrt(self.norm2())
    }

    /// Rescales the quaternion to unit length. A zero quaternion has no direction, dividing by its
    /// zero norm leaves NaN in every component. Use [`Quaternion::checked_unit`] when the input
    /// is not known to be non-zero.
    ///
    pub fn unit(&self) -> Quaternion {
        let k = self.norm();
        warn_if_degenerate(k, "normalizing");
        Quaternion {
            w: self.w / k,
            x: self.x / k,
            y: self.y / k,
            z: self.z / k,
        }
    }

    /// The conjugate rescaled by the squared norm, so that `q * q.inverse()` is the identity.
    /// Same zero norm caveat as [`Quaternion::unit`].
    ///
    pub fn inverse(&self) -> Quaternion {
        let k2 = self.norm2();
        warn_if_degenerate(k2, "inverting");
        let q = self.conjugate();
        Quaternion {
            w: q.w / k2,
            x: q.x / k2,
            y: q.y / k2,
            z: q.z / k2,
        }
    }

    /// Like [`Quaternion::unit`] but returns `None` instead of NaN components when the norm is
    /// zero or not finite.
    ///
    pub fn checked_unit(&self) -> Option<Quaternion> {
        if is_degenerate(self.norm2()) {
            return None;
        }
        Some(self.unit())
    }

    /// Like [`Quaternion::inverse`] but returns `None` when the norm is zero or not finite.
    ///
    pub fn checked_inverse(&self) -> Option<Quaternion> {
        if is_degenerate(self.norm2()) {
            return None;
        }
        Some(self.inverse())
    }

    /// Hamilton product `self * other`, note that the order matters.
    ///
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y + self.y * other.w + self.z * other.x - self.x * other.z,
            z: self.w * other.z + self.z * other.w + self.x * other.y - self.y * other.x,
        }
    }

    /// Rotates a vector by computing `q * v * q*`. Only meaningful for unit quaternions, any
    /// other quaternion also scales the vector by its squared norm.
    ///
    pub fn rotate(&self, vector: &Vector) -> Vector {
        let rotated = self * Quaternion::from_parts(0.0, *vector) * self.conjugate();
        rotated.vector()
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        crate::abs(self.w - other.w) <= tol
            && crate::abs(self.x - other.x) <= tol
            && crate::abs(self.y - other.y) <= tol
            && crate::abs(self.z - other.z) <= tol
    }
}

fn is_degenerate(norm2: f32) -> bool {
    norm2 == 0.0 || !norm2.is_finite()
}

#[inline]
fn warn_if_degenerate(norm: f32, action: &str) {
    cfg_if!{ if #[cfg(feature = "debug")] {
        if norm == 0.0 {
            log::warn!("{} a zero quaternion, result will be NaN", action);
        }
    } else {
        let _ = (norm, action);
    }}
}

/// Scalar-only quaternion `(w, 0, 0, 0)`.
///
#[inline]
pub fn scalar(w: f32) -> Quaternion {
    Quaternion::scalar(w)
}

/// Conjugate `(w, -x, -y, -z)`.
///
#[inline]
pub fn conj(q: Quaternion) -> Quaternion {
    q.conjugate()
}

#[inline]
pub fn norm2(q: Quaternion) -> f32 {
    q.norm2()
}

#[inline]
pub fn norm(q: Quaternion) -> f32 {
    q.norm()
}

/// Component-wise sum of any number of quaternions, zero for an empty sequence.
///
pub fn sum<I: IntoIterator<Item = Quaternion>>(quaternions: I) -> Quaternion {
    quaternions.into_iter().fold(Quaternion::zero(), |acc, q| acc + q)
}

/// Hamilton product of any number of quaternions, folded left to right starting from the
/// identity. The identity is returned for an empty sequence.
///
pub fn prod<I: IntoIterator<Item = Quaternion>>(quaternions: I) -> Quaternion {
    quaternions.into_iter().fold(Quaternion::identity(), |acc, q| acc.multiply(&q))
}

#[inline]
pub fn unit(q: Quaternion) -> Quaternion {
    q.unit()
}

#[inline]
pub fn inv(q: Quaternion) -> Quaternion {
    q.inverse()
}

impl Add for Quaternion
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Quaternion {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Quaternion
{
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Neg for Quaternion
{
    type Output = Self;

    /// Negates every component, the result describes the same rotation.
    fn neg(self) -> Self::Output {
        Quaternion {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}

impl Mul<f32> for Quaternion
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Quaternion {
            w: self.w * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Div<f32> for Quaternion
{
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Quaternion {
            w: self.w / other,
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Sum for Quaternion {
    fn sum<I: Iterator<Item = Quaternion>>(iter: I) -> Self {
        sum(iter)
    }
}

impl<'a> Sum<&'a Quaternion> for Quaternion {
    fn sum<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Self {
        sum(iter.copied())
    }
}

impl Product for Quaternion {
    fn product<I: Iterator<Item = Quaternion>>(iter: I) -> Self {
        prod(iter)
    }
}

impl<'a> Product<&'a Quaternion> for Quaternion {
    fn product<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Self {
        prod(iter.copied())
    }
}
