use crate::*;

/// Orientation as a product of three rotations, note that Euler angles suffer from gimbal lock and
/// we thus should avoid storing/processing orientation in Euler angles. (Although they are useful
/// for displaying orientation since they are much easier to understand for humans).
///
/// Phi = rotation around X-axis (roll)
/// Theta = rotation around Y-axis (pitch)
/// Psi = rotation around Z-axis (yaw)
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles
{
    pub phi: f32,
    pub theta: f32,
    pub psi: f32,
}

impl EulerAngles
{
    pub const fn new(phi: f32, theta: f32, psi: f32) -> Self {
        EulerAngles { phi, theta, psi }
    }

    /// Creates an all zeros euler angles instance, i.e. the identity/no rotation angles.
    ///
    pub const fn identity() -> Self {
        EulerAngles { phi: 0.0, theta: 0.0, psi: 0.0 }
    }

    /// Same angles expressed in degrees instead of radians.
    ///
    pub fn to_degrees(&self) -> Self {
        EulerAngles {
            phi: self.phi * RAD_TO_DEG,
            theta: self.theta * RAD_TO_DEG,
            psi: self.psi * RAD_TO_DEG,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        crate::abs(self.phi - other.phi) <= tol
            && crate::abs(self.theta - other.theta) <= tol
            && crate::abs(self.psi - other.psi) <= tol
    }
}

impl From<(f32, f32, f32)> for EulerAngles {
    fn from((phi, theta, psi): (f32, f32, f32)) -> Self {
        EulerAngles::new(phi, theta, psi)
    }
}

impl From<EulerAngles> for (f32, f32, f32) {
    fn from(a: EulerAngles) -> Self {
        (a.phi, a.theta, a.psi)
    }
}

impl From<Quaternion> for EulerAngles {
    fn from(value: Quaternion) -> Self {
        EulerAngles::from(&value)
    }
}

impl From<&Quaternion> for EulerAngles {
    /// The quaternion is normalized first. The pitch is not clamped nor is gimbal lock treated
    /// specially, so near +-90 degrees pitch the `asin` saturates and rounding may push its
    /// argument just past 1, giving NaN.
    fn from(q: &Quaternion) -> Self {
        let r = q.unit();

        let phi = atan2(2.0 * (r.w * r.x + r.y * r.z), 1.0 - 2.0 * (r.x * r.x + r.y * r.y));
        let theta = asin(2.0 * (r.w * r.y - r.z * r.x));
        let psi = atan2(2.0 * (r.x * r.y + r.w * r.z), 1.0 - 2.0 * (r.y * r.y + r.z * r.z));

        EulerAngles::new(phi, theta, psi)
    }
}

impl From<&EulerAngles> for Quaternion {
    fn from(a: &EulerAngles) -> Self {
        let cr = cos(a.phi / 2.0);
        let sr = sin(a.phi / 2.0);
        let cp = cos(a.theta / 2.0);
        let sp = sin(a.theta / 2.0);
        let cy = cos(a.psi / 2.0);
        let sy = sin(a.psi / 2.0);

        Quaternion {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        Quaternion::from(&angles)
    }
}

/// Euler angles `(phi, theta, psi)` in radians of the (normalized) quaternion.
///
pub fn euler(q: Quaternion) -> (f32, f32, f32) {
    EulerAngles::from(&q).into()
}

/// Quaternion for the given Euler angles in radians. Converting back with [`euler`] gives the
/// same angles, converting a quaternion there and back gives either `q` or `-q`.
///
pub fn from_euler(phi: f32, theta: f32, psi: f32) -> Quaternion {
    Quaternion::from(EulerAngles::new(phi, theta, psi))
}
