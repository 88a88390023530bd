use crate::*;

/// Row-major 3x3 rotation (direction cosine) matrix.
pub type RotationMatrix = [[f32; 3]; 3];

impl Quaternion
{
    /// Rotation matrix of the quaternion after normalizing it. A zero quaternion gives a matrix
    /// full of NaN.
    ///
    pub fn rotation_matrix(&self) -> RotationMatrix {
        let q = self.unit();
        let mut m = [[0.0; 3]; 3];

        m[0][0] = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
        m[0][1] = 2.0 * (q.x * q.y - q.w * q.z);
        m[0][2] = 2.0 * (q.w * q.y + q.x * q.z);

        m[1][0] = 2.0 * (q.w * q.z + q.y * q.x);
        m[1][1] = 1.0 - 2.0 * (q.z * q.z + q.x * q.x);
        m[1][2] = 2.0 * (q.y * q.z - q.w * q.x);

        m[2][0] = 2.0 * (q.z * q.x - q.w * q.y);
        m[2][1] = 2.0 * (q.w * q.x + q.z * q.y);
        m[2][2] = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);
        m
    }
}

#[inline]
pub fn rot_mat(q: Quaternion) -> RotationMatrix {
    q.rotation_matrix()
}
