//! Conversions between angles and direction vectors.
//!
//! Angles are in radians. `(1, 0, 0)` is the reference direction in 3D and
//! `y` is up.
//!
//! ```rust
//! use vecmath::{pitch_yaw_from_vector3, vector3_from_pitch_yaw, F64x3};
//!
//! let dir = F64x3::new(1.0, 1.0, 0.0).normalized();
//! let angles = pitch_yaw_from_vector3(&dir);
//! assert!((angles.pitch - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
//!
//! let back = vector3_from_pitch_yaw(&angles);
//! assert!((back - dir).length() < 1e-12);
//! ```

use num_traits::Float;

use crate::{PitchYaw, Vector2, Vector3};

/// Unit vector `(cos angle, sin angle)`.
///
/// Inverse of [`Vector2::angle`] within (-π, π].
pub fn vector2_from_angle<T: Float>(angle: T) -> Vector2<T> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos, sin)
}

/// Extracts pitch and yaw from a direction.
///
/// `dir` must already be unit length; it is not normalized here. A `y`
/// component outside `[-1, 1]` gives a NaN pitch.
pub fn pitch_yaw_from_vector3<T: Float>(dir: &Vector3<T>) -> PitchYaw<T> {
    PitchYaw::new(dir.y.asin(), dir.z.atan2(dir.x))
}

/// Unit direction for the given pitch and yaw. Angles outside their
/// canonical range wrap naturally.
pub fn vector3_from_pitch_yaw<T: Float>(pitch_yaw: &PitchYaw<T>) -> Vector3<T> {
    let (sin_pitch, cos_pitch) = pitch_yaw.pitch.sin_cos();
    let (sin_yaw, cos_yaw) = pitch_yaw.yaw.sin_cos();
    Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
}

impl<T: Float> From<PitchYaw<T>> for Vector3<T> {
    fn from(pitch_yaw: PitchYaw<T>) -> Self {
        vector3_from_pitch_yaw(&pitch_yaw)
    }
}

impl<T: Float> From<Vector3<T>> for PitchYaw<T> {
    fn from(dir: Vector3<T>) -> Self {
        pitch_yaw_from_vector3(&dir)
    }
}
