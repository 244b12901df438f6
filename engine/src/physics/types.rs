//! Physics math types
//!
//! `Vec3` and `Quat` are re-exported from glam. glam already covers
//! dot/cross products, lengths and the arithmetic operators; this module adds
//! the handful of guarded operations the rigid-body core needs on top.
//!
//! # Preconditions
//!
//! - Normalizing a zero-length vector has no answer; [`normalize_checked`]
//!   returns `None` and callers decide the fallback.
//! - A rotation of angle zero has no axis. [`Rotation::normal`] falls back to
//!   [`UP`] instead of dividing by zero.
//! - Quaternions are never renormalized. [`Rotation::inverse_unit`] assumes a
//!   unit quaternion and checks it in debug builds only.

pub use glam::{Quat, Vec3};

/// Up axis of the physics frame (Z-up). Gravity points along `-UP`.
pub const UP: Vec3 = Vec3::Z;

/// Squared length below which a vector is treated as zero.
const LENGTH_SQ_EPSILON: f32 = 1e-12;

/// Sets every component of `v` to zero in place.
pub fn zero(v: &mut Vec3) {
    *v = Vec3::ZERO;
}

/// Normalizes `v`, or returns `None` when it is zero-length or not finite.
pub fn normalize_checked(v: Vec3) -> Option<Vec3> {
    let length_sq = v.length_squared();
    if length_sq > LENGTH_SQ_EPSILON && length_sq.is_finite() {
        Some(v / length_sq.sqrt())
    } else {
        None
    }
}

/// Axis-angle and conjugation helpers on top of [`glam::Quat`].
pub trait Rotation: Sized {
    /// Builds a rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first. An angle of zero, or a zero-length
    /// axis, yields the identity rotation.
    fn from_axis_angle_checked(axis: Vec3, angle: f32) -> Self;

    /// Rotates `point` by this quaternion (`q p q⁻¹`, vector part).
    fn rotate_point(&self, point: Vec3) -> Vec3;

    /// Inverse of a unit quaternion, i.e. its conjugate.
    fn inverse_unit(&self) -> Self;

    /// Rotation angle in radians, `2 * acos(w)`.
    fn angle(&self) -> f32;

    /// Normalized rotation axis. Returns [`UP`] for a (near) zero rotation.
    fn normal(&self) -> Vec3;
}

impl Rotation for Quat {
    fn from_axis_angle_checked(axis: Vec3, angle: f32) -> Self {
        if angle == 0.0 {
            return Quat::IDENTITY;
        }
        let Some(axis) = normalize_checked(axis) else {
            return Quat::IDENTITY;
        };
        let (s, c) = (angle * 0.5).sin_cos();
        let v = axis * s;
        Quat::from_xyzw(v.x, v.y, v.z, c)
    }

    fn rotate_point(&self, point: Vec3) -> Vec3 {
        // Expanded form of q * (p, 0) * q^-1 for a unit q.
        let u = self.xyz();
        let t = 2.0 * u.cross(point);
        point + self.w * t + u.cross(t)
    }

    fn inverse_unit(&self) -> Self {
        debug_assert!(
            (self.length_squared() - 1.0).abs() < 1e-3,
            "inverse_unit on non-unit quaternion {self:?}"
        );
        Quat::from_xyzw(-self.x, -self.y, -self.z, self.w)
    }

    fn angle(&self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    fn normal(&self) -> Vec3 {
        normalize_checked(self.xyz()).unwrap_or(UP)
    }
}

/// Elapsed simulation time for one step, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DeltaTime(f32);

impl DeltaTime {
    pub const ZERO: Self = Self(0.0);

    pub fn from_seconds(seconds: f32) -> Self {
        Self(seconds)
    }

    pub fn seconds(self) -> f32 {
        self.0
    }

    pub fn milliseconds(self) -> f32 {
        self.0 * 1000.0
    }
}

impl From<f32> for DeltaTime {
    fn from(seconds: f32) -> Self {
        Self(seconds)
    }
}
