//! Rigid bodies
//!
//! A [`Body`] carries pose, linear velocity, inverse mass and the shape it
//! owns. Integration lives in [`crate::physics::scene::Scene`]; the only
//! velocity mutator offered here is [`Body::apply_impulse_linear`].
//!
//! # Spaces
//!
//! - Object space: origin at the shape's geometric center
//! - Body space: origin at the center of mass, axes follow the orientation
//! - World space: the scene frame (Z-up)

use glam::{Mat4, Quat, Vec3};

use super::render::AxisConvention;
use super::shape::Shape;
use super::types::{Rotation, zero};

/// A rigid body with an exclusively owned shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// World-space position (meters)
    pub position: Vec3,
    /// World-space orientation; expected to stay unit length
    pub orientation: Quat,
    /// Linear velocity (meters/second); changed only through impulses
    linear_velocity: Vec3,
    /// `1 / mass`, zero for an immovable body
    inverse_mass: f32,
    pub shape: Shape,
}

impl Body {
    /// Creates a body at rest.
    ///
    /// `inverse_mass` must be finite and non-negative; zero makes the body static.
    pub fn new(position: Vec3, orientation: Quat, inverse_mass: f32, shape: Shape) -> Self {
        debug_assert!(
            inverse_mass.is_finite() && inverse_mass >= 0.0,
            "inverse mass must be non-negative, got {inverse_mass}"
        );
        Self {
            position,
            orientation,
            linear_velocity: Vec3::ZERO,
            inverse_mass: inverse_mass.max(0.0),
            shape,
        }
    }

    /// A movable body of the given mass (kilograms).
    pub fn dynamic(position: Vec3, mass: f32, shape: Shape) -> Self {
        debug_assert!(mass > 0.0, "dynamic body needs positive mass, got {mass}");
        Self::new(position, Quat::IDENTITY, 1.0 / mass, shape)
    }

    /// An immovable body (infinite mass).
    pub fn fixed(position: Vec3, shape: Shape) -> Self {
        Self::new(position, Quat::IDENTITY, 0.0, shape)
    }

    /// Sets the initial velocity. Static bodies keep a zero velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        if !self.is_static() {
            self.linear_velocity = velocity;
        }
        self
    }

    pub fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    /// Contact response: drop all linear velocity.
    pub(crate) fn stop(&mut self) {
        zero(&mut self.linear_velocity);
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// `Some(1 / inverse_mass)` for dynamic bodies, `None` for static ones.
    pub fn mass(&self) -> Option<f32> {
        (self.inverse_mass > 0.0).then(|| 1.0 / self.inverse_mass)
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    pub fn center_of_mass_world_space(&self) -> Vec3 {
        self.position + self.orientation.rotate_point(self.shape.center_of_mass())
    }

    pub fn center_of_mass_object_space(&self) -> Vec3 {
        self.shape.center_of_mass()
    }

    pub fn world_space_to_body_space(&self, world_point: Vec3) -> Vec3 {
        let offset = world_point - self.center_of_mass_world_space();
        self.orientation.inverse_unit().rotate_point(offset)
    }

    pub fn body_space_to_world_space(&self, body_point: Vec3) -> Vec3 {
        self.center_of_mass_world_space() + self.orientation.rotate_point(body_point)
    }

    /// Applies an instantaneous change in momentum.
    ///
    /// Static bodies ignore impulses.
    pub fn apply_impulse_linear(&mut self, impulse: Vec3) {
        if self.inverse_mass == 0.0 {
            return;
        }
        self.linear_velocity += impulse * self.inverse_mass;
    }

    /// World transform for the renderer: translate * rotate * scale,
    /// prefixed by the convention's basis change.
    pub fn render_transform(&self, convention: AxisConvention) -> Mat4 {
        let angle = self.orientation.angle();
        let model = Mat4::from_translation(self.position)
            * Mat4::from_axis_angle(self.orientation.normal(), angle)
            * Mat4::from_scale(Vec3::splat(self.shape.scale()));
        convention.basis() * model
    }
}
