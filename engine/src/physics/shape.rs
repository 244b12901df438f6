//! Collision shapes
//!
//! Shapes are a closed set of variants. Only spheres exist today; a new
//! variant must also be handled in [`crate::physics::intersections::intersect`],
//! which the compiler enforces through exhaustive matching.

use glam::Vec3;

/// Discriminator for [`Shape`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
}

/// A sphere centred on its local origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Radius in meters
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere. `radius` must be finite and positive.
    pub fn new(radius: f32) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be positive, got {radius}"
        );
        Self { radius }
    }
}

/// Geometric and mass-distribution description owned by a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    /// Shorthand for `Shape::Sphere(Sphere::new(radius))`.
    pub fn sphere(radius: f32) -> Self {
        Shape::Sphere(Sphere::new(radius))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere(_) => ShapeKind::Sphere,
        }
    }

    /// Center of mass in the shape's local space.
    pub fn center_of_mass(&self) -> Vec3 {
        match self {
            Shape::Sphere(_) => Vec3::ZERO,
        }
    }

    /// Uniform scale for the render mesh.
    ///
    /// For a sphere this is the radius, so a unit-sphere mesh scaled by it
    /// matches the physical extent.
    pub fn scale(&self) -> f32 {
        match self {
            Shape::Sphere(sphere) => sphere.radius,
        }
    }
}
