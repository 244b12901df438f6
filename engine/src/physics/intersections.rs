//! Narrow-phase intersection tests
//!
//! [`intersect`] is the single dispatch point over shape pairs. Tests compare
//! squared distances so no square root is taken.

use glam::Vec3;

use super::body::Body;
use super::shape::Shape;

/// Returns true when the two bodies' shapes overlap or touch.
pub fn intersect(a: &Body, b: &Body) -> bool {
    match (&a.shape, &b.shape) {
        (Shape::Sphere(sphere_a), Shape::Sphere(sphere_b)) => {
            sphere_sphere(a.position, sphere_a.radius, b.position, sphere_b.radius)
        }
    }
}

/// Sphere-sphere overlap. Touching spheres (distance == r_a + r_b) count.
pub fn sphere_sphere(center_a: Vec3, radius_a: f32, center_b: Vec3, radius_b: f32) -> bool {
    let ab = center_b - center_a;
    let radius_ab = radius_a + radius_b;
    ab.length_squared() <= radius_ab * radius_ab
}
