//! Physics module
//!
//! Sphere rigid-body simulation built directly on glam, no external physics
//! library.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg, stored as inverse mass (0 = immovable)
//!
//! The physics frame is Z-up; gravity defaults to `(0, 0, -9.8)`.
//!
//! # Submodules
//!
//! - [`types`] - Vec3/Quat re-exports, rotation helpers, [`DeltaTime`]
//! - [`shape`] - Closed set of collision shapes (spheres)
//! - [`body`] - Rigid body pose, velocity, impulses and space conversions
//! - [`intersections`] - Pairwise shape tests
//! - [`scene`] - Body collection and the per-step update loop
//! - [`render`] - Render transform output and axis convention

pub mod body;
pub mod intersections;
pub mod render;
pub mod scene;
pub mod shape;
pub mod types;

pub use body::Body;
pub use intersections::{intersect, sphere_sphere};
pub use render::{AxisConvention, RenderTransform, Z_UP_TO_Y_UP};
pub use scene::{Scene, SceneState, StepReport};
pub use shape::{Shape, ShapeKind, Sphere};
pub use types::{DeltaTime, Quat, Rotation, Vec3};
