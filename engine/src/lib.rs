//! Sphere Physics Engine Library
//!
//! A small rigid-body core: spheres under constant gravity, brute-force
//! pairwise contact detection and a stop-on-contact response. It has no
//! window, renderer or global state; the embedding application drives it
//! with [`physics::Scene::update`] once per frame and reads back one world
//! transform per body.
//!
//! # Modules
//!
//! - [`physics`] - Math helpers, shapes, bodies, intersections and the scene loop
//! - [`config`] - JSON scenario configuration and its errors
//!
//! # Example
//!
//! ```ignore
//! use sphere_physics_engine::physics::{DeltaTime, Scene};
//! use sphere_physics_engine::config::SceneConfig;
//!
//! let mut scene = Scene::from_config(SceneConfig::default())?;
//! scene.initialize();
//!
//! // Application frame loop
//! let report = scene.update(DeltaTime::from_seconds(1.0 / 60.0));
//! if report.contacts > 0 {
//!     // Something touched this frame
//! }
//!
//! // Upload one 64-byte matrix per body
//! let transforms = scene.render_transforms();
//! let bytes: &[u8] = bytemuck::cast_slice(&transforms);
//! ```

pub mod config;
pub mod physics;

pub use config::{ConfigError, SceneConfig};
pub use physics::{Body, DeltaTime, Scene, Shape, StepReport};
