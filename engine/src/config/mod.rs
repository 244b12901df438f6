//! Config Module
//!
//! Scenario configuration for a [`crate::physics::Scene`]: gravity, render
//! axis convention and the initial body list, loadable from JSON.

pub mod error;
pub mod scene_config;

pub use error::ConfigError;
pub use scene_config::{AxisAngleConfig, BodyConfig, SceneConfig, ShapeConfig};
