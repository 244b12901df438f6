//! Scene Configuration
//!
//! Describes a simulation scenario: constant gravity, the renderer's axis
//! convention and the bodies to spawn on initialize. `Default` is the
//! built-in drop test: a 1 kg unit sphere falling onto a huge static
//! ground sphere.
//!
//! # JSON
//!
//! ```json
//! {
//!   "gravity": [0.0, 0.0, -9.8],
//!   "axis_convention": "y_up",
//!   "bodies": [
//!     { "position": [0, 0, 10], "inverse_mass": 1.0,
//!       "shape": { "type": "sphere", "radius": 1.0 } },
//!     { "position": [0, 0, -1000], "inverse_mass": 0.0,
//!       "shape": { "type": "sphere", "radius": 1000.0 } }
//!   ]
//! }
//! ```
//!
//! Missing top-level fields take their default values; a missing `bodies`
//! list means the default scenario.

use std::path::Path;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::physics::body::Body;
use crate::physics::render::AxisConvention;
use crate::physics::shape::Shape;
use crate::physics::types::Rotation;

/// Standard gravity along -Z (m/s²).
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -9.8);

/// Shape description in a scenario file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeConfig {
    Sphere { radius: f32 },
}

impl ShapeConfig {
    pub fn to_shape(self) -> Shape {
        match self {
            ShapeConfig::Sphere { radius } => Shape::sphere(radius),
        }
    }
}

/// Orientation as a rotation of `angle` radians about `axis`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisAngleConfig {
    pub axis: Vec3,
    pub angle: f32,
}

/// One body of the scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// World-space position (meters)
    pub position: Vec3,
    /// Initial orientation; identity when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<AxisAngleConfig>,
    /// Initial linear velocity (m/s)
    #[serde(default)]
    pub velocity: Vec3,
    /// `1 / mass`; 0 makes the body static
    pub inverse_mass: f32,
    pub shape: ShapeConfig,
}

impl BodyConfig {
    /// Builds the runtime body. Assumes the config was validated.
    pub fn to_body(&self) -> Body {
        let orientation = self
            .orientation
            .map(|o| Quat::from_axis_angle_checked(o.axis, o.angle))
            .unwrap_or(Quat::IDENTITY);
        Body::new(
            self.position,
            orientation,
            self.inverse_mass,
            self.shape.to_shape(),
        )
        .with_velocity(self.velocity)
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let non_finite = |field| ConfigError::NonFinite { index, field };
        if !self.position.is_finite() {
            return Err(non_finite("position"));
        }
        if !self.velocity.is_finite() {
            return Err(non_finite("velocity"));
        }
        if let Some(o) = self.orientation {
            if !o.axis.is_finite() || !o.angle.is_finite() {
                return Err(non_finite("orientation"));
            }
        }
        if !self.inverse_mass.is_finite() {
            return Err(non_finite("inverse_mass"));
        }
        if self.inverse_mass < 0.0 {
            return Err(ConfigError::NegativeInverseMass {
                index,
                value: self.inverse_mass,
            });
        }
        if self.inverse_mass == 0.0 && self.velocity != Vec3::ZERO {
            return Err(ConfigError::MovingStaticBody { index });
        }
        match self.shape {
            ShapeConfig::Sphere { radius } if !(radius.is_finite() && radius > 0.0) => {
                Err(ConfigError::InvalidRadius {
                    index,
                    value: radius,
                })
            }
            ShapeConfig::Sphere { .. } => Ok(()),
        }
    }
}

/// Complete scenario for one [`crate::physics::Scene`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Constant gravitational acceleration (m/s²)
    pub gravity: Vec3,
    /// Frame expected by the renderer consuming transforms
    pub axis_convention: AxisConvention,
    /// Bodies spawned by `Scene::initialize`, in iteration order
    pub bodies: Vec<BodyConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            axis_convention: AxisConvention::ZUp,
            bodies: default_scenario(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a JSON scenario.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity);
        }
        self.bodies
            .iter()
            .enumerate()
            .try_for_each(|(index, body)| body.validate(index))
    }
}

/// One dynamic unit sphere dropped from 10 m onto a static ground sphere
/// whose top sits at z = 0.
pub fn default_scenario() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            position: Vec3::new(0.0, 0.0, 10.0),
            orientation: None,
            velocity: Vec3::ZERO,
            inverse_mass: 1.0,
            shape: ShapeConfig::Sphere { radius: 1.0 },
        },
        BodyConfig {
            position: Vec3::new(0.0, 0.0, -1000.0),
            orientation: None,
            velocity: Vec3::ZERO,
            inverse_mass: 0.0,
            shape: ShapeConfig::Sphere { radius: 1000.0 },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!(config.gravity, Vec3::new(0.0, 0.0, -9.8));
        assert_eq!(config.axis_convention, AxisConvention::ZUp);
        assert_eq!(config.bodies.len(), 2);
        assert!(config.validate().is_ok());
        assert_eq!(config.bodies[1].inverse_mass, 0.0);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = SceneConfig::from_json_str(r#"{ "axis_convention": "y_up" }"#).unwrap();
        assert_eq!(config.axis_convention, AxisConvention::YUp);
        assert_eq!(config.gravity, DEFAULT_GRAVITY);
        assert_eq!(config.bodies, default_scenario());
    }

    #[test]
    fn test_parse_bodies() {
        let json = r#"{
            "gravity": [0.0, 0.0, -1.0],
            "bodies": [
                { "position": [1, 2, 3], "velocity": [0, 0, 4], "inverse_mass": 0.5,
                  "orientation": { "axis": [0, 0, 2], "angle": 1.0 },
                  "shape": { "type": "sphere", "radius": 0.25 } }
            ]
        }"#;
        let config = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(config.bodies.len(), 1);

        let body = config.bodies[0].to_body();
        assert_eq!(body.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(body.mass(), Some(2.0));
        assert_eq!(body.shape, Shape::sphere(0.25));
        assert!((body.orientation.angle() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_negative_inverse_mass() {
        let json = r#"{ "bodies": [
            { "position": [0, 0, 0], "inverse_mass": -1.0,
              "shape": { "type": "sphere", "radius": 1.0 } } ] }"#;
        let err = SceneConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeInverseMass { index: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_radius() {
        let mut config = SceneConfig::default();
        config.bodies[1].shape = ShapeConfig::Sphere { radius: 0.0 };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRadius { index: 1, .. }));
    }

    #[test]
    fn test_rejects_moving_static_body() {
        let mut config = SceneConfig::default();
        config.bodies[1].velocity = Vec3::X;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MovingStaticBody { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut config = SceneConfig::default();
        config.gravity = Vec3::new(0.0, 0.0, f32::INFINITY);
        assert!(matches!(config.validate(), Err(ConfigError::NonFiniteGravity)));

        let mut config = SceneConfig::default();
        config.bodies[0].position.x = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { index: 0, field: "position" })
        ));
    }

    #[test]
    fn test_unknown_shape_is_json_error() {
        let json = r#"{ "bodies": [
            { "position": [0, 0, 0], "inverse_mass": 1.0,
              "shape": { "type": "box", "half_extents": [1, 1, 1] } } ] }"#;
        assert!(matches!(
            SceneConfig::from_json_str(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip_of_default() {
        let config = SceneConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SceneConfig::load("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("failed to read scenario file"));
    }
}
