//! Scene - owns the bodies and advances the simulation
//!
//! Each [`Scene::update`] runs three passes in a fixed order:
//!
//! 1. Gravity: every dynamic body receives the impulse `gravity * mass * dt`.
//! 2. Contacts: every unordered pair `(i, j)`, `i < j`, is visited once.
//!    Static-static pairs are skipped; intersecting pairs have both linear
//!    velocities zeroed.
//! 3. Positions: `position += linear_velocity * dt` (semi-implicit Euler).
//!
//! Collision response sees post-gravity velocities and position
//! integration sees post-contact velocities.
//!
//! Contact response is a plain stop-on-contact: no restitution, no
//! de-penetration, no angular response. Pass 2 is where an impulse
//! solver would go.

use glam::Vec3;
use tracing::{debug, info, trace, warn};

use super::body::Body;
use super::intersections::intersect;
use super::render::{AxisConvention, RenderTransform};
use super::types::DeltaTime;
use crate::config::{ConfigError, SceneConfig};

/// Lifecycle of a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// Constructed, bodies not spawned yet
    Uninitialized,
    /// `initialize` has populated the body list
    Initialized,
}

/// Counters for one [`Scene::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Unordered pairs visited, always `n * (n - 1) / 2`
    pub pairs_visited: usize,
    /// Pairs that reached the narrow phase (static-static pairs excluded)
    pub pairs_tested: usize,
    /// Pairs found intersecting
    pub contacts: usize,
}

/// Collection of rigid bodies stepped under constant gravity.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    config: SceneConfig,
    state: SceneState,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    /// Creates an uninitialized scene.
    ///
    /// `config` should already be validated; see [`Scene::from_config`].
    pub fn new(config: SceneConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
            state: SceneState::Uninitialized,
        }
    }

    /// Validates `config` and creates an uninitialized scene from it.
    pub fn from_config(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// An initialized scene holding exactly `bodies`.
    pub fn with_bodies(gravity: Vec3, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            config: SceneConfig {
                gravity,
                bodies: Vec::new(),
                ..SceneConfig::default()
            },
            state: SceneState::Initialized,
        }
    }

    /// Spawns the configured scenario. Only the first call has an effect.
    pub fn initialize(&mut self) {
        if self.state == SceneState::Initialized {
            warn!("scene already initialized, ignoring");
            return;
        }
        self.bodies
            .extend(self.config.bodies.iter().map(|b| b.to_body()));
        self.state = SceneState::Initialized;
        info!(
            bodies = self.bodies.len(),
            gravity = ?self.config.gravity,
            "scene initialized"
        );
    }

    /// Appends a body; returns its index. Bodies are never removed.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Advances the simulation by `dt`.
    ///
    /// Runs to completion on the calling thread. `dt == 0` changes nothing
    /// except stopping bodies that are already in contact.
    pub fn update(&mut self, dt: DeltaTime) -> StepReport {
        let dt = dt.seconds();
        debug_assert!(
            dt.is_finite() && dt >= 0.0,
            "time step must be finite and non-negative, got {dt}"
        );
        let gravity = self.config.gravity;

        // Pass 1: gravity impulses
        for body in &mut self.bodies {
            let Some(mass) = body.mass() else {
                continue;
            };
            let impulse_gravity = gravity * mass * dt;
            body.apply_impulse_linear(impulse_gravity);
        }

        // Pass 2: pairwise contacts
        let mut report = StepReport::default();
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                report.pairs_visited += 1;
                let (a, b) = (&self.bodies[i], &self.bodies[j]);
                if a.is_static() && b.is_static() {
                    continue;
                }
                report.pairs_tested += 1;
                if intersect(a, b) {
                    report.contacts += 1;
                    debug!(a = i, b = j, "contact, stopping both bodies");
                    self.bodies[i].stop();
                    self.bodies[j].stop();
                }
            }
        }

        // Pass 3: positions from the updated velocities
        for body in &mut self.bodies {
            body.position += body.linear_velocity() * dt;
        }

        trace!(dt, bodies = n, contacts = report.contacts, "scene step");
        report
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    pub fn axis_convention(&self) -> AxisConvention {
        self.config.axis_convention
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Mutable access for the embedding application, e.g. to apply impulses
    /// between steps. Velocity only changes through
    /// [`Body::apply_impulse_linear`], so static bodies stay put.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Per-body world transforms in the configured axis convention,
    /// in body order.
    pub fn render_transforms(&self) -> Vec<RenderTransform> {
        let convention = self.config.axis_convention;
        self.bodies
            .iter()
            .map(|b| RenderTransform::from(b.render_transform(convention)))
            .collect()
    }
}
