//! Headless driver: owns the garden and runs the frame loop around the policy tree.
//!
//! Each [`Simulation::step`] applies the environment update first and then
//! ticks the tree exactly once, so leaves always see this frame's thirst and
//! drained reserves.

pub mod environment;
pub mod layout;

use alloc::string::String;

use rand_core::RngCore;

use crate::behaviors::{GardenAction, GardenActions, GardenCondition, GardenConditions};
use crate::config::GardenConfig;
use crate::error::ConfigError;
use crate::world::Garden;
use crate::{preset, BehaviorTree, Status, TracingObserver};

pub struct Simulation<R> {
    config: GardenConfig,
    garden: Garden,
    tree: BehaviorTree<GardenAction, GardenCondition>,
    actions: GardenActions,
    conditions: GardenConditions,
    rng: R,
    frame: u64,
}

impl<R: RngCore> Simulation<R> {
    /// Lays out a fresh garden from `config.layout` and wires up the policy.
    pub fn new(config: GardenConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let garden = layout::garden(&config.layout, &mut rng);
        Self::with_garden(config, garden, rng)
    }

    /// Drives an existing garden, e.g. a hand-built scenario.
    pub fn with_garden(config: GardenConfig, garden: Garden, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let tree = BehaviorTree::with_config(preset::garden_policy(), &config.tree)?;
        let actions = GardenActions::new(config.robot.clone(), config.policy.clone());
        let conditions = GardenConditions::new(config.policy.clone());
        Ok(Self {
            config,
            garden,
            tree,
            actions,
            conditions,
            rng,
            frame: 0,
        })
    }

    /// Runs one frame: environment update, then one root tick.
    pub fn step(&mut self) -> Status {
        self.frame = self.frame.saturating_add(1);
        environment::update(&mut self.garden, &self.config.environment, &mut self.rng);
        let status = self.tree.tick(
            &mut self.garden,
            &mut self.actions,
            &self.conditions,
            &mut TracingObserver,
        );

        let robot = &self.garden.robot;
        tracing::trace!(
            frame = self.frame,
            battery = robot.battery,
            water = robot.water,
            activity = %robot.activity,
            "frame"
        );
        status
    }

    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn garden_mut(&mut self) -> &mut Garden {
        &mut self.garden
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn hud(&self) -> String {
        self.garden.robot.status_line()
    }
}

/// Uniform float in `low..=high`.
pub(crate) fn uniform<R: RngCore>(rng: &mut R, low: f32, high: f32) -> f32 {
    let unit = f64::from(rng.next_u32()) / f64::from(u32::MAX);
    low + (high - low) * unit as f32
}

/// Uniform integer in `low..=high`.
pub(crate) fn int_between<R: RngCore>(rng: &mut R, low: i64, high: i64) -> i64 {
    let span = (high - low + 1).max(1) as f64;
    let unit = f64::from(rng.next_u32()) / (f64::from(u32::MAX) + 1.0);
    low + (unit * span) as i64
}
