use crate::error::ConfigError;
use crate::world::Vec2;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Motion and resource rates of the robot, all per frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotConfig {
    pub speed: f32,
    pub angular_speed: f32,
    /// Heading error (radians) below which the robot drives instead of turning.
    pub heading_tolerance: f32,
    pub charge_rate: f32,
    pub refill_rate: f32,
    /// Water spent from the tank per watering frame.
    pub water_use: f32,
    /// Thirst removed from the target plant per watering frame.
    pub water_flow: f32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            angular_speed: 0.04,
            heading_tolerance: 0.05,
            charge_rate: 1.5,
            refill_rate: 2.0,
            water_use: 0.6,
            water_flow: 2.0,
        }
    }
}

/// Thresholds the task-selection policy decides on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyConfig {
    /// Plants at or above this thirst need watering.
    pub need_thirst: f32,
    /// Watering finishes once thirst drops to this level.
    pub watered_thirst: f32,
    pub low_battery: f32,
    pub low_water: f32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            need_thirst: 30.0,
            watered_thirst: 5.0,
            low_battery: 20.0,
            low_water: 20.0,
        }
    }
}

/// Per-frame environment update applied by the driver before each tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentConfig {
    /// Simulated seconds per frame.
    pub frame_dt: f32,
    pub thirst_multiplier: f32,
    pub base_thirst_rate: f32,
    pub thirst_jitter: f32,
    /// Rate right after watering; grows with `regrowth_per_second` of age.
    pub regrowth_rate: f32,
    pub regrowth_per_second: f32,
    pub max_regrowth_rate: f32,
    pub battery_drain: f32,
    pub water_drain: f32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            thirst_multiplier: 3.0,
            base_thirst_rate: 0.0015,
            thirst_jitter: 0.0003,
            regrowth_rate: 0.0005,
            regrowth_per_second: 0.0001,
            max_regrowth_rate: 0.003,
            battery_drain: 0.05,
            water_drain: 0.005,
        }
    }
}

/// Initial placement of stations, robot and the plant grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub charging_station: Vec2,
    pub water_station: Vec2,
    pub robot_spawn: Vec2,
    pub columns: u32,
    pub rows: u32,
    pub margin: Vec2,
    pub spacing: Vec2,
    /// Maximum absolute offset applied to each grid cell, per axis.
    pub jitter_x: u32,
    pub jitter_y: u32,
    pub initial_thirst_min: u32,
    pub initial_thirst_max: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let width = 1000.0;
        let height = 600.0;
        Self {
            width,
            height,
            charging_station: Vec2::new(120.0, height - 120.0),
            water_station: Vec2::new(width - 140.0, height - 120.0),
            robot_spawn: Vec2::new(width / 2.0, height / 2.0),
            columns: 4,
            rows: 2,
            margin: Vec2::new(150.0, 180.0),
            spacing: Vec2::new(200.0, 160.0),
            jitter_x: 15,
            jitter_y: 10,
            initial_thirst_min: 40,
            initial_thirst_max: 100,
        }
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GardenConfig {
    pub tree: TreeConfig,
    pub robot: RobotConfig,
    pub policy: PolicyConfig,
    pub environment: EnvironmentConfig,
    pub layout: LayoutConfig,
}

impl GardenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let robot = &self.robot;
        positive("robot.speed", robot.speed)?;
        positive("robot.angular_speed", robot.angular_speed)?;
        positive("robot.heading_tolerance", robot.heading_tolerance)?;
        positive("robot.charge_rate", robot.charge_rate)?;
        positive("robot.refill_rate", robot.refill_rate)?;
        positive("robot.water_flow", robot.water_flow)?;
        non_negative("robot.water_use", robot.water_use)?;

        let policy = &self.policy;
        percent("policy.need_thirst", policy.need_thirst)?;
        percent("policy.watered_thirst", policy.watered_thirst)?;
        percent("policy.low_battery", policy.low_battery)?;
        percent("policy.low_water", policy.low_water)?;
        if policy.watered_thirst >= policy.need_thirst {
            return Err(ConfigError::ThresholdOrder {
                watered: policy.watered_thirst,
                need: policy.need_thirst,
            });
        }

        let env = &self.environment;
        positive("environment.frame_dt", env.frame_dt)?;
        non_negative("environment.thirst_multiplier", env.thirst_multiplier)?;
        non_negative("environment.base_thirst_rate", env.base_thirst_rate)?;
        non_negative("environment.thirst_jitter", env.thirst_jitter)?;
        non_negative("environment.regrowth_rate", env.regrowth_rate)?;
        non_negative("environment.regrowth_per_second", env.regrowth_per_second)?;
        non_negative("environment.max_regrowth_rate", env.max_regrowth_rate)?;
        non_negative("environment.battery_drain", env.battery_drain)?;
        non_negative("environment.water_drain", env.water_drain)?;
        if env.thirst_jitter > env.base_thirst_rate {
            return Err(ConfigError::JitterExceedsRate {
                jitter: env.thirst_jitter,
                rate: env.base_thirst_rate,
            });
        }

        let layout = &self.layout;
        if layout.columns == 0 || layout.rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if layout.initial_thirst_min > layout.initial_thirst_max || layout.initial_thirst_max > 100
        {
            return Err(ConfigError::InitialThirst {
                min: layout.initial_thirst_min,
                max: layout.initial_thirst_max,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn percent(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::{GardenConfig, TreeConfig};
    use crate::error::ConfigError;
    use crate::world::Vec2;

    #[test]
    fn tree_config_defaults() {
        assert_eq!(TreeConfig::default().max_depth, 64);
    }

    #[test]
    fn garden_config_defaults_validate() {
        let cfg = GardenConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.policy.need_thirst, 30.0);
        assert_eq!(cfg.layout.charging_station, Vec2::new(120.0, 480.0));
        assert_eq!(cfg.layout.water_station, Vec2::new(860.0, 480.0));
        assert_eq!(cfg.layout.robot_spawn, Vec2::new(500.0, 300.0));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let mut cfg = GardenConfig::default();
        cfg.robot.speed = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "robot.speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_negative_rates() {
        let mut cfg = GardenConfig::default();
        cfg.environment.thirst_multiplier = -50.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative {
                name: "environment.thirst_multiplier",
                value: -50.0
            })
        );

        let mut cfg = GardenConfig::default();
        cfg.environment.battery_drain = -5.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Negative {
                name: "environment.battery_drain",
                ..
            })
        ));

        let mut cfg = GardenConfig::default();
        cfg.robot.water_use = -0.6;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Negative {
                name: "robot.water_use",
                ..
            })
        ));

        let mut cfg = GardenConfig::default();
        cfg.environment.water_drain = -0.005;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_jitter_wider_than_base_rate() {
        let mut cfg = GardenConfig::default();
        cfg.environment.thirst_jitter = 0.002;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::JitterExceedsRate { .. })
        ));
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let mut cfg = GardenConfig::default();
        cfg.policy.watered_thirst = 40.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn rejects_bad_layout() {
        let mut cfg = GardenConfig::default();
        cfg.layout.rows = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGrid));

        let mut cfg = GardenConfig::default();
        cfg.layout.initial_thirst_max = 120;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InitialThirst { min: 40, max: 120 })
        ));
    }
}
