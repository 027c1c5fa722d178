use rand_core::RngCore;

use super::uniform;
use crate::config::EnvironmentConfig;
use crate::world::{Garden, Plant};

/// Per-frame thirst increase for `plant` before the multiplier is applied.
///
/// Plants that have been watered before regrow thirst slowly at first and
/// faster as time since the last watering accumulates. Others grow at a
/// jittered base rate.
pub fn thirst_rate<R: RngCore>(
    plant: &Plant,
    clock: f32,
    config: &EnvironmentConfig,
    rng: &mut R,
) -> f32 {
    match plant.last_watered {
        Some(watered_at) => {
            let age = (clock - watered_at).max(0.0);
            (config.regrowth_rate + age * config.regrowth_per_second).min(config.max_regrowth_rate)
        }
        None => {
            config.base_thirst_rate + uniform(rng, -config.thirst_jitter, config.thirst_jitter)
        }
    }
}

/// Advances the clock by one frame, dries out plants and drains the robot.
pub fn update<R: RngCore>(garden: &mut Garden, config: &EnvironmentConfig, rng: &mut R) {
    garden.clock += config.frame_dt;
    let clock = garden.clock;
    for plant in &mut garden.plants {
        let rate = thirst_rate(plant, clock, config, rng);
        plant.dry_out(rate * config.thirst_multiplier);
    }

    let robot = &mut garden.robot;
    robot.battery = (robot.battery - config.battery_drain).max(0.0);
    robot.water = (robot.water - config.water_drain).max(0.0);
}
