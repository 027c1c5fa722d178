use alloc::vec::Vec;

use rand_core::RngCore;

use super::int_between;
use crate::config::LayoutConfig;
use crate::world::{Garden, Plant, Robot, Vec2};

/// Lays plants out on a jittered grid, row by row, with random starting thirst.
pub fn plant_grid<R: RngCore>(config: &LayoutConfig, rng: &mut R) -> Vec<Plant> {
    let jitter_x = config.jitter_x as i64;
    let jitter_y = config.jitter_y as i64;
    let mut plants = Vec::with_capacity((config.rows * config.columns) as usize);
    for row in 0..config.rows {
        for col in 0..config.columns {
            let x = config.margin.x + col as f32 * config.spacing.x;
            let y = config.margin.y + row as f32 * config.spacing.y;
            let position = Vec2::new(
                x + int_between(rng, -jitter_x, jitter_x) as f32,
                y + int_between(rng, -jitter_y, jitter_y) as f32,
            );
            let thirst = int_between(
                rng,
                config.initial_thirst_min as i64,
                config.initial_thirst_max as i64,
            );
            plants.push(Plant::new(position, thirst as f32));
        }
    }
    plants
}

/// A fresh garden: robot at its spawn point, stations in place, plants on the grid.
pub fn garden<R: RngCore>(config: &LayoutConfig, rng: &mut R) -> Garden {
    Garden::new(
        Robot::new(config.robot_spawn),
        plant_grid(config, rng),
        config.charging_station,
        config.water_station,
    )
}
