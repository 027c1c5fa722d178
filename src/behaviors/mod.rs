//! Leaf vocabulary of the garden-tending policy.
//!
//! Leaves are plain data. [`GardenActions`] and [`GardenConditions`] give
//! them meaning against a [`Garden`] at tick time, so the tree itself holds
//! no references into the world.

mod actions;
mod conditions;

pub use actions::GardenActions;
pub use conditions::GardenConditions;

use crate::world::{Garden, Vec2};

/// Default arrival radius for [`GardenAction::MoveTo`].
pub const DEFAULT_TOLERANCE: f32 = 6.0;

/// Where a `MoveTo` leaf is heading. Resolved again on every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Target {
    ChargingStation,
    WaterStation,
    /// Whatever plant the robot currently holds as its target.
    TargetPlant,
    Point(Vec2),
}

impl Target {
    pub fn locate(&self, garden: &Garden) -> Option<Vec2> {
        match self {
            Target::ChargingStation => Some(garden.charging_station),
            Target::WaterStation => Some(garden.water_station),
            Target::TargetPlant => garden.target_plant().map(|plant| plant.position),
            Target::Point(point) => Some(*point),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GardenAction {
    MoveTo { target: Target, tolerance: f32 },
    Recharge,
    Refill,
    FindDryPlant,
    Water,
}

impl GardenAction {
    pub fn move_to(target: Target) -> Self {
        GardenAction::MoveTo {
            target,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GardenCondition {
    AllPlantsWatered,
    LowBattery,
    LowWater,
}
