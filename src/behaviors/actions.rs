use crate::behaviors::{GardenAction, Target};
use crate::config::{PolicyConfig, RobotConfig};
use crate::world::{Activity, Garden, Task, MAX_RESERVE};
use crate::{ActionHandler, Context, Status};

/// Runs the robot's action leaves against a [`Garden`].
///
/// Multi-tick leaves record their commitment in `robot.active_task` and only
/// their own completion or failure paths clear it.
#[derive(Clone, Debug, Default)]
pub struct GardenActions {
    pub robot: RobotConfig,
    pub policy: PolicyConfig,
}

impl GardenActions {
    pub fn new(robot: RobotConfig, policy: PolicyConfig) -> Self {
        Self { robot, policy }
    }

    fn move_to(&self, garden: &mut Garden, target: Target, tolerance: f32) -> Status {
        let Some(goal) = target.locate(garden) else {
            return Status::Failure;
        };
        if garden.robot.steer_towards(goal, tolerance, &self.robot) {
            Status::Success
        } else {
            Status::Running
        }
    }

    fn recharge(&self, garden: &mut Garden) -> Status {
        let robot = &mut garden.robot;
        robot.claim(Task::Charging);
        robot.activity = Activity::Recharging;
        robot.battery = (robot.battery + self.robot.charge_rate).min(MAX_RESERVE);
        if robot.battery >= MAX_RESERVE {
            tracing::debug!("battery full");
            robot.active_task = None;
            robot.target = None;
            return Status::Success;
        }
        Status::Running
    }

    fn refill(&self, garden: &mut Garden) -> Status {
        let robot = &mut garden.robot;
        robot.claim(Task::Refilling);
        robot.activity = Activity::Refilling;
        robot.water = (robot.water + self.robot.refill_rate).min(MAX_RESERVE);
        if robot.water >= MAX_RESERVE {
            tracing::debug!("water tank full");
            robot.active_task = None;
            robot.target = None;
            return Status::Success;
        }
        Status::Running
    }

    fn find_dry_plant(&self, garden: &mut Garden) -> Status {
        let need = self.policy.need_thirst;
        if garden.target_plant().is_some_and(|plant| plant.is_dry(need)) {
            garden.robot.claim(Task::Watering);
            return Status::Success;
        }
        garden.robot.target = None;

        match garden.driest_plant(need) {
            Some(id) => {
                tracing::debug!(plant = %id, "selected dry plant");
                garden.robot.target = Some(id);
                garden.robot.claim(Task::Watering);
                Status::Success
            }
            None => Status::Failure,
        }
    }

    fn water(&self, garden: &mut Garden) -> Status {
        let clock = garden.clock;
        let Some(id) = garden.robot.target else {
            return Status::Failure;
        };
        let Some(plant) = garden.plants.get_mut(id.0) else {
            return Status::Failure;
        };
        let robot = &mut garden.robot;

        robot.activity = Activity::Watering;
        robot.water = (robot.water - self.robot.water_use).max(0.0);
        plant.soak(self.robot.water_flow);

        if plant.thirst <= self.policy.watered_thirst {
            plant.thirst = 0.0;
            plant.last_watered = Some(clock);
            tracing::debug!(plant = %id, clock, "plant watered");
            robot.active_task = None;
            robot.target = None;
            return Status::Success;
        }
        if robot.water <= 0.0 {
            tracing::debug!(plant = %id, "ran dry while watering");
            robot.active_task = None;
            return Status::Failure;
        }
        Status::Running
    }
}

impl ActionHandler<GardenAction, Garden> for GardenActions {
    fn execute(&mut self, action: &GardenAction, ctx: &mut Context<Garden>) -> Status {
        let garden = ctx.world_mut();
        match *action {
            GardenAction::MoveTo { target, tolerance } => self.move_to(garden, target, tolerance),
            GardenAction::Recharge => self.recharge(garden),
            GardenAction::Refill => self.refill(garden),
            GardenAction::FindDryPlant => self.find_dry_plant(garden),
            GardenAction::Water => self.water(garden),
        }
    }
}
