use crate::behaviors::GardenCondition;
use crate::config::PolicyConfig;
use crate::world::Garden;
use crate::{ConditionHandler, Context};

/// Pure predicates over the garden.
#[derive(Clone, Debug, Default)]
pub struct GardenConditions {
    pub policy: PolicyConfig,
}

impl GardenConditions {
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }
}

impl ConditionHandler<GardenCondition, Garden> for GardenConditions {
    fn check(&self, condition: &GardenCondition, ctx: &Context<Garden>) -> bool {
        let garden = ctx.world();
        match condition {
            GardenCondition::AllPlantsWatered => garden.all_watered(self.policy.need_thirst),
            GardenCondition::LowBattery => garden.robot.battery < self.policy.low_battery,
            GardenCondition::LowWater => garden.robot.water < self.policy.low_water,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::GardenConditions;
    use crate::behaviors::GardenCondition;
    use crate::world::{Garden, Plant, Robot, Vec2};
    use crate::{ConditionHandler, Context};

    fn garden(thirsts: &[f32]) -> Garden {
        let mut plants = vec![];
        for t in thirsts {
            plants.push(Plant::new(Vec2::default(), *t));
        }
        Garden::new(Robot::new(Vec2::default()), plants, Vec2::default(), Vec2::default())
    }

    fn check(garden: &mut Garden, condition: GardenCondition) -> bool {
        let ctx = Context::new(1, garden);
        GardenConditions::default().check(&condition, &ctx)
    }

    #[test]
    fn all_plants_watered_below_threshold() {
        assert!(check(&mut garden(&[0.0, 29.9, 12.0]), GardenCondition::AllPlantsWatered));
        assert!(!check(&mut garden(&[0.0, 30.0, 12.0]), GardenCondition::AllPlantsWatered));
        assert!(check(&mut garden(&[]), GardenCondition::AllPlantsWatered));
    }

    #[test]
    fn low_reserves_are_strict() {
        let mut g = garden(&[]);
        g.robot.battery = 20.0;
        g.robot.water = 19.9;
        assert!(!check(&mut g, GardenCondition::LowBattery));
        assert!(check(&mut g, GardenCondition::LowWater));
    }

    #[test]
    fn checks_do_not_mutate() {
        let mut g = garden(&[45.0]);
        let before = g.clone();
        check(&mut g, GardenCondition::AllPlantsWatered);
        check(&mut g, GardenCondition::LowBattery);
        assert_eq!(g, before);
    }
}
