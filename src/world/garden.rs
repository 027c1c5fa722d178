use alloc::vec::Vec;

use super::{Plant, PlantId, Robot, Vec2};

/// The whole world the garden policy acts on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Garden {
    pub robot: Robot,
    pub plants: Vec<Plant>,
    pub charging_station: Vec2,
    pub water_station: Vec2,
    /// Simulated seconds since the garden was created.
    pub clock: f32,
}

impl Garden {
    pub fn new(robot: Robot, plants: Vec<Plant>, charging_station: Vec2, water_station: Vec2) -> Self {
        Self {
            robot,
            plants,
            charging_station,
            water_station,
            clock: 0.0,
        }
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(id.0)
    }

    /// The plant the robot is currently servicing, if the handle is still valid.
    pub fn target_plant(&self) -> Option<&Plant> {
        self.robot.target.and_then(|id| self.plant(id))
    }

    /// Thirstiest plant at or above `need_thirst`; the earliest one wins ties.
    pub fn driest_plant(&self, need_thirst: f32) -> Option<PlantId> {
        let mut best: Option<(PlantId, f32)> = None;
        for (i, plant) in self.plants.iter().enumerate() {
            if !plant.is_dry(need_thirst) {
                continue;
            }
            match best {
                Some((_, thirst)) if plant.thirst <= thirst => {}
                _ => best = Some((PlantId(i), plant.thirst)),
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn all_watered(&self, need_thirst: f32) -> bool {
        self.plants.iter().all(|plant| !plant.is_dry(need_thirst))
    }
}

#[cfg(test)]
mod tests {
    use super::Garden;
    use crate::world::{Plant, PlantId, Robot, Vec2};

    fn garden_with(thirsts: &[f32]) -> Garden {
        let plants = thirsts
            .iter()
            .enumerate()
            .map(|(i, t)| Plant::new(Vec2::new(i as f32 * 10.0, 0.0), *t))
            .collect();
        Garden::new(
            Robot::new(Vec2::default()),
            plants,
            Vec2::new(-50.0, 0.0),
            Vec2::new(50.0, 0.0),
        )
    }

    #[test]
    fn driest_plant_picks_maximum() {
        let garden = garden_with(&[10.0, 35.0, 40.0]);
        assert_eq!(garden.driest_plant(30.0), Some(PlantId(2)));
    }

    #[test]
    fn driest_plant_ties_go_to_first() {
        let garden = garden_with(&[50.0, 20.0, 50.0]);
        assert_eq!(garden.driest_plant(30.0), Some(PlantId(0)));
    }

    #[test]
    fn driest_plant_none_qualify() {
        let garden = garden_with(&[10.0, 29.9]);
        assert_eq!(garden.driest_plant(30.0), None);
        assert!(garden.all_watered(30.0));
    }

    #[test]
    fn target_plant_ignores_stale_handles() {
        let mut garden = garden_with(&[40.0]);
        garden.robot.target = Some(PlantId(3));
        assert!(garden.target_plant().is_none());
        garden.robot.target = Some(PlantId(0));
        assert_eq!(garden.target_plant().map(|p| p.thirst), Some(40.0));
    }
}
