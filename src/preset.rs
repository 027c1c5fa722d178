use alloc::vec;

use crate::behaviors::{GardenAction, GardenCondition, Target};
use crate::BehaviorNode;

pub type GardenNode = BehaviorNode<GardenAction, GardenCondition>;

/// `MoveTo(station)` followed by the station's service action.
fn visit(station: Target, service: GardenAction) -> GardenNode {
    BehaviorNode::Sequence(vec![
        BehaviorNode::Action(GardenAction::move_to(station)),
        BehaviorNode::Action(service),
    ])
}

pub fn go_charge() -> GardenNode {
    visit(Target::ChargingStation, GardenAction::Recharge)
}

pub fn go_refill() -> GardenNode {
    visit(Target::WaterStation, GardenAction::Refill)
}

pub fn go_water() -> GardenNode {
    BehaviorNode::Sequence(vec![
        BehaviorNode::Action(GardenAction::FindDryPlant),
        BehaviorNode::Action(GardenAction::move_to(Target::TargetPlant)),
        BehaviorNode::Action(GardenAction::Water),
    ])
}

/// The robot's full task-selection policy, looping forever.
///
/// Branches in priority order: park on the charger once the whole garden is
/// watered, recharge when the battery is low, refill when the tank is low,
/// otherwise water the driest plant. A branch that is already running keeps
/// the selector's cursor, so a higher-priority branch only takes over once
/// the running one succeeds or fails.
pub fn garden_policy() -> GardenNode {
    BehaviorNode::repeater(BehaviorNode::Selector(vec![
        BehaviorNode::Sequence(vec![
            BehaviorNode::Condition(GardenCondition::AllPlantsWatered),
            BehaviorNode::Action(GardenAction::move_to(Target::ChargingStation)),
            BehaviorNode::Action(GardenAction::Recharge),
        ]),
        BehaviorNode::Sequence(vec![
            BehaviorNode::Condition(GardenCondition::LowBattery),
            go_charge(),
        ]),
        BehaviorNode::Sequence(vec![
            BehaviorNode::Condition(GardenCondition::LowWater),
            go_refill(),
        ]),
        go_water(),
    ]))
}

#[cfg(test)]
mod tests {
    use super::{garden_policy, go_charge, go_water};
    use crate::behaviors::{GardenAction, GardenCondition, Target};
    use crate::tick::assign_ids;
    use crate::BehaviorNode;

    #[test]
    fn preset_policy_loops() {
        match garden_policy() {
            BehaviorNode::Repeater(child) => {
                assert!(matches!(*child, BehaviorNode::Selector(_)));
            }
            _ => panic!("expected repeater"),
        }
    }

    #[test]
    fn preset_policy_priority_order() {
        let BehaviorNode::Repeater(child) = garden_policy() else {
            panic!("expected repeater");
        };
        let BehaviorNode::Selector(branches) = *child else {
            panic!("expected selector");
        };
        assert_eq!(branches.len(), 4);
        let guards: alloc::vec::Vec<_> = branches
            .iter()
            .map(|branch| match branch {
                BehaviorNode::Sequence(steps) => steps.first().cloned(),
                _ => None,
            })
            .collect();
        assert_eq!(
            guards[0],
            Some(BehaviorNode::Condition(GardenCondition::AllPlantsWatered))
        );
        assert_eq!(guards[1], Some(BehaviorNode::Condition(GardenCondition::LowBattery)));
        assert_eq!(guards[2], Some(BehaviorNode::Condition(GardenCondition::LowWater)));
        assert_eq!(guards[3], Some(BehaviorNode::Action(GardenAction::FindDryPlant)));
    }

    #[test]
    fn preset_go_charge_targets_station() {
        match go_charge() {
            BehaviorNode::Sequence(steps) => {
                assert_eq!(
                    steps[0],
                    BehaviorNode::Action(GardenAction::move_to(Target::ChargingStation))
                );
                assert_eq!(steps[1], BehaviorNode::Action(GardenAction::Recharge));
            }
            _ => panic!("expected sequence"),
        }
    }

    #[test]
    fn preset_policy_size() {
        assert_eq!(assign_ids(&go_water()), 4);
        assert_eq!(assign_ids(&garden_policy()), 20);
    }
}
