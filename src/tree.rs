use alloc::vec;
use alloc::vec::Vec;

use crate::tick::{assign_ids, tick_node, NodeState};
use crate::{
    ActionHandler, BehaviorNode, ConditionHandler, Context, Observer, Status, TreeConfig,
    TreeError,
};

/// A behavior tree plus the cursor state of every node in it.
///
/// The tree never owns the world it acts on; callers lend it for each tick.
pub struct BehaviorTree<A, C> {
    root: BehaviorNode<A, C>,
    states: Vec<NodeState>,
    tick_count: u64,
}

impl<A, C> BehaviorTree<A, C> {
    pub fn new(root: BehaviorNode<A, C>) -> Self {
        let node_count = assign_ids(&root).max(1);
        Self {
            root,
            states: vec![NodeState::default(); node_count],
            tick_count: 0,
        }
    }

    /// Like [`BehaviorTree::new`], but rejects trees deeper than `config.max_depth`.
    pub fn with_config(root: BehaviorNode<A, C>, config: &TreeConfig) -> Result<Self, TreeError> {
        let depth = root.depth();
        if depth > config.max_depth {
            return Err(TreeError::MaxDepthExceeded {
                depth,
                max: config.max_depth,
            });
        }
        Ok(Self::new(root))
    }

    pub fn tick<W, AH, CH, O>(
        &mut self,
        world: &mut W,
        action_handler: &mut AH,
        condition_handler: &CH,
        observer: &mut O,
    ) -> Status
    where
        AH: ActionHandler<A, W>,
        CH: ConditionHandler<C, W>,
        O: Observer,
    {
        self.tick_count = self.tick_count.saturating_add(1);
        let mut ctx = Context::new(self.tick_count, world);
        tick_node(
            &self.root,
            0,
            &mut self.states,
            &mut ctx,
            action_handler,
            condition_handler,
            observer,
        )
    }

    /// Rewinds every composite cursor. World state is left untouched.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            state.reset();
        }
        self.tick_count = 0;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn node_count(&self) -> usize {
        self.states.len()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn root(&self) -> &BehaviorNode<A, C> {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::{
        ActionHandler, BehaviorNode, ConditionHandler, Context, NoOpObserver, Status, TreeBuilder,
        TreeConfig, TreeError,
    };

    use super::BehaviorTree;

    /// Counts down the world; succeeds once it reaches zero.
    struct Countdown;

    impl ActionHandler<u32, u32> for Countdown {
        fn execute(&mut self, _action: &u32, ctx: &mut Context<u32>) -> Status {
            let world = ctx.world_mut();
            *world = world.saturating_sub(1);
            if *world == 0 {
                Status::Success
            } else {
                Status::Running
            }
        }
    }

    struct Always;

    impl ConditionHandler<u32, u32> for Always {
        fn check(&self, _condition: &u32, _ctx: &Context<u32>) -> bool {
            true
        }
    }

    #[test]
    fn tree_tick_increments_counter() {
        let mut tree = BehaviorTree::new(BehaviorNode::Action(1u32));
        let mut world = 5u32;
        assert_eq!(tree.tick_count(), 0);
        let _ = tree.tick(&mut world, &mut Countdown, &Always, &mut NoOpObserver);
        assert_eq!(tree.tick_count(), 1);
        assert_eq!(world, 4);
    }

    #[test]
    fn tree_reset_rewinds_cursors() {
        let root: BehaviorNode<u32, u32> = TreeBuilder::new()
            .sequence()
            .condition(0)
            .action(1)
            .end()
            .build()
            .unwrap();
        let mut tree = BehaviorTree::new(root);
        let mut world = 3u32;
        assert_eq!(
            tree.tick(&mut world, &mut Countdown, &Always, &mut NoOpObserver),
            Status::Running
        );
        assert_eq!(tree.states[0].running_child, 1);
        tree.reset();
        assert_eq!(tree.tick_count(), 0);
        assert_eq!(tree.states[0].running_child, 0);
        assert_eq!(world, 2);
    }

    #[test]
    fn tree_with_config_rejects_deep_trees() {
        let root: BehaviorNode<u32, u32> = BehaviorNode::repeater(BehaviorNode::Sequence(vec![
            BehaviorNode::Action(1),
        ]));
        let config = TreeConfig { max_depth: 2 };
        assert_eq!(
            BehaviorTree::with_config(root.clone(), &config).err(),
            Some(TreeError::MaxDepthExceeded { depth: 3, max: 2 })
        );
        let tree = BehaviorTree::with_config(root, &TreeConfig::default()).unwrap();
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert!(matches!(tree.root(), BehaviorNode::Repeater(_)));
    }
}
