use alloc::boxed::Box;
use alloc::vec::Vec;

/// A node in the behavior tree.
///
/// Composites own their children outright. Leaves are plain ids that an
/// [`ActionHandler`](crate::ActionHandler) or
/// [`ConditionHandler`](crate::ConditionHandler) interprets at tick time.
#[derive(Clone, Debug, PartialEq)]
pub enum BehaviorNode<A, C> {
    Sequence(Vec<BehaviorNode<A, C>>),
    Selector(Vec<BehaviorNode<A, C>>),
    /// Ticks its child once per tick and always reports `Running`.
    Repeater(Box<BehaviorNode<A, C>>),
    Action(A),
    Condition(C),
}

impl<A, C> BehaviorNode<A, C> {
    pub fn repeater(child: BehaviorNode<A, C>) -> Self {
        BehaviorNode::Repeater(Box::new(child))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            BehaviorNode::Sequence(children) | BehaviorNode::Selector(children) => {
                1 + children.iter().map(BehaviorNode::depth).max().unwrap_or(0)
            }
            BehaviorNode::Repeater(child) => 1 + child.depth(),
            BehaviorNode::Action(_) | BehaviorNode::Condition(_) => 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BehaviorNode::Action(_) | BehaviorNode::Condition(_))
    }
}
