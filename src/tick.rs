use crate::{ActionHandler, BehaviorNode, ConditionHandler, Context, Observer, Status};

#[derive(Clone, Debug, Default)]
pub struct NodeState {
    /// Child a composite resumes at on its next tick.
    pub running_child: usize,
}

impl NodeState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Returns the number of nodes in pre-order traversal.
pub fn assign_ids<A, C>(node: &BehaviorNode<A, C>) -> usize {
    subtree_size(node)
}

pub(crate) fn subtree_size<A, C>(node: &BehaviorNode<A, C>) -> usize {
    match node {
        BehaviorNode::Sequence(children) | BehaviorNode::Selector(children) => {
            1 + children.iter().map(subtree_size).sum::<usize>()
        }
        BehaviorNode::Repeater(child) => 1 + subtree_size(child),
        BehaviorNode::Action(_) | BehaviorNode::Condition(_) => 1,
    }
}

fn child_id_for_index<A, C>(
    children: &[BehaviorNode<A, C>],
    parent_id: usize,
    index: usize,
) -> usize {
    let mut child_id = parent_id + 1;
    for child in children.iter().take(index) {
        child_id += subtree_size(child);
    }
    child_id
}

/// Ticks a composite's children from its cursor onward.
///
/// `stop_on` is the child status that ends the scan and is returned with the
/// cursor reset; the opposite outcome moves on to the next child. Running
/// always suspends at the current child.
fn tick_children<A, C, W, AH, CH, O>(
    children: &[BehaviorNode<A, C>],
    node_id: usize,
    stop_on: Status,
    states: &mut [NodeState],
    ctx: &mut Context<W>,
    action_handler: &mut AH,
    condition_handler: &CH,
    observer: &mut O,
) -> Status
where
    AH: ActionHandler<A, W>,
    CH: ConditionHandler<C, W>,
    O: Observer,
{
    let start = states[node_id].running_child.min(children.len());
    let mut child_id = child_id_for_index(children, node_id, start);

    for (i, child) in children.iter().enumerate().skip(start) {
        let child_status = tick_node(
            child,
            child_id,
            states,
            ctx,
            action_handler,
            condition_handler,
            observer,
        );

        if child_status == Status::Running {
            states[node_id].running_child = i;
            return Status::Running;
        }
        if child_status == stop_on {
            states[node_id].reset();
            return stop_on;
        }
        child_id += subtree_size(child);
    }

    states[node_id].reset();
    stop_on.invert()
}

pub fn tick_node<A, C, W, AH, CH, O>(
    node: &BehaviorNode<A, C>,
    node_id: usize,
    states: &mut [NodeState],
    ctx: &mut Context<W>,
    action_handler: &mut AH,
    condition_handler: &CH,
    observer: &mut O,
) -> Status
where
    AH: ActionHandler<A, W>,
    CH: ConditionHandler<C, W>,
    O: Observer,
{
    observer.on_enter(node_id);

    let status = match node {
        BehaviorNode::Sequence(children) => tick_children(
            children,
            node_id,
            Status::Failure,
            states,
            ctx,
            action_handler,
            condition_handler,
            observer,
        ),
        BehaviorNode::Selector(children) => tick_children(
            children,
            node_id,
            Status::Success,
            states,
            ctx,
            action_handler,
            condition_handler,
            observer,
        ),
        BehaviorNode::Repeater(child) => {
            let _ = tick_node(
                child,
                node_id + 1,
                states,
                ctx,
                action_handler,
                condition_handler,
                observer,
            );
            Status::Running
        }
        BehaviorNode::Action(action_id) => action_handler.execute(action_id, ctx),
        BehaviorNode::Condition(condition_id) => {
            Status::from_bool(condition_handler.check(condition_id, ctx))
        }
    };

    observer.on_exit(node_id, status);
    status
}
