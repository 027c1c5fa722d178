use alloc::vec::Vec;

use crate::{BehaviorNode, TreeError};

/// Fluent construction of a [`BehaviorNode`] tree.
///
/// Misuse is collected rather than panicking and surfaces from [`TreeBuilder::build`].
pub struct TreeBuilder<A, C> {
    stack: Vec<BuilderFrame<A, C>>,
    root: Option<BehaviorNode<A, C>>,
    error: Option<TreeError>,
}

struct BuilderFrame<A, C> {
    node_type: CompositeType,
    children: Vec<BehaviorNode<A, C>>,
}

enum CompositeType {
    Sequence,
    Selector,
    Repeater,
}

impl<A, C> TreeBuilder<A, C> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            error: None,
        }
    }

    pub fn sequence(self) -> Self {
        self.open(CompositeType::Sequence)
    }

    pub fn selector(self) -> Self {
        self.open(CompositeType::Selector)
    }

    /// Opens a repeater frame; it must receive exactly one child before `end()`.
    pub fn repeater(self) -> Self {
        self.open(CompositeType::Repeater)
    }

    pub fn action(mut self, action: A) -> Self {
        self.push_node(BehaviorNode::Action(action));
        self
    }

    pub fn condition(mut self, condition: C) -> Self {
        self.push_node(BehaviorNode::Condition(condition));
        self
    }

    /// Grafts an already built subtree at the current position.
    pub fn subtree(mut self, node: BehaviorNode<A, C>) -> Self {
        self.push_node(node);
        self
    }

    pub fn end(mut self) -> Self {
        let Some(frame) = self.stack.pop() else {
            self.fail(TreeError::UnmatchedEnd);
            return self;
        };
        let node = match frame.node_type {
            CompositeType::Sequence => BehaviorNode::Sequence(frame.children),
            CompositeType::Selector => BehaviorNode::Selector(frame.children),
            CompositeType::Repeater => match <[BehaviorNode<A, C>; 1]>::try_from(frame.children) {
                Ok([child]) => BehaviorNode::repeater(child),
                Err(children) => {
                    self.fail(TreeError::RepeaterArity(children.len()));
                    return self;
                }
            },
        };
        self.push_node(node);
        self
    }

    pub fn build(mut self) -> Result<BehaviorNode<A, C>, TreeError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(TreeError::UnbalancedBuilder(self.stack.len()));
        }
        self.root.take().ok_or(TreeError::EmptyTree)
    }

    fn open(mut self, node_type: CompositeType) -> Self {
        self.stack.push(BuilderFrame {
            node_type,
            children: Vec::new(),
        });
        self
    }

    fn push_node(&mut self, node: BehaviorNode<A, C>) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        } else if self.root.is_some() {
            self.fail(TreeError::MultipleRoots);
        } else {
            self.root = Some(node);
        }
    }

    /// Keeps the first error; later ones are usually fallout from it.
    fn fail(&mut self, err: TreeError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl<A, C> Default for TreeBuilder<A, C> {
    fn default() -> Self {
        Self::new()
    }
}
