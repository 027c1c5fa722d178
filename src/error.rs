/// Problems detected while assembling a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("build() with {0} unclosed composite(s)")]
    UnbalancedBuilder(usize),
    #[error("end() called with no open composite")]
    UnmatchedEnd,
    #[error("build() requires at least one node")]
    EmptyTree,
    #[error("multiple root nodes built without enclosing composite")]
    MultipleRoots,
    #[error("repeater takes exactly one child, got {0}")]
    RepeaterArity(usize),
    #[error("tree depth {depth} exceeds configured maximum {max}")]
    MaxDepthExceeded { depth: usize, max: usize },
}

/// Tunables that cannot drive a sensible simulation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("thirst jitter {jitter} exceeds the base thirst rate {rate}")]
    JitterExceedsRate { jitter: f32, rate: f32 },
    #[error("{name} must lie within 0..=100, got {value}")]
    OutOfRange { name: &'static str, value: f32 },
    #[error("watered thirst {watered} must be below the dryness threshold {need}")]
    ThresholdOrder { watered: f32, need: f32 },
    #[error("initial thirst range {min}..={max} is empty or exceeds 100")]
    InitialThirst { min: u32, max: u32 },
    #[error("plant grid must have at least one row and one column")]
    EmptyGrid,
    #[error(transparent)]
    Tree(#[from] TreeError),
}
