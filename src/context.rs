/// Per-tick view handed to leaf handlers.
///
/// The world is owned by the driver and only lent to the tree for the
/// duration of a single tick.
pub struct Context<'a, W> {
    tick: u64,
    world: &'a mut W,
}

impl<'a, W> Context<'a, W> {
    pub fn new(tick: u64, world: &'a mut W) -> Self {
        Self { tick, world }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn world(&self) -> &W {
        self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        self.world
    }
}
