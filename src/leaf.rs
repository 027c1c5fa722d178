use crate::{Context, Status};

/// Runs `Action` leaves. May mutate the world.
pub trait ActionHandler<A, W> {
    fn execute(&mut self, action: &A, ctx: &mut Context<W>) -> Status;
}

/// Answers `Condition` leaves. Read-only by construction.
pub trait ConditionHandler<C, W> {
    fn check(&self, condition: &C, ctx: &Context<W>) -> bool;
}
