//! Simulation state the garden policy reads and mutates.
//!
//! Everything here is owned by the driver. The behavior tree only sees it
//! through the [`Context`](crate::Context) it is lent for one tick.

mod garden;
mod plant;
mod robot;

pub use garden::Garden;
pub use plant::{Plant, PlantId, MAX_THIRST};
pub use robot::{normalize_angle, Activity, Robot, Task, MAX_RESERVE};

/// A point or displacement on the garden canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        libm::hypotf(other.x - self.x, other.y - self.y)
    }

    /// Heading from `self` towards `other`, in radians.
    pub fn bearing(self, other: Vec2) -> f32 {
        libm::atan2f(other.y - self.y, other.x - self.x)
    }
}
