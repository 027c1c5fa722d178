use core::fmt;

use super::Vec2;

pub const MAX_THIRST: f32 = 100.0;

/// Index handle into [`Garden::plants`](super::Garden).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlantId(pub usize);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plant#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plant {
    pub position: Vec2,
    /// Dryness in `0..=100`; higher means thirstier.
    pub thirst: f32,
    /// Simulation clock (seconds) of the last completed watering.
    pub last_watered: Option<f32>,
}

impl Plant {
    pub fn new(position: Vec2, thirst: f32) -> Self {
        Self {
            position,
            thirst: thirst.clamp(0.0, MAX_THIRST),
            last_watered: None,
        }
    }

    pub fn is_dry(&self, need_thirst: f32) -> bool {
        self.thirst >= need_thirst
    }

    /// Raises thirst, saturating at [`MAX_THIRST`].
    pub fn dry_out(&mut self, amount: f32) {
        self.thirst = (self.thirst + amount).clamp(0.0, MAX_THIRST);
    }

    /// Lowers thirst, saturating at zero.
    pub fn soak(&mut self, amount: f32) {
        self.thirst = (self.thirst - amount).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::{Plant, MAX_THIRST};
    use crate::world::Vec2;

    #[test]
    fn thirst_is_clamped() {
        let mut plant = Plant::new(Vec2::default(), 140.0);
        assert_eq!(plant.thirst, MAX_THIRST);
        plant.soak(250.0);
        assert_eq!(plant.thirst, 0.0);
        plant.dry_out(30.0);
        assert!(plant.is_dry(30.0));
        plant.dry_out(500.0);
        assert_eq!(plant.thirst, MAX_THIRST);
    }

    #[test]
    fn dry_out_never_goes_below_zero() {
        let mut plant = Plant::new(Vec2::default(), 10.0);
        plant.dry_out(-25.0);
        assert_eq!(plant.thirst, 0.0);
    }
}
