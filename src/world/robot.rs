use alloc::format;
use alloc::string::String;
use core::f32::consts::{PI, TAU};
use core::fmt;

use super::{PlantId, Vec2};
use crate::config::RobotConfig;

pub const MAX_RESERVE: f32 = 100.0;

/// A multi-tick job a leaf has committed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    Watering,
    Charging,
    Refilling,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Task::Watering => "watering",
            Task::Charging => "charging",
            Task::Refilling => "refilling",
        })
    }
}

/// Display label for what the robot is doing right now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    #[default]
    Idle,
    Recharging,
    Refilling,
    Watering,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Activity::Idle => "Idle",
            Activity::Recharging => "Recharging",
            Activity::Refilling => "Refilling Water",
            Activity::Watering => "Watering",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    pub position: Vec2,
    /// Heading in radians. Not kept normalized.
    pub theta: f32,
    pub battery: f32,
    pub water: f32,
    pub target: Option<PlantId>,
    pub active_task: Option<Task>,
    pub activity: Activity,
}

impl Robot {
    /// A robot facing +x with full battery and tank.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            theta: 0.0,
            battery: MAX_RESERVE,
            water: MAX_RESERVE,
            target: None,
            active_task: None,
            activity: Activity::Idle,
        }
    }

    /// Records `task` unless another job is already in progress.
    pub fn claim(&mut self, task: Task) {
        if self.active_task.is_none() {
            tracing::debug!(%task, "task claimed");
            self.active_task = Some(task);
        }
    }

    /// One frame of turn-then-drive steering towards `goal`.
    ///
    /// Returns `true` once the robot is strictly closer than `tolerance`; in
    /// that case nothing moves. Otherwise the robot either rotates (heading
    /// error above `heading_tolerance`) or advances along its heading, never both.
    pub fn steer_towards(&mut self, goal: Vec2, tolerance: f32, config: &RobotConfig) -> bool {
        if self.position.distance(goal) < tolerance {
            return true;
        }

        let error = normalize_angle(self.position.bearing(goal) - self.theta);
        if libm::fabsf(error) > config.heading_tolerance {
            self.theta += error.clamp(-config.angular_speed, config.angular_speed);
        } else {
            self.position.x += libm::cosf(self.theta) * config.speed;
            self.position.y += libm::sinf(self.theta) * config.speed;
        }
        false
    }

    /// One-line HUD summary of reserves and the current job.
    pub fn status_line(&self) -> String {
        let task = match self.active_task {
            Some(task) => format!("{task}"),
            None => String::from("Idle"),
        };
        format!(
            "Battery: {:.1}%   Water: {:.1}%   Task: {}",
            self.battery, self.water, task
        )
    }
}

/// Wraps an angle into `(-PI, PI]`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle - TAU * libm::floorf((angle + PI) / TAU);
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
