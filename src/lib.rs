#![no_std]
extern crate alloc;

pub mod behaviors;
pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod leaf;
pub mod node;
pub mod observer;
pub mod preset;
pub mod sim;
pub mod status;
pub mod tick;
pub mod tree;
pub mod world;

pub use behaviors::{GardenAction, GardenActions, GardenCondition, GardenConditions, Target};
pub use builder::TreeBuilder;
pub use config::{
    EnvironmentConfig, GardenConfig, LayoutConfig, PolicyConfig, RobotConfig, TreeConfig,
};
pub use context::Context;
pub use error::{ConfigError, TreeError};
pub use leaf::{ActionHandler, ConditionHandler};
pub use node::BehaviorNode;
pub use observer::{NoOpObserver, Observer, ObserverEvent, RecordingObserver, TracingObserver};
pub use sim::Simulation;
pub use status::Status;
pub use tree::BehaviorTree;
pub use world::{Activity, Garden, Plant, PlantId, Robot, Task, Vec2};
