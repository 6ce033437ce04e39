//! ECS components for swept actors.

pub mod physics;

pub use physics::*;
