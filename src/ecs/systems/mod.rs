//! ECS systems.

pub mod sweep;

pub use sweep::sweep_system;
