//! Application services — use-case implementations.
//!
//! Services that need the outside world accept port trait implementations via
//! generic parameters (constructor injection), keeping this layer decoupled
//! from concrete adapters.

pub mod landing_service;
pub mod navigation_service;
