//! Route handlers.

pub mod health;
pub mod hello;
pub mod metrics;
