//! Adapter implementations of the port traits.

pub mod demo;
pub mod live;
pub mod recording;
pub mod replaying;
