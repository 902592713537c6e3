//! Cassette format for recording and replaying collaborator calls.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
