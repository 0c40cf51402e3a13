//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - Ordered startup: config first, then store client, then listener
//! - Shutdown is a broadcast; every long-running task subscribes

pub mod shutdown;

pub use shutdown::Shutdown;
