//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request id flows through all
//!   log events
//! - Metrics are cheap atomic updates, exposed on a separate listener
//! - Neither is wired into the response shaper; shaping stays pure

pub mod logging;
pub mod metrics;
