//! Routing subsystem.
//!
//! # Design Decisions
//! - The route table is fixed at compile time: exactly two GET templates
//!   under the shared `static` prefix
//! - Required parameters are enforced structurally; a request with the
//!   wrong number of segments matches no template and never reaches the
//!   object store
//! - Deterministic: the same path always matches the same template

pub mod templates;

pub use templates::{template_for, RouteDepth, RouteTemplate, TEMPLATES};
