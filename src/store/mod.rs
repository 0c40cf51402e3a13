//! Object store subsystem.
//!
//! # Data Flow
//! ```text
//! validated path segments
//!     → key.rs (build object key)
//!     → client.rs (GET-by-key with the delegated credential)
//!     → status + headers + body for the response shaper
//! ```
//!
//! # Design Decisions
//! - One store call per client request, no retries
//! - The delegated credential is resolved once at startup and shared
//!   read-only across all requests
//! - Every store call has a deadline

pub mod client;
pub mod credential;
pub mod key;

pub use client::{ObjectStore, StoreError};
pub use credential::{CredentialError, DelegatedCredential};
