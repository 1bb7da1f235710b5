//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns: the remote
//! JobPilot API, session persistence, and the system clipboard.

pub mod api;
pub mod clipboard;
pub mod persistence;

pub use api::*;
pub use clipboard::*;
pub use persistence::*;
