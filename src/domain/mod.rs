//! Domain layer: wire records, derived view models, and the services on them.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
