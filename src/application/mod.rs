//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the asynchronous job-list fetch, the testimonial carousel, the
//! registration form, and the screen-level state tying them together.

pub mod carousel;
pub mod form;
pub mod resource;
pub mod state;

pub use carousel::*;
pub use form::*;
pub use resource::*;
pub use state::*;
