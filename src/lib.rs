//! JobPilot - Terminal Job Board Client
//!
//! A terminal front end for the JobPilot job board, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
