//! Shared types, models and the planning core for the garden planner
//!
//! This crate is used by the backend server and the WASM module. The
//! `planning` module holds the pure dimensioning and scheduling computations;
//! everything here is free of I/O.

pub mod models;
pub mod planning;
pub mod types;
pub mod validation;

pub use models::*;
pub use planning::*;
pub use types::*;
pub use validation::*;
