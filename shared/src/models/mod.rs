//! Domain models for the garden planner

mod cultivation;
mod garden;
mod harvest;
mod report;
mod vegetable;

pub use cultivation::*;
pub use garden::*;
pub use harvest::*;
pub use report::*;
pub use vegetable::*;
