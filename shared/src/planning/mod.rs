//! Planning core: dimensioning, scheduling and calendar aggregation
//!
//! Every function in this module is pure. Inputs are borrowed snapshots and
//! outputs are freshly built values; identical inputs always give identical
//! outputs, so callers may invoke them concurrently without coordination.

mod consolidation;
mod dimensioning;
mod error;
mod schedule;
mod tasks;

pub use consolidation::*;
pub use dimensioning::*;
pub use error::*;
pub use schedule::*;
pub use tasks::*;
