//! HTTP handlers

pub mod calendar;
pub mod cultivation;
pub mod garden;
pub mod harvest;
pub mod health;
pub mod report;
pub mod vegetable;

pub use calendar::*;
pub use cultivation::*;
pub use garden::*;
pub use harvest::*;
pub use health::*;
pub use report::*;
pub use vegetable::*;
