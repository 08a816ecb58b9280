//! Data models for the regional cycling events site.
//!
//! These models match the JSON document the site is built from, field for field.

mod datastructure;
mod event;
mod region;
mod serde_helpers;

pub use datastructure::*;
pub use event::*;
pub use region::*;
