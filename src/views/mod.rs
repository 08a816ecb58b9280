//! Page views: everything a page collaborator needs to render one page.
//!
//! Views are built from a loaded dataset without I/O. They own their data so
//! they can outlive the dataset handle they were built from.

mod event;
mod home;
mod region;
mod seo;

pub use event::*;
pub use home::*;
pub use region::*;
pub use seo::*;
