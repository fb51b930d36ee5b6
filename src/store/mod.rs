//! In-process data layer.
//!
//! - [`LaunchCatalog`]: Read-only launches, newest first
//! - [`UserStore`]: Users, login tokens and booked trips, optionally
//!   snapshotted to a JSON file

mod catalog;
mod users;

pub use catalog::LaunchCatalog;
pub use users::UserStore;
