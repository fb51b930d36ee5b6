//! Data models for launchpad.
//!
//! These are the records the data layer stores. The GraphQL types in
//! [`crate::graphql`] wrap them and decide what is exposed on the wire.
//!
//! - [`Launch`]: A scheduled or past launch, with its [`Mission`] and [`Rocket`]
//! - [`User`]: A traveller identified by email, with booked trips
//! - [`PatchSize`]: Which mission patch image to serve

mod launch;
mod types;
mod user;

pub use launch::{Launch, Mission, Rocket};
pub use types::PatchSize;
pub use user::User;
