//! GraphQL schema and resolvers for launchpad.
//!
//! Serves the launch booking API over HTTP and in-process for the CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! launchpad serve --port 4000
//!
//! # Execute a query from CLI
//! launchpad query '{ launches(pageSize: 3) { cursor hasMore launches { id site } } }'
//!
//! # Tokens only outlive one invocation when users are persisted, so
//! # initialize first (writes `.launchpad-users.json` by default)
//! launchpad init
//! launchpad mutate 'login(email: "daisy@example.com") { token }'
//! launchpad mutate 'bookTrips(launchIds: ["1", "2"]) { success message }' --token <token>
//! ```
//!
//! Without a users file every CLI invocation starts with an empty user table,
//! and a token from an earlier run is logged as naming an unknown user.
//!
//! ## Schema
//!
//! - **Queries**: `launches`, `launch`, `me`
//! - **Mutations**: `bookTrips`, `cancelTrip`, `login`
//! - **Types**: `Launch`, `Rocket`, `User`, `Mission`, `PatchSize`,
//!   `TripUpdateResponse`, `LaunchConnection`

mod schema;
mod server;
mod types;

pub use schema::{
    AppState, LaunchpadSchema, MutationRoot, QueryRoot, build_schema, execute_with_token,
    schema_sdl,
};
pub use server::{router, run_server};
pub use types::*;
