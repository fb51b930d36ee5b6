//! # Launchpad - A GraphQL API for booking trips on rocket launches
//!
//! Launchpad serves a catalog of rocket launches over GraphQL. Users log in
//! with their email, receive a token, and book or cancel trips on launches.
//!
//! ## Features
//!
//! - **GraphQL API**: Paginated launches, launch lookup, login, booking
//! - **Cursor pagination**: Opaque cursors with `hasMore` on `launches`
//! - **Local data**: Built-in or file-based launch catalog, optional JSON
//!   snapshot of users and trips
//! - **CLI**: Serve over HTTP or run queries in-process
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default .launchpad.yml (users persist to .launchpad-users.json)
//! launchpad init
//!
//! # Serve the API and GraphiQL on http://127.0.0.1:4000
//! launchpad serve
//!
//! # Print the schema
//! launchpad schema
//! ```
//!
//! ## Modules
//!
//! - [`auth`]: Login tokens and request sessions
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Launch, Mission, Rocket, User)
//! - [`pagination`]: Cursor-based pagination
//! - [`store`]: Launch catalog and user store
//! - [`validation`]: Input validation utilities

/// Login tokens and per-request sessions.
pub mod auth;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.launchpad.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `LaunchpadError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for launches and users.
pub mod model;

pub mod pagination;

/// In-process data layer.
pub mod store;

/// Input validation utilities.
///
/// Validates emails and launch IDs.
pub mod validation;
