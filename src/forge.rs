//! Typed client for forge platform release APIs.
//!
//! Provides token-based authentication, release creation, and asset
//! upload through a common trait.

/// Configuration and authentication for forge platform connections.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Request and response types for release operations.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
