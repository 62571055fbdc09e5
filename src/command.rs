//! Command execution for relpub.
//!
//! The publish command is the only command. It creates a release tagged
//! with the supplied version label on the configured forge and attaches
//! the asset file to it. Each step is a single remote call, executed
//! strictly in sequence.
//!
//! # Error Handling
//!
//! Commands use the unified error handling system provided by the
//! `result` module. There is no retry and no rollback: if the asset
//! upload fails after the release was created, the release persists
//! without its asset and the error is reported to the operator.

/// Release publication workflow.
pub mod publish;
