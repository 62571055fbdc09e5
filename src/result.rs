//! Error handling and result types for relpub.
//!
//! This module provides a unified error handling approach using the
//! `color-eyre` crate, which offers enhanced error reporting with context
//! and colored output.
//!
//! All functions in relpub that can fail should return the `Result<T>`
//! type defined in this module, ensuring consistent error handling and
//! reporting across the application.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout relpub.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`. Errors are
/// propagated with `?`, picking up context via `.wrap_err()` as they
/// travel to the process boundary, where `color_eyre` renders the final
/// report and the process exits non-zero.
pub type Result<T> = EyreResult<T>;
